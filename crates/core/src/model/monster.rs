use crate::model::Species;

/// The user's monster as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonsterInfo {
    name: Option<String>,
    species: Species,
    exp: u32,
    level: u32,
}

impl MonsterInfo {
    #[must_use]
    pub fn new(name: Option<String>, species: Species, exp: u32, level: u32) -> Self {
        let name = name
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self {
            name,
            species,
            exp,
            level: level.max(1),
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Nickname, or a species default for monsters that were never named.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(match self.species {
            Species::Aquatic => "Your aquatic fiend",
            Species::Goo => "Your goo fiend",
        })
    }

    #[must_use]
    pub fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub fn exp(&self) -> u32 {
        self.exp
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn stage(&self) -> MonsterStage {
        MonsterStage::for_monster(self.species, self.level)
    }

    /// Experience needed to leave the current level (`4 * level^3 / 5`,
    /// at least 1).
    #[must_use]
    pub fn exp_cap(&self) -> u32 {
        let level = u64::from(self.level);
        let cap = level.saturating_pow(3).saturating_mul(4) / 5;
        u32::try_from(cap).unwrap_or(u32::MAX).max(1)
    }

    /// Fill of the experience bar, 0 to 100.
    #[must_use]
    pub fn exp_percent(&self) -> u8 {
        let percent = (u64::from(self.exp) * 100) / u64::from(self.exp_cap());
        u8::try_from(percent.min(100)).unwrap_or(100)
    }
}

/// Onboarding and monster state of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStatus {
    pub has_finished_quiz: bool,
    pub monster: Option<MonsterInfo>,
}

impl UserStatus {
    #[must_use]
    pub fn requires_onboarding(&self) -> bool {
        !self.has_finished_quiz
    }
}

/// Evolution stage that picks the monster art.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterStage {
    species: Species,
    stage: u8,
}

impl MonsterStage {
    /// Aquatic monsters evolve at levels 6 and 11; goo monsters also at 16.
    #[must_use]
    pub fn for_monster(species: Species, level: u32) -> Self {
        let stage = match (species, level) {
            (_, 0..=5) => 1,
            (_, 6..=10) => 2,
            (Species::Aquatic, _) => 3,
            (Species::Goo, 11..=15) => 3,
            (Species::Goo, _) => 4,
        };
        Self { species, stage }
    }

    #[must_use]
    pub fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub fn stage(&self) -> u8 {
        self.stage
    }

    /// Asset key such as `aqua-2` or `blob-4`.
    #[must_use]
    pub fn asset_key(&self) -> String {
        format!("{}-{}", self.species.wire_name(), self.stage)
    }
}
