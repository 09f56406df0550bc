use fiend_core::model::MonsterInfo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterVm {
    pub name: String,
    pub species: &'static str,
    pub level: u32,
    pub exp: u32,
    pub exp_cap: u32,
    pub exp_percent: u8,
    pub art_key: String,
}

impl From<&MonsterInfo> for MonsterVm {
    fn from(monster: &MonsterInfo) -> Self {
        Self {
            name: monster.display_name().to_string(),
            species: monster.species().label(),
            level: monster.level(),
            exp: monster.exp(),
            exp_cap: monster.exp_cap(),
            exp_percent: monster.exp_percent(),
            art_key: monster.stage().asset_key(),
        }
    }
}

#[must_use]
pub fn map_monster(monster: &MonsterInfo) -> MonsterVm {
    MonsterVm::from(monster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fiend_core::model::Species;

    #[test]
    fn maps_art_and_exp_bar() {
        let vm = map_monster(&MonsterInfo::new(
            Some("Bubbles".into()),
            Species::Aquatic,
            50,
            5,
        ));
        assert_eq!(vm.name, "Bubbles");
        assert_eq!(vm.species, "Aquatic");
        assert_eq!(vm.art_key, "aqua-1");
        assert_eq!(vm.exp_cap, 100);
        assert_eq!(vm.exp_percent, 50);
    }
}
