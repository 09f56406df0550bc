use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Monster lineage picked during onboarding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    #[serde(rename = "aqua")]
    Aquatic,
    #[serde(rename = "blob")]
    Goo,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Aquatic, Species::Goo];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Species::Aquatic => "Aquatic",
            Species::Goo => "Goo",
        }
    }

    /// Key used by the backend and by art assets.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Species::Aquatic => "aqua",
            Species::Goo => "blob",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[serde(alias = "None")]
    None,
    #[serde(alias = "Beginner")]
    Beginner,
    #[serde(alias = "Intermediate")]
    Intermediate,
    #[serde(alias = "Advanced")]
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::None,
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::None => "None",
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    #[serde(alias = "dumbells")]
    Dumbbells,
    Barbells,
    Both,
    #[serde(alias = "None")]
    None,
}

impl Equipment {
    pub const ALL: [Equipment; 4] = [
        Equipment::Dumbbells,
        Equipment::Barbells,
        Equipment::Both,
        Equipment::None,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Barbells => "Barbells",
            Equipment::Both => "Both",
            Equipment::None => "None",
        }
    }
}

/// Planned workout days per week, always within `1..=7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DaysPerWeek(u8);

impl DaysPerWeek {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// # Errors
    ///
    /// Returns `QuizError::DaysOutOfRange` outside `1..=7`.
    pub fn new(days: u8) -> Result<Self, QuizError> {
        if (Self::MIN..=Self::MAX).contains(&days) {
            Ok(Self(days))
        } else {
            Err(QuizError::DaysOutOfRange(days))
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every valid choice, in ascending order.
    pub fn all() -> impl Iterator<Item = DaysPerWeek> {
        (Self::MIN..=Self::MAX).map(DaysPerWeek)
    }
}

impl TryFrom<u8> for DaysPerWeek {
    type Error = QuizError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DaysPerWeek> for u8 {
    fn from(value: DaysPerWeek) -> Self {
        value.0
    }
}

impl fmt::Display for DaysPerWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields of the onboarding answer set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizField {
    Species,
    Experience,
    DaysPerWeek,
    Equipment,
}

impl fmt::Display for QuizField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizField::Species => "species",
            QuizField::Experience => "experience",
            QuizField::DaysPerWeek => "days per week",
            QuizField::Equipment => "available equipment",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("days per week must be between 1 and 7, got {0}")]
    DaysOutOfRange(u8),
    #[error("quiz answer missing: {0}")]
    Incomplete(QuizField),
}

/// In-progress onboarding answers. Unset fields are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnswerSet {
    pub species: Option<Species>,
    pub experience: Option<ExperienceLevel>,
    pub days_per_week: Option<DaysPerWeek>,
    pub equipment: Option<Equipment>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    #[must_use]
    pub fn first_missing(&self) -> Option<QuizField> {
        if self.species.is_none() {
            Some(QuizField::Species)
        } else if self.experience.is_none() {
            Some(QuizField::Experience)
        } else if self.days_per_week.is_none() {
            Some(QuizField::DaysPerWeek)
        } else if self.equipment.is_none() {
            Some(QuizField::Equipment)
        } else {
            None
        }
    }

    /// Freeze the answers for submission.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Incomplete` naming the first unset field.
    pub fn complete(&self) -> Result<CompletedAnswers, QuizError> {
        match (
            self.species,
            self.experience,
            self.days_per_week,
            self.equipment,
        ) {
            (Some(species), Some(experience), Some(days_per_week), Some(available_equipment)) => {
                Ok(CompletedAnswers {
                    species,
                    experience,
                    days_per_week,
                    available_equipment,
                })
            }
            _ => Err(QuizError::Incomplete(
                self.first_missing().unwrap_or(QuizField::Species),
            )),
        }
    }
}

/// A fully answered quiz, in the shape the backend stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedAnswers {
    pub species: Species,
    pub experience: ExperienceLevel,
    pub days_per_week: DaysPerWeek,
    pub available_equipment: Equipment,
}

impl From<CompletedAnswers> for AnswerSet {
    fn from(done: CompletedAnswers) -> Self {
        Self {
            species: Some(done.species),
            experience: Some(done.experience),
            days_per_week: Some(done.days_per_week),
            equipment: Some(done.available_equipment),
        }
    }
}
