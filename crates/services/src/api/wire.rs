//! JSON bodies exchanged with the backend.

use serde::{Deserialize, Deserializer, Serialize};

use fiend_core::model::{MonsterInfo, Species, UserStatus};

use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub(super) struct CreateAccountRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponse {
    pub token: String,
}

/// `/get_user_info` and `/level_monster_up` share this shape. Monster
/// columns are null until the quiz creates one.
#[derive(Debug, Deserialize)]
pub(super) struct UserInfoResponse {
    #[serde(default, deserialize_with = "loose_bool")]
    pub has_finished_quiz: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<Species>,
    #[serde(default)]
    pub exp: Option<u32>,
    #[serde(default)]
    pub level: Option<u32>,
}

impl UserInfoResponse {
    fn monster(&self) -> Option<MonsterInfo> {
        self.species.map(|species| {
            MonsterInfo::new(
                self.name.clone(),
                species,
                self.exp.unwrap_or(0),
                self.level.unwrap_or(1),
            )
        })
    }

    pub fn into_status(self) -> UserStatus {
        UserStatus {
            has_finished_quiz: self.has_finished_quiz,
            monster: self.monster(),
        }
    }

    pub fn into_monster(self) -> Result<MonsterInfo, ApiError> {
        self.monster()
            .ok_or_else(|| ApiError::Decode("response has no monster".into()))
    }
}

// The backend stores the flag as a SQL boolean, which may arrive as 0/1.
fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Int(value)) => value != 0,
        None => false,
    })
}
