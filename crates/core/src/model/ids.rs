use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque identifier of the signed-in user, carried in the session token.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserIdError {
    #[error("user id cannot be empty")]
    Empty,
}

impl UserId {
    /// Creates a `UserId` from a raw value.
    ///
    /// # Errors
    ///
    /// Returns `UserIdError::Empty` if the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, UserIdError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UserIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// The backend hands out integer ids; other issuers use strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Int(i64),
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match RawUserId::deserialize(deserializer)? {
            RawUserId::Text(text) => text,
            RawUserId::Int(value) => value.to_string(),
        };
        UserId::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_rejects_blank() {
        assert_eq!(UserId::new("  u1 ").unwrap().as_str(), "u1");
        assert_eq!(UserId::new("   "), Err(UserIdError::Empty));
    }

    #[test]
    fn deserializes_from_integer_or_string() {
        let from_int: UserId = serde_json::from_str("42").unwrap();
        let from_text: UserId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_int, from_text);
        assert!(serde_json::from_str::<UserId>("\"\"").is_err());
    }
}
