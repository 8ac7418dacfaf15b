//! Club Value Objects

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum club name length
pub const CLUB_NAME_MAX_LEN: usize = 120;

/// Maximum club description length
pub const CLUB_DESCRIPTION_MAX_LEN: usize = 2000;

/// Club name (trimmed, non-empty, unique per store constraint)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClubName(String);

impl ClubName {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::unprocessable(
                "Club name and description are required.",
            ));
        }

        if name.chars().count() > CLUB_NAME_MAX_LEN {
            return Err(AppError::unprocessable(format!(
                "Club name must be at most {} characters.",
                CLUB_NAME_MAX_LEN
            )));
        }

        Ok(Self(name))
    }

    /// From a trusted database value
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ClubName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Club description (trimmed, non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubDescription(String);

impl ClubDescription {
    pub fn new(description: impl Into<String>) -> AppResult<Self> {
        let description = description.into().trim().to_string();

        if description.is_empty() {
            return Err(AppError::unprocessable(
                "Club name and description are required.",
            ));
        }

        if description.chars().count() > CLUB_DESCRIPTION_MAX_LEN {
            return Err(AppError::unprocessable(format!(
                "Club description must be at most {} characters.",
                CLUB_DESCRIPTION_MAX_LEN
            )));
        }

        Ok(Self(description))
    }

    /// From a trusted database value
    pub fn from_db(description: impl Into<String>) -> Self {
        Self(description.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_name_trims_whitespace() {
        let name = ClubName::new("  Chess Club  ").unwrap();
        assert_eq!(name.as_str(), "Chess Club");
    }

    #[test]
    fn test_empty_club_name_rejected() {
        assert!(ClubName::new("").is_err());
        assert!(ClubName::new("   ").is_err());
    }

    #[test]
    fn test_club_name_length_limit() {
        let at_limit = "a".repeat(CLUB_NAME_MAX_LEN);
        assert!(ClubName::new(at_limit).is_ok());

        let too_long = "a".repeat(CLUB_NAME_MAX_LEN + 1);
        assert!(ClubName::new(too_long).is_err());
    }

    #[test]
    fn test_empty_description_rejected() {
        assert!(ClubDescription::new("").is_err());
        assert!(ClubDescription::new("\t\n").is_err());
    }

    #[test]
    fn test_description_length_limit() {
        let at_limit = "d".repeat(CLUB_DESCRIPTION_MAX_LEN);
        assert!(ClubDescription::new(at_limit).is_ok());

        let too_long = "d".repeat(CLUB_DESCRIPTION_MAX_LEN + 1);
        assert!(ClubDescription::new(too_long).is_err());
    }
}
