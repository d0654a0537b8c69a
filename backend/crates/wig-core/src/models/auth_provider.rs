use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Where an identity originated. Fixed at creation and never changed by a
/// later login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthProvider {
    /// Email/password registration
    #[default]
    Local,
    Google,
    Kakao,
    Naver,
}

impl AuthProvider {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Google => "GOOGLE",
            Self::Kakao => "KAKAO",
            Self::Naver => "NAVER",
        }
    }

    /// Lowercase name used in OAuth endpoint paths and synthesized
    /// placeholder emails (`{id}@{provider}.oauth`)
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Google => "google",
            Self::Kakao => "kakao",
            Self::Naver => "naver",
        }
    }

    /// Parse the registration id segment of an OAuth path ("google",
    /// "kakao", "naver"). "local" is not a valid external provider.
    #[track_caller]
    pub fn from_registration_id(s: &str) -> CoreErrorResult<Self> {
        match s {
            "google" => Ok(Self::Google),
            "kakao" => Ok(Self::Kakao),
            "naver" => Ok(Self::Naver),
            _ => Err(CoreError::InvalidAuthProvider {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl FromStr for AuthProvider {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "LOCAL" => Ok(Self::Local),
            "GOOGLE" => Ok(Self::Google),
            "KAKAO" => Ok(Self::Kakao),
            "NAVER" => Ok(Self::Naver),
            _ => Err(CoreError::InvalidAuthProvider {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
