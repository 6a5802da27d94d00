use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a survey version.
///
/// The transition is one-way: a survey starts as `New`, becomes `Released`,
/// and never goes back. Released question trees are read-only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStatus {
    New,
    Released,
}

impl ReleaseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::New => "new",
            Self::Released => "released",
        }
    }
}

impl FromStr for ReleaseStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "new" => Ok(Self::New),
            "released" => Ok(Self::Released),
            _ => Err(CoreError::InvalidReleaseStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
