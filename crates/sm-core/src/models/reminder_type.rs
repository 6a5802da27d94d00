use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Notification channel used to nudge participants about an open survey.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReminderType {
    None,
    Email,
    Push,
}

impl ReminderType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Email => "email",
            Self::Push => "push",
        }
    }
}

impl FromStr for ReminderType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "none" => Ok(Self::None),
            "email" => Ok(Self::Email),
            "push" => Ok(Self::Push),
            _ => Err(CoreError::InvalidReminderType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
