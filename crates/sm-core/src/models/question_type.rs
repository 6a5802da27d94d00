use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Type tag of a question. The tag is fixed at creation; updates must carry
/// the same tag the stored question already has.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Bool,
    Choice,
    Range,
    Number,
    Text,
    Checklist,
    ChecklistEntry,
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Choice => "choice",
            Self::Range => "range",
            Self::Number => "number",
            Self::Text => "text",
            Self::Checklist => "checklist",
            Self::ChecklistEntry => "checklist_entry",
        }
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "bool" => Ok(Self::Bool),
            "choice" => Ok(Self::Choice),
            "range" => Ok(Self::Range),
            "number" => Ok(Self::Number),
            "text" => Ok(Self::Text),
            "checklist" => Ok(Self::Checklist),
            "checklist_entry" => Ok(Self::ChecklistEntry),
            _ => Err(CoreError::InvalidQuestionType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
