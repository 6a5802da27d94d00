use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid question type: {value} {location}")]
    InvalidQuestionType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid release status: {value} {location}")]
    InvalidReleaseStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid interval type: {value} {location}")]
    InvalidIntervalType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid reminder type: {value} {location}")]
    InvalidReminderType {
        value: String,
        location: ErrorLocation,
    },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
