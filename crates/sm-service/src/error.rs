use sm_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{entity} not found: {key}")]
    NotFound {
        entity: &'static str,
        key: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Internal consistency violation: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store failure: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl From<StoreError> for ServiceError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
