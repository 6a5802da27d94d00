use error_location::ErrorLocation;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Duplicate {entity}: {detail} {location}")]
    Duplicate {
        entity: &'static str,
        detail: String,
        location: ErrorLocation,
    },

    #[error("Store backend failure: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
