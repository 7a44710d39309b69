use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret-holding value is asked to serialize itself.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Secret Serialization Error: {type_name} is write-only; read it with as_str() {location}")]
    SerializationRefused {
        type_name: &'static str,
        location: ErrorLocation,
    },
}

impl RedactError {
    #[track_caller]
    pub fn refused(type_name: &'static str) -> Self {
        RedactError::SerializationRefused {
            type_name,
            location: ErrorLocation::caller(),
        }
    }
}
