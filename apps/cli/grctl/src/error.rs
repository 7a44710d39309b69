use common::ErrorLocation;
use getresponse_core::CoreError;
use getresponse_core::GetResponseError;
use getresponse_core::error::config::ConfigError;

use thiserror::Error;

/// Everything `grctl` can fail with.
///
/// Client and config errors pass through unchanged so the remote message
/// reaches the terminal verbatim.
#[derive(Debug, Error)]
pub enum GrctlError {
    /// Bad command-line input
    #[error("Cli Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] GetResponseError),
}

impl GrctlError {
    #[track_caller]
    pub fn cli(message: impl Into<String>) -> Self {
        GrctlError::Cli {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        GrctlError::Logger {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<CoreError> for GrctlError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Client(e) => GrctlError::Client(e),
            CoreError::Config(e) => GrctlError::Config(e),
        }
    }
}
