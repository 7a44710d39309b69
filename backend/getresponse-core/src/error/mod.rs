pub mod config;
pub mod getresponse_client;

pub use getresponse_client::{GetResponseError, TransportFailure};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] getresponse_client::GetResponseError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
