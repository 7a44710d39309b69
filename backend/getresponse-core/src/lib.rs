//! Typed client for the GetResponse v3 contacts API.
//!
//! A call flows through four small pieces:
//!
//! 1. [`request::RequestBuilder`] binds an [`request::Operation`] to the base
//!    URL and the authentication headers.
//! 2. A [`transport::Transport`] performs the exchange.
//! 3. [`context::CallContext`] bounds it with a deadline and/or cancellation.
//! 4. [`response`] classifies status and body into a result or a
//!    [`error::GetResponseError`].

pub mod config;
pub mod context;
pub mod error;
pub mod getresponse_client;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
mod tests;

pub use config::ClientConfig;
pub use context::{CallContext, CancelHandle};
pub use error::{CoreError, GetResponseError, TransportFailure};
pub use getresponse_client::GetResponseClient;
pub use request::AuthContext;
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

pub const GETRESPONSE_API_HOSTNAME: &str = "api.getresponse.com";
pub const GETRESPONSE_API_BASE_URL: &str =
    const_format::concatcp!("https://", GETRESPONSE_API_HOSTNAME);
