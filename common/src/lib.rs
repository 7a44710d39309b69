//! Shared value types for the GetResponse client workspace.
//!
//! Nothing in here knows about contacts or endpoints. The crate holds the
//! small pieces every layer needs:
//!
//! - [`ErrorLocation`]: where an error value was created, for every error enum
//! - [`HttpStatusCode`]: status classification used when reading responses
//! - [`RedactedApiKey`]: the account API key, hidden from logs and serde

pub mod error;
pub mod http_status;
pub mod redacted_key;


pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
