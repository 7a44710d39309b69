//! Error taxonomy for a single contacts API call.
//!
//! Exactly one variant comes back per failed call:
//! - `Request`: the request could not be built; nothing was sent
//! - `Transport`: the exchange itself failed (connect, deadline, cancel, body read)
//! - `Remote`: 4xx/5xx with a decodable error body; `Display` is the remote message
//! - `Decode`: the body matched neither the expected payload nor the error shape
//!
//! `Remote` and `Decode` are kept apart on purpose so callers never have to
//! sniff message strings to know whether the remote said something meaningful.

use common::{ErrorLocation, HttpStatusCode};
use models::ApiErrorBody;

use std::fmt;
use std::time::Duration;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum GetResponseError {
    #[error("Request Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error ({kind}): {message} {location}")]
    Transport {
        kind: TransportFailure,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
        location: ErrorLocation,
    },

    #[error("{body}")]
    Remote {
        status: HttpStatusCode,
        body: Box<ApiErrorBody>,
        location: ErrorLocation,
    },

    #[error("Decode Error: HTTP {status}: {source} {location}")]
    Decode {
        status: HttpStatusCode,
        body: Vec<u8>,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

/// What went wrong below HTTP semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Connection,
    Timeout,
    Cancelled,
    Body,
    Other,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransportFailure::Connection => "connection",
            TransportFailure::Timeout => "timeout",
            TransportFailure::Cancelled => "cancelled",
            TransportFailure::Body => "body",
            TransportFailure::Other => "other",
        };
        f.write_str(label)
    }
}

impl GetResponseError {
    #[track_caller]
    pub fn request(message: impl Into<String>) -> Self {
        GetResponseError::Request {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn transport(kind: TransportFailure, message: impl Into<String>) -> Self {
        GetResponseError::Transport {
            kind,
            message: message.into(),
            source: None,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        Self::transport(TransportFailure::Cancelled, "call cancelled by caller")
    }

    #[track_caller]
    pub fn deadline_exceeded(limit: Duration) -> Self {
        Self::transport(
            TransportFailure::Timeout,
            format!("call deadline of {}ms exceeded", limit.as_millis()),
        )
    }

    #[track_caller]
    pub fn remote(status: HttpStatusCode, body: ApiErrorBody) -> Self {
        GetResponseError::Remote {
            status,
            body: Box::new(body),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn decode(status: HttpStatusCode, body: Vec<u8>, source: serde_json::Error) -> Self {
        GetResponseError::Decode {
            status,
            body,
            source,
            location: ErrorLocation::caller(),
        }
    }

    /// HTTP status observed, when the call got that far.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            GetResponseError::Remote { status, .. } => Some(*status),
            GetResponseError::Decode { status, .. } => Some(*status),
            GetResponseError::Request { .. } => None,
            GetResponseError::Transport { .. } => None,
        }
    }

    /// The decoded remote error body.
    pub fn remote_body(&self) -> Option<&ApiErrorBody> {
        match self {
            GetResponseError::Remote { body, .. } => Some(body.as_ref()),
            _ => None,
        }
    }

    /// Raw bytes of a response that could not be interpreted.
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            GetResponseError::Decode { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }

    pub fn transport_failure(&self) -> Option<TransportFailure> {
        match self {
            GetResponseError::Transport { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_request(&self) -> bool {
        matches!(self, GetResponseError::Request { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, GetResponseError::Transport { .. })
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, GetResponseError::Remote { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, GetResponseError::Decode { .. })
    }

    /// Stable short label for metrics and reports.
    pub fn error_category(&self) -> &'static str {
        match self {
            GetResponseError::Request { .. } => "request",
            GetResponseError::Transport {
                kind: TransportFailure::Connection,
                ..
            } => "connection",
            GetResponseError::Transport {
                kind: TransportFailure::Timeout,
                ..
            } => "timeout",
            GetResponseError::Transport {
                kind: TransportFailure::Cancelled,
                ..
            } => "cancelled",
            GetResponseError::Transport { .. } => "transport",
            GetResponseError::Remote { status, .. } if status.is_server_error() => "server_error",
            GetResponseError::Remote { status, .. } if status.is_client_error() => "client_error",
            GetResponseError::Remote { .. } => "remote",
            GetResponseError::Decode { .. } => "decode",
        }
    }
}

impl From<reqwest::Error> for GetResponseError {
    /// Classifies before stringifying, so callers can branch on the kind.
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        if error.is_builder() {
            return GetResponseError::Request {
                message: error.to_string(),
                location: ErrorLocation::caller(),
            };
        }

        let kind = if error.is_timeout() {
            TransportFailure::Timeout
        } else if error.is_connect() {
            TransportFailure::Connection
        } else if error.is_body() || error.is_decode() {
            TransportFailure::Body
        } else {
            TransportFailure::Other
        };

        GetResponseError::Transport {
            kind,
            message: error.to_string(),
            source: Some(error),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<url::ParseError> for GetResponseError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        GetResponseError::Request {
            message: format!("invalid URL: {error}"),
            location: ErrorLocation::caller(),
        }
    }
}
