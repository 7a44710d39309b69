//! The error body returned by the remote API on 4xx/5xx responses.

use crate::ModelError;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Decoded `{httpStatus, code, codeDescription, message, moreInfo, context, uuid}`.
///
/// Missing or `null` fields decode to empty values. Its `Display` is the
/// remote message and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl ApiErrorBody {
    /// The documented code, if the remote sent one this crate knows about.
    pub fn error_code(&self) -> Option<ApiErrorCode> {
        ApiErrorCode::try_from(self.code).ok()
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error codes documented for the v3 API.
///
/// Reference values only: the client treats every 4xx/5xx alike and never
/// branches on a specific code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ApiErrorCode {
    InternalError = 1,
    ValidationError = 1000,
    RelatedResourceNotFound = 1001,
    Forbidden = 1002,
    InvalidParameterFormat = 1003,
    InvalidHash = 1004,
    MissingParameter = 1005,
    InvalidParameterType = 1006,
    InvalidParameterLength = 1007,
    ResourceAlreadyExists = 1008,
    ResourceInUse = 1009,
    ExternalError = 1010,
    MessageAlreadySending = 1011,
    MessageParsing = 1012,
    ResourceNotFound = 1013,
    AuthenticationFailure = 1014,
    RequestQuotaReached = 1015,
    TemporarilyBlocked = 1016,
    PermanentlyBlocked = 1017,
    IpBlocked = 1018,
    InvalidRequestHeaders = 1021,
    RequestForbidden = 1023,
}

impl ApiErrorCode {
    pub const ALL: [ApiErrorCode; 22] = [
        ApiErrorCode::InternalError,
        ApiErrorCode::ValidationError,
        ApiErrorCode::RelatedResourceNotFound,
        ApiErrorCode::Forbidden,
        ApiErrorCode::InvalidParameterFormat,
        ApiErrorCode::InvalidHash,
        ApiErrorCode::MissingParameter,
        ApiErrorCode::InvalidParameterType,
        ApiErrorCode::InvalidParameterLength,
        ApiErrorCode::ResourceAlreadyExists,
        ApiErrorCode::ResourceInUse,
        ApiErrorCode::ExternalError,
        ApiErrorCode::MessageAlreadySending,
        ApiErrorCode::MessageParsing,
        ApiErrorCode::ResourceNotFound,
        ApiErrorCode::AuthenticationFailure,
        ApiErrorCode::RequestQuotaReached,
        ApiErrorCode::TemporarilyBlocked,
        ApiErrorCode::PermanentlyBlocked,
        ApiErrorCode::IpBlocked,
        ApiErrorCode::InvalidRequestHeaders,
        ApiErrorCode::RequestForbidden,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ApiErrorCode {
    type Error = ModelError;

    #[track_caller]
    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match ApiErrorCode::ALL.into_iter().find(|known| known.code() == code) {
            Some(known) => Ok(known),
            None => Err(ModelError::validation(format!(
                "Unknown API error code: {code}"
            ))),
        }
    }
}
