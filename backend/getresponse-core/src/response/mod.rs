//! Classifies a [`TransportResponse`] into a typed result or a typed error.
//!
//! Status in `[200, 400)` is success; everything else is failure. On failure
//! the body is decoded as an [`ApiErrorBody`]. If that fails too, the raw
//! bytes and status come back as [`GetResponseError::Decode`] with no message
//! invented from partial data.
//!
//! Entity and error bodies must be JSON objects. serde's derived struct
//! visitors also accept arrays (fields by position), so every struct decode
//! goes through a `Map` first.

use crate::error::GetResponseError;
use crate::transport::TransportResponse;

use common::HttpStatusCode;
use models::ApiErrorBody;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// For operations that return a single JSON object.
#[track_caller]
pub fn interpret_object<T: DeserializeOwned>(
    response: TransportResponse,
) -> Result<T, GetResponseError> {
    let TransportResponse { status, body } = response;

    if !status.is_success() {
        return Err(interpret_failure(status, body));
    }

    match decode_object(&body) {
        Ok(payload) => Ok(payload),
        Err(e) => Err(GetResponseError::decode(status, body, e)),
    }
}

/// For operations that return a JSON array of objects, kept in remote order.
#[track_caller]
pub fn interpret_object_list<T: DeserializeOwned>(
    response: TransportResponse,
) -> Result<Vec<T>, GetResponseError> {
    let TransportResponse { status, body } = response;

    if !status.is_success() {
        return Err(interpret_failure(status, body));
    }

    match decode_object_list(&body) {
        Ok(payload) => Ok(payload),
        Err(e) => Err(GetResponseError::decode(status, body, e)),
    }
}

/// For operations without a payload; a successful body is discarded unread.
#[track_caller]
pub fn interpret_empty(response: TransportResponse) -> Result<(), GetResponseError> {
    let TransportResponse { status, body } = response;

    if status.is_success() {
        return Ok(());
    }

    Err(interpret_failure(status, body))
}

#[track_caller]
fn interpret_failure(status: HttpStatusCode, body: Vec<u8>) -> GetResponseError {
    match decode_object::<ApiErrorBody>(&body) {
        Ok(remote) => GetResponseError::remote(status, remote),
        Err(e) => GetResponseError::decode(status, body, e),
    }
}

fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    serde_json::from_value(Value::Object(object))
}

fn decode_object_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, serde_json::Error> {
    let objects: Vec<Map<String, Value>> = serde_json::from_slice(body)?;
    objects
        .into_iter()
        .map(|object| serde_json::from_value(Value::Object(object)))
        .collect()
}
