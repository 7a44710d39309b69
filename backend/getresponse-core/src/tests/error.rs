// Unit tests for the error taxonomy

use crate::error::config::ConfigError;
use crate::error::{CoreError, GetResponseError, TransportFailure};

use common::HttpStatusCode;
use models::ApiErrorBody;

use std::error::Error as _;
use std::time::Duration;

fn conflict_body() -> ApiErrorBody {
    ApiErrorBody {
        http_status: Some(409),
        code: 1008,
        message: String::from("Contact already added"),
        ..ApiErrorBody::default()
    }
}

/// **VALUE**: Verifies remote errors display only the remote message.
///
/// **WHY THIS MATTERS**: The message is shown to end users as-is.
///
/// **BUG THIS CATCHES**: Would catch a prefix or location leaking into the text.
#[test]
fn given_remote_error_when_displayed_then_only_remote_message() {
    let err = GetResponseError::remote(HttpStatusCode(409), conflict_body());

    assert_eq!(err.to_string(), "Contact already added");
    assert_eq!(err.status(), Some(HttpStatusCode(409)));
    assert_eq!(err.remote_body().map(|b| b.code), Some(1008));
    assert_eq!(err.error_category(), "client_error");
}

/// **VALUE**: Verifies local errors carry the construction site in their text.
///
/// **WHY THIS MATTERS**: Logs must point at the failing call site.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped so every
/// error reports the constructor's own line.
#[test]
fn given_request_error_when_displayed_then_includes_caller_location() {
    let line = line!() + 1;
    let err = GetResponseError::request("empty id");

    let text = err.to_string();
    assert!(text.starts_with("Request Error: empty id ["));
    assert!(text.contains(&format!("error.rs:{line}:")), "{text}");
    assert!(err.is_request());
    assert_eq!(err.status(), None);
}

/// **VALUE**: Verifies each variant maps to its stable category label.
///
/// **WHY THIS MATTERS**: Reports and metrics key on these labels.
///
/// **BUG THIS CATCHES**: Would catch a transport kind falling into the wrong bucket.
#[test]
fn given_each_variant_when_categorized_then_stable_label() {
    let decode_source = serde_json::from_str::<u8>("x").unwrap_err();

    let cases = [
        (GetResponseError::request("x"), "request"),
        (
            GetResponseError::transport(TransportFailure::Connection, "refused"),
            "connection",
        ),
        (
            GetResponseError::deadline_exceeded(Duration::from_millis(5)),
            "timeout",
        ),
        (GetResponseError::cancelled(), "cancelled"),
        (
            GetResponseError::transport(TransportFailure::Body, "eof"),
            "transport",
        ),
        (
            GetResponseError::remote(HttpStatusCode(503), ApiErrorBody::default()),
            "server_error",
        ),
        (
            GetResponseError::remote(HttpStatusCode(404), ApiErrorBody::default()),
            "client_error",
        ),
        (
            GetResponseError::remote(HttpStatusCode(101), ApiErrorBody::default()),
            "remote",
        ),
        (
            GetResponseError::decode(HttpStatusCode(200), b"x".to_vec(), decode_source),
            "decode",
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.error_category(), expected, "{err}");
    }
}

/// **VALUE**: Verifies decode errors keep the raw body and the parse cause.
///
/// **WHY THIS MATTERS**: Diagnosing a broken proxy needs the actual bytes.
///
/// **BUG THIS CATCHES**: Would catch the body being dropped on the floor.
#[test]
fn given_decode_error_when_inspected_then_raw_body_and_source_available() {
    let source = serde_json::from_str::<u8>("not json").unwrap_err();
    let err = GetResponseError::decode(HttpStatusCode(502), b"<html>".to_vec(), source);

    assert!(err.is_decode());
    assert_eq!(err.raw_body(), Some(&b"<html>"[..]));
    assert!(err.source().is_some());
    assert!(err.remote_body().is_none());
}

/// **VALUE**: Verifies URL parse failures become request errors.
///
/// **WHY THIS MATTERS**: A bad base URL means nothing was sent.
///
/// **BUG THIS CATCHES**: Would catch it being reported as a transport failure.
#[test]
fn given_url_parse_error_when_converted_then_request_error() {
    let parse = url::Url::parse("::nope").unwrap_err();
    let err = GetResponseError::from(parse);

    assert!(err.is_request());
    assert!(err.to_string().contains("invalid URL"));
}

/// **VALUE**: Verifies the umbrella error is transparent over both sources.
///
/// **WHY THIS MATTERS**: Binaries print `CoreError` directly.
///
/// **BUG THIS CATCHES**: Would catch a wrapper prefix hiding the remote message.
#[test]
fn given_core_error_when_displayed_then_inner_text_unchanged() {
    let client: CoreError =
        GetResponseError::remote(HttpStatusCode(409), conflict_body()).into();
    let config: CoreError = ConfigError::validation("bad timeout").into();

    assert_eq!(client.to_string(), "Contact already added");
    assert!(config.to_string().starts_with("Config Validation Error: bad timeout"));
}
