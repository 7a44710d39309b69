use crate::helpers::client_for;

use getresponse_core::{
    AuthContext, CallContext, GetResponseClient, HttpTransport, TransportFailure,
};

use common::RedactedApiKey;
use models::{ApiErrorCode, CreateContactRequest, GetContactRequest};

use std::net::TcpListener;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Failure classification over real HTTP
// ============================================================================

/// **VALUE**: Verifies a 409 with an error body surfaces the remote message.
///
/// **WHY THIS MATTERS**: "Contact already added" is actionable for users; a
/// generic "HTTP 409" is not.
///
/// **BUG THIS CATCHES**: Would catch the error body being ignored on failure.
#[tokio::test]
async fn given_conflict_when_create_contact_then_remote_error_with_message() {
    // GIVEN: A server rejecting the create
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/contacts"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "httpStatus": 409,
            "code": 1008,
            "codeDescription": "Resource already exists",
            "message": "Contact already added",
            "moreInfo": "https://apidocs.getresponse.com/v3/errors/1008",
            "context": [],
            "uuid": "c3f4c2a5-7b6e-4e36-8d7e-1f0c2a9d3b11"
        })))
        .mount(&server)
        .await;

    // WHEN: Creating
    let err = client_for(&server, None)
        .create_contact(
            &CallContext::background(),
            &CreateContactRequest::new("foo@bar.baz", "abc"),
        )
        .await
        .unwrap_err();

    // THEN: Remote error carrying the message and code
    assert!(err.is_remote());
    assert_eq!(err.to_string(), "Contact already added");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(409));
    let body = err.remote_body().unwrap();
    assert_eq!(body.error_code(), Some(ApiErrorCode::ResourceAlreadyExists));
}

/// **VALUE**: Verifies a non-JSON failure body becomes a decode error with the raw bytes.
///
/// **WHY THIS MATTERS**: Proxies and load balancers answer with HTML pages.
///
/// **BUG THIS CATCHES**: Would catch a made-up empty message masking the real response.
#[tokio::test]
async fn given_html_gateway_error_when_get_contact_then_decode_error_with_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .get_contact(&CallContext::background(), &GetContactRequest::new("abc"))
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(502));
    assert_eq!(err.raw_body(), Some(&b"<html>Bad Gateway</html>"[..]));
}

/// **VALUE**: Verifies a malformed success body is a decode error, not a default value.
///
/// **WHY THIS MATTERS**: Returning an empty contact would look like real data.
///
/// **BUG THIS CATCHES**: Would catch decode failures being swallowed on 2xx.
#[tokio::test]
async fn given_truncated_success_body_when_get_contact_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"contactId\":"))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .get_contact(&CallContext::background(), &GetContactRequest::new("abc"))
        .await
        .unwrap_err();

    assert!(err.is_decode());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(200));
}

/// **VALUE**: Verifies an unreachable host is a connection transport error.
///
/// **WHY THIS MATTERS**: Callers retry connection failures but not remote rejections.
///
/// **BUG THIS CATCHES**: Would catch connect errors classified as `Other`.
#[tokio::test]
async fn given_nothing_listening_when_called_then_connection_failure() {
    // GIVEN: A port that was bound and released
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let uri = format!("http://127.0.0.1:{port}");
    let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
    let auth = AuthContext::new(RedactedApiKey::new("k"), None);
    let client = GetResponseClient::with_transport(&uri, auth, transport).unwrap();

    // WHEN: Calling
    let err = client
        .get_contact(&CallContext::background(), &GetContactRequest::new("abc"))
        .await
        .unwrap_err();

    // THEN: Connection failure
    assert_eq!(err.transport_failure(), Some(TransportFailure::Connection));
    assert_eq!(err.error_category(), "connection");
}
