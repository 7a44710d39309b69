use crate::helpers::client_for;

use getresponse_core::{CallContext, TransportFailure};

use models::GetContactRequest;

use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn slow_server(delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"contactId": "abc"}))
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

/// **VALUE**: Verifies the per-call deadline cuts a slow response short.
///
/// **WHY THIS MATTERS**: The call budget must hold even when the transport's
/// own timeout is longer.
///
/// **BUG THIS CATCHES**: Would catch the context deadline being ignored.
#[tokio::test]
async fn given_slow_server_when_deadline_shorter_then_timeout() {
    // GIVEN: A server taking 2s and a 100ms deadline
    let server = slow_server(Duration::from_secs(2)).await;
    let ctx = CallContext::background().with_timeout(Duration::from_millis(100));
    let started = Instant::now();

    // WHEN: Fetching
    let err = client_for(&server, None)
        .get_contact(&ctx, &GetContactRequest::new("abc"))
        .await
        .unwrap_err();

    // THEN: Timeout, well before the server would have answered
    assert_eq!(err.transport_failure(), Some(TransportFailure::Timeout));
    assert!(started.elapsed() < Duration::from_secs(2));
}

/// **VALUE**: Verifies cancelling from another task aborts the HTTP exchange.
///
/// **WHY THIS MATTERS**: A CLI interrupted with Ctrl-C must not wait for the network.
///
/// **BUG THIS CATCHES**: Would catch cancellation only checked before sending.
#[tokio::test]
async fn given_slow_server_when_cancelled_mid_flight_then_cancelled() {
    let server = slow_server(Duration::from_secs(2)).await;
    let (ctx, handle) = CallContext::background().cancellable();
    let started = Instant::now();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
    });

    let err = client_for(&server, None)
        .get_contact(&ctx, &GetContactRequest::new("abc"))
        .await
        .unwrap_err();

    assert_eq!(err.transport_failure(), Some(TransportFailure::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(2));
}

/// **VALUE**: Verifies a generous deadline does not disturb a normal call.
///
/// **WHY THIS MATTERS**: Deadlines should be safe to set everywhere.
///
/// **BUG THIS CATCHES**: Would catch the deadline firing immediately.
#[tokio::test]
async fn given_fast_server_when_deadline_generous_then_succeeds() {
    let server = slow_server(Duration::from_millis(10)).await;
    let ctx = CallContext::background().with_timeout(Duration::from_secs(3));

    let response = client_for(&server, None)
        .get_contact(&ctx, &GetContactRequest::new("abc"))
        .await
        .unwrap();

    assert_eq!(response.contact.contact_id.as_deref(), Some("abc"));
}
