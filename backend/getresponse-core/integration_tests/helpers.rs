use getresponse_core::{AuthContext, GetResponseClient, HttpTransport};

use common::RedactedApiKey;

use std::time::Duration;

use wiremock::MockServer;

pub const API_KEY: &str = "integration-key";

/// A client over the real HTTP transport pointed at `server`.
pub fn client_for(server: &MockServer, domain: Option<&str>) -> GetResponseClient {
    let transport = HttpTransport::new(Duration::from_secs(5)).unwrap();
    let auth = AuthContext::new(RedactedApiKey::new(API_KEY), domain.map(String::from));
    GetResponseClient::with_transport(&server.uri(), auth, transport).unwrap()
}

pub fn auth_header_value() -> String {
    format!("api-key {API_KEY}")
}
