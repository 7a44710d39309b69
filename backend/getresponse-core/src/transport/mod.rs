//! The "make request" seam between the client and the network.
//!
//! The client only ever hands a fully built [`TransportRequest`] to a
//! [`Transport`] and gets back a status plus raw bytes. [`HttpTransport`] is
//! the reqwest-backed implementation used by default; tests and embedders can
//! plug in their own.

use crate::error::GetResponseError;

use common::HttpStatusCode;

use std::future::Future;
use std::time::Duration;

use log::trace;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};
use url::Url;

/// A request ready to go on the wire.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// Already-serialized JSON, sent verbatim.
    pub body: Option<Vec<u8>>,
}

/// What came back: the status and the full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: HttpStatusCode,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: impl Into<HttpStatusCode>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: status.into(),
            body: body.into(),
        }
    }
}

/// Executes one request/response exchange.
///
/// Implementations report connection, deadline and body-read failures as
/// [`GetResponseError::Transport`] and must not interpret the status code.
/// Dropping the returned future must abort the exchange.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, GetResponseError>> + Send;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport whose every exchange is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, GetResponseError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wrap a preconfigured reqwest client (proxies, TLS roots, ...).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, GetResponseError> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = HttpStatusCode(response.status().as_u16());
        let body = response.bytes().await?.to_vec();

        trace!("Received HTTP {status} with {} bytes", body.len());

        Ok(TransportResponse { status, body })
    }
}
