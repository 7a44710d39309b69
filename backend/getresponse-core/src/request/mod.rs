//! Turns an [`Operation`] into a [`TransportRequest`].
//!
//! The builder owns the base URL and the [`AuthContext`]; both are fixed for
//! the lifetime of a client. Every failure here happens before any I/O and is
//! reported as [`GetResponseError::Request`].

use crate::error::GetResponseError;
use crate::transport::TransportRequest;

use common::RedactedApiKey;

use std::collections::BTreeMap;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use url::Url;

pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
pub const DOMAIN_HEADER: &str = "X-Domain";
const AUTH_SCHEME: &str = "api-key";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Credentials and tenant scope attached to every request.
#[derive(Debug, Clone)]
pub struct AuthContext {
    api_key: RedactedApiKey,
    domain: Option<String>,
}

impl AuthContext {
    /// An empty or blank domain is treated as no domain.
    pub fn new(api_key: RedactedApiKey, domain: Option<String>) -> Self {
        let domain = domain
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Self { api_key, domain }
    }

    pub fn api_key(&self) -> &RedactedApiKey {
        &self.api_key
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }
}

/// One logical call before it is bound to a base URL and credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub method: Method,
    /// Unencoded path segments, e.g. `["v3", "contacts", id]`.
    pub segments: Vec<String>,
    pub query: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl Operation {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }

    #[track_caller]
    pub fn with_json_body<T: Serialize>(mut self, payload: &T) -> Result<Self, GetResponseError> {
        match serde_json::to_vec(payload) {
            Ok(body) => {
                self.body = Some(body);
                Ok(self)
            }
            Err(e) => Err(GetResponseError::request(format!(
                "could not encode request body: {e}"
            ))),
        }
    }

    /// `/v3/contacts/123` form, for logs.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
    auth: AuthContext,
}

impl RequestBuilder {
    #[track_caller]
    pub fn new(base_url: &str, auth: AuthContext) -> Result<Self, GetResponseError> {
        let base_url = Url::parse(base_url)?;

        // http(s) URLs always carry a path, so `build` can append segments.
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(GetResponseError::request(format!(
                "base URL must be an http(s) URL: {base_url}"
            )));
        }

        Ok(Self { base_url, auth })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    #[track_caller]
    pub fn build(&self, operation: Operation) -> Result<TransportRequest, GetResponseError> {
        if operation.segments.iter().any(|segment| segment.is_empty()) {
            return Err(GetResponseError::request(format!(
                "empty path segment in {}",
                operation.path()
            )));
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(&operation.segments);
        }

        url.set_query(None);
        if !operation.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&operation.query);
        }

        Ok(TransportRequest {
            method: operation.method,
            url,
            headers: self.headers()?,
            body: operation.body,
        })
    }

    #[track_caller]
    fn headers(&self) -> Result<HeaderMap, GetResponseError> {
        let mut headers = HeaderMap::new();

        let mut token = header_value(
            &format!("{AUTH_SCHEME} {}", self.auth.api_key.as_str()),
            AUTH_TOKEN_HEADER,
        )?;
        token.set_sensitive(true);
        headers.insert(AUTH_TOKEN_HEADER, token);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        if let Some(domain) = self.auth.domain() {
            headers.insert(DOMAIN_HEADER, header_value(domain, DOMAIN_HEADER)?);
        }

        Ok(headers)
    }
}

#[track_caller]
fn header_value(value: &str, header: &str) -> Result<HeaderValue, GetResponseError> {
    match HeaderValue::from_str(value) {
        Ok(value) => Ok(value),
        Err(_) => Err(GetResponseError::request(format!(
            "value for {header} contains characters not allowed in a header"
        ))),
    }
}
