// Unit tests for request construction: URL, query, headers, body

use crate::request::{AUTH_TOKEN_HEADER, AuthContext, DOMAIN_HEADER, Operation, RequestBuilder};

use common::RedactedApiKey;

use std::collections::BTreeMap;

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;

fn builder(domain: Option<&str>) -> RequestBuilder {
    let auth = AuthContext::new(RedactedApiKey::new("secret"), domain.map(String::from));
    RequestBuilder::new("https://api.getresponse.com", auth).unwrap()
}

/// **VALUE**: Verifies the auth and content-type headers are always attached.
///
/// **WHY THIS MATTERS**: The remote rejects every call without
/// `X-Auth-Token: api-key <key>`.
///
/// **BUG THIS CATCHES**: Would catch a missing scheme prefix or a header that
/// is only added for some methods.
#[test]
fn given_any_operation_when_built_then_auth_and_json_headers_present() {
    // GIVEN: A builder without a domain
    let builder = builder(None);

    for method in [Method::GET, Method::POST, Method::DELETE] {
        // WHEN: Building each method
        let request = builder.build(Operation::new(method, ["v3", "contacts"])).unwrap();

        // THEN: Headers are set and marked sensitive where needed
        let token = request.headers.get(AUTH_TOKEN_HEADER).unwrap();
        assert_eq!(token.to_str().unwrap(), "api-key secret");
        assert!(token.is_sensitive(), "API key header must be sensitive");
        assert_eq!(
            request.headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}

/// **VALUE**: Verifies the tenant header appears if and only if a non-empty
/// domain was configured.
///
/// **WHY THIS MATTERS**: Sending `X-Domain` to a non-MAX account, or an empty
/// one, is rejected with 1021 (invalid request headers).
///
/// **BUG THIS CATCHES**: Would catch the header being sent empty or dropped.
#[test]
fn given_domain_configurations_when_built_then_domain_header_only_when_non_empty() {
    let op = || Operation::new(Method::GET, ["v3", "contacts"]);

    let with_domain = builder(Some("example.com")).build(op()).unwrap();
    assert_eq!(with_domain.headers.get(DOMAIN_HEADER).unwrap(), "example.com");

    let without = builder(None).build(op()).unwrap();
    assert!(without.headers.get(DOMAIN_HEADER).is_none());

    let empty = builder(Some("")).build(op()).unwrap();
    assert!(empty.headers.get(DOMAIN_HEADER).is_none());

    let blank = builder(Some("   ")).build(op()).unwrap();
    assert!(blank.headers.get(DOMAIN_HEADER).is_none());
}

/// **VALUE**: Verifies path segments append to the base path and get encoded.
///
/// **WHY THIS MATTERS**: Contact ids are caller input. An id containing `/`
/// must not address a different resource.
///
/// **BUG THIS CATCHES**: Would catch string concatenation of raw ids, or a
/// doubled slash when the base URL ends with `/`.
#[test]
fn given_segments_when_built_then_path_is_appended_and_encoded() {
    // GIVEN: A base URL with a prefix and trailing slash
    let auth = AuthContext::new(RedactedApiKey::new("k"), None);
    let builder = RequestBuilder::new("http://localhost:8080/proxy/", auth).unwrap();

    // WHEN: Building with an id that needs escaping
    let request = builder
        .build(Operation::new(Method::GET, ["v3", "contacts", "a/b c"]))
        .unwrap();

    // THEN: Prefix kept, id escaped, no query
    assert_eq!(
        request.url.as_str(),
        "http://localhost:8080/proxy/v3/contacts/a%2Fb%20c"
    );
    assert_eq!(request.url.query(), None);
}

/// **VALUE**: Verifies query maps are form-encoded and decode back exactly.
///
/// **WHY THIS MATTERS**: Filters use bracketed keys and free-text values.
///
/// **BUG THIS CATCHES**: Would catch spaces sent raw or brackets mangled.
#[test]
fn given_query_map_when_built_then_pairs_round_trip_through_encoding() {
    // GIVEN: Bracketed keys and a value with a space
    let query = BTreeMap::from([
        (String::from("query[name]"), String::from("hello world")),
        (String::from("sort[createdOn]"), String::from("desc")),
    ]);

    // WHEN: Building
    let request = builder(None)
        .build(Operation::new(Method::GET, ["v3", "contacts"]).with_query(query.clone()))
        .unwrap();

    // THEN: Spaces become '+', decoded pairs equal the input
    let raw = request.url.query().unwrap();
    assert!(raw.contains("hello+world"));
    let decoded: BTreeMap<String, String> = request.url.query_pairs().into_owned().collect();
    assert_eq!(decoded, query);
}

/// **VALUE**: Verifies the body is attached verbatim and absent when not given.
///
/// **WHY THIS MATTERS**: GET and DELETE must carry no body at all.
///
/// **BUG THIS CATCHES**: Would catch an empty `Some(vec![])` body on reads.
#[test]
fn given_body_or_none_when_built_then_body_is_passed_through() {
    let with_body = builder(None)
        .build(
            Operation::new(Method::POST, ["v3", "contacts"])
                .with_json_body(&serde_json::json!({"email": "a@b.c"}))
                .unwrap(),
        )
        .unwrap();
    assert_eq!(with_body.body.as_deref(), Some(&br#"{"email":"a@b.c"}"#[..]));

    let without = builder(None)
        .build(Operation::new(Method::GET, ["v3", "contacts"]))
        .unwrap();
    assert!(without.body.is_none());
}

/// **VALUE**: Verifies construction failures surface as `Request` errors before I/O.
///
/// **WHY THIS MATTERS**: A bad base URL or an empty id must fail fast and
/// never reach the network.
///
/// **BUG THIS CATCHES**: Would catch `GET /v3/contacts/` being sent for an
/// empty id (which lists contacts instead of failing).
#[test]
fn given_malformed_inputs_when_built_then_request_error() {
    let auth = || AuthContext::new(RedactedApiKey::new("k"), None);

    assert!(RequestBuilder::new("not a url", auth()).unwrap_err().is_request());
    assert!(RequestBuilder::new("mailto:someone@example.com", auth()).unwrap_err().is_request());
    assert!(RequestBuilder::new("ftp://example.com", auth()).unwrap_err().is_request());

    let empty_id = builder(None)
        .build(Operation::new(Method::GET, ["v3", "contacts", ""]))
        .unwrap_err();
    assert!(empty_id.is_request());

    let bad_key = RequestBuilder::new(
        "https://api.getresponse.com",
        AuthContext::new(RedactedApiKey::new("topsecret\nvalue"), None),
    )
    .unwrap()
    .build(Operation::new(Method::GET, ["v3", "contacts"]))
    .unwrap_err();
    assert!(bad_key.is_request());
    assert!(!bad_key.to_string().contains("topsecret"), "key must not leak into the error");
}

/// **VALUE**: Verifies base URLs that cannot carry a path are rejected up front.
///
/// **WHY THIS MATTERS**: `build` appends path segments to the base URL and
/// relies on construction having refused anything without a path.
///
/// **BUG THIS CATCHES**: Would catch a non-http scheme slipping through and
/// requests then going out without the `/v3/...` path.
#[test]
fn given_pathless_base_urls_when_builder_created_then_request_error() {
    for base in ["mailto:api@getresponse.com", "data:text/plain,hello", "urn:isbn:0451450523"] {
        let auth = AuthContext::new(RedactedApiKey::new("k"), None);
        let err = RequestBuilder::new(base, auth).unwrap_err();
        assert!(err.is_request(), "{base}");
        assert!(err.to_string().contains("http(s)"), "{base}");
    }
}
