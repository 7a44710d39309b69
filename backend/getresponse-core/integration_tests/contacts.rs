use crate::helpers::{API_KEY, auth_header_value, client_for};

use getresponse_core::CallContext;
use models::{
    Contact, CreateContactRequest, CustomFieldValue, DeleteContactRequest, GetContactRequest,
    GetContactsRequest, UpdateContactCustomFieldsRequest, UpdateContactRequest,
};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Happy paths for each contacts operation over real HTTP
// ============================================================================

/// **VALUE**: Verifies create sends the JSON body with auth headers and
/// accepts an empty 202.
///
/// **WHY THIS MATTERS**: The remote answers create with 202 and no body; a
/// client that tries to decode it would report every create as failed.
///
/// **BUG THIS CATCHES**: Would catch decoding the success body of a
/// payload-less operation.
#[tokio::test]
async fn given_server_accepts_when_create_contact_then_ok_and_body_sent() {
    // GIVEN: A server that accepts the exact create payload
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/contacts"))
        .and(header("X-Auth-Token", auth_header_value().as_str()))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "email": "foo@bar.baz",
            "campaign": {"campaignId": "abc"}
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Creating a contact
    let result = client_for(&server, None)
        .create_contact(
            &CallContext::background(),
            &CreateContactRequest::new("foo@bar.baz", "abc"),
        )
        .await;

    // THEN: Success
    assert!(result.is_ok(), "{result:?}");
}

/// **VALUE**: Verifies the list call encodes filters, sort and paging.
///
/// **WHY THIS MATTERS**: The bracketed `query[...]` keys are how the remote
/// filters contacts; a wrong key silently returns everything.
///
/// **BUG THIS CATCHES**: Would catch filters sent as plain `campaignId=...`.
#[tokio::test]
async fn given_filters_when_get_contacts_then_query_encoded_and_order_kept() {
    // GIVEN: A server that only answers the filtered query
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/contacts"))
        .and(query_param("query[campaignId]", "123"))
        .and(query_param("sort[name]", "asc"))
        .and(query_param("fields", "name,email"))
        .and(query_param("page", "2"))
        .and(query_param("perPage", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"contactId": "b", "name": "Bob"},
            {"contactId": "a", "name": "Alice"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let request = GetContactsRequest {
        query: [(String::from("campaignId"), String::from("123"))].into(),
        sort: [(String::from("name"), String::from("asc"))].into(),
        fields: vec![String::from("name"), String::from("email")],
        page: 2,
        per_page: 50,
        additional_flags: None,
    };

    // WHEN: Listing
    let response = client_for(&server, None)
        .get_contacts(&CallContext::background(), &request)
        .await
        .unwrap();

    // THEN: Contacts in remote order
    let ids: Vec<_> = response
        .contacts
        .iter()
        .map(|c| c.contact_id.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(ids, ["b", "a"]);
}

/// **VALUE**: Verifies fetching one contact decodes the full entity.
///
/// **WHY THIS MATTERS**: This is the most common read path.
///
/// **BUG THIS CATCHES**: Would catch camelCase field mapping regressions.
#[tokio::test]
async fn given_existing_contact_when_get_contact_then_entity_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/contacts/pV3r"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "contactId": "pV3r",
            "name": "John Doe",
            "email": "john@example.com",
            "campaign": {"campaignId": "V", "name": "Promo"},
            "customFieldValues": [{"customFieldId": "n", "value": ["white"]}]
        })))
        .mount(&server)
        .await;

    let response = client_for(&server, None)
        .get_contact(&CallContext::background(), &GetContactRequest::new("pV3r"))
        .await
        .unwrap();

    let contact = response.contact;
    assert_eq!(contact.name.as_deref(), Some("John Doe"));
    assert_eq!(
        contact.campaign.map(|c| c.campaign_id),
        Some(String::from("V"))
    );
    assert_eq!(
        contact.custom_field_values,
        vec![CustomFieldValue::new("n", ["white"])]
    );
}

/// **VALUE**: Verifies update posts only the fields that were set.
///
/// **WHY THIS MATTERS**: Sending unset fields as null would wipe remote data.
///
/// **BUG THIS CATCHES**: Would catch `None` serialized as `null`.
#[tokio::test]
async fn given_partial_contact_when_update_contact_then_only_set_fields_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/contacts/abc"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"contactId": "abc", "name": "Renamed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateContactRequest {
        id: String::from("abc"),
        new_data: Contact {
            name: Some(String::from("Renamed")),
            ..Contact::default()
        },
    };

    let response = client_for(&server, None)
        .update_contact(&CallContext::background(), &request)
        .await
        .unwrap();

    assert_eq!(response.contact.name.as_deref(), Some("Renamed"));
}

/// **VALUE**: Verifies custom field upserts go to the nested path without the id in the body.
///
/// **WHY THIS MATTERS**: The remote rejects unknown body keys on this endpoint.
///
/// **BUG THIS CATCHES**: Would catch the contact id leaking into the JSON body.
#[tokio::test]
async fn given_values_when_update_custom_fields_then_nested_path_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/contacts/abc/custom-fields"))
        .and(body_json(json!({
            "customFieldValues": [{"customFieldId": "pas", "value": ["18-35"]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"contactId": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateContactCustomFieldsRequest {
        id: String::from("abc"),
        custom_field_values: vec![CustomFieldValue::new("pas", ["18-35"])],
    };

    let response = client_for(&server, None)
        .update_contact_custom_fields(&CallContext::background(), &request)
        .await
        .unwrap();

    assert_eq!(response.contact.contact_id.as_deref(), Some("abc"));
}

/// **VALUE**: Verifies delete sends both query parameters, form-encoded.
///
/// **WHY THIS MATTERS**: `messageId` attributes the unsubscribe to a message.
///
/// **BUG THIS CATCHES**: Would catch spaces encoded as raw characters.
#[tokio::test]
async fn given_message_id_with_space_when_delete_contact_then_form_encoded() {
    // GIVEN: A server expecting the decoded values
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/contacts/abc"))
        .and(query_param("messageId", "hello world"))
        .and(query_param("ipAddress", "127.0.0.1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let request = DeleteContactRequest {
        id: String::from("abc"),
        message_id: String::from("hello world"),
        ip_address: String::from("127.0.0.1"),
    };

    // WHEN: Deleting
    client_for(&server, None)
        .delete_contact(&CallContext::background(), &request)
        .await
        .unwrap();

    // THEN: The raw query used '+' for the space
    let received = server.received_requests().await.unwrap();
    let query = received[0].url.query().unwrap_or_default().to_string();
    assert!(query.contains("messageId=hello+world"), "{query}");
}

/// **VALUE**: Verifies the tenant header is sent only when a domain is set.
///
/// **WHY THIS MATTERS**: MAX accounts need `X-Domain`; regular accounts reject it.
///
/// **BUG THIS CATCHES**: Would catch an empty `X-Domain` header on every call.
#[tokio::test]
async fn given_domain_or_not_when_calling_then_x_domain_only_when_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    let ctx = CallContext::background();
    let request = GetContactRequest::new("abc");

    client_for(&server, Some("example.com"))
        .get_contact(&ctx, &request)
        .await
        .unwrap();
    client_for(&server, None)
        .get_contact(&ctx, &request)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    assert_eq!(
        received[0].headers.get("X-Domain").map(|v| v.as_bytes()),
        Some(&b"example.com"[..])
    );
    assert!(received[1].headers.get("X-Domain").is_none());
    for request in &received {
        let token = request.headers.get("X-Auth-Token").unwrap();
        assert_eq!(token.as_bytes(), format!("api-key {API_KEY}").as_bytes());
    }
}
