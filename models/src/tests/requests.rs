// Unit tests for request body shapes

use crate::{CreateContactRequest, CustomFieldValue, UpdateContactCustomFieldsRequest};

use serde_json::json;

/// **VALUE**: Verifies the create body carries campaign and custom fields.
///
/// **WHY THIS MATTERS**: The remote rejects contacts without a campaign, and
/// custom fields are the reason most integrations call create at all.
///
/// **BUG THIS CATCHES**: Would catch the campaign being flattened or the
/// custom field key losing its `customFieldValues` name.
#[test]
fn given_create_request_when_serialized_then_body_matches_wire_shape() {
    // GIVEN: A fully populated create request
    let request = CreateContactRequest {
        name: Some(String::from("foobar")),
        day_of_cycle: Some(5),
        custom_field_values: vec![CustomFieldValue::new("some_key", ["some_value"])],
        ip_address: Some(String::from("127.0.0.1")),
        ..CreateContactRequest::new("foo@bar.baz", "abc")
    };

    // WHEN: Serializing
    let body = serde_json::to_value(&request).unwrap();

    // THEN: Wire names and nesting
    assert_eq!(
        body,
        json!({
            "name": "foobar",
            "email": "foo@bar.baz",
            "dayOfCycle": 5,
            "campaign": {"campaignId": "abc"},
            "customFieldValues": [{"customFieldId": "some_key", "value": ["some_value"]}],
            "ipAddress": "127.0.0.1"
        })
    );
}

/// **VALUE**: Verifies optional create fields are omitted, not nulled.
///
/// **WHY THIS MATTERS**: "Field omitted" and "field empty" mean different
/// things to the remote; `None` must stay omitted.
///
/// **BUG THIS CATCHES**: Would catch a dropped `skip_serializing_if`.
#[test]
fn given_minimal_create_request_when_serialized_then_optional_fields_absent() {
    let body = serde_json::to_value(CreateContactRequest::new("foo@bar.baz", "abc")).unwrap();

    assert_eq!(
        body,
        json!({"email": "foo@bar.baz", "campaign": {"campaignId": "abc"}})
    );
}

/// **VALUE**: Verifies the custom-fields body holds only the field list.
///
/// **WHY THIS MATTERS**: The id travels in the path; echoing it in the body is
/// rejected as an unknown parameter.
///
/// **BUG THIS CATCHES**: Would catch `#[serde(skip)]` being removed from `id`.
#[test]
fn given_custom_fields_request_when_serialized_then_id_is_not_in_body() {
    let request = UpdateContactCustomFieldsRequest {
        id: String::from("123"),
        custom_field_values: vec![CustomFieldValue::new("color", ["red", "blue"])],
    };

    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(
        body,
        json!({"customFieldValues": [{"customFieldId": "color", "value": ["red", "blue"]}]})
    );
}
