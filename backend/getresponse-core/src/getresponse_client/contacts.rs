//! Per-operation mapping from typed requests to [`Operation`]s.

use crate::error::GetResponseError;
use crate::request::Operation;

use models::{
    CreateContactRequest, DeleteContactRequest, GetContactRequest, GetContactsRequest,
    UpdateContactCustomFieldsRequest, UpdateContactRequest,
};

use std::collections::BTreeMap;

use reqwest::Method;

const API_VERSION: &str = "v3";
const CONTACTS_SEGMENT: &str = "contacts";
const CUSTOM_FIELDS_SEGMENT: &str = "custom-fields";

const FIELDS_PARAM: &str = "fields";
const PAGE_PARAM: &str = "page";
const PER_PAGE_PARAM: &str = "perPage";
const ADDITIONAL_FLAGS_PARAM: &str = "additionalFlags";
const MESSAGE_ID_PARAM: &str = "messageId";
const IP_ADDRESS_PARAM: &str = "ipAddress";

pub(crate) fn create_contact(
    request: &CreateContactRequest,
) -> Result<Operation, GetResponseError> {
    Operation::new(Method::POST, [API_VERSION, CONTACTS_SEGMENT]).with_json_body(request)
}

pub(crate) fn get_contacts(request: &GetContactsRequest) -> Operation {
    let mut query = BTreeMap::new();

    for (field, value) in &request.query {
        query.insert(format!("query[{field}]"), value.clone());
    }
    for (field, direction) in &request.sort {
        query.insert(format!("sort[{field}]"), direction.clone());
    }
    insert_fields(&mut query, &request.fields);

    query.insert(PAGE_PARAM.to_string(), request.page.to_string());
    query.insert(PER_PAGE_PARAM.to_string(), request.per_page.to_string());

    if let Some(flags) = &request.additional_flags {
        query.insert(ADDITIONAL_FLAGS_PARAM.to_string(), flags.clone());
    }

    Operation::new(Method::GET, [API_VERSION, CONTACTS_SEGMENT]).with_query(query)
}

pub(crate) fn get_contact(request: &GetContactRequest) -> Operation {
    let mut query = BTreeMap::new();
    insert_fields(&mut query, &request.fields);

    Operation::new(Method::GET, [API_VERSION, CONTACTS_SEGMENT, request.id.as_str()])
        .with_query(query)
}

pub(crate) fn update_contact(
    request: &UpdateContactRequest,
) -> Result<Operation, GetResponseError> {
    Operation::new(Method::POST, [API_VERSION, CONTACTS_SEGMENT, request.id.as_str()])
        .with_json_body(&request.new_data)
}

pub(crate) fn update_contact_custom_fields(
    request: &UpdateContactCustomFieldsRequest,
) -> Result<Operation, GetResponseError> {
    Operation::new(
        Method::POST,
        [
            API_VERSION,
            CONTACTS_SEGMENT,
            request.id.as_str(),
            CUSTOM_FIELDS_SEGMENT,
        ],
    )
    .with_json_body(request)
}

pub(crate) fn delete_contact(request: &DeleteContactRequest) -> Operation {
    let query = BTreeMap::from([
        (MESSAGE_ID_PARAM.to_string(), request.message_id.clone()),
        (IP_ADDRESS_PARAM.to_string(), request.ip_address.clone()),
    ]);

    Operation::new(Method::DELETE, [API_VERSION, CONTACTS_SEGMENT, request.id.as_str()])
        .with_query(query)
}

fn insert_fields(query: &mut BTreeMap<String, String>, fields: &[String]) {
    if !fields.is_empty() {
        query.insert(FIELDS_PARAM.to_string(), fields.join(","));
    }
}
