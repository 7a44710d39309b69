//! Typed inputs for the six contacts operations.
//!
//! Only the parts that travel as a JSON body derive `Serialize`. Identifiers,
//! filters and paging travel in the path or query string and are read by the
//! client when it builds the request.

use crate::contact::{CampaignReference, Contact, CustomFieldValue};

use std::collections::BTreeMap;

use serde::Serialize;

/// `POST /v3/contacts`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_cycle: Option<i32>,
    pub campaign: CampaignReference,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_field_values: Vec<CustomFieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl CreateContactRequest {
    pub fn new(email: impl Into<String>, campaign_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            campaign: CampaignReference::new(campaign_id),
            ..Self::default()
        }
    }
}

/// `GET /v3/contacts`
///
/// `query` becomes `query[<field>]=<value>`, `sort` becomes
/// `sort[<field>]=<value>`, `fields` is comma-joined. `page` and `per_page`
/// are always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetContactsRequest {
    pub query: BTreeMap<String, String>,
    pub sort: BTreeMap<String, String>,
    pub fields: Vec<String>,
    pub page: u32,
    pub per_page: u32,
    pub additional_flags: Option<String>,
}

/// `GET /v3/contacts/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetContactRequest {
    pub id: String,
    pub fields: Vec<String>,
}

impl GetContactRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }
}

/// `POST /v3/contacts/{id}`; `new_data` is the whole body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContactRequest {
    pub id: String,
    pub new_data: Contact,
}

/// `POST /v3/contacts/{id}/custom-fields`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactCustomFieldsRequest {
    #[serde(skip)]
    pub id: String,
    pub custom_field_values: Vec<CustomFieldValue>,
}

/// `DELETE /v3/contacts/{id}?messageId=..&ipAddress=..`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteContactRequest {
    pub id: String,
    pub message_id: String,
    pub ip_address: String,
}
