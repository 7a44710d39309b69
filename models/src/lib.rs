//! Data models for the GetResponse contacts API.
//!
//! This crate contains pure data structures: the contact entity, the typed
//! request and response values for each contacts operation, and the error
//! body the remote API returns on failure. Nothing here performs I/O.
//!
//! ## Architecture
//!
//! - **common**: Shared value types (error locations, status codes, keys)
//! - **models** (this crate): Wire shapes, serde only
//! - **getresponse-core**: Request building, response interpretation, transport
//! - **grctl**: Command-line front end

pub mod api_error;
pub mod contact;
pub mod error;
pub mod requests;
pub mod responses;

#[cfg(test)]
mod tests;

pub use api_error::{ApiErrorBody, ApiErrorCode};
pub use contact::{CampaignReference, Contact, CustomFieldValue, TagReference};
pub use error::model_error::ModelError;
pub use requests::{
    CreateContactRequest, DeleteContactRequest, GetContactRequest, GetContactsRequest,
    UpdateContactCustomFieldsRequest, UpdateContactRequest,
};
pub use responses::{
    GetContactResponse, GetContactsResponse, UpdateContactCustomFieldsResponse,
    UpdateContactResponse,
};
