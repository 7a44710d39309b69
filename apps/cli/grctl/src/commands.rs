use crate::cli::Invocation;
use crate::error::GrctlError;

use getresponse_core::{CallContext, GetResponseClient, Transport};

use log::info;
use serde::Serialize;
use serde_json::Value;

/// Run one invocation. Returns the JSON to print, or `None` for operations
/// the remote answers without a payload.
pub async fn execute<T: Transport>(
    client: &GetResponseClient<T>,
    ctx: &CallContext,
    invocation: &Invocation,
) -> Result<Option<Value>, GrctlError> {
    let output = match invocation {
        Invocation::Create(request) => {
            client.create_contact(ctx, request).await?;
            info!("Contact {} queued for campaign", request.email);
            None
        }
        Invocation::List(request) => {
            let response = client.get_contacts(ctx, request).await?;
            info!("Fetched {} contacts", response.contacts.len());
            Some(to_json(&response.contacts)?)
        }
        Invocation::Get(request) => {
            let response = client.get_contact(ctx, request).await?;
            Some(to_json(&response.contact)?)
        }
        Invocation::Update(request) => {
            let response = client.update_contact(ctx, request).await?;
            Some(to_json(&response.contact)?)
        }
        Invocation::CustomFields(request) => {
            let response = client.update_contact_custom_fields(ctx, request).await?;
            Some(to_json(&response.contact)?)
        }
        Invocation::Delete(request) => {
            client.delete_contact(ctx, request).await?;
            info!("Contact {} deleted", request.id);
            None
        }
    };

    Ok(output)
}

#[track_caller]
fn to_json<S: Serialize>(value: &S) -> Result<Value, GrctlError> {
    match serde_json::to_value(value) {
        Ok(json) => Ok(json),
        Err(e) => Err(GrctlError::cli(format!("Failed to render output: {e}"))),
    }
}
