pub(crate) mod contacts;

use crate::config::ClientConfig;
use crate::context::CallContext;
use crate::error::{CoreError, GetResponseError};
use crate::request::{AuthContext, Operation, RequestBuilder};
use crate::response::{interpret_empty, interpret_object, interpret_object_list};
use crate::transport::{HttpTransport, Transport, TransportResponse};

use common::RedactedApiKey;
use models::{
    Contact, CreateContactRequest, DeleteContactRequest, GetContactRequest, GetContactResponse,
    GetContactsRequest, GetContactsResponse, UpdateContactCustomFieldsRequest,
    UpdateContactCustomFieldsResponse, UpdateContactRequest, UpdateContactResponse,
};

use std::time::Duration;

use log::debug;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Client for the GetResponse v3 contacts endpoints.
///
/// Holds only immutable state, so one instance can serve concurrent calls.
/// Each call builds a request, runs one exchange under the given
/// [`CallContext`] and interprets the response; nothing is retried.
#[derive(Debug, Clone)]
pub struct GetResponseClient<T = HttpTransport> {
    builder: RequestBuilder,
    transport: T,
}

impl GetResponseClient<HttpTransport> {
    pub fn new(
        base_url: &str,
        api_key: RedactedApiKey,
        domain: Option<String>,
    ) -> Result<Self, GetResponseError> {
        let transport = HttpTransport::new(DEFAULT_TIMEOUT_DURATION)?;
        Self::with_transport(base_url, AuthContext::new(api_key, domain), transport)
    }

    /// Build from a validated config that carries an API key.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        config.validate()?;
        config.require_api_key()?;

        let transport = HttpTransport::new(config.timeout())?;
        let auth = AuthContext::new(config.api_key.clone(), config.domain.clone());

        Ok(Self::with_transport(&config.base_url, auth, transport)?)
    }
}

impl<T: Transport> GetResponseClient<T> {
    pub fn with_transport(
        base_url: &str,
        auth: AuthContext,
        transport: T,
    ) -> Result<Self, GetResponseError> {
        let builder = RequestBuilder::new(base_url, auth)?;
        Ok(Self { builder, transport })
    }

    pub fn base_url(&self) -> &Url {
        self.builder.base_url()
    }

    /// `POST /v3/contacts`
    pub async fn create_contact(
        &self,
        ctx: &CallContext,
        request: &CreateContactRequest,
    ) -> Result<(), GetResponseError> {
        let operation = contacts::create_contact(request)?;
        let response = self.execute(ctx, operation).await?;
        interpret_empty(response)
    }

    /// `GET /v3/contacts`
    pub async fn get_contacts(
        &self,
        ctx: &CallContext,
        request: &GetContactsRequest,
    ) -> Result<GetContactsResponse, GetResponseError> {
        let response = self.execute(ctx, contacts::get_contacts(request)).await?;
        let contacts: Vec<Contact> = interpret_object_list(response)?;
        Ok(GetContactsResponse { contacts })
    }

    /// `GET /v3/contacts/{id}`
    pub async fn get_contact(
        &self,
        ctx: &CallContext,
        request: &GetContactRequest,
    ) -> Result<GetContactResponse, GetResponseError> {
        let response = self.execute(ctx, contacts::get_contact(request)).await?;
        let contact = interpret_object(response)?;
        Ok(GetContactResponse { contact })
    }

    /// `POST /v3/contacts/{id}`
    pub async fn update_contact(
        &self,
        ctx: &CallContext,
        request: &UpdateContactRequest,
    ) -> Result<UpdateContactResponse, GetResponseError> {
        let operation = contacts::update_contact(request)?;
        let response = self.execute(ctx, operation).await?;
        let contact = interpret_object(response)?;
        Ok(UpdateContactResponse { contact })
    }

    /// `POST /v3/contacts/{id}/custom-fields`
    pub async fn update_contact_custom_fields(
        &self,
        ctx: &CallContext,
        request: &UpdateContactCustomFieldsRequest,
    ) -> Result<UpdateContactCustomFieldsResponse, GetResponseError> {
        let operation = contacts::update_contact_custom_fields(request)?;
        let response = self.execute(ctx, operation).await?;
        let contact = interpret_object(response)?;
        Ok(UpdateContactCustomFieldsResponse { contact })
    }

    /// `DELETE /v3/contacts/{id}`
    pub async fn delete_contact(
        &self,
        ctx: &CallContext,
        request: &DeleteContactRequest,
    ) -> Result<(), GetResponseError> {
        let response = self.execute(ctx, contacts::delete_contact(request)).await?;
        interpret_empty(response)
    }

    async fn execute(
        &self,
        ctx: &CallContext,
        operation: Operation,
    ) -> Result<TransportResponse, GetResponseError> {
        let request = self.builder.build(operation)?;
        debug!("{} {}", request.method, request.url.path());
        ctx.run(self.transport.send(request)).await
    }
}
