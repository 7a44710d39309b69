use crate::contact::Contact;

/// Contacts in the order the remote returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetContactsResponse {
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetContactResponse {
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContactResponse {
    pub contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContactCustomFieldsResponse {
    pub contact: Contact,
}
