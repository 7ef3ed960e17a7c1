//! Add-contact payload and required-field validation.
//!
//! This is the creation boundary: a contact that passes
//! [`ContactDraft::into_contact`] has non-empty `name`, `email`, and `phone`
//! and a freshly minted id. The store trusts that and never re-validates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{contact::Contact, types::ContactId};

/// Fields a contact cannot be created without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// Display name.
    Name,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
}

impl RequiredField {
    /// Form field id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// Creation-boundary validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty.
    MissingField(RequiredField),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "required field `{}` is empty", field.as_str()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Add-contact form payload, deserializable from the form's JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Optional location.
    #[serde(default)]
    pub location: String,
}

impl ContactDraft {
    /// Checks required fields in form order and reports the first empty one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            (RequiredField::Name, &self.name),
            (RequiredField::Email, &self.email),
            (RequiredField::Phone, &self.phone),
        ] {
            if value.is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Validates and materializes a [`Contact`] under a new random id.
    pub fn into_contact(self) -> Result<Contact, ValidationError> {
        self.validate()?;
        Ok(Contact::new(ContactId::generate(), self.name, self.email, self.phone)
            .with_location(self.location))
    }
}
