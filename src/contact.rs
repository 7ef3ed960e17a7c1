//! Contact domain record.

use serde::{Deserialize, Serialize};

use crate::types::{ContactId, TimestampMs};

/// Fully materialized, authoritative contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable contact identifier.
    pub id: ContactId,
    /// Display name.
    pub name: String,
    /// Email address, stored as entered.
    pub email: String,
    /// Phone number, stored as entered with no normalization.
    pub phone: String,
    /// Free-text location.
    #[serde(default)]
    pub location: String,
    /// Optional avatar image reference.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Favorite flag.
    #[serde(default)]
    pub is_favorite: bool,
    /// Last time the contact was reached, in milliseconds since epoch.
    #[serde(default)]
    pub last_contacted_ms: Option<TimestampMs>,
    /// Date of birth in milliseconds since epoch; negative before 1970.
    #[serde(default)]
    pub birth_date_ms: Option<i64>,
}

impl Contact {
    /// Builds a contact with the required fields and every optional field empty.
    pub fn new(
        id: impl Into<ContactId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            location: String::new(),
            avatar: None,
            is_favorite: false,
            last_contacted_ms: None,
            birth_date_ms: None,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the favorite flag.
    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }
}
