//! Initial contacts the application starts with.

use std::fmt;

use serde::Deserialize;

use crate::{
    contact::Contact,
    core::store::{ContactStore, StoreError},
    types::{ContactId, TimestampMs},
};

const SEED_JSON: &str = include_str!("seed.json");

/// Seed loading failure.
#[derive(Debug)]
pub enum SeedError {
    /// Embedded JSON did not parse.
    Json(serde_json::Error),
    /// Seed contained a repeated id.
    Store(StoreError),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid seed data: {err}"),
            Self::Store(err) => write!(f, "seed rejected by store: {err}"),
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<StoreError> for SeedError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

#[derive(Debug, Deserialize)]
struct SeedContact {
    id: ContactId,
    name: String,
    email: String,
    phone: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    is_favorite: bool,
    #[serde(default)]
    last_contacted_ago_ms: Option<u64>,
    #[serde(default)]
    birth_date_ms: Option<i64>,
}

impl SeedContact {
    fn resolve(self, now_ms: TimestampMs) -> Contact {
        Contact {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            location: self.location,
            avatar: self.avatar,
            is_favorite: self.is_favorite,
            last_contacted_ms: self.last_contacted_ago_ms.map(|ago| now_ms.saturating_sub(ago)),
            birth_date_ms: self.birth_date_ms,
        }
    }
}

/// Seed contacts in canonical order, with relative timestamps resolved
/// against `now_ms`.
pub fn initial_contacts(now_ms: TimestampMs) -> Result<Vec<Contact>, SeedError> {
    let raw: Vec<SeedContact> = serde_json::from_str(SEED_JSON)?;
    Ok(raw.into_iter().map(|c| c.resolve(now_ms)).collect())
}

/// Store pre-filled with [`initial_contacts`].
pub fn seeded_store(now_ms: TimestampMs) -> Result<ContactStore, SeedError> {
    Ok(ContactStore::from_contacts(initial_contacts(now_ms)?)?)
}
