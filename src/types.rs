//! Shared primitive IDs and timestamp aliases.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Monotonic store revision, bumped once per applied mutation.
pub type Revision = u64;
/// Timestamp in milliseconds since the Unix epoch.
pub type TimestampMs = u64;

/// Opaque contact identifier.
///
/// Seeded contacts carry short numeric ids; contacts created through
/// [`crate::draft::ContactDraft`] get a random v4 UUID.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    /// Wraps an existing identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mints a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrows the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Current wall-clock time in milliseconds since epoch; zero if the clock
/// reads before the epoch.
pub fn now_ms() -> TimestampMs {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as TimestampMs)
        .unwrap_or(0)
}
