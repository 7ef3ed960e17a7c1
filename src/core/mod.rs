//! In-memory authoritative contact store.

/// Canonical contact collection and its mutations.
pub mod store;
