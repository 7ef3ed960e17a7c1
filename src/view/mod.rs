//! Derived views over the contact store.

/// Pure filter and sort pipeline.
pub mod query;
/// Query parameters held between UI events.
pub mod state;
