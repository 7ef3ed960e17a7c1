//! Authoritative in-memory contact book with a derived, searchable view.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::ContactStore`]:
//! ```
//! use contactbook::{
//!     contact::Contact,
//!     core::store::ContactStore,
//!     view::query::ViewQuery,
//! };
//!
//! let mut store = ContactStore::new();
//! store.add(Contact::new("a", "Diya Patel", "diya@email.com", "9876543211")).expect("add");
//! store.add(Contact::new("b", "Aarav Sharma", "aarav@email.com", "+91 98765 43210")).expect("add");
//!
//! let toggled = store.toggle_favorite(&"a".into()).expect("known id");
//! assert_eq!(toggled.op.is_favorite(), Some(true));
//!
//! let names: Vec<_> = store
//!     .visible(&ViewQuery::all())
//!     .into_iter()
//!     .map(|c| c.name)
//!     .collect();
//! assert_eq!(names, ["Aarav Sharma", "Diya Patel"]);
//! ```
//!
//! Runtime usage with the seeded contact list:
//! ```no_run
//! use contactbook::{
//!     draft::ContactDraft,
//!     runtime::handle::{spawn_contactbook, RuntimeConfig},
//!     seed::seeded_store,
//!     types::now_ms,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let store = seeded_store(now_ms()).expect("seed");
//! let handle = spawn_contactbook(store, RuntimeConfig::default());
//! let id = handle.add_draft(ContactDraft {
//!     name: "Meera Iyer".to_string(),
//!     email: "meera@email.com".to_string(),
//!     phone: "+91 90000 00000".to_string(),
//!     location: String::new(),
//! }).await.expect("add");
//! let _ = handle.toggle_favorite(id).await.expect("toggle");
//! handle.shutdown().await.expect("shutdown");
//! # }
//! ```
#![deny(missing_docs)]

/// Contact menu actions and their implementation status.
pub mod capability;
/// Contact domain record.
pub mod contact;
/// Core in-memory store.
pub mod core;
/// Creation-boundary payload and validation.
pub mod draft;
/// Applied mutation descriptions.
pub mod op;
/// Single-writer runtime handle and events.
pub mod runtime;
/// Initial contact data.
pub mod seed;
/// Shared primitive types.
pub mod types;
/// Filtered, sorted views over the store.
pub mod view;
