use std::fmt;

use hashbrown::HashMap;
use log::{debug, warn};

use crate::{
    contact::Contact,
    op::{AppliedOp, Op},
    types::{ContactId, Revision},
    view::query::{ViewQuery, visible},
};

/// Store mutation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A contact with this id is already stored.
    DuplicateId(ContactId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "contact `{id}` already exists"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Canonical contact collection.
///
/// `arrival` holds ids oldest first; the canonical sequence is its reverse.
#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    records: HashMap<ContactId, Contact>,
    arrival: Vec<ContactId>,
    revision: Revision,
}

impl ContactStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store whose canonical sequence is `contacts` in the given order.
    pub fn from_contacts(contacts: Vec<Contact>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for contact in contacts.into_iter().rev() {
            store.insert_record(contact)?;
        }
        debug!("contact store built with {} contacts", store.len());
        Ok(store)
    }

    /// Places `contact` at the front of the canonical sequence.
    ///
    /// A contact whose id is already stored is rejected and nothing changes.
    pub fn add(&mut self, contact: Contact) -> Result<AppliedOp, StoreError> {
        let id = contact.id.clone();
        if let Err(err) = self.insert_record(contact) {
            warn!("rejected contact add: duplicate id {id}");
            return Err(err);
        }
        debug!("contact added id={id} total={}", self.len());
        Ok(self.applied(Op::Add { id }))
    }

    /// Flips the favorite flag and reports the new value.
    ///
    /// Unknown ids are a no-op: nothing changes and `None` is returned.
    pub fn toggle_favorite(&mut self, id: &ContactId) -> Option<AppliedOp> {
        let Some(rec) = self.records.get_mut(id) else {
            debug!("favorite toggle ignored: no contact {id}");
            return None;
        };
        rec.is_favorite = !rec.is_favorite;
        let is_favorite = rec.is_favorite;
        debug!("favorite toggled id={id} is_favorite={is_favorite}");
        Some(self.applied(Op::ToggleFavorite {
            id: id.clone(),
            is_favorite,
        }))
    }

    /// Looks up a contact by id.
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.records.get(id)
    }

    /// Owned copy of the contact with `id`.
    pub fn get_cloned(&self, id: &ContactId) -> Option<Contact> {
        self.get(id).cloned()
    }

    /// Canonical sequence, most recently added first.
    pub fn contacts(&self) -> impl DoubleEndedIterator<Item = &Contact> + '_ {
        self.arrival
            .iter()
            .rev()
            .filter_map(|id| self.records.get(id))
    }

    /// Owned copy of the canonical sequence.
    pub fn contacts_cloned(&self) -> Vec<Contact> {
        self.contacts().cloned().collect()
    }

    /// Ids in canonical order.
    pub fn ordered_ids(&self) -> Vec<&ContactId> {
        self.arrival.iter().rev().collect()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.arrival.len()
    }

    /// True when no contact is stored.
    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty()
    }

    /// Number of favorited contacts.
    pub fn favorite_count(&self) -> usize {
        self.records.values().filter(|c| c.is_favorite).count()
    }

    /// Number of mutations applied since construction.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Derives the visible list for `query` from the canonical sequence.
    pub fn visible(&self, query: &ViewQuery) -> Vec<Contact> {
        visible(self.contacts(), query)
    }

    fn insert_record(&mut self, contact: Contact) -> Result<(), StoreError> {
        if self.records.contains_key(&contact.id) {
            return Err(StoreError::DuplicateId(contact.id));
        }
        self.arrival.push(contact.id.clone());
        self.records.insert(contact.id.clone(), contact);
        Ok(())
    }

    fn applied(&mut self, op: Op) -> AppliedOp {
        self.revision += 1;
        AppliedOp {
            revision: self.revision,
            op,
        }
    }
}
