//! Runtime event stream payloads.

use crate::{op::Op, types::ContactId};

/// Events emitted from the single-writer runtime loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    /// A new contact was added.
    Added {
        /// Added contact id.
        id: ContactId,
    },
    /// A contact's favorite flag flipped.
    FavoriteToggled {
        /// Mutated contact id.
        id: ContactId,
        /// Favorite value after the flip.
        is_favorite: bool,
    },
}

impl From<Op> for ContactEvent {
    fn from(op: Op) -> Self {
        match op {
            Op::Add { id } => Self::Added { id },
            Op::ToggleFavorite { id, is_favorite } => Self::FavoriteToggled { id, is_favorite },
        }
    }
}
