//! Mutation outcomes reported by the store.

use crate::types::{ContactId, Revision};

/// Mutation that was applied to a [`crate::core::store::ContactStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// A contact was placed at the front of the canonical sequence.
    Add {
        /// Added contact id.
        id: ContactId,
    },
    /// A contact's favorite flag was flipped.
    ToggleFavorite {
        /// Mutated contact id.
        id: ContactId,
        /// Favorite value after the flip.
        is_favorite: bool,
    },
}

impl Op {
    /// Id of the contact the op touched.
    pub fn id(&self) -> &ContactId {
        match self {
            Self::Add { id } | Self::ToggleFavorite { id, .. } => id,
        }
    }

    /// Favorite value after a toggle; `None` for other ops.
    pub fn is_favorite(&self) -> Option<bool> {
        match self {
            Self::ToggleFavorite { is_favorite, .. } => Some(*is_favorite),
            Self::Add { .. } => None,
        }
    }
}

/// Applied op plus the store revision it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOp {
    /// Store revision after the op.
    pub revision: Revision,
    /// Op body.
    pub op: Op,
}
