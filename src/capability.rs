//! Contact menu actions and which of them the core actually implements.
//!
//! Only [`ContactAction::Add`] and [`ContactAction::ToggleFavorite`] have a
//! backing store operation. The rest are listed so callers can gate their
//! menus; implementing one later means adding a store operation, not
//! changing the existing two.

use std::fmt;

/// Action offered on a contact or on the contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactAction {
    /// Create a contact.
    Add,
    /// Flip the favorite flag.
    ToggleFavorite,
    /// Edit fields.
    Edit,
    /// Voice call.
    Call,
    /// Video call.
    VideoCall,
    /// Send a message.
    Message,
    /// Show interaction history.
    History,
    /// Share the contact card.
    Share,
    /// Export the contact.
    Export,
    /// Block the contact.
    Block,
    /// Remove the contact.
    Delete,
}

const ALL_ACTIONS: &[ContactAction] = &[
    ContactAction::Add,
    ContactAction::ToggleFavorite,
    ContactAction::Edit,
    ContactAction::Call,
    ContactAction::VideoCall,
    ContactAction::Message,
    ContactAction::History,
    ContactAction::Share,
    ContactAction::Export,
    ContactAction::Block,
    ContactAction::Delete,
];

impl ContactAction {
    /// Stable string id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::ToggleFavorite => "toggle_favorite",
            Self::Edit => "edit",
            Self::Call => "call",
            Self::VideoCall => "video_call",
            Self::Message => "message",
            Self::History => "history",
            Self::Share => "share",
            Self::Export => "export",
            Self::Block => "block",
            Self::Delete => "delete",
        }
    }

    /// True when the store has an operation behind this action.
    pub fn is_implemented(self) -> bool {
        matches!(self, Self::Add | Self::ToggleFavorite)
    }

    /// Every known action in menu order.
    pub fn all() -> &'static [ContactAction] {
        ALL_ACTIONS
    }

    /// Actions with a backing store operation.
    pub fn implemented() -> impl Iterator<Item = ContactAction> {
        ALL_ACTIONS.iter().copied().filter(|a| a.is_implemented())
    }
}

impl fmt::Display for ContactAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses an action from its string id.
pub fn parse_contact_action(value: &str) -> Result<ContactAction, ActionError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(ActionError::Empty);
    }

    ALL_ACTIONS
        .iter()
        .copied()
        .find(|a| a.as_str() == normalized)
        .ok_or_else(|| ActionError::Unknown(normalized.to_string()))
}

/// Action parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Blank input.
    Empty,
    /// Not a known action id.
    Unknown(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "action id must not be empty"),
            Self::Unknown(value) => write!(f, "unknown contact action `{value}`"),
        }
    }
}

impl std::error::Error for ActionError {}
