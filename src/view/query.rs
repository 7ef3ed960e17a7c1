//! Visible-list derivation: text search, favorites filter, name sort.
//!
//! Everything here is a pure function of its inputs. The canonical sequence
//! is only read; results are fresh clones.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_provider::DataLocale;
use log::error;

use crate::contact::Contact;

/// Query parameters supplied by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    /// Search text exactly as typed.
    pub search: String,
    /// Restrict the result to favorited contacts.
    pub favorites_only: bool,
}

impl ViewQuery {
    /// Query matching every contact.
    pub fn all() -> Self {
        Self::default()
    }

    /// Query with search text and favorites filter off.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            favorites_only: false,
        }
    }

    /// Query keeping favorites only.
    pub fn favorites() -> Self {
        Self {
            search: String::new(),
            favorites_only: true,
        }
    }

    /// True when the text filter applies.
    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }
}

/// Derives the visible list from a canonical sequence.
pub fn visible<'a, I>(contacts: I, query: &ViewQuery) -> Vec<Contact>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let mut out: Vec<Contact> = contacts.into_iter().cloned().collect();

    if query.has_search() {
        let needle = TextNeedle::new(&query.search);
        out.retain(|c| needle.matches(c));
    }

    if query.favorites_only {
        out.retain(|c| c.is_favorite);
    }

    NameCollator::new().sort(&mut out);
    out
}

/// Locale-aware, case-insensitive name comparison.
///
/// Builds a root-locale collator per call; sort through [`NameCollator`]
/// when comparing many names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}

/// Name collation under the root locale at tertiary strength.
///
/// Accents and case are secondary and tertiary differences, so `Émile`
/// sorts between `Ana` and `Zoe` and `bob` sorts just before `Bob`.
/// Identical names compare equal.
pub enum NameCollator {
    /// ICU collator over compiled root data.
    Icu(Collator),
    /// Lowercase comparison, used only if the collator cannot be built.
    Folded,
}

impl NameCollator {
    /// Builds the root-locale collator.
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        match Collator::try_new(&DataLocale::default(), options) {
            Ok(collator) => Self::Icu(collator),
            Err(err) => {
                error!("name collator unavailable, sorting by lowercase: {err}");
                Self::Folded
            }
        }
    }

    /// Compares two names.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Icu(collator) => collator.compare(a, b),
            Self::Folded => folded_key(a).cmp(&folded_key(b)),
        }
    }

    /// Stable sort of contacts by name.
    pub fn sort(&self, contacts: &mut [Contact]) {
        match self {
            Self::Icu(collator) => contacts.sort_by(|a, b| collator.compare(&a.name, &b.name)),
            Self::Folded => contacts.sort_by_cached_key(|c| folded_key(&c.name)),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

// Lowercase text first, then lowercase-before-uppercase per position.
fn folded_key(name: &str) -> (String, Vec<(bool, char)>) {
    (
        name.to_lowercase(),
        name.chars().map(|c| (!c.is_lowercase(), c)).collect(),
    )
}

struct TextNeedle<'q> {
    raw: &'q str,
    folded: String,
}

impl<'q> TextNeedle<'q> {
    fn new(raw: &'q str) -> Self {
        Self {
            raw,
            folded: raw.to_lowercase(),
        }
    }

    // Phone matching is raw substring only: "+91 98765 43210" does not match
    // "9876543210".
    fn matches(&self, contact: &Contact) -> bool {
        contact.name.to_lowercase().contains(&self.folded)
            || contact.phone.contains(self.raw)
            || contact.email.to_lowercase().contains(&self.folded)
    }
}
