//! Selection values and the pure logic that derives new ones.
//!
//! A [`Selection`] is owned by whoever hosts the select. The widget only
//! computes the next value and hands it back through its change callback.

use std::sync::Arc;

use crate::option::{same_option, OptionKey, SelectOption};

#[derive(Debug, Clone)]
pub enum Selection {
    /// At most one option.
    Single(Option<Arc<SelectOption>>),
    /// Any number of options, in the order they were picked.
    Multiple(Vec<Arc<SelectOption>>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Single(None)
    }
}

impl Selection {
    pub fn single() -> Self {
        Selection::Single(None)
    }

    pub fn multiple() -> Self {
        Selection::Multiple(Vec::new())
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multiple(_))
    }

    /// The empty selection of the same mode.
    pub fn cleared(&self) -> Selection {
        match self {
            Selection::Single(_) => Selection::Single(None),
            Selection::Multiple(_) => Selection::Multiple(Vec::new()),
        }
    }

    /// The selection after picking `option`.
    ///
    /// Multiple mode toggles membership: a present option is removed, an
    /// absent one appended. Single mode replaces the value, or returns
    /// `None` when `option` already is the value.
    pub fn with_option(&self, option: &Arc<SelectOption>) -> Option<Selection> {
        match self {
            Selection::Multiple(items) => {
                let mut next: Vec<Arc<SelectOption>> = items
                    .iter()
                    .filter(|o| !same_option(o, option))
                    .cloned()
                    .collect();
                if next.len() == items.len() {
                    next.push(Arc::clone(option));
                }
                Some(Selection::Multiple(next))
            }
            Selection::Single(Some(current)) if same_option(current, option) => None,
            Selection::Single(_) => Some(Selection::Single(Some(Arc::clone(option)))),
        }
    }

    /// Membership by identity.
    pub fn contains(&self, option: &Arc<SelectOption>) -> bool {
        match self {
            Selection::Single(value) => value.as_ref().is_some_and(|v| same_option(v, option)),
            Selection::Multiple(items) => items.iter().any(|o| same_option(o, option)),
        }
    }

    pub fn options(&self) -> Vec<Arc<SelectOption>> {
        match self {
            Selection::Single(value) => value.iter().cloned().collect(),
            Selection::Multiple(items) => items.clone(),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        match self {
            Selection::Single(value) => value.iter().map(|o| o.label()).collect(),
            Selection::Multiple(items) => items.iter().map(|o| o.label()).collect(),
        }
    }

    pub fn keys(&self) -> Vec<OptionKey> {
        match self {
            Selection::Single(value) => value.iter().map(OptionKey::of).collect(),
            Selection::Multiple(items) => items.iter().map(OptionKey::of).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(value) => value.is_none(),
            Selection::Multiple(items) => items.is_empty(),
        }
    }

    /// Same mode and the same options by identity, in the same order.
    pub fn same_as(&self, other: &Selection) -> bool {
        self.is_multiple() == other.is_multiple() && self.keys() == other.keys()
    }
}
