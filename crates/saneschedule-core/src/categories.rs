//! Selectable categories.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::conference::Conference;
use crate::event::Event;
use crate::prefs::Preferences;

/// Every category the user can toggle, sorted.
///
/// Splits each event's `category_name`, removes duplicates and block-listed
/// names.
pub fn all_categories<'a, I>(events: I, conference: &Conference) -> Vec<String>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .flat_map(Event::categories)
        .filter(|c| !conference.is_excluded_category(c))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// How a category is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryState {
    Enabled,
    Disabled,
    Neutral,
}

impl CategoryState {
    /// Looks the category up in the preferences. Enabled is checked first.
    pub fn of(category: &str, prefs: &Preferences) -> Self {
        if prefs.is_enabled(category) {
            Self::Enabled
        } else if prefs.is_disabled(category) {
            Self::Disabled
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for CategoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
