//! Entry filtering by category and recording state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::CalendarEntry;
use crate::prefs::Preferences;

/// The three user-controlled facets that narrow the entry list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Retain only entries matching one of these. Empty retains everything.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_categories: Vec<String>,

    /// Reject entries matching any of these, regardless of `enabled_categories`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_categories: Vec<String>,

    /// Reject entries whose effective recording state is exactly `Yes`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide_recorded: bool,
}

impl EntryFilter {
    /// Creates a filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the filter facets from the current preferences.
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            enabled_categories: prefs.enabled_categories.clone(),
            disabled_categories: prefs.disabled_categories.clone(),
            hide_recorded: prefs.hide_recorded,
        }
    }

    /// Builder: add an enabled category.
    pub fn enable(mut self, category: impl Into<String>) -> Self {
        self.enabled_categories.push(category.into());
        self
    }

    /// Builder: add a disabled category.
    pub fn disable(mut self, category: impl Into<String>) -> Self {
        self.disabled_categories.push(category.into());
        self
    }

    /// Builder: set the hide-recorded flag.
    pub fn with_hide_recorded(mut self, hide: bool) -> Self {
        self.hide_recorded = hide;
        self
    }

    /// Decides whether a single entry is kept. First matching rule wins.
    pub fn matches(&self, entry: &CalendarEntry<'_>) -> bool {
        let event = entry.event;

        // Disabled wins, even if the same category is also enabled.
        if self
            .disabled_categories
            .iter()
            .any(|c| event.has_category(c))
        {
            return false;
        }

        if self.hide_recorded && entry.effective_recorded().is_yes() {
            return false;
        }

        if self.enabled_categories.is_empty() {
            return true;
        }

        self.enabled_categories
            .iter()
            .any(|c| event.has_category(c))
    }

    /// Keeps the matching entries, preserving order.
    pub fn apply<'a>(&self, mut entries: Vec<CalendarEntry<'a>>) -> Vec<CalendarEntry<'a>> {
        let before = entries.len();
        entries.retain(|e| self.matches(e));
        debug!(before, after = entries.len(), "filtered calendar entries");
        entries
    }
}
