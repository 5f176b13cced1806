//! Schedule session state.
//!
//! A [`Session`] ties the immutable catalog to the mutable UI state: the
//! persisted preferences and the current-date cursor. Derived data is never
//! cached. Each call to [`Session::visible_entries`] rebuilds the entries for
//! the current break-down mode and filters them with the current facets.

use thiserror::Error;
use tracing::debug;

use crate::builder::build_entries;
use crate::catalog::Catalog;
use crate::categories::{CategoryState, all_categories};
use crate::conference::Conference;
use crate::entry::CalendarEntry;
use crate::filter::EntryFilter;
use crate::prefs::{KeyValueStore, PreferenceStore, Preferences, StoreError};

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The requested day has no events.
    #[error("no events on {day} (known days: {known})")]
    UnknownDate { day: String, known: String },

    /// Preference persistence failed.
    #[error("failed to save preferences: {0}")]
    Store(#[from] StoreError),
}

/// UI state over a loaded catalog.
#[derive(Debug)]
pub struct Session<'a, S> {
    catalog: &'a Catalog,
    conference: &'a Conference,
    prefs: PreferenceStore<S>,
    dates: Vec<String>,
    current_day: Option<String>,
}

impl<'a, S: KeyValueStore> Session<'a, S> {
    /// Opens a session. The cursor starts on the first conference day.
    pub fn new(catalog: &'a Catalog, conference: &'a Conference, store: S) -> Self {
        let dates = catalog.dates();
        let current_day = dates.first().cloned();
        Self {
            catalog,
            conference,
            prefs: PreferenceStore::open(store, conference),
            dates,
            current_day,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn conference(&self) -> &'a Conference {
        self.conference
    }

    pub fn preferences(&self) -> &Preferences {
        self.prefs.get()
    }

    /// Consumes the session and returns the preference store backend.
    pub fn into_store(self) -> S {
        self.prefs.into_inner()
    }

    /// Conference days, sorted.
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// The selected `MM-DD` day, if the catalog has any events.
    pub fn current_day(&self) -> Option<&str> {
        self.current_day.as_deref()
    }

    /// The selected day qualified with the conference year (`YYYY-MM-DD`).
    pub fn current_date(&self) -> Option<String> {
        self.current_day
            .as_deref()
            .map(|day| self.conference.full_date(day))
    }

    /// Moves the cursor to another conference day.
    pub fn select_date(&mut self, day: &str) -> Result<(), SessionError> {
        if !self.dates.iter().any(|d| d == day) {
            return Err(SessionError::UnknownDate {
                day: day.to_string(),
                known: self.dates.join(", "),
            });
        }
        self.current_day = Some(day.to_string());
        Ok(())
    }

    /// Selectable categories paired with their current state.
    pub fn categories(&self) -> Vec<(String, CategoryState)> {
        let prefs = self.prefs.get();
        all_categories(self.catalog.events(), self.conference)
            .into_iter()
            .map(|c| {
                let state = CategoryState::of(&c, prefs);
                (c, state)
            })
            .collect()
    }

    /// All entries for the current break-down mode, unfiltered.
    pub fn entries(&self) -> Vec<CalendarEntry<'a>> {
        build_entries(
            self.catalog.schedulable(self.conference),
            self.conference,
            self.prefs.get().break_down,
        )
    }

    /// The filter built from the current preferences.
    pub fn filter(&self) -> EntryFilter {
        EntryFilter::from_preferences(self.prefs.get())
    }

    /// Entries after filtering, in catalog order.
    pub fn visible_entries(&self) -> Vec<CalendarEntry<'a>> {
        self.filter().apply(self.entries())
    }

    /// Visible entries on one day.
    pub fn entries_on(&self, day: &str) -> Vec<CalendarEntry<'a>> {
        let mut entries = self.visible_entries();
        entries.retain(|e| e.day() == day);
        debug!(day, count = entries.len(), "entries for day");
        entries
    }

    /// Finds an entry by id in the current break-down mode, ignoring filters.
    pub fn find_entry(&self, id: &str) -> Option<CalendarEntry<'a>> {
        self.entries().into_iter().find(|e| e.id == id)
    }

    pub fn toggle_category(&mut self, category: &str) -> Result<(), SessionError> {
        Ok(self.prefs.toggle_category(category)?)
    }

    pub fn clear_enabled(&mut self) -> Result<(), SessionError> {
        Ok(self.prefs.clear_enabled()?)
    }

    pub fn clear_disabled(&mut self) -> Result<(), SessionError> {
        Ok(self.prefs.clear_disabled()?)
    }

    pub fn restore_defaults(&mut self) -> Result<(), SessionError> {
        Ok(self.prefs.restore_defaults()?)
    }

    pub fn toggle_hide_recorded(&mut self) -> Result<(), SessionError> {
        Ok(self.prefs.toggle_hide_recorded()?)
    }

    pub fn toggle_break_down(&mut self) -> Result<(), SessionError> {
        Ok(self.prefs.toggle_break_down()?)
    }
}
