//! The event catalog.
//!
//! A [`Catalog`] is loaded once from the exporter's JSON array and is never
//! mutated afterwards. Everything else borrows from it.

use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::conference::Conference;
use crate::event::Event;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON is malformed.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An immutable, ordered list of events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// Creates a catalog from already materialized events.
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Parses a catalog from the exporter's JSON array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let events: Vec<Event> = serde_json::from_str(json)?;
        debug!(count = events.len(), "parsed event catalog");
        Ok(Self::new(events))
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// All events, in catalog order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the catalog has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events that can appear on the schedule.
    ///
    /// Drops the conference's administrative placeholder titles. This is not
    /// user-configurable.
    pub fn schedulable<'a>(
        &'a self,
        conference: &'a Conference,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        self.events
            .iter()
            .filter(|ev| !conference.is_excluded_title(&ev.title))
    }

    /// Distinct conference days, sorted.
    pub fn dates(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|ev| ev.date.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl From<Vec<Event>> for Catalog {
    fn from(events: Vec<Event>) -> Self {
        Self::new(events)
    }
}
