//! Event types for the conference program.
//!
//! This module provides the records that make up the event catalog:
//! - [`Event`]: A top-level program item, possibly carrying sub-events
//! - [`SubEvent`]: A sub-session nested inside an event with its own time range
//! - [`Availability`]: The recorded/streamed state attached to both

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator used inside `category_name` when an event carries several categories.
pub const CATEGORY_SEPARATOR: &str = ", ";

/// Whether a session is recorded or live-streamed.
///
/// The catalog stores these as free-form strings. Only [`Availability::Yes`]
/// carries meaning for filtering; every other value, including the empty
/// string, counts as "not confirmed". Unrecognised strings are preserved so
/// they serialise back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    /// Confirmed.
    Yes,
    /// Confirmed not to happen.
    No,
    /// The program does not say.
    #[default]
    Unknown,
    /// Any other raw value.
    Other(String),
}

impl Availability {
    /// Returns the raw string form of this state.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unknown => "Unknown",
            Self::Other(raw) => raw,
        }
    }

    /// Returns true only for an exact `"Yes"`.
    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<String> for Availability {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Yes" => Self::Yes,
            "No" => Self::No,
            "Unknown" => Self::Unknown,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Availability {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Availability> for String {
    fn from(state: Availability) -> Self {
        match state {
            Availability::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sub-session of an [`Event`].
///
/// The id is only unique within the parent event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEvent {
    /// Identifier, unique within the parent.
    #[serde(rename = "ssid")]
    pub id: String,
    /// Session title.
    pub title: String,
    /// Detail page URL.
    pub link: String,
    /// Local start time (`HH:MM`).
    pub start: String,
    /// Local end time (`HH:MM`).
    pub end: String,
    /// Recording state.
    #[serde(default)]
    pub recorded: Availability,
    /// Live-stream state.
    #[serde(default)]
    pub streamed: Availability,
}

impl SubEvent {
    /// Creates a sub-event with the required fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start: start.into(),
            end: end.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the detail link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Builder method to set the recording state.
    pub fn with_recorded(mut self, recorded: impl Into<Availability>) -> Self {
        self.recorded = recorded.into();
        self
    }

    /// Builder method to set the live-stream state.
    pub fn with_streamed(mut self, streamed: impl Into<Availability>) -> Self {
        self.streamed = streamed.into();
        self
    }
}

/// A top-level program item.
///
/// Field names on the wire follow the catalog exporter (`evid`, `type_name`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier.
    #[serde(rename = "evid")]
    pub id: String,
    /// One or more categories joined by [`CATEGORY_SEPARATOR`].
    #[serde(rename = "type_name")]
    pub category_name: String,
    /// Event title.
    pub title: String,
    /// Detail page URL, possibly empty.
    #[serde(default)]
    pub link: String,
    /// Room or venue.
    #[serde(default)]
    pub location: String,
    /// Conference day (`MM-DD`).
    pub date: String,
    /// Local start time (`HH:MM`).
    pub start: String,
    /// Local end time (`HH:MM`).
    pub end: String,
    /// Recording state.
    #[serde(default)]
    pub recorded: Availability,
    /// Live-stream state.
    #[serde(default)]
    pub streamed: Availability,
    /// Nested sessions, in program order.
    #[serde(default)]
    pub sub_events: Vec<SubEvent>,
}

impl Event {
    /// Creates an event with the required fields.
    pub fn new(
        id: impl Into<String>,
        category_name: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category_name: category_name.into(),
            title: title.into(),
            date: date.into(),
            start: start.into(),
            end: end.into(),
            ..Default::default()
        }
    }

    /// Iterates over the individual categories in `category_name`.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.category_name
            .split(CATEGORY_SEPARATOR)
            .filter(|c| !c.is_empty())
    }

    /// Returns true if `category` occurs anywhere in `category_name`.
    ///
    /// This is a substring test: `"Talk"` also matches
    /// `"ACM SIGGRAPH Award Talk"`.
    pub fn has_category(&self, category: &str) -> bool {
        self.category_name.contains(category)
    }

    /// Returns true if this event has nested sessions.
    pub fn has_sub_events(&self) -> bool {
        !self.sub_events.is_empty()
    }

    /// Builder method to set the detail link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builder method to set the recording state.
    pub fn with_recorded(mut self, recorded: impl Into<Availability>) -> Self {
        self.recorded = recorded.into();
        self
    }

    /// Builder method to set the live-stream state.
    pub fn with_streamed(mut self, streamed: impl Into<Availability>) -> Self {
        self.streamed = streamed.into();
        self
    }

    /// Builder method to add a sub-event.
    pub fn with_sub_event(mut self, sub_event: SubEvent) -> Self {
        self.sub_events.push(sub_event);
        self
    }
}
