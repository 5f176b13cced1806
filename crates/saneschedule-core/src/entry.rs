//! Calendar entries.
//!
//! A [`CalendarEntry`] is what the day view places on the time grid. It is
//! derived from the catalog and borrows the event (and sub-event) it was
//! built from.

use chrono::NaiveDateTime;

use crate::event::{Availability, Event, SubEvent};

/// Format of [`CalendarEntry::start_date_time`] and [`CalendarEntry::end_date_time`].
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A renderable item on the schedule.
///
/// Either a whole [`Event`] or one of its [`SubEvent`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry<'a> {
    /// Unique across the whole entry list.
    pub id: String,
    /// `YYYY-MM-DDTHH:MM`, not validated.
    pub start_date_time: String,
    /// `YYYY-MM-DDTHH:MM`, not validated.
    pub end_date_time: String,
    /// Event title, or `"{event} | {sub-event}"`.
    pub title: String,
    /// The owning event.
    pub event: &'a Event,
    /// The sub-event this entry was produced from, if any.
    pub sub_event: Option<&'a SubEvent>,
}

impl<'a> CalendarEntry<'a> {
    /// Returns true if this entry stands for a single sub-event.
    pub fn is_sub_event(&self) -> bool {
        self.sub_event.is_some()
    }

    /// The `MM-DD` day of the owning event.
    pub fn day(&self) -> &'a str {
        &self.event.date
    }

    pub fn effective_recorded(&self) -> &'a Availability {
        match self.sub_event {
            Some(sub) => &sub.recorded,
            None => &self.event.recorded,
        }
    }

    pub fn effective_streamed(&self) -> &'a Availability {
        match self.sub_event {
            Some(sub) => &sub.streamed,
            None => &self.event.streamed,
        }
    }

    pub fn effective_start(&self) -> &'a str {
        match self.sub_event {
            Some(sub) => &sub.start,
            None => &self.event.start,
        }
    }

    pub fn effective_end(&self) -> &'a str {
        match self.sub_event {
            Some(sub) => &sub.end,
            None => &self.event.end,
        }
    }

    /// Parses the start; `None` if the catalog holds a malformed time.
    pub fn start_naive(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.start_date_time, DATE_TIME_FORMAT).ok()
    }

    /// Parses the end; `None` if the catalog holds a malformed time.
    pub fn end_naive(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.end_date_time, DATE_TIME_FORMAT).ok()
    }
}
