//! Output formatting for the day view.
//!
//! This module provides formatters for displaying one conference day:
//! - **TTY**: Human-readable agenda lines with optional hyperlinks
//! - **JSON**: Machine-readable JSON output
//!
//! # Example
//!
//! ```rust
//! use saneschedule_core::format::{FormatOptions, OutputFormatter};
//! use saneschedule_core::{Conference, build_entries, Event};
//!
//! let conference = Conference::default();
//! let event = Event::new("E1", "Talk", "Neural Things", "08-08", "09:00", "10:30");
//! let entries = build_entries([&event], &conference, true);
//!
//! let formatter = OutputFormatter::new(FormatOptions::for_conference(&conference));
//! let lines = formatter.format_day(&entries, &conference);
//! assert_eq!(lines.len(), 1);
//! ```

use std::borrow::Cow;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::conference::Conference;
use crate::entry::CalendarEntry;
use crate::event::Availability;
use crate::render::{EntryView, StatusGlyph};

/// The output format for the day view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable terminal output.
    #[default]
    Tty,
    /// Machine-readable JSON output.
    Json,
}

/// Configuration options for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Whether to include hyperlinks (OSC8) in TTY output.
    pub hyperlinks: bool,
    /// Maximum length for titles (truncated with ellipsis).
    pub max_title_length: Option<usize>,
    /// Whether to append the room to each line.
    pub show_location: bool,
    /// First hour of the visible day window.
    pub day_start_hour: u32,
    /// Hour at which the visible day window ends.
    pub day_end_hour: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            hyperlinks: true,
            max_title_length: None,
            show_location: false,
            day_start_hour: 7,
            day_end_hour: 23,
        }
    }
}

impl FormatOptions {
    /// Default options with the conference's day window.
    pub fn for_conference(conference: &Conference) -> Self {
        Self {
            day_start_hour: conference.day_start_hour,
            day_end_hour: conference.day_end_hour,
            ..Default::default()
        }
    }
}

/// JSON output format for machine consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// The day shown (`YYYY-MM-DD`).
    pub date: String,
    /// Number of entries returned.
    pub count: usize,
    /// Entries in display order.
    pub entries: Vec<JsonEntry>,
}

/// A single calendar entry in JSON format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEntry {
    pub id: String,
    /// Display title (`"{event} | {sub-event}"` for sub-event entries).
    pub title: String,
    /// `YYYY-MM-DDTHH:MM`.
    pub start: String,
    /// `YYYY-MM-DDTHH:MM`.
    pub end: String,
    pub category: String,
    pub link: String,
    pub recorded: Availability,
    pub streamed: Availability,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_link: Option<String>,
}

/// A formatted agenda line with the view it was built from.
#[derive(Debug, Clone)]
pub struct FormattedEntry {
    /// The formatted display text.
    pub text: String,
    /// The underlying entry view.
    pub view: EntryView,
}

/// Output formatter for calendar entries.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    options: FormatOptions,
}

impl OutputFormatter {
    /// Creates a new OutputFormatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Creates a new OutputFormatter with default options.
    pub fn with_defaults() -> Self {
        Self::new(FormatOptions::default())
    }

    /// Formats one day's entries as agenda lines, sorted by start time.
    ///
    /// Entries with unparsable times or entirely outside the day window are
    /// skipped.
    pub fn format_day(
        &self,
        entries: &[CalendarEntry<'_>],
        conference: &Conference,
    ) -> Vec<FormattedEntry> {
        self.in_window(entries)
            .into_iter()
            .map(|entry| {
                let view = EntryView::from_entry(entry, conference);
                FormattedEntry {
                    text: self.format_line(&view),
                    view,
                }
            })
            .collect()
    }

    /// Formats one day's entries as JSON.
    pub fn format_json(
        &self,
        entries: &[CalendarEntry<'_>],
        conference: &Conference,
        date: &str,
    ) -> JsonOutput {
        let entries: Vec<JsonEntry> = self
            .in_window(entries)
            .into_iter()
            .map(|entry| self.to_json_entry(entry, conference))
            .collect();

        JsonOutput {
            date: date.to_string(),
            count: entries.len(),
            entries,
        }
    }

    /// Entries overlapping the day window, sorted by start.
    fn in_window<'e, 'a>(&self, entries: &'e [CalendarEntry<'a>]) -> Vec<&'e CalendarEntry<'a>> {
        let window_start = NaiveTime::from_hms_opt(self.options.day_start_hour.min(23), 0, 0)
            .unwrap_or(NaiveTime::MIN);
        let window_end = self.options.day_end_hour;

        let mut kept: Vec<_> = entries
            .iter()
            .filter_map(|entry| {
                let (Some(start), Some(end)) = (entry.start_naive(), entry.end_naive()) else {
                    warn!(id = %entry.id, start = %entry.start_date_time, "skipping entry with unparsable time");
                    return None;
                };
                if start.hour() >= window_end || end.time() <= window_start {
                    warn!(id = %entry.id, "skipping entry outside the day window");
                    return None;
                }
                Some((start, entry))
            })
            .collect();

        kept.sort_by_key(|(start, _)| *start);
        kept.into_iter().map(|(_, entry)| entry).collect()
    }

    fn format_line(&self, view: &EntryView) -> String {
        let mut line = format!(
            "{}{} {}  {}  {}",
            glyph(&view.recorded),
            glyph(&view.streamed),
            view.time_range,
            view.category,
            self.format_title(&view.title, &view.link),
        );

        if let Some(ref parent) = view.parent {
            line.push_str(&format!(" ({})", self.format_title(&parent.title, &parent.link)));
        }

        if self.options.show_location && !view.location.is_empty() {
            line.push_str(&format!(" @ {}", view.location));
        }

        line
    }

    fn format_title(&self, title: &str, link: &str) -> String {
        let title = self.truncate_title(title);
        if self.options.hyperlinks && !link.is_empty() {
            make_hyperlink(link, &title)
        } else {
            title.into_owned()
        }
    }

    fn truncate_title<'a>(&self, title: &'a str) -> Cow<'a, str> {
        match self.options.max_title_length {
            Some(max) => ellipsis(title, max),
            None => Cow::Borrowed(title),
        }
    }

    fn to_json_entry(&self, entry: &CalendarEntry<'_>, conference: &Conference) -> JsonEntry {
        let view = EntryView::from_entry(entry, conference);
        let (parent_title, parent_link) = match view.parent {
            Some(parent) => (Some(parent.title), Some(parent.link)),
            None => (None, None),
        };

        JsonEntry {
            id: view.id,
            title: self.truncate_title(&entry.title).into_owned(),
            start: entry.start_date_time.clone(),
            end: entry.end_date_time.clone(),
            category: view.category,
            link: view.link,
            recorded: view.recorded.state,
            streamed: view.streamed.state,
            location: view.location,
            parent_title,
            parent_link,
        }
    }
}

/// The glyph letter when confirmed, `-` when denied, `?` otherwise.
fn glyph(status: &StatusGlyph) -> char {
    match status.state {
        Availability::Yes => status.label,
        Availability::No => '-',
        _ => '?',
    }
}

/// Truncates a string with ellipsis if it exceeds the given length.
pub fn ellipsis(s: &str, max_len: usize) -> Cow<'_, str> {
    if max_len == 0 {
        return Cow::Borrowed("");
    }

    if s.chars().count() <= max_len {
        return Cow::Borrowed(s);
    }

    let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
    Cow::Owned(format!("{}...", truncated))
}

/// Creates an OSC8 hyperlink for terminal output.
pub fn make_hyperlink(url: &str, label: &str) -> String {
    // OSC8 hyperlink format: \e]8;;URL\e\\LABEL\e]8;;\e\\
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, label)
}


#[cfg(test)]
mod golden_tests;
