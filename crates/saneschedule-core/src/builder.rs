//! Calendar entry builder.
//!
//! Turns events into [`CalendarEntry`] values. In collapsed mode every event
//! becomes one entry. In broken-down mode an event with sub-events is
//! replaced by one entry per sub-event, so an event never contributes both.
//!
//! The output depends only on the inputs. When the break-down flag flips the
//! list is rebuilt from scratch.

use tracing::debug;

use crate::conference::{Conference, SUB_EVENT_ID_SEPARATOR, SUB_EVENT_TITLE_SEPARATOR};
use crate::entry::CalendarEntry;
use crate::event::{Event, SubEvent};

/// Builds the entry list for the given events.
///
/// `events` is expected to be already stripped of administrative
/// placeholders (see [`crate::Catalog::schedulable`]).
pub fn build_entries<'a, I>(
    events: I,
    conference: &Conference,
    break_down: bool,
) -> Vec<CalendarEntry<'a>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut entries = Vec::new();
    for event in events {
        if break_down && event.has_sub_events() {
            entries.extend(
                event
                    .sub_events
                    .iter()
                    .map(|sub| sub_event_entry(event, sub, conference)),
            );
        } else {
            entries.push(event_entry(event, conference));
        }
    }

    debug!(count = entries.len(), break_down, "built calendar entries");
    entries
}

/// Entry covering a whole event.
pub fn event_entry<'a>(event: &'a Event, conference: &Conference) -> CalendarEntry<'a> {
    CalendarEntry {
        id: event.id.clone(),
        start_date_time: conference.date_time(&event.date, &event.start),
        end_date_time: conference.date_time(&event.date, &event.end),
        title: event.title.clone(),
        event,
        sub_event: None,
    }
}

/// Entry covering one sub-event, on the parent's day.
pub fn sub_event_entry<'a>(
    event: &'a Event,
    sub: &'a SubEvent,
    conference: &Conference,
) -> CalendarEntry<'a> {
    CalendarEntry {
        id: format!("{}{}{}", event.id, SUB_EVENT_ID_SEPARATOR, sub.id),
        start_date_time: conference.date_time(&event.date, &sub.start),
        end_date_time: conference.date_time(&event.date, &sub.end),
        title: format!("{}{}{}", event.title, SUB_EVENT_TITLE_SEPARATOR, sub.title),
        event,
        sub_event: Some(sub),
    }
}
