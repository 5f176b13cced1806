//! Entry rendering.
//!
//! [`EntryView`] is the display description of one [`CalendarEntry`]: the
//! category line, the linked title, the recorded/streamed glyphs and, for
//! sub-event entries, a caption pointing back at the parent event. It is
//! what the day view and the formatters draw.

use serde::{Deserialize, Serialize};

use crate::conference::Conference;
use crate::entry::CalendarEntry;
use crate::event::Availability;

/// A one-letter status indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGlyph {
    /// `R` for recorded, `S` for streamed.
    pub label: char,
    /// The effective state the glyph shows.
    pub state: Availability,
}

/// Link back to the parent event of a sub-event entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentCaption {
    pub title: String,
    pub link: String,
}

/// Display description of a calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    /// Entry id.
    pub id: String,
    /// The event's full category name.
    pub category: String,
    /// `HH:MM-HH:MM`, effective times.
    pub time_range: String,
    /// Sub-event title, or event title.
    pub title: String,
    /// Where the title links to.
    pub link: String,
    pub recorded: StatusGlyph,
    pub streamed: StatusGlyph,
    /// Location of the owning event, may be empty.
    pub location: String,
    /// Present only for entries derived from a sub-event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentCaption>,
}

impl EntryView {
    /// Describes an entry for display.
    pub fn from_entry(entry: &CalendarEntry<'_>, conference: &Conference) -> Self {
        let event = entry.event;
        let (title, link, parent) = match entry.sub_event {
            Some(sub) => (
                sub.title.clone(),
                sub.link.clone(),
                Some(ParentCaption {
                    title: event.title.clone(),
                    link: event.link.clone(),
                }),
            ),
            None => {
                let link = if event.link.is_empty() {
                    conference.fallback_link.clone()
                } else {
                    event.link.clone()
                };
                (event.title.clone(), link, None)
            }
        };

        Self {
            id: entry.id.clone(),
            category: event.category_name.clone(),
            time_range: format!("{}-{}", entry.effective_start(), entry.effective_end()),
            title,
            link,
            recorded: StatusGlyph {
                label: 'R',
                state: entry.effective_recorded().clone(),
            },
            streamed: StatusGlyph {
                label: 'S',
                state: entry.effective_streamed().clone(),
            },
            location: event.location.clone(),
            parent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_entries;
    use crate::event::{Event, SubEvent};

    fn talk() -> Event {
        Event::new("E1", "Talk", "Neural Things", "08-08", "09:00", "10:30")
            .with_link("https://example.org/e1")
            .with_recorded("Yes")
            .with_streamed("No")
            .with_sub_event(
                SubEvent::new("a", "First Paper", "09:00", "09:20")
                    .with_link("https://example.org/e1/a")
                    .with_recorded("No")
                    .with_streamed("Unknown"),
            )
    }

    #[test]
    fn whole_event_view() {
        let event = talk();
        let conference = Conference::default();
        let entries = build_entries([&event], &conference, false);
        let view = EntryView::from_entry(&entries[0], &conference);

        assert_eq!(view.category, "Talk");
        assert_eq!(view.time_range, "09:00-10:30");
        assert_eq!(view.title, "Neural Things");
        assert_eq!(view.link, "https://example.org/e1");
        assert!(view.recorded.state.is_yes());
        assert_eq!(view.streamed.state, Availability::No);
        assert!(view.parent.is_none());
    }

    #[test]
    fn sub_event_view_has_parent_caption() {
        let event = talk();
        let conference = Conference::default();
        let entries = build_entries([&event], &conference, true);
        let view = EntryView::from_entry(&entries[0], &conference);

        assert_eq!(view.id, "E1-a");
        assert_eq!(view.time_range, "09:00-09:20");
        assert_eq!(view.title, "First Paper");
        assert_eq!(view.link, "https://example.org/e1/a");
        assert_eq!(view.recorded.state, Availability::No);
        assert_eq!(view.streamed.state, Availability::Unknown);

        let parent = view.parent.unwrap();
        assert_eq!(parent.title, "Neural Things");
        assert_eq!(parent.link, "https://example.org/e1");
    }

    #[test]
    fn empty_link_falls_back() {
        let event = Event::new("E2", "Keynote", "Opening", "08-07", "09:00", "10:00");
        let conference = Conference::default();
        let entries = build_entries([&event], &conference, false);
        let view = EntryView::from_entry(&entries[0], &conference);
        assert_eq!(view.link, "https://s2023.siggraph.org/full-program");
    }
}
