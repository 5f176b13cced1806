//! Golden tests for output formatting.
//!
//! These tests use insta inline snapshots to keep the agenda format stable.
//! Run with `cargo insta review` to update snapshots after intentional changes.

use crate::builder::build_entries;
use crate::conference::Conference;
use crate::event::{Event, SubEvent};
use crate::format::{FormatOptions, FormattedEntry, OutputFormatter};

/// A small day of program: a talk block with two papers, a keynote and a course.
fn sample_day() -> Vec<Event> {
    vec![
        Event::new("E1", "Talk", "Neural Things", "08-08", "09:00", "10:30")
            .with_link("https://example.org/e1")
            .with_recorded("Yes")
            .with_streamed("Yes")
            .with_sub_event(
                SubEvent::new("a", "First", "09:00", "09:20")
                    .with_link("https://example.org/e1/a")
                    .with_recorded("Yes")
                    .with_streamed("No"),
            )
            .with_sub_event(
                SubEvent::new("b", "Second", "09:20", "09:45")
                    .with_link("https://example.org/e1/b")
                    .with_recorded("No")
                    .with_streamed("Unknown"),
            ),
        Event::new("E2", "Keynote", "Opening Keynote", "08-08", "11:00", "12:00")
            .with_location("Petree Hall C")
            .with_recorded("Yes")
            .with_streamed("Yes"),
        Event::new("E3", "Talk, Course", "Shading Course", "08-08", "14:00", "17:15")
            .with_recorded("")
            .with_streamed(""),
    ]
}

fn plain_options() -> FormatOptions {
    FormatOptions {
        hyperlinks: false, // Disable hyperlinks for readable snapshots
        ..Default::default()
    }
}

fn text(lines: &[FormattedEntry]) -> String {
    lines
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// TTY Output Golden Tests
// =============================================================================

#[test]
fn golden_tty_empty() {
    let conference = Conference::default();
    let formatter = OutputFormatter::new(plain_options());

    let lines = formatter.format_day(&[], &conference);

    assert!(lines.is_empty());
}

#[test]
fn golden_tty_collapsed() {
    let events = sample_day();
    let conference = Conference::default();
    let entries = build_entries(&events, &conference, false);
    let formatter = OutputFormatter::new(plain_options());

    let output = text(&formatter.format_day(&entries, &conference));

    insta::assert_snapshot!(output, @r"
    RS 09:00-10:30  Talk  Neural Things
    RS 11:00-12:00  Keynote  Opening Keynote
    ?? 14:00-17:15  Talk, Course  Shading Course
    ");
}

#[test]
fn golden_tty_broken_down() {
    let events = sample_day();
    let conference = Conference::default();
    let entries = build_entries(&events, &conference, true);
    let formatter = OutputFormatter::new(plain_options());

    let output = text(&formatter.format_day(&entries, &conference));

    insta::assert_snapshot!(output, @r"
    R- 09:00-09:20  Talk  First (Neural Things)
    -? 09:20-09:45  Talk  Second (Neural Things)
    RS 11:00-12:00  Keynote  Opening Keynote
    ?? 14:00-17:15  Talk, Course  Shading Course
    ");
}

#[test]
fn golden_tty_location() {
    let events = sample_day();
    let conference = Conference::default();
    let entries = build_entries(&events[1..2], &conference, true);
    let formatter = OutputFormatter::new(FormatOptions {
        show_location: true,
        ..plain_options()
    });

    let output = text(&formatter.format_day(&entries, &conference));

    insta::assert_snapshot!(output, @"RS 11:00-12:00  Keynote  Opening Keynote @ Petree Hall C");
}

#[test]
fn golden_tty_truncated_titles() {
    let events = sample_day();
    let conference = Conference::default();
    let entries = build_entries(&events, &conference, false);
    let formatter = OutputFormatter::new(FormatOptions {
        max_title_length: Some(10),
        ..plain_options()
    });

    let output = text(&formatter.format_day(&entries, &conference));

    insta::assert_snapshot!(output, @r"
    RS 09:00-10:30  Talk  Neural ...
    RS 11:00-12:00  Keynote  Opening...
    ?? 14:00-17:15  Talk, Course  Shading...
    ");
}

// =============================================================================
// JSON Output Golden Tests
// =============================================================================

#[test]
fn golden_json_single_entry() {
    let events = sample_day();
    let conference = Conference::default();
    let entries = build_entries(&events[1..2], &conference, true);
    let formatter = OutputFormatter::new(plain_options());

    let output = formatter.format_json(&entries, &conference, "2023-08-08");

    insta::assert_json_snapshot!(output, @r#"
    {
      "date": "2023-08-08",
      "count": 1,
      "entries": [
        {
          "id": "E2",
          "title": "Opening Keynote",
          "start": "2023-08-08T11:00",
          "end": "2023-08-08T12:00",
          "category": "Keynote",
          "link": "https://s2023.siggraph.org/full-program",
          "recorded": "Yes",
          "streamed": "Yes",
          "location": "Petree Hall C"
        }
      ]
    }
    "#);
}

#[test]
fn golden_json_sub_event_entry() {
    let events = sample_day();
    let conference = Conference::default();
    let entries = build_entries(&events[..1], &conference, true);
    let formatter = OutputFormatter::new(plain_options());

    let output = formatter.format_json(&entries, &conference, "2023-08-08");

    insta::assert_json_snapshot!(output.entries[1], @r#"
    {
      "id": "E1-b",
      "title": "Neural Things | Second",
      "start": "2023-08-08T09:20",
      "end": "2023-08-08T09:45",
      "category": "Talk",
      "link": "https://example.org/e1/b",
      "recorded": "No",
      "streamed": "Unknown",
      "parent_title": "Neural Things",
      "parent_link": "https://example.org/e1"
    }
    "#);
}
