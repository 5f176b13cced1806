//! Schedule browsing commands: show a day, list days and categories, open entries.

use std::io::Write;

use saneschedule_core::{KeyValueStore, OutputFormat, OutputFormatter, Session};
use serde::Serialize;
use tracing::debug;

use crate::actions;
use crate::error::{ClientError, ClientResult};

/// Prints the visible entries of a day.
///
/// `date` moves the session cursor first; without it the current day is used.
pub fn show<S, W>(
    out: &mut W,
    session: &mut Session<'_, S>,
    formatter: &OutputFormatter,
    format: OutputFormat,
    date: Option<&str>,
) -> ClientResult<()>
where
    S: KeyValueStore,
    W: Write,
{
    if let Some(day) = date {
        session.select_date(day)?;
    }

    let (Some(day), Some(full_date)) = (
        session.current_day().map(str::to_string),
        session.current_date(),
    ) else {
        writeln!(out, "No events in the catalog.")?;
        return Ok(());
    };
    let entries = session.entries_on(&day);
    debug!(day = %day, count = entries.len(), "showing day");

    match format {
        OutputFormat::Json => {
            let output = formatter.format_json(&entries, session.conference(), &full_date);
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::Tty => {
            let lines = formatter.format_day(&entries, session.conference());
            writeln!(out, "{} {}", session.conference().name, full_date)?;
            if lines.is_empty() {
                writeln!(out, "No entries match the current filters.")?;
            }
            for line in lines {
                writeln!(out, "{}", line.text)?;
            }
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct JsonDay<'a> {
    day: &'a str,
    date: String,
    current: bool,
}

/// Lists the conference days, marking the current one.
pub fn dates<S, W>(out: &mut W, session: &Session<'_, S>, format: OutputFormat) -> ClientResult<()>
where
    S: KeyValueStore,
    W: Write,
{
    let current = session.current_day();
    let days: Vec<JsonDay<'_>> = session
        .dates()
        .iter()
        .map(|day| JsonDay {
            day,
            date: session.conference().full_date(day),
            current: Some(day.as_str()) == current,
        })
        .collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &days)?;
            writeln!(out)?;
        }
        OutputFormat::Tty => {
            for day in days {
                let marker = if day.current { '*' } else { ' ' };
                writeln!(out, "{} {}", marker, day.day)?;
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonCategory {
    name: String,
    state: saneschedule_core::CategoryState,
}

/// Lists the selectable categories with their state.
pub fn categories<S, W>(
    out: &mut W,
    session: &Session<'_, S>,
    format: OutputFormat,
) -> ClientResult<()>
where
    S: KeyValueStore,
    W: Write,
{
    let categories = session.categories();

    match format {
        OutputFormat::Json => {
            let items: Vec<_> = categories
                .into_iter()
                .map(|(name, state)| JsonCategory { name, state })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &items)?;
            writeln!(out)?;
        }
        OutputFormat::Tty => {
            for (name, state) in categories {
                writeln!(out, "{:<8}  {}", state.as_str(), name)?;
            }
        }
    }
    Ok(())
}

/// Opens the detail page of an entry in the current break-down mode.
pub fn open<S: KeyValueStore>(session: &Session<'_, S>, entry_id: &str) -> ClientResult<()> {
    let entry = session
        .find_entry(entry_id)
        .ok_or_else(|| ClientError::NotFound(format!("entry {}", entry_id)))?;
    actions::open_entry(&entry, session.conference())
}
