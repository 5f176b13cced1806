//! Preference commands.
//!
//! Every change is persisted before it is reported.

use std::io::Write;

use saneschedule_core::{CategoryState, KeyValueStore, OutputFormat, Session};
use tracing::info;

use crate::error::{ClientError, ClientResult};

/// Cycles a category through neutral, enabled and disabled.
///
/// Only names listed by the `categories` command are accepted.
pub fn toggle<S, W>(out: &mut W, session: &mut Session<'_, S>, category: &str) -> ClientResult<()>
where
    S: KeyValueStore,
    W: Write,
{
    let known = session
        .categories()
        .into_iter()
        .any(|(name, _)| name == category);
    if !known {
        return Err(ClientError::NotFound(format!("category {:?}", category)));
    }

    session.toggle_category(category)?;
    let state = CategoryState::of(category, session.preferences());
    info!(category, state = %state, "category toggled");
    writeln!(out, "{}: {}", category, state)?;
    Ok(())
}

pub fn clear_enabled<S: KeyValueStore, W: Write>(
    out: &mut W,
    session: &mut Session<'_, S>,
) -> ClientResult<()> {
    session.clear_enabled()?;
    writeln!(out, "Enabled categories cleared.")?;
    Ok(())
}

pub fn clear_disabled<S: KeyValueStore, W: Write>(
    out: &mut W,
    session: &mut Session<'_, S>,
) -> ClientResult<()> {
    session.clear_disabled()?;
    writeln!(out, "Disabled categories cleared.")?;
    Ok(())
}

pub fn restore_defaults<S: KeyValueStore, W: Write>(
    out: &mut W,
    session: &mut Session<'_, S>,
) -> ClientResult<()> {
    session.restore_defaults()?;
    writeln!(out, "Default categories restored.")?;
    Ok(())
}

pub fn hide_recorded<S: KeyValueStore, W: Write>(
    out: &mut W,
    session: &mut Session<'_, S>,
) -> ClientResult<()> {
    session.toggle_hide_recorded()?;
    let on = session.preferences().hide_recorded;
    writeln!(out, "Hide recorded: {}", on_off(on))?;
    Ok(())
}

pub fn break_down<S: KeyValueStore, W: Write>(
    out: &mut W,
    session: &mut Session<'_, S>,
) -> ClientResult<()> {
    session.toggle_break_down()?;
    let on = session.preferences().break_down;
    writeln!(out, "Break down sub-events: {}", on_off(on))?;
    Ok(())
}

/// Prints the current preferences.
pub fn show<S, W>(out: &mut W, session: &Session<'_, S>, format: OutputFormat) -> ClientResult<()>
where
    S: KeyValueStore,
    W: Write,
{
    let prefs = session.preferences();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, prefs)?;
            writeln!(out)?;
        }
        OutputFormat::Tty => {
            writeln!(out, "enabled:  {}", prefs.enabled_categories.join(", "))?;
            writeln!(out, "disabled: {}", prefs.disabled_categories.join(", "))?;
            writeln!(out, "hide recorded: {}", on_off(prefs.hide_recorded))?;
            writeln!(out, "break down: {}", on_off(prefs.break_down))?;
        }
    }
    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
