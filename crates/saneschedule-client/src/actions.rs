//! Entry actions: open detail pages in the browser.

use saneschedule_core::{CalendarEntry, Conference, EntryView};
use tracing::info;

use crate::error::{ClientError, ClientResult};

/// The link the entry title points to.
pub fn entry_link(entry: &CalendarEntry<'_>, conference: &Conference) -> ClientResult<String> {
    let view = EntryView::from_entry(entry, conference);
    if view.link.is_empty() {
        return Err(ClientError::Action(format!(
            "entry {} has no detail link",
            entry.id
        )));
    }
    Ok(view.link)
}

/// Opens the entry's detail page in the default browser.
pub fn open_entry(entry: &CalendarEntry<'_>, conference: &Conference) -> ClientResult<()> {
    let url = entry_link(entry, conference)?;

    info!(url = %url, id = %entry.id, "opening entry link");
    open::that(&url).map_err(|e| ClientError::Action(format!("failed to open URL: {}", e)))?;

    println!("{}", url);
    Ok(())
}
