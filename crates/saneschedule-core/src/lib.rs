//! Core types: catalog, calendar entries, filters, preferences, formatting

pub mod builder;
pub mod catalog;
pub mod categories;
pub mod conference;
pub mod entry;
pub mod event;
pub mod filter;
pub mod format;
pub mod prefs;
pub mod render;
pub mod session;
pub mod tracing;

pub use builder::build_entries;
pub use catalog::{Catalog, CatalogError};
pub use categories::{CategoryState, all_categories};
pub use conference::Conference;
pub use entry::CalendarEntry;
pub use event::{Availability, Event, SubEvent};
pub use filter::EntryFilter;
pub use format::{
    FormatOptions, FormattedEntry, JsonEntry, JsonOutput, OutputFormat, OutputFormatter,
    ellipsis, make_hyperlink,
};
pub use prefs::{KeyValueStore, MemoryStore, PreferenceKeys, PreferenceStore, Preferences, StoreError};
pub use render::{EntryView, ParentCaption, StatusGlyph};
pub use session::{Session, SessionError};
pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
