//! Subcommand implementations.
//!
//! Commands write to any [`std::io::Write`] so they can be driven from tests.

pub mod config;
pub mod prefs;
pub mod schedule;
