//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use saneschedule_core::OutputFormat;

/// saneschedule - A saner way to browse the conference program
#[derive(Debug, Parser)]
#[command(name = "saneschedule")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "SANESCHEDULE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the exported events.json
    #[arg(long, env = "SANESCHEDULE_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Path to the preference file
    #[arg(long, env = "SANESCHEDULE_PREFS")]
    pub prefs: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    // --- Output flags ---
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Do not emit terminal hyperlinks
    #[arg(long)]
    pub no_hyperlinks: bool,

    /// Maximum title length (truncated with ellipsis)
    #[arg(long)]
    pub max_title_length: Option<usize>,

    /// Append the room to each line
    #[arg(long)]
    pub show_location: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Tty
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the schedule for one day (default)
    Show {
        /// Day to show (MM-DD), defaults to the first conference day
        #[arg(long, short)]
        date: Option<String>,
    },

    /// List conference days
    Dates,

    /// List categories and whether they are enabled or disabled
    Categories,

    /// Cycle a category: neutral -> enabled -> disabled -> neutral
    Toggle {
        /// Category name, as listed by `categories`
        category: String,
    },

    /// Clear the enabled categories (show everything not disabled)
    ClearEnabled,

    /// Clear the disabled categories
    ClearDisabled,

    /// Restore the default category selection
    RestoreDefaults,

    /// Toggle hiding of recorded sessions
    HideRecorded,

    /// Toggle showing sub-events as separate entries
    BreakDown,

    /// Show the current preferences
    Prefs,

    /// Open an entry's detail page in the browser
    Open {
        /// Entry id as shown by `show --json`
        entry_id: String,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
