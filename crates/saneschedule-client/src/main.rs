//! saneschedule CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use saneschedule_client::cli::{Cli, Command, ConfigAction};
use saneschedule_client::commands;
use saneschedule_client::config::ClientConfig;
use saneschedule_client::error::ClientResult;
use saneschedule_client::store::FileStore;
use saneschedule_core::{Catalog, OutputFormatter, Session, TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ClientResult<()> {
    let config_path = cli.config.clone().unwrap_or_else(ClientConfig::default_path);
    let mut config = if cli.config.is_some() {
        ClientConfig::load_from(&config_path)?
    } else {
        ClientConfig::load()?
    };
    apply_overrides(&mut config, &cli);

    let tracing_config = if config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: {}", e);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Configuration commands do not need the catalog.
    if let Some(Command::Config { action }) = &cli.command {
        return match action {
            ConfigAction::Dump => commands::config::dump(&mut out, &config, &config_path),
            ConfigAction::Validate => commands::config::validate(&mut out, &config),
            ConfigAction::Path => commands::config::path(&mut out, &config, &config_path),
        };
    }

    config.validate()?;
    let catalog = Catalog::load(&config.catalog_path())?;
    let store = FileStore::open(config.prefs_path());
    debug!(
        events = catalog.len(),
        prefs = %store.path().display(),
        "catalog loaded"
    );

    let mut session = Session::new(&catalog, &config.conference, store);
    let formatter = OutputFormatter::new(config.format_options());
    let format = cli.output_format();

    match cli.command {
        None => commands::schedule::show(&mut out, &mut session, &formatter, format, None),
        Some(Command::Show { date }) => commands::schedule::show(
            &mut out,
            &mut session,
            &formatter,
            format,
            date.as_deref(),
        ),
        Some(Command::Dates) => commands::schedule::dates(&mut out, &session, format),
        Some(Command::Categories) => commands::schedule::categories(&mut out, &session, format),
        Some(Command::Toggle { category }) => {
            commands::prefs::toggle(&mut out, &mut session, &category)
        }
        Some(Command::ClearEnabled) => commands::prefs::clear_enabled(&mut out, &mut session),
        Some(Command::ClearDisabled) => commands::prefs::clear_disabled(&mut out, &mut session),
        Some(Command::RestoreDefaults) => {
            commands::prefs::restore_defaults(&mut out, &mut session)
        }
        Some(Command::HideRecorded) => commands::prefs::hide_recorded(&mut out, &mut session),
        Some(Command::BreakDown) => commands::prefs::break_down(&mut out, &mut session),
        Some(Command::Prefs) => commands::prefs::show(&mut out, &session, format),
        Some(Command::Open { entry_id }) => commands::schedule::open(&session, &entry_id),
        Some(Command::Config { .. }) => Ok(()),
    }?;

    out.flush()?;
    Ok(())
}

/// Command-line flags win over the configuration file.
fn apply_overrides(config: &mut ClientConfig, cli: &Cli) {
    if cli.debug {
        config.debug = true;
    }
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
    }
    if let Some(path) = &cli.prefs {
        config.storage.prefs_path = Some(path.clone());
    }
    if cli.no_hyperlinks {
        config.display.hyperlinks = false;
    }
    if let Some(max) = cli.max_title_length {
        config.display.max_title_length = Some(max);
    }
    if cli.show_location {
        config.display.show_location = true;
    }
}
