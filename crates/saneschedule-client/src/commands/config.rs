//! Configuration commands.

use std::io::Write;
use std::path::Path;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Dump the effective configuration as TOML.
pub fn dump<W: Write>(out: &mut W, config: &ClientConfig, source: &Path) -> ClientResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))?;
    writeln!(out, "# config.toml ({})", source.display())?;
    writeln!(out, "{}", toml_str)?;
    Ok(())
}

/// Validate the configuration and the catalog location.
pub fn validate<W: Write>(out: &mut W, config: &ClientConfig) -> ClientResult<()> {
    config.validate()?;

    let catalog = config.catalog_path();
    if !catalog.exists() {
        writeln!(out, "warning: catalog {} does not exist", catalog.display())?;
    }

    writeln!(out, "Configuration is valid.")?;
    Ok(())
}

/// Show the configuration, catalog and preference file paths.
pub fn path<W: Write>(out: &mut W, config: &ClientConfig, source: &Path) -> ClientResult<()> {
    writeln!(out, "config: {}", source.display())?;
    writeln!(out, "catalog: {}", config.catalog_path().display())?;
    writeln!(out, "prefs: {}", config.prefs_path().display())?;
    Ok(())
}
