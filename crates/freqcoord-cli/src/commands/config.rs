//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use freqcoord_domain::Variant;
use freqcoord_extractor::ExtractorConfig;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, path),
        ConfigAction::Init { force } => init_config(path, force, formatter),
        ConfigAction::Preset { variant } => show_preset(variant.into()),
    }
}

/// Print the effective configuration.
fn show_config(config: &Config, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save(path)?;
    println!("{}", formatter.success(&format!("Configuration written to {}", path.display())));
    Ok(())
}

/// Print an extraction preset.
fn show_preset(variant: Variant) -> Result<()> {
    let toml = ExtractorConfig::for_variant(variant)
        .to_toml()
        .map_err(CliError::Config)?;
    println!("# extraction preset for {}", variant);
    print!("{}", toml);
    Ok(())
}
