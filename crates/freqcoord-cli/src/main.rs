//! freqcoord - build coordination workbooks from frequency notice files.

use anyhow::Context;
use clap::Parser;
use freqcoord_cli::commands;
use freqcoord_cli::config::OutputFormat;
use freqcoord_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let errors = Formatter::new(OutputFormat::Table, !cli.no_color);
    if let Err(e) = run(cli) {
        eprintln!("{}", errors.error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

/// Log to stderr; RUST_LOG wins over -v.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
        command => {
            if let Some((variant, args)) = command.run() {
                commands::execute_run(variant, args, &config, &formatter)?;
            }
        }
    }

    Ok(())
}
