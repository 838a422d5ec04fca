//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use freqcoord_domain::Variant;
use std::path::PathBuf;

/// freqcoord - Build coordination workbooks from frequency notice files.
#[derive(Debug, Parser)]
#[command(name = "freqcoord")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FREQCOORD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (workbook path only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Incoming radio-relay notices, one sheet per administration
    RrlIncoming(RunArgs),

    /// Outgoing radio-relay notices of UZB, single sheet
    RrlOutgoing(RunArgs),

    /// Incoming T12/T13 notice pairs, one sheet per administration
    SpsIncoming(RunArgs),

    /// Outgoing T12/T13 notice pairs, sheet chosen by file name
    SpsOutgoing(RunArgs),

    /// Show or initialize the configuration
    Config(ConfigArgs),
}

impl Command {
    /// Report variant and arguments of a run command
    pub fn run(&self) -> Option<(Variant, &RunArgs)> {
        match self {
            Command::RrlIncoming(args) => Some((Variant::RrlIncoming, args)),
            Command::RrlOutgoing(args) => Some((Variant::RrlOutgoing, args)),
            Command::SpsIncoming(args) => Some((Variant::SpsIncoming, args)),
            Command::SpsOutgoing(args) => Some((Variant::SpsOutgoing, args)),
            Command::Config(_) => None,
        }
    }
}

/// Arguments shared by the report commands.
#[derive(Debug, Clone, Parser)]
pub struct RunArgs {
    /// Directory with notice files (prompted for when omitted)
    pub dir: Option<PathBuf>,

    /// Directory for the workbook (defaults to the input directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// TOML file replacing the variant's extraction preset
    #[arg(long)]
    pub extraction_config: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the extraction preset of a variant as TOML
    Preset {
        /// Report variant
        #[arg(value_enum)]
        variant: VariantArg,
    },
}

/// Variant argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum VariantArg {
    /// Incoming radio-relay
    RrlIncoming,
    /// Outgoing radio-relay
    RrlOutgoing,
    /// Incoming T12/T13 pairs
    SpsIncoming,
    /// Outgoing T12/T13 pairs
    SpsOutgoing,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<VariantArg> for Variant {
    fn from(variant: VariantArg) -> Self {
        match variant {
            VariantArg::RrlIncoming => Variant::RrlIncoming,
            VariantArg::RrlOutgoing => Variant::RrlOutgoing,
            VariantArg::SpsIncoming => Variant::SpsIncoming,
            VariantArg::SpsOutgoing => Variant::SpsOutgoing,
        }
    }
}
