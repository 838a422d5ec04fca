//! Report command implementation.

use crate::cli::RunArgs;
use crate::commands::{paired, same_document};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::prompt::prompt_directory;
use crate::scan::list_input_files;
use crate::summary::RunSummary;
use chrono::NaiveDateTime;
use freqcoord_domain::{LinkMode, Variant};
use freqcoord_extractor::{DocumentParser, ExtractorConfig};
use freqcoord_report::{output_path, write_workbook};
use std::path::PathBuf;
use tracing::info;

/// Resolved inputs of one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory with notice files
    pub input_dir: PathBuf,
    /// Directory for the workbook; the input directory when unset
    pub output_dir: Option<PathBuf>,
    /// Extension of notice files, without the dot
    pub extension: String,
    /// Extraction settings
    pub extraction: ExtractorConfig,
    /// Run start, used in the workbook name
    pub started_at: NaiveDateTime,
}

impl RunOptions {
    /// Options with the variant's extraction preset and default placement.
    pub fn new(variant: Variant, input_dir: PathBuf, started_at: NaiveDateTime) -> Self {
        Self {
            input_dir,
            output_dir: None,
            extension: "txt".to_string(),
            extraction: ExtractorConfig::for_variant(variant),
            started_at,
        }
    }
}

/// Run a report pipeline end to end and write the workbook.
pub fn run_pipeline(variant: Variant, options: &RunOptions) -> Result<RunSummary> {
    let files = list_input_files(&options.input_dir, &options.extension)?;
    info!(
        "{}: {} file(s) in {}",
        variant,
        files.len(),
        options.input_dir.display()
    );

    let mut summary = RunSummary::new(variant, options.input_dir.clone(), files.len());
    let parser = DocumentParser::new(options.extraction.clone());

    let buckets = match variant.link_mode() {
        LinkMode::SameDocument => {
            same_document::collect(&options.input_dir, &files, variant, &parser, &mut summary)
        }
        LinkMode::TransmitReceive => {
            paired::collect(&options.input_dir, &files, variant, &parser, &mut summary)
        }
    };

    if summary.files_processed == 0 {
        let reason = match &options.extraction.administration_filter {
            Some(filter) => format!("no file with administration '{}'", filter),
            None => "no readable notice file".to_string(),
        };
        return Err(CliError::NoInput(reason));
    }

    summary.record_sheets(&buckets);

    let dir = options.output_dir.as_ref().unwrap_or(&options.input_dir);
    let path = output_path(dir, variant, options.started_at);
    write_workbook(&path, variant, &buckets)?;
    info!("{} station(s) written to {}", buckets.total(), path.display());

    summary.output_path = Some(path);
    Ok(summary)
}

/// Execute a report command.
pub fn execute_run(
    variant: Variant,
    args: &RunArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let input_dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => prompt_directory(formatter, variant.title())?,
    };

    let extraction = match &args.extraction_config {
        Some(path) => ExtractorConfig::load(path)?,
        None => ExtractorConfig::for_variant(variant),
    };

    let options = RunOptions {
        input_dir,
        output_dir: args.output_dir.clone().or_else(|| config.output.directory.clone()),
        extension: config.extension().to_string(),
        extraction,
        started_at: chrono::Local::now().naive_local(),
    };

    let summary = run_pipeline(variant, &options)?;
    println!("{}", formatter.format_summary(&summary)?);
    Ok(())
}
