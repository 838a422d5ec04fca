//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::summary::RunSummary;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a run summary.
    pub fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Table => Ok(self.format_summary_table(summary)),
            OutputFormat::Quiet => Ok(summary
                .output_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        let mut lines = Vec::new();

        lines.push(self.info(&format!(
            "{}: {} file(s) found, {} processed, {} skipped",
            summary.variant,
            summary.files_found,
            summary.files_processed,
            summary.skipped.len()
        )));

        let mut sheets = Builder::default();
        sheets.push_record(["Sheet", "Stations"]);
        for sheet in &summary.sheets {
            sheets.push_record([sheet.sheet.clone(), sheet.stations.to_string()]);
        }
        sheets.push_record(["Total".to_string(), summary.total_stations().to_string()]);
        let mut table = sheets.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        lines.push(table.to_string());

        if !summary.skipped.is_empty() {
            let mut skipped = Builder::default();
            skipped.push_record(["Skipped", "Reason"]);
            for entry in &summary.skipped {
                skipped.push_record([entry.file.as_str(), entry.reason.as_str()]);
            }
            let mut table = skipped.build();
            table.with(Style::rounded());
            lines.push(self.warning(&format!("{} file(s) skipped", summary.skipped.len())));
            lines.push(table.to_string());
        }

        if let Some(path) = &summary.output_path {
            lines.push(self.success(&format!("Workbook saved: {}", path.display())));
        }

        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
