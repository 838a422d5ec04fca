//! Per-run summary

use freqcoord_domain::Variant;
use freqcoord_linker::ReportBuckets;
use serde::Serialize;
use std::path::PathBuf;

/// A file (or pair) left out of the workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// File name or pair key
    pub file: String,
    /// Why it was skipped
    pub reason: String,
}

/// Station count of one sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetCount {
    /// Worksheet name
    pub sheet: String,
    /// Group identifier
    pub group: String,
    /// Station rows on the sheet
    pub stations: usize,
}

/// What one run read, skipped and wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Variant name
    pub variant: String,
    /// Input directory
    pub input_dir: PathBuf,
    /// Written workbook; unset until the workbook is saved
    pub output_path: Option<PathBuf>,
    /// Files matching the input extension
    pub files_found: usize,
    /// Files read and accepted
    pub files_processed: usize,
    /// Files or pairs left out
    pub skipped: Vec<SkippedFile>,
    /// Rows per sheet in sheet order
    pub sheets: Vec<SheetCount>,
}

impl RunSummary {
    /// Empty summary for a run over `input_dir`
    pub fn new(variant: Variant, input_dir: PathBuf, files_found: usize) -> Self {
        Self {
            variant: variant.as_str().to_string(),
            input_dir,
            output_path: None,
            files_found,
            files_processed: 0,
            skipped: Vec::new(),
            sheets: Vec::new(),
        }
    }

    /// Record a skipped file
    pub fn skip(&mut self, file: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            file: file.into(),
            reason: reason.into(),
        });
    }

    /// Record sheet counts from the final buckets
    pub fn record_sheets(&mut self, buckets: &ReportBuckets) {
        self.sheets = buckets
            .iter()
            .map(|(group, records)| SheetCount {
                sheet: group.sheet_name().to_string(),
                group: group.as_str().to_string(),
                stations: records.len(),
            })
            .collect();
    }

    /// Stations across all sheets
    pub fn total_stations(&self) -> usize {
        self.sheets.iter().map(|s| s.stations).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freqcoord_domain::{NoticeRecord, ReportGroup, StationRecord};

    #[test]
    fn test_sheet_counts_follow_bucket_order() {
        let mut buckets = ReportBuckets::for_variant(Variant::SpsIncoming);
        buckets.push(ReportGroup::Kazakhstan, StationRecord::seed(NoticeRecord::default()));

        let mut summary = RunSummary::new(Variant::SpsIncoming, PathBuf::from("/in"), 2);
        summary.record_sheets(&buckets);
        summary.skip("b_T13.txt", "unreadable");

        let sheets: Vec<&str> = summary.sheets.iter().map(|s| s.sheet.as_str()).collect();
        assert_eq!(sheets, vec!["КГЗ", "ТЖК", "КАЗ", "ТКМ"]);
        assert_eq!(summary.total_stations(), 1);
        assert_eq!(summary.skipped[0].file, "b_T13.txt");
    }
}
