//! Transmit/receive pipeline: files paired by direction marker, merged by name.

use crate::summary::RunSummary;
use freqcoord_domain::{Direction, HeaderFields, Variant};
use freqcoord_extractor::{read_document, DocumentOutcome, DocumentParser};
use freqcoord_linker::{assign_group, merge_directions, pair_files, ReportBuckets};
use std::path::Path;
use tracing::{debug, warn};

/// Pair files, merge each pair's notices and bucket the stations.
pub fn collect(
    dir: &Path,
    files: &[String],
    variant: Variant,
    parser: &DocumentParser,
    summary: &mut RunSummary,
) -> ReportBuckets {
    let mut buckets = ReportBuckets::for_variant(variant);

    for pair in pair_files(files.iter().cloned()) {
        let mut notices = Vec::new();
        let mut tx_header: Option<HeaderFields> = None;
        let mut rx_header: Option<HeaderFields> = None;

        for (direction, name) in pair.files() {
            let text = match read_document(&dir.join(name)) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Skipping {}: {}", name, e);
                    summary.skip(name, e.to_string());
                    continue;
                }
            };

            match parser.parse_document(&text, Some(direction)) {
                DocumentOutcome::Parsed(doc) => {
                    summary.files_processed += 1;
                    debug!("{} ({}): {} notice(s)", name, direction, doc.notices.len());
                    notices.extend(doc.notices);
                    match direction {
                        Direction::Transmit => tx_header = Some(doc.header),
                        Direction::Receive => rx_header = Some(doc.header),
                    }
                }
                DocumentOutcome::Rejected { administration } => {
                    warn!("Skipping {}: administration '{}' does not match", name, administration);
                    summary.skip(name, format!("administration '{}' does not match", administration));
                }
            }
        }

        if notices.is_empty() {
            debug!("Pair {} produced no notices", pair.key);
            summary.skip(pair.key.as_str(), "no notices");
            continue;
        }

        // Transmit header wins unless its code is empty
        let administration = [tx_header, rx_header]
            .into_iter()
            .flatten()
            .map(|h| h.administration)
            .find(|code| !code.is_empty())
            .unwrap_or_default();
        let filename = pair.signal_name().unwrap_or_default();
        let assignment = assign_group(variant.bucket_rule(), &administration, filename);

        let stations = merge_directions(notices);
        debug!(
            "Pair {}: {} station(s) -> '{}'{}",
            pair.key,
            stations.len(),
            assignment.group().sheet_name(),
            if assignment.is_default() { " (default)" } else { "" }
        );
        buckets.extend(assignment.group(), stations);
    }

    buckets
}
