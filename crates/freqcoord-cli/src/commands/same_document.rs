//! Same-document pipeline: one file at a time, peers resolved within the file.

use crate::summary::RunSummary;
use freqcoord_domain::Variant;
use freqcoord_extractor::{read_document, DocumentOutcome, DocumentParser};
use freqcoord_linker::{assign_group, resolve_peers, ReportBuckets};
use std::path::Path;
use tracing::{debug, warn};

/// Parse every file, resolve peers per document and bucket the stations.
pub fn collect(
    dir: &Path,
    files: &[String],
    variant: Variant,
    parser: &DocumentParser,
    summary: &mut RunSummary,
) -> ReportBuckets {
    let mut buckets = ReportBuckets::for_variant(variant);

    for name in files {
        let text = match read_document(&dir.join(name)) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: {}", name, e);
                summary.skip(name.as_str(), e.to_string());
                continue;
            }
        };

        let doc = match parser.parse_document(&text, None) {
            DocumentOutcome::Parsed(doc) => doc,
            DocumentOutcome::Rejected { administration } => {
                let filter = parser.config().administration_filter.as_deref().unwrap_or_default();
                warn!("Skipping {}: administration '{}' does not match", name, administration);
                summary.skip(
                    name.as_str(),
                    format!("administration '{}' does not match '{}'", administration, filter),
                );
                continue;
            }
        };

        summary.files_processed += 1;
        let assignment = assign_group(variant.bucket_rule(), &doc.header.administration, name);
        let stations = resolve_peers(doc.notices);
        debug!(
            "{}: {} station(s) -> '{}'",
            name,
            stations.len(),
            assignment.group().sheet_name()
        );
        buckets.extend(assignment.group(), stations);
    }

    buckets
}
