//! Parse results

use freqcoord_domain::{HeaderFields, NoticeRecord};

/// Header and notices of one accepted document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Header fields (also copied onto every notice)
    pub header: HeaderFields,

    /// Notices in document order; may be empty
    pub notices: Vec<NoticeRecord>,
}

/// Result of parsing one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// The document passed the administration filter (or there is none)
    Parsed(ParsedDocument),

    /// The administration code did not match the configured filter;
    /// notices were not read
    Rejected {
        /// Administration code found in the header (may be empty)
        administration: String,
    },
}

impl DocumentOutcome {
    /// The parsed document, if accepted
    pub fn parsed(self) -> Option<ParsedDocument> {
        match self {
            DocumentOutcome::Parsed(doc) => Some(doc),
            DocumentOutcome::Rejected { .. } => None,
        }
    }

    /// Whether the document was rejected by the filter
    pub fn is_rejected(&self) -> bool {
        matches!(self, DocumentOutcome::Rejected { .. })
    }
}
