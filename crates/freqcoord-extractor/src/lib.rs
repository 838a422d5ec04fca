//! freqcoord Extractor
//!
//! Turns the text of one coordination notice file into typed notice records.
//!
//! # Overview
//!
//! Notice files are line-oriented `key = value` documents with nested tagged
//! sections:
//!
//! ```text
//! <HEAD>
//! t_adm = UZB
//! t_d_sent = 2025-01-10
//! </HEAD>
//! <NOTICE>
//! t_site_name = Tashkent
//! t_freq_assgn = 150
//!   <ANTENNA>
//!   t_gain_max = 38
//!   </ANTENNA>
//! </NOTICE>
//! ```
//!
//! # Architecture
//!
//! ```text
//! Text → Scanner → Document (block tree) → DocumentParser → HeaderFields + NoticeRecords
//! ```
//!
//! The scanner knows nothing about notices; the parser reads the header, walks
//! every `<NOTICE>` block and applies the normalizer and antenna rule selected
//! by the [`ExtractorConfig`]. Missing or malformed fields never fail a parse,
//! they become empty strings.
//!
//! # Example Usage
//!
//! ```
//! use freqcoord_domain::Variant;
//! use freqcoord_extractor::{DocumentOutcome, DocumentParser};
//!
//! let parser = DocumentParser::for_variant(Variant::RrlOutgoing);
//! let text = "<HEAD>\nt_adm = UZB\n</HEAD>\n<NOTICE>\nt_site_name = A\n</NOTICE>\n";
//!
//! match parser.parse_document(text, None) {
//!     DocumentOutcome::Parsed(doc) => assert_eq!(doc.notices.len(), 1),
//!     DocumentOutcome::Rejected { .. } => unreachable!(),
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod normalize;
mod parser;
mod scanner;
mod types;


pub use config::{AntennaRule, CoordinateStyle, ExtractorConfig, NoticeField};
pub use error::ExtractorError;
pub use normalize::{aggregate_antenna_field, normalize_coordinate, normalize_date};
pub use parser::{parse_header, read_document, DocumentParser};
pub use scanner::{extract_blocks, extract_scalar, Block, Document, Field, Node};
pub use types::{DocumentOutcome, ParsedDocument};
