//! freqcoord Domain Layer
//!
//! This crate holds the record types shared by every stage of the notice
//! pipeline. It has ZERO external dependencies and carries no parsing or I/O
//! logic; the extractor, linker and report crates all depend on it.
//!
//! ## Key Concepts
//!
//! - **Notice**: one frequency assignment extracted from a `<NOTICE>` block
//! - **Header**: document-level fields copied onto every notice
//! - **Direction**: which leg (transmit/receive) a notice file describes
//! - **Station record**: a notice after linking, with both frequencies resolved
//! - **Report group**: the sheet a station record lands on
//! - **Variant**: one of the four report flavours and its pipeline rules
//!
//! ## Pipeline
//!
//! ```text
//! document → header + notices → station records → report groups → workbook
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod group;
pub mod notice;
pub mod station;
pub mod variant;

// Re-exports for convenience
pub use group::ReportGroup;
pub use notice::{AntennaSummary, Direction, HeaderFields, NoticeRecord};
pub use station::StationRecord;
pub use variant::{BucketRule, LinkMode, Variant};
