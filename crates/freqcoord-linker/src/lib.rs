//! freqcoord Linker
//!
//! Turns notice records into station records and assigns them to report
//! groups.
//!
//! The linker provides:
//! - Same-document peer resolution (receive frequency from the notice named by
//!   the `<RX_STATION>` cross-reference)
//! - Transmit/receive merge across a pair of files, keyed by station name
//! - File pairing by the `T12`/`T13` direction marker
//! - Bucketing by administration code or filename into [`ReportBuckets`]
//!
//! Every function takes its input by value and returns owned results; nothing
//! is accumulated outside the structures a caller holds.
//!
//! # Examples
//!
//! ```
//! use freqcoord_domain::{Direction, NoticeRecord};
//! use freqcoord_linker::merge_directions;
//!
//! let tx = NoticeRecord {
//!     site_name: "Z".into(),
//!     assigned_frequency: "50".into(),
//!     direction: Some(Direction::Transmit),
//!     ..Default::default()
//! };
//! let rx = NoticeRecord {
//!     direction: Some(Direction::Receive),
//!     assigned_frequency: "60".into(),
//!     ..tx.clone()
//! };
//!
//! let stations = merge_directions(vec![tx, rx]);
//! assert_eq!(stations.len(), 1);
//! assert_eq!(stations[0].tx_frequency, "50");
//! assert_eq!(stations[0].rx_frequency, "60");
//! ```

#![warn(missing_docs)]

mod bucket;
mod merge;
mod pairing;
mod peers;

pub use bucket::{
    assign_group, bucket_by_code, bucket_by_filename, Assignment, BucketTable, ReportBuckets,
};
pub use merge::merge_directions;
pub use pairing::{pair_files, FilePair, PAIR_PLACEHOLDER, RECEIVE_MARKER, TRANSMIT_MARKER};
pub use peers::resolve_peers;
