//! Station module - notices after linking

use crate::notice::NoticeRecord;

/// A notice with its transmit and receive frequencies resolved.
///
/// Produced either by same-document peer resolution (one record per notice)
/// or by the transmit/receive merge (one record per distinct station name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRecord {
    /// The notice that seeded this record
    pub notice: NoticeRecord,

    /// Transmit frequency
    pub tx_frequency: String,

    /// Receive frequency
    pub rx_frequency: String,
}

impl StationRecord {
    /// Seed a record from a notice with both frequencies empty
    pub fn seed(notice: NoticeRecord) -> Self {
        Self {
            notice,
            tx_frequency: String::new(),
            rx_frequency: String::new(),
        }
    }

    /// Station name (the linking key)
    pub fn site_name(&self) -> &str {
        &self.notice.site_name
    }
}
