//! Same-document peer resolution

use freqcoord_domain::{NoticeRecord, StationRecord};
use std::collections::HashMap;
use tracing::debug;

/// Resolve receive frequencies within one document.
///
/// The transmit frequency of each record is its own assigned frequency. The
/// receive frequency is the assigned frequency of the notice named by the
/// cross-reference, or empty when there is no cross-reference or no notice
/// with exactly that name. When several notices share a name the last one is
/// the peer. One station record is produced per notice, in input order.
pub fn resolve_peers(notices: Vec<NoticeRecord>) -> Vec<StationRecord> {
    let index: HashMap<String, String> = notices
        .iter()
        .map(|n| (n.site_name.clone(), n.assigned_frequency.clone()))
        .collect();

    notices
        .into_iter()
        .map(|notice| {
            let rx_frequency = notice
                .rx_site_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .and_then(|name| index.get(name))
                .cloned()
                .unwrap_or_default();

            if rx_frequency.is_empty() {
                if let Some(peer) = notice.rx_site_name.as_deref() {
                    debug!("No peer '{}' for station '{}'", peer, notice.site_name);
                }
            }

            StationRecord {
                tx_frequency: notice.assigned_frequency.clone(),
                rx_frequency,
                notice,
            }
        })
        .collect()
}
