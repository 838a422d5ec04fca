//! Transmit/receive merge keyed by station name

use freqcoord_domain::{Direction, NoticeRecord, StationRecord};
use indexmap::IndexMap;
use tracing::debug;

/// Fold direction-tagged notices into one station record per station name.
///
/// The first notice seen for a name seeds the record with both frequencies
/// empty; its other fields are kept and those of later notices with the same
/// name are dropped. Every notice, the seed included, then writes its assigned
/// frequency to the transmit or receive slot for its direction (untagged
/// notices count as transmit). Output follows the first-seen order of names.
pub fn merge_directions(notices: Vec<NoticeRecord>) -> Vec<StationRecord> {
    let mut stations: IndexMap<String, StationRecord> = IndexMap::new();

    for notice in notices {
        let direction = notice.effective_direction();
        let frequency = notice.assigned_frequency.clone();
        let station = stations
            .entry(notice.site_name.clone())
            .or_insert_with(|| StationRecord::seed(notice));

        match direction {
            Direction::Transmit => station.tx_frequency = frequency,
            Direction::Receive => station.rx_frequency = frequency,
        }
    }

    debug!("Merged into {} station(s)", stations.len());
    stations.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(site: &str, freq: &str, direction: Option<Direction>) -> NoticeRecord {
        NoticeRecord {
            site_name: site.to_string(),
            assigned_frequency: freq.to_string(),
            direction,
            ..Default::default()
        }
    }

    #[test]
    fn test_pair_merges_into_one_station() {
        let stations = merge_directions(vec![
            notice("Z", "50", Some(Direction::Transmit)),
            notice("W", "70", Some(Direction::Transmit)),
            notice("Z", "60", Some(Direction::Receive)),
        ]);
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].site_name(), "Z");
        assert_eq!(stations[0].tx_frequency, "50");
        assert_eq!(stations[0].rx_frequency, "60");
        assert_eq!(stations[1].site_name(), "W");
        assert_eq!(stations[1].tx_frequency, "70");
        assert_eq!(stations[1].rx_frequency, "");
    }

    #[test]
    fn test_receive_only_station() {
        let stations = merge_directions(vec![notice("R", "80", Some(Direction::Receive))]);
        assert_eq!(stations[0].tx_frequency, "");
        assert_eq!(stations[0].rx_frequency, "80");
    }

    #[test]
    fn test_untagged_counts_as_transmit() {
        let stations = merge_directions(vec![notice("U", "90", None)]);
        assert_eq!(stations[0].tx_frequency, "90");
        assert_eq!(stations[0].rx_frequency, "");
    }

    #[test]
    fn test_first_seen_record_is_authoritative() {
        let mut first = notice("S", "100", Some(Direction::Receive));
        first.longitude = "0691949".to_string();
        let mut second = notice("S", "200", Some(Direction::Transmit));
        second.longitude = "0700000".to_string();

        let stations = merge_directions(vec![first, second]);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].notice.longitude, "0691949");
        assert_eq!(stations[0].notice.direction, Some(Direction::Receive));
        assert_eq!(stations[0].tx_frequency, "200");
        assert_eq!(stations[0].rx_frequency, "100");
    }

    #[test]
    fn test_later_same_direction_overwrites_frequency() {
        let stations = merge_directions(vec![
            notice("S", "100", Some(Direction::Transmit)),
            notice("S", "110", Some(Direction::Transmit)),
        ]);
        assert_eq!(stations[0].tx_frequency, "110");
    }

    #[test]
    fn test_names_match_exactly() {
        let stations = merge_directions(vec![
            notice("Almaty", "1", Some(Direction::Transmit)),
            notice("ALMATY", "2", Some(Direction::Receive)),
            notice("Almaty ", "3", Some(Direction::Receive)),
        ]);
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[0].rx_frequency, "");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        /// Property: one station per distinct name, in first-seen order
        #[test]
        fn test_one_station_per_name(
            entries in prop::collection::vec(("[a-d]", "[0-9]{1,4}", any::<bool>()), 0..20)
        ) {
            let notices: Vec<NoticeRecord> = entries
                .iter()
                .map(|(site, freq, rx)| NoticeRecord {
                    site_name: site.clone(),
                    assigned_frequency: freq.clone(),
                    direction: Some(if *rx { Direction::Receive } else { Direction::Transmit }),
                    ..Default::default()
                })
                .collect();

            let mut seen = HashSet::new();
            let expected: Vec<&str> = entries
                .iter()
                .map(|(site, _, _)| site.as_str())
                .filter(|site| seen.insert(*site))
                .collect();

            let stations = merge_directions(notices);
            let names: Vec<&str> = stations.iter().map(|s| s.site_name()).collect();
            prop_assert_eq!(names, expected);
        }
    }
}
