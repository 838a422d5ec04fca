//! Transmit/receive file pairing

use freqcoord_domain::Direction;
use indexmap::IndexMap;
use tracing::warn;

/// Marker of a transmit-leg file name
pub const TRANSMIT_MARKER: &str = "T12";

/// Marker of a receive-leg file name
pub const RECEIVE_MARKER: &str = "T13";

/// Replaces the direction marker in a pair key
pub const PAIR_PLACEHOLDER: &str = "T1X";

/// At most one transmit and one receive file sharing a base name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilePair {
    /// Uppercased file name with the direction marker replaced
    pub key: String,

    /// Transmit file name
    pub tx: Option<String>,

    /// Receive file name
    pub rx: Option<String>,
}

impl FilePair {
    /// Files of the pair, transmit first
    pub fn files(&self) -> impl Iterator<Item = (Direction, &str)> {
        let tx = self.tx.as_deref().map(|name| (Direction::Transmit, name));
        let rx = self.rx.as_deref().map(|name| (Direction::Receive, name));
        tx.into_iter().chain(rx)
    }

    /// File name used for filename bucketing; transmit preferred
    pub fn signal_name(&self) -> Option<&str> {
        self.tx.as_deref().or(self.rx.as_deref())
    }

    fn slot(&mut self, direction: Direction) -> &mut Option<String> {
        match direction {
            Direction::Transmit => &mut self.tx,
            Direction::Receive => &mut self.rx,
        }
    }
}

/// Direction and pair key of one file name
fn classify(name: &str) -> (Direction, String) {
    let upper = name.to_uppercase();
    if upper.contains(TRANSMIT_MARKER) {
        (Direction::Transmit, upper.replace(TRANSMIT_MARKER, PAIR_PLACEHOLDER))
    } else if upper.contains(RECEIVE_MARKER) {
        (Direction::Receive, upper.replace(RECEIVE_MARKER, PAIR_PLACEHOLDER))
    } else {
        (Direction::Transmit, upper)
    }
}

/// Group file names into transmit/receive pairs.
///
/// Names are matched case-insensitively. A name with neither marker is a
/// transmit file keyed by its own uppercased name. When two files land in the
/// same slot the later one replaces the earlier. Pairs come out in the order
/// their key was first seen.
pub fn pair_files<I, S>(names: I) -> Vec<FilePair>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut pairs: IndexMap<String, FilePair> = IndexMap::new();

    for name in names {
        let name = name.into();
        let (direction, key) = classify(&name);
        let pair = pairs.entry(key.clone()).or_insert_with(|| FilePair {
            key,
            ..Default::default()
        });

        if let Some(previous) = pair.slot(direction).replace(name.clone()) {
            warn!(
                "File '{}' replaces '{}' as {} file of pair '{}'",
                name, previous, direction, pair.key
            );
        }
    }

    pairs.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_pair_up() {
        let pairs = pair_files(["kaz_T12_01.txt", "kaz_T13_01.txt"]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].key, "KAZ_T1X_01.TXT");
        assert_eq!(pairs[0].tx.as_deref(), Some("kaz_T12_01.txt"));
        assert_eq!(pairs[0].rx.as_deref(), Some("kaz_T13_01.txt"));
    }

    #[test]
    fn test_receive_only_pair() {
        let pairs = pair_files(["KGZ_T13.txt"]);
        assert_eq!(pairs[0].tx, None);
        assert_eq!(pairs[0].rx.as_deref(), Some("KGZ_T13.txt"));
        assert_eq!(pairs[0].signal_name(), Some("KGZ_T13.txt"));
    }

    #[test]
    fn test_unmarked_file_is_transmit() {
        let pairs = pair_files(["notice.txt"]);
        assert_eq!(pairs[0].key, "NOTICE.TXT");
        assert_eq!(pairs[0].tx.as_deref(), Some("notice.txt"));
        assert_eq!(pairs[0].rx, None);
    }

    #[test]
    fn test_later_file_replaces_slot() {
        let pairs = pair_files(["a_t12.txt", "A_T12.txt"]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].tx.as_deref(), Some("A_T12.txt"));
    }

    #[test]
    fn test_first_seen_order() {
        let pairs = pair_files(["b_T13.txt", "a_T12.txt", "b_T12.txt"]);
        let keys: Vec<&str> = pairs.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["B_T1X.TXT", "A_T1X.TXT"]);
    }

    #[test]
    fn test_files_transmit_first_and_signal_prefers_transmit() {
        let pairs = pair_files(["x_T13.txt", "x_T12.txt"]);
        let files: Vec<(Direction, &str)> = pairs[0].files().collect();
        assert_eq!(
            files,
            vec![(Direction::Transmit, "x_T12.txt"), (Direction::Receive, "x_T13.txt")]
        );
        assert_eq!(pairs[0].signal_name(), Some("x_T12.txt"));
    }

    #[test]
    fn test_no_files() {
        assert!(pair_files(Vec::<String>::new()).is_empty());
    }
}
