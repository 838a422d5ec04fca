//! Report group assignment

use freqcoord_domain::{BucketRule, ReportGroup, StationRecord, Variant};
use tracing::{debug, warn};

/// Substring tokens per group, checked in order, with a default group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketTable {
    /// Groups and their tokens in priority order
    pub entries: &'static [(ReportGroup, &'static [&'static str])],

    /// Group used when no token matches
    pub default: ReportGroup,
}

impl BucketTable {
    /// Table for header administration codes
    pub const ADMINISTRATION: BucketTable = BucketTable {
        entries: &[
            (ReportGroup::Kazakhstan, &["KAZ"]),
            (ReportGroup::Kyrgyzstan, &["KGZ"]),
            (ReportGroup::Tajikistan, &["TJK", "TAJ"]),
            (ReportGroup::Turkmenistan, &["TKM", "TUR"]),
        ],
        default: ReportGroup::Kazakhstan,
    };

    /// Table for outgoing file names
    pub const FILENAME: BucketTable = BucketTable {
        entries: &[
            (ReportGroup::ItuRegistration, &["UZB"]),
            (ReportGroup::Kazakhstan, &["KAZ"]),
            (ReportGroup::Tajikistan, &["TJK", "TDK"]),
            (ReportGroup::Kyrgyzstan, &["KGZ"]),
            (ReportGroup::Turkmenistan, &["TKM", "TUR"]),
        ],
        default: ReportGroup::ItuRegistration,
    };

    /// Match an uppercased signal against the table
    fn lookup(&self, signal: &str) -> Assignment {
        let upper = signal.to_uppercase();
        self.entries
            .iter()
            .find_map(|(group, tokens)| {
                tokens
                    .iter()
                    .find(|token| upper.contains(*token))
                    .map(|token| Assignment::Matched {
                        group: *group,
                        token: *token,
                    })
            })
            .unwrap_or(Assignment::Default(self.default))
    }
}

/// How a record's group was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// A table token occurs in the signal
    Matched {
        /// Chosen group
        group: ReportGroup,
        /// Token that matched
        token: &'static str,
    },

    /// No token matched; the table default applies
    Default(ReportGroup),

    /// The variant has a single group
    Fixed(ReportGroup),
}

impl Assignment {
    /// The chosen group
    pub fn group(&self) -> ReportGroup {
        match self {
            Assignment::Matched { group, .. } => *group,
            Assignment::Default(group) | Assignment::Fixed(group) => *group,
        }
    }

    /// Whether the table default was used
    pub fn is_default(&self) -> bool {
        matches!(self, Assignment::Default(_))
    }
}

/// Group for an administration code
pub fn bucket_by_code(code: &str, table: &BucketTable) -> Assignment {
    table.lookup(code)
}

/// Group for a file name
pub fn bucket_by_filename(filename: &str, table: &BucketTable) -> Assignment {
    table.lookup(filename)
}

/// Group for a record under a variant's bucket rule
pub fn assign_group(rule: BucketRule, administration: &str, filename: &str) -> Assignment {
    match rule {
        BucketRule::Single(group) => Assignment::Fixed(group),
        BucketRule::AdministrationCode => bucket_by_code(administration, &BucketTable::ADMINISTRATION),
        BucketRule::Filename => bucket_by_filename(filename, &BucketTable::FILENAME),
    }
}

/// Station records per report group, in sheet order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportBuckets {
    groups: Vec<(ReportGroup, Vec<StationRecord>)>,
}

impl ReportBuckets {
    /// Empty buckets for the given sheet order
    pub fn new(order: &[ReportGroup]) -> Self {
        Self {
            groups: order.iter().map(|group| (*group, Vec::new())).collect(),
        }
    }

    /// Empty buckets for every sheet of a variant
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.report_groups())
    }

    fn bucket_mut(&mut self, group: ReportGroup) -> &mut Vec<StationRecord> {
        let index = match self.groups.iter().position(|(g, _)| *g == group) {
            Some(index) => index,
            None => {
                warn!("Group '{}' is not in the sheet order; appending", group.as_str());
                self.groups.push((group, Vec::new()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index].1
    }

    /// Append one record to a group
    pub fn push(&mut self, group: ReportGroup, record: StationRecord) {
        self.bucket_mut(group).push(record);
    }

    /// Append records to a group, keeping their order
    pub fn extend(&mut self, group: ReportGroup, records: Vec<StationRecord>) {
        debug!("Adding {} station(s) to '{}'", records.len(), group.as_str());
        self.bucket_mut(group).extend(records);
    }

    /// Records of one group
    pub fn get(&self, group: ReportGroup) -> &[StationRecord] {
        self.groups
            .iter()
            .find(|(g, _)| *g == group)
            .map(|(_, records)| records.as_slice())
            .unwrap_or(&[])
    }

    /// Groups with their records, in sheet order
    pub fn iter(&self) -> impl Iterator<Item = (ReportGroup, &[StationRecord])> {
        self.groups
            .iter()
            .map(|(group, records)| (*group, records.as_slice()))
    }

    /// Record count per group, in sheet order
    pub fn counts(&self) -> Vec<(ReportGroup, usize)> {
        self.iter().map(|(group, records)| (group, records.len())).collect()
    }

    /// Records across all groups
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    /// Whether no group holds a record
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: an embedded code buckets to its group whatever surrounds it
        #[test]
        fn test_embedded_code_is_found(
            prefix in "[0-9_-]{0,6}",
            suffix in "[0-9_-]{0,6}",
            index in 0usize..4,
        ) {
            let (group, tokens) = BucketTable::ADMINISTRATION.entries[index];
            let code = format!("{}{}{}", prefix, tokens[0].to_lowercase(), suffix);
            prop_assert_eq!(bucket_by_code(&code, &BucketTable::ADMINISTRATION).group(), group);
        }

        /// Property: signals without letters always take the default
        #[test]
        fn test_letterless_signal_is_default(signal in "[0-9 ._-]{0,16}") {
            prop_assert!(bucket_by_filename(&signal, &BucketTable::FILENAME).is_default());
            prop_assert!(bucket_by_code(&signal, &BucketTable::ADMINISTRATION).is_default());
        }
    }
}
