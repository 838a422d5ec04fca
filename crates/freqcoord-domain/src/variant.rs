//! Variant module - the four report flavours

use crate::group::ReportGroup;

/// How notices are turned into station records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkMode {
    /// Receive frequency looked up from a peer notice in the same document
    SameDocument,

    /// Transmit and receive files merged by station name
    TransmitReceive,
}

/// Where the signal for choosing a report group comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketRule {
    /// Every record goes to one fixed group
    Single(ReportGroup),

    /// The header administration code
    AdministrationCode,

    /// Tokens in the input filename
    Filename,
}

/// Report variant
///
/// Each variant fixes the link mode, bucket rule, administration filter,
/// sheet order and output name:
/// - RrlIncoming: radio-relay links received from neighbours, by administration
/// - RrlOutgoing: own radio-relay links (UZB only), single sheet
/// - SpsIncoming: paired T12/T13 files received from neighbours, by administration
/// - SpsOutgoing: paired T12/T13 files sent out, by filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Incoming radio-relay links
    RrlIncoming,

    /// Outgoing radio-relay links
    RrlOutgoing,

    /// Incoming satellite/terrestrial pairs
    SpsIncoming,

    /// Outgoing satellite/terrestrial pairs
    SpsOutgoing,
}

const COUNTRY_SHEETS: [ReportGroup; 4] = [
    ReportGroup::Kyrgyzstan,
    ReportGroup::Tajikistan,
    ReportGroup::Kazakhstan,
    ReportGroup::Turkmenistan,
];

const OUTGOING_SHEETS: [ReportGroup; 5] = [
    ReportGroup::Kyrgyzstan,
    ReportGroup::Tajikistan,
    ReportGroup::Kazakhstan,
    ReportGroup::Turkmenistan,
    ReportGroup::ItuRegistration,
];

impl Variant {
    /// Every variant
    pub const ALL: [Variant; 4] = [
        Variant::RrlIncoming,
        Variant::RrlOutgoing,
        Variant::SpsIncoming,
        Variant::SpsOutgoing,
    ];

    /// Get the variant name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::RrlIncoming => "rrl-incoming",
            Variant::RrlOutgoing => "rrl-outgoing",
            Variant::SpsIncoming => "sps-incoming",
            Variant::SpsOutgoing => "sps-outgoing",
        }
    }

    /// Parse a variant from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "rrl-incoming" => Some(Variant::RrlIncoming),
            "rrl-outgoing" => Some(Variant::RrlOutgoing),
            "sps-incoming" => Some(Variant::SpsIncoming),
            "sps-outgoing" => Some(Variant::SpsOutgoing),
            _ => None,
        }
    }

    /// How notices are linked
    pub fn link_mode(&self) -> LinkMode {
        match self {
            Variant::RrlIncoming | Variant::RrlOutgoing => LinkMode::SameDocument,
            Variant::SpsIncoming | Variant::SpsOutgoing => LinkMode::TransmitReceive,
        }
    }

    /// How station records are assigned to groups
    pub fn bucket_rule(&self) -> BucketRule {
        match self {
            Variant::RrlIncoming | Variant::SpsIncoming => BucketRule::AdministrationCode,
            Variant::RrlOutgoing => BucketRule::Single(ReportGroup::OutgoingRelay),
            Variant::SpsOutgoing => BucketRule::Filename,
        }
    }

    /// Administration code a document must carry to be accepted
    pub fn administration_filter(&self) -> Option<&'static str> {
        match self {
            Variant::RrlOutgoing => Some("UZB"),
            _ => None,
        }
    }

    /// Sheets in workbook order; empty groups still get a sheet
    pub fn report_groups(&self) -> &'static [ReportGroup] {
        match self {
            Variant::RrlIncoming | Variant::SpsIncoming => &COUNTRY_SHEETS,
            Variant::RrlOutgoing => &[ReportGroup::OutgoingRelay],
            Variant::SpsOutgoing => &OUTGOING_SHEETS,
        }
    }

    /// Prefix of the output workbook name
    pub fn output_prefix(&self) -> &'static str {
        match self {
            Variant::RrlIncoming => "ВХОДЯЩИЕ_РРЛ",
            Variant::RrlOutgoing => "ИСХОДЯЩИЕ_РРЛ",
            Variant::SpsIncoming => "ВХОД_СПС",
            Variant::SpsOutgoing => "Учёт_данных_частот",
        }
    }

    /// Human-readable title used in console output
    pub fn title(&self) -> &'static str {
        match self {
            Variant::RrlIncoming => "RRL incoming",
            Variant::RrlOutgoing => "RRL outgoing",
            Variant::SpsIncoming => "SPS incoming",
            Variant::SpsOutgoing => "SPS outgoing",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid variant: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::parse(variant.as_str()), Some(variant));
        }
        assert_eq!(Variant::parse("SPS_OUTGOING"), Some(Variant::SpsOutgoing));
        assert!("rrl".parse::<Variant>().is_err());
    }

    #[test]
    fn test_only_rrl_outgoing_filters() {
        assert_eq!(Variant::RrlOutgoing.administration_filter(), Some("UZB"));
        assert_eq!(Variant::RrlIncoming.administration_filter(), None);
        assert_eq!(Variant::SpsIncoming.administration_filter(), None);
        assert_eq!(Variant::SpsOutgoing.administration_filter(), None);
    }

    #[test]
    fn test_single_bucket_group_is_in_sheet_order() {
        for variant in Variant::ALL {
            if let BucketRule::Single(group) = variant.bucket_rule() {
                assert!(variant.report_groups().contains(&group));
            }
        }
    }

    #[test]
    fn test_sheet_order() {
        assert_eq!(
            Variant::SpsOutgoing.report_groups().last(),
            Some(&ReportGroup::ItuRegistration)
        );
        assert_eq!(Variant::SpsIncoming.report_groups()[0], ReportGroup::Kyrgyzstan);
        assert_eq!(Variant::RrlOutgoing.report_groups().len(), 1);
    }
}
