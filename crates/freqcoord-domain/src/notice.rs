//! Notice module - records extracted from a single document

/// Which leg of a radio link a notice file describes.
///
/// Transmit files carry the `T12` marker in their name, receive files `T13`.
/// A notice with no direction is treated as transmit when merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Transmit leg
    #[default]
    Transmit,

    /// Receive leg
    Receive,
}

impl Direction {
    /// Short label used in logs and summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Transmit => "tx",
            Direction::Receive => "rx",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields read once from the `<HEAD>` block of a document.
///
/// Absent keys are empty strings, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    /// Administration code (`t_adm`)
    pub administration: String,

    /// Date the notice set was sent (`t_d_sent`), raw `YYYY-MM-DD`
    pub sent_date: String,
}

impl HeaderFields {
    /// Build header fields from raw values
    pub fn new(administration: impl Into<String>, sent_date: impl Into<String>) -> Self {
        Self {
            administration: administration.into(),
            sent_date: sent_date.into(),
        }
    }

    /// Whether the administration code contains `token`, ignoring case
    pub fn administration_contains(&self, token: &str) -> bool {
        self.administration
            .to_uppercase()
            .contains(&token.to_uppercase())
    }
}

/// Values combined over every `<ANTENNA>` block of one notice.
///
/// Each field is either a single value or several values joined with `.`,
/// depending on the antenna rule of the variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AntennaSummary {
    /// Maximum gain (`t_gain_max`)
    pub gain: String,

    /// Height above ground level (`t_hgt_agl`)
    pub height: String,

    /// Power (`t_pwr_dbw` or `t_pwr_ant`)
    pub power: String,

    /// Azimuth of maximum radiation (`t_azm_max_e`)
    pub azimuth: String,
}

/// One frequency assignment extracted from a `<NOTICE>` block.
///
/// Every scalar is an empty string when the field was absent or is not part
/// of the variant's field set. Coordinates are already normalized; dates are
/// kept raw and reformatted by the report layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeRecord {
    /// Station / site name (`t_site_name`), the linking key
    pub site_name: String,

    /// Assigned frequency (`t_freq_assgn`)
    pub assigned_frequency: String,

    /// Longitude (`t_long`)
    pub longitude: String,

    /// Latitude (`t_lat`)
    pub latitude: String,

    /// Bandwidth code (`t_bdwdth_cde`)
    pub bandwidth_code: String,

    /// Administration notice date (`t_d_adm_ntc`)
    pub adm_notice_date: String,

    /// Administration reference id (`t_adm_ref_id`)
    pub adm_ref_id: String,

    /// Date brought into use (`t_d_inuse`)
    pub in_use_date: String,

    /// Antenna aggregates
    pub antenna: AntennaSummary,

    /// Name of the receiving station referenced from an `<RX_STATION>` block
    pub rx_site_name: Option<String>,

    /// Leg of the link, when the source file is one side of a pair
    pub direction: Option<Direction>,

    /// Header of the document this notice came from
    pub header: HeaderFields,
}

impl NoticeRecord {
    /// Direction used when merging; untagged notices count as transmit
    pub fn effective_direction(&self) -> Direction {
        self.direction.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_administration_contains_ignores_case() {
        let header = HeaderFields::new("uzb", "2025-01-10");
        assert!(header.administration_contains("UZB"));
        assert!(!header.administration_contains("KAZ"));
    }

    #[test]
    fn test_empty_header_matches_nothing() {
        let header = HeaderFields::default();
        assert_eq!(header.administration, "");
        assert!(!header.administration_contains("UZB"));
    }

    #[test]
    fn test_untagged_notice_is_transmit() {
        let notice = NoticeRecord::default();
        assert_eq!(notice.effective_direction(), Direction::Transmit);

        let notice = NoticeRecord {
            direction: Some(Direction::Receive),
            ..Default::default()
        };
        assert_eq!(notice.effective_direction(), Direction::Receive);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a token embedded anywhere in the code is found regardless of case
        #[test]
        fn test_embedded_token_is_found(
            prefix in "[a-z0-9-]{0,6}",
            token in "[A-Z]{3}",
            suffix in "[a-z0-9-]{0,6}",
        ) {
            let header = HeaderFields::new(
                format!("{}{}{}", prefix, token.to_lowercase(), suffix),
                "",
            );
            prop_assert!(header.administration_contains(&token));
        }
    }
}
