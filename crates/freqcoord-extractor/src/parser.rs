//! Parse scanned documents into header fields and notice records

use crate::config::{AntennaRule, ExtractorConfig, NoticeField};
use crate::error::ExtractorError;
use crate::normalize::{aggregate_antenna_field, normalize_coordinate};
use crate::scanner::{extract_blocks, extract_scalar, Block, Document};
use crate::types::{DocumentOutcome, ParsedDocument};
use freqcoord_domain::{AntennaSummary, Direction, HeaderFields, NoticeRecord, Variant};
use std::path::Path;
use tracing::debug;

const HEAD_TAG: &str = "HEAD";
const NOTICE_TAG: &str = "NOTICE";
const ANTENNA_TAG: &str = "ANTENNA";
const RX_STATION_TAG: &str = "RX_STATION";

const ADMINISTRATION_KEY: &str = "t_adm";
const SENT_DATE_KEY: &str = "t_d_sent";
const GAIN_KEY: &str = "t_gain_max";
const HEIGHT_KEY: &str = "t_hgt_agl";
const AZIMUTH_KEY: &str = "t_azm_max_e";

/// Read a notice file as UTF-8 text
pub fn read_document(path: &Path) -> Result<String, ExtractorError> {
    std::fs::read_to_string(path).map_err(|source| ExtractorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Header fields from the first `<HEAD>` block; empty when there is none
pub fn parse_header(document: &Document) -> HeaderFields {
    let Some(head) = document.first_block(HEAD_TAG) else {
        return HeaderFields::default();
    };
    HeaderFields::new(
        extract_scalar(head, ADMINISTRATION_KEY).unwrap_or_default(),
        extract_scalar(head, SENT_DATE_KEY).unwrap_or_default(),
    )
}

/// Parses documents according to an [`ExtractorConfig`]
#[derive(Debug, Clone)]
pub struct DocumentParser {
    config: ExtractorConfig,
}

impl DocumentParser {
    /// Create a parser with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Create a parser with the preset of a report variant
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(ExtractorConfig::for_variant(variant))
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse document text.
    ///
    /// When an administration filter is configured and the header code does
    /// not contain it, the notices are not read and the document is rejected.
    pub fn parse_document(&self, text: &str, direction: Option<Direction>) -> DocumentOutcome {
        let document = Document::parse(text);
        let header = parse_header(&document);

        if let Some(filter) = &self.config.administration_filter {
            if !header.administration_contains(filter) {
                debug!(
                    "Rejecting document: administration '{}' does not contain '{}'",
                    header.administration, filter
                );
                return DocumentOutcome::Rejected {
                    administration: header.administration,
                };
            }
        }

        let notices = self.parse_notices(&document, &header, direction);
        DocumentOutcome::Parsed(ParsedDocument { header, notices })
    }

    /// Extract every `<NOTICE>` block of a document
    pub fn parse_notices(
        &self,
        document: &Document,
        header: &HeaderFields,
        direction: Option<Direction>,
    ) -> Vec<NoticeRecord> {
        let notices: Vec<NoticeRecord> = extract_blocks(document, NOTICE_TAG)
            .into_iter()
            .map(|block| self.parse_notice(block, header, direction))
            .collect();
        debug!("Extracted {} notice(s)", notices.len());
        notices
    }

    fn parse_notice(
        &self,
        block: &Block,
        header: &HeaderFields,
        direction: Option<Direction>,
    ) -> NoticeRecord {
        let mut notice = NoticeRecord {
            direction,
            header: header.clone(),
            ..Default::default()
        };

        for field in &self.config.fields {
            let value = extract_scalar(block, field.key()).unwrap_or_default();
            self.assign(&mut notice, *field, value);
        }

        let antennas = block.blocks(ANTENNA_TAG);
        notice.antenna = self.summarize_antennas(&antennas);

        if self.config.link_rx_station {
            // Last antenna carrying a receiving station wins
            notice.rx_site_name = antennas
                .iter()
                .filter_map(|antenna| antenna.first_block(RX_STATION_TAG))
                .filter_map(|rx| rx.scalar(NoticeField::SiteName.key()))
                .last()
                .map(str::to_string);
        }

        notice
    }

    fn assign(&self, notice: &mut NoticeRecord, field: NoticeField, value: &str) {
        let style = self.config.coordinate_style;
        match field {
            NoticeField::SiteName => notice.site_name = value.to_string(),
            NoticeField::AssignedFrequency => notice.assigned_frequency = value.to_string(),
            NoticeField::Longitude => notice.longitude = normalize_coordinate(value, style),
            NoticeField::Latitude => notice.latitude = normalize_coordinate(value, style),
            NoticeField::BandwidthCode => notice.bandwidth_code = value.to_string(),
            NoticeField::AdmNoticeDate => notice.adm_notice_date = value.to_string(),
            NoticeField::AdmRefId => notice.adm_ref_id = value.to_string(),
            NoticeField::InUseDate => notice.in_use_date = value.to_string(),
        }
    }

    fn summarize_antennas(&self, antennas: &[&Block]) -> AntennaSummary {
        let collect = |key: &str| -> Vec<String> {
            antennas
                .iter()
                .filter_map(|antenna| antenna.scalar(key))
                .map(str::to_string)
                .collect()
        };

        let gains = collect(GAIN_KEY);
        let heights = collect(HEIGHT_KEY);
        let powers = collect(self.config.power_key.as_str());
        let azimuths = collect(AZIMUTH_KEY);

        match self.config.antenna_rule {
            AntennaRule::LastValue => AntennaSummary {
                gain: gains.last().cloned().unwrap_or_default(),
                height: heights.last().cloned().unwrap_or_default(),
                power: powers.last().cloned().unwrap_or_default(),
                azimuth: azimuths.last().cloned().unwrap_or_default(),
            },
            AntennaRule::Aggregate => AntennaSummary {
                gain: aggregate_antenna_field(&gains, true),
                height: aggregate_antenna_field(&heights, true),
                power: aggregate_antenna_field(&powers, true),
                azimuth: aggregate_antenna_field(&azimuths, false),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoordinateStyle;

    #[test]
    fn test_header_fields() {
        let doc = Document::parse("<HEAD>\nt_adm = KAZ\nt_d_sent = 2025-01-10\n</HEAD>");
        let header = parse_header(&doc);
        assert_eq!(header.administration, "KAZ");
        assert_eq!(header.sent_date, "2025-01-10");
    }

    #[test]
    fn test_missing_header_is_empty() {
        let doc = Document::parse("<NOTICE>\nt_site_name = A\n</NOTICE>");
        assert_eq!(parse_header(&doc), HeaderFields::default());
    }

    #[test]
    fn test_only_first_header_is_read() {
        let doc = Document::parse("<HEAD>\nt_adm = KAZ\n</HEAD>\n<HEAD>\nt_adm = KGZ\n</HEAD>");
        assert_eq!(parse_header(&doc).administration, "KAZ");
    }

    #[test]
    fn test_fields_outside_field_set_stay_empty() {
        let parser = DocumentParser::for_variant(Variant::SpsIncoming);
        let text = "<NOTICE>\nt_site_name = A\nt_adm_ref_id = REF-1\nt_d_inuse = 2025-02-01\n</NOTICE>";
        let notices = parser.parse_document(text, None).parsed().unwrap().notices;
        assert_eq!(notices[0].adm_ref_id, "");
        assert_eq!(notices[0].in_use_date, "2025-02-01");
    }

    #[test]
    fn test_coordinate_style_is_applied() {
        let mut config = ExtractorConfig::default();
        config.coordinate_style = CoordinateStyle::Compact;
        let parser = DocumentParser::new(config);
        let text = "<NOTICE>\nt_long = +0691949\nt_lat = -411213\n</NOTICE>";
        let notices = parser.parse_document(text, None).parsed().unwrap().notices;
        assert_eq!(notices[0].longitude, "0691949");
        assert_eq!(notices[0].latitude, "411213");
    }

    #[test]
    fn test_rx_station_ignored_when_not_linking() {
        let parser = DocumentParser::for_variant(Variant::SpsOutgoing);
        let text = "<NOTICE>\n<ANTENNA>\n<RX_STATION>\nt_site_name = B\n</RX_STATION>\n</ANTENNA>\n</NOTICE>";
        let notices = parser.parse_document(text, None).parsed().unwrap().notices;
        assert_eq!(notices[0].rx_site_name, None);
    }

    #[test]
    fn test_read_missing_document() {
        let err = read_document(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, ExtractorError::Io { .. }));
        assert!(err.to_string().contains("here.txt"));
    }
}
