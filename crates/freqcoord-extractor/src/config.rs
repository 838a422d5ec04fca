//! Configuration for the Extractor

use crate::error::ExtractorError;
use freqcoord_domain::Variant;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A scalar field read from a `<NOTICE>` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeField {
    /// `t_site_name`
    SiteName,
    /// `t_freq_assgn`
    AssignedFrequency,
    /// `t_long`
    Longitude,
    /// `t_lat`
    Latitude,
    /// `t_bdwdth_cde`
    BandwidthCode,
    /// `t_d_adm_ntc`
    AdmNoticeDate,
    /// `t_adm_ref_id`
    AdmRefId,
    /// `t_d_inuse`
    InUseDate,
}

impl NoticeField {
    /// Key of the field in the notice file
    pub fn key(&self) -> &'static str {
        match self {
            NoticeField::SiteName => "t_site_name",
            NoticeField::AssignedFrequency => "t_freq_assgn",
            NoticeField::Longitude => "t_long",
            NoticeField::Latitude => "t_lat",
            NoticeField::BandwidthCode => "t_bdwdth_cde",
            NoticeField::AdmNoticeDate => "t_d_adm_ntc",
            NoticeField::AdmRefId => "t_adm_ref_id",
            NoticeField::InUseDate => "t_d_inuse",
        }
    }
}

const CORE_FIELDS: [NoticeField; 6] = [
    NoticeField::SiteName,
    NoticeField::AssignedFrequency,
    NoticeField::Longitude,
    NoticeField::Latitude,
    NoticeField::BandwidthCode,
    NoticeField::AdmNoticeDate,
];

/// How values from several `<ANTENNA>` blocks are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AntennaRule {
    /// The last antenna carrying a field wins
    LastValue,
    /// Gain, height and power are distinct-joined with `.`;
    /// azimuth keeps one entry per antenna
    Aggregate,
}

/// Output form of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateStyle {
    /// `DD-MM-SSS`
    Separated,
    /// `DDMMSSS`
    Compact,
}

/// Configuration for the Extractor
///
/// Each report variant has a preset; a TOML file can override it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Scalar fields read from each notice; others stay empty
    pub fields: Vec<NoticeField>,

    /// Antenna key holding the power value (`t_pwr_dbw` or `t_pwr_ant`)
    pub power_key: String,

    /// How antenna blocks are combined
    pub antenna_rule: AntennaRule,

    /// How coordinates are written
    pub coordinate_style: CoordinateStyle,

    /// Read the `<RX_STATION>` site name as a cross-reference
    #[serde(default)]
    pub link_rx_station: bool,

    /// Reject documents whose administration code lacks this token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administration_filter: Option<String>,
}

impl ExtractorConfig {
    /// Preset for a report variant
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::RrlIncoming | Variant::RrlOutgoing => {
                let mut fields = CORE_FIELDS.to_vec();
                fields.push(NoticeField::AdmRefId);
                Self {
                    fields,
                    power_key: "t_pwr_dbw".to_string(),
                    antenna_rule: AntennaRule::LastValue,
                    coordinate_style: CoordinateStyle::Separated,
                    link_rx_station: true,
                    administration_filter: variant.administration_filter().map(str::to_string),
                }
            }
            Variant::SpsIncoming => {
                let mut fields = CORE_FIELDS.to_vec();
                fields.push(NoticeField::InUseDate);
                Self {
                    fields,
                    power_key: "t_pwr_ant".to_string(),
                    antenna_rule: AntennaRule::Aggregate,
                    coordinate_style: CoordinateStyle::Compact,
                    link_rx_station: false,
                    administration_filter: None,
                }
            }
            Variant::SpsOutgoing => {
                let mut fields = CORE_FIELDS.to_vec();
                fields.push(NoticeField::AdmRefId);
                fields.push(NoticeField::InUseDate);
                Self {
                    fields,
                    power_key: "t_pwr_ant".to_string(),
                    antenna_rule: AntennaRule::Aggregate,
                    coordinate_style: CoordinateStyle::Compact,
                    link_rx_station: false,
                    administration_filter: None,
                }
            }
        }
    }

    /// Whether a field is part of the configured field set
    pub fn extracts(&self, field: NoticeField) -> bool {
        self.fields.contains(&field)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.extracts(NoticeField::SiteName) {
            return Err("fields must include site_name (the linking key)".to_string());
        }
        if !self.extracts(NoticeField::AssignedFrequency) {
            return Err("fields must include assigned_frequency".to_string());
        }
        if self.power_key.trim().is_empty() {
            return Err("power_key must not be empty".to_string());
        }
        if let Some(filter) = &self.administration_filter {
            if filter.trim().is_empty() {
                return Err("administration_filter must not be empty when set".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ExtractorError> {
        let text = std::fs::read_to_string(path).map_err(|source| ExtractorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(ExtractorError::Config)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }
}

impl Default for ExtractorConfig {
    /// Radio-relay preset without an administration filter
    fn default() -> Self {
        Self::for_variant(Variant::RrlIncoming)
    }
}
