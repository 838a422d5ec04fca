//! Group module - report sheets station records are bucketed into

/// A named report group; each group becomes one worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportGroup {
    /// Kyrgyzstan
    Kyrgyzstan,

    /// Tajikistan
    Tajikistan,

    /// Kazakhstan
    Kazakhstan,

    /// Turkmenistan
    Turkmenistan,

    /// Own assignments sent for ITU registration
    ItuRegistration,

    /// Outgoing radio-relay links of the home administration
    OutgoingRelay,
}

impl ReportGroup {
    /// Every group, in declaration order
    pub const ALL: [ReportGroup; 6] = [
        ReportGroup::Kyrgyzstan,
        ReportGroup::Tajikistan,
        ReportGroup::Kazakhstan,
        ReportGroup::Turkmenistan,
        ReportGroup::ItuRegistration,
        ReportGroup::OutgoingRelay,
    ];

    /// Short ASCII identifier used in JSON output and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportGroup::Kyrgyzstan => "kgz",
            ReportGroup::Tajikistan => "tjk",
            ReportGroup::Kazakhstan => "kaz",
            ReportGroup::Turkmenistan => "tkm",
            ReportGroup::ItuRegistration => "itu",
            ReportGroup::OutgoingRelay => "rrl-outgoing",
        }
    }

    /// Worksheet name
    pub fn sheet_name(&self) -> &'static str {
        match self {
            ReportGroup::Kyrgyzstan => "КГЗ",
            ReportGroup::Tajikistan => "ТЖК",
            ReportGroup::Kazakhstan => "КАЗ",
            ReportGroup::Turkmenistan => "ТКМ",
            ReportGroup::ItuRegistration => "на рег. в МСЭ",
            ReportGroup::OutgoingRelay => "ИСХОДЯЩИЕ РРЛ",
        }
    }

    /// Parse a group from its identifier or sheet name
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ALL.into_iter().find(|group| {
            group.as_str().eq_ignore_ascii_case(needle) || group.sheet_name() == needle
        })
    }
}

impl std::fmt::Display for ReportGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sheet_name())
    }
}

impl std::str::FromStr for ReportGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid report group: {}", s))
    }
}
