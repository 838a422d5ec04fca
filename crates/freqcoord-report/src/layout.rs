//! Sheet layouts: title, caption row, header row and per-column cell sources

use freqcoord_domain::{ReportGroup, StationRecord, Variant};
use freqcoord_extractor::normalize_date;
use CellSource::*;

/// Where the value of a data cell comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSource {
    /// Station name
    SiteName,
    /// Longitude as extracted
    Longitude,
    /// Latitude as extracted
    Latitude,
    /// Transmit frequency
    TxFrequency,
    /// Receive frequency
    RxFrequency,
    /// Bandwidth code
    Bandwidth,
    /// Antenna gain summary
    Gain,
    /// Antenna power summary
    Power,
    /// Antenna height summary
    Height,
    /// Antenna azimuth summary
    Azimuth,
    /// Sent date and notice date, see [`incoming_reference`]
    IncomingReference,
    /// Header sent date as `DD.MM.YYYY`
    SentDate,
    /// Administration notice date as `DD.MM.YYYY`
    NoticeDate,
    /// Bringing-into-use date as `DD.MM.YYYY`
    InUseDate,
    /// Administration reference id
    AdmRefId,
    /// Left for manual entry
    Blank,
}

impl CellSource {
    /// Cell text for a station record
    pub fn value(&self, record: &StationRecord) -> String {
        let notice = &record.notice;
        match self {
            CellSource::SiteName => notice.site_name.clone(),
            CellSource::Longitude => notice.longitude.clone(),
            CellSource::Latitude => notice.latitude.clone(),
            CellSource::TxFrequency => record.tx_frequency.clone(),
            CellSource::RxFrequency => record.rx_frequency.clone(),
            CellSource::Bandwidth => notice.bandwidth_code.clone(),
            CellSource::Gain => notice.antenna.gain.clone(),
            CellSource::Power => notice.antenna.power.clone(),
            CellSource::Height => notice.antenna.height.clone(),
            CellSource::Azimuth => notice.antenna.azimuth.clone(),
            CellSource::IncomingReference => {
                incoming_reference(&notice.header.sent_date, &notice.adm_notice_date)
            }
            CellSource::SentDate => normalize_date(&notice.header.sent_date),
            CellSource::NoticeDate => normalize_date(&notice.adm_notice_date),
            CellSource::InUseDate => normalize_date(&notice.in_use_date),
            CellSource::AdmRefId => notice.adm_ref_id.clone(),
            CellSource::Blank => String::new(),
        }
    }
}

/// One column of a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Header text (row 3)
    pub header: &'static str,
    /// Column width in characters
    pub width: f64,
    /// Data cell source
    pub source: CellSource,
}

const fn column(header: &'static str, width: f64, source: CellSource) -> Column {
    Column {
        header,
        width,
        source,
    }
}

/// A merged caption spanning columns of row 2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caption {
    /// First column (zero-based)
    pub first: u16,
    /// Last column (zero-based, inclusive)
    pub last: u16,
    /// Caption text
    pub text: &'static str,
}

/// Fixed layout of one sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    /// Title merged across row 1
    pub title: &'static str,
    /// Merged captions in row 2; when empty, row 2 stays blank
    pub captions: &'static [Caption],
    /// Columns in order
    pub columns: &'static [Column],
    /// Heights of header rows (zero-based row, height)
    pub row_heights: &'static [(u32, f64)],
}

/// Row of the title
pub const TITLE_ROW: u32 = 0;
/// Row of merged captions
pub const CAPTION_ROW: u32 = 1;
/// Row of column headers
pub const HEADER_ROW: u32 = 2;
/// First data row
pub const FIRST_DATA_ROW: u32 = 3;

impl SheetLayout {
    /// Number of columns
    pub fn width(&self) -> u16 {
        self.columns.len() as u16
    }

    /// Header texts in column order
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    /// Cells of one data row
    pub fn render_row(&self, record: &StationRecord) -> Vec<String> {
        self.columns.iter().map(|c| c.source.value(record)).collect()
    }
}

/// Data rows of a sheet in record order
pub fn render_rows(layout: &SheetLayout, records: &[StationRecord]) -> Vec<Vec<String>> {
    records.iter().map(|r| layout.render_row(r)).collect()
}

/// Incoming letter reference: `sent/notice` when both are present, otherwise
/// whichever is present. Dates are used as written in the document.
pub fn incoming_reference(sent_date: &str, notice_date: &str) -> String {
    match (sent_date.is_empty(), notice_date.is_empty()) {
        (false, false) => format!("{}/{}", sent_date, notice_date),
        (false, true) => sent_date.to_string(),
        (true, false) => notice_date.to_string(),
        (true, true) => String::new(),
    }
}

const RRL_CAPTIONS: &[Caption] = &[
    Caption { first: 0, last: 1, text: "Частота, МГц" },
    Caption { first: 2, last: 3, text: "Координаты" },
    Caption { first: 9, last: 10, text: "№ и дата входящего письма" },
    Caption { first: 11, last: 12, text: "№ и дата исходящего письма" },
];

const RRL_COLUMNS: &[Column] = &[
    column("передача", 12.0, TxFrequency),
    column("приём", 12.0, RxFrequency),
    column("долгота", 10.0, Longitude),
    column("широта", 10.0, Latitude),
    column("Пункт установки", 20.0, SiteName),
    column("Ширина\nполосы,\nМГц", 10.0, Bandwidth),
    column("Коэф-т\nусиления,\nдБ", 10.0, Gain),
    column("Мощность\nпередатчика,\nдБВт", 12.0, Power),
    column("Высота\nантенны, м", 10.0, Height),
    column("первичное", 15.0, IncomingReference),
    column("повторное", 15.0, Blank),
    column("первичное", 15.0, Blank),
    column("повторное", 15.0, Blank),
    column("Результат согласования\n(согласовано/\nне согласовано)", 15.0, Blank),
    column("Примечание", 15.0, Blank),
    column("Исполнитель", 15.0, Blank),
    column("id1/ unique id given by\nthe administration to\nthe assignment", 25.0, AdmRefId),
];

const RRL_ROW_HEIGHTS: &[(u32, f64)] = &[(TITLE_ROW, 30.0), (CAPTION_ROW, 30.0), (HEADER_ROW, 50.0)];

const RRL_OUTGOING: SheetLayout = SheetLayout {
    title: "Учёт статистических данных по частотоприрсвоениям направленных на координацию с АС РУз (ИСХОДЯЩИЕ)-РРЛ",
    captions: RRL_CAPTIONS,
    columns: RRL_COLUMNS,
    row_heights: RRL_ROW_HEIGHTS,
};

const RRL_INCOMING: SheetLayout = SheetLayout {
    title: "Учёт статистических данных по частотоприрсвоениям полученных для координации от других Администраций связи (ВХОДЯЩИЕ)-РРЛ",
    ..RRL_OUTGOING
};

const SPS_ROW_HEIGHTS: &[(u32, f64)] = &[(TITLE_ROW, 30.0), (HEADER_ROW, 35.0)];

const SPS_INCOMING: SheetLayout = SheetLayout {
    title: "Учёт статистических данных по частотоприрсвоениям полученных для координации от других Администраций связи (ВХОД СПС)",
    captions: &[],
    columns: &[
        column("Название станций\n(Пункт установки)", 18.0, SiteName),
        column("Координаты\nдолгота", 10.0, Longitude),
        column("широта", 10.0, Latitude),
        column("Частота, МГц\nперед", 10.0, TxFrequency),
        column("прием", 10.0, RxFrequency),
        column("Ширина\nполосы", 10.0, Bandwidth),
        column("Мощн.\nдБВт", 9.0, Power),
        column("КУА,\nдБ", 9.0, Gain),
        column("Hант.,\nм", 8.0, Height),
        column("Азимут", 15.0, Azimuth),
        column("№ входящего\n№ письма", 15.0, IncomingReference),
        column("дата", 12.0, SentDate),
        column("№ отв\n№ письма", 15.0, Blank),
        column("дата", 12.0, Blank),
        column("Результат\n(ответ)", 15.0, Blank),
        column("Примечание", 20.0, Blank),
        column("Исполнитель", 15.0, Blank),
    ],
    row_heights: SPS_ROW_HEIGHTS,
};

const SPS_OUTGOING_TITLE: &str =
    "Учёт статистических данных по частотоприрсвоениям направленных на координацию с другими Администрациями связи (ИСХ СПС)";

const SPS_OUTGOING: SheetLayout = SheetLayout {
    title: SPS_OUTGOING_TITLE,
    captions: &[],
    columns: &[
        column("Название станции\n(пункт установки)", 18.0, SiteName),
        column("Координаты\nдолгот", 10.0, Longitude),
        column("широт", 10.0, Latitude),
        column("Частота, МГц\nпередача", 10.0, TxFrequency),
        column("прием", 10.0, RxFrequency),
        column("Ширина\nполосы", 10.0, Bandwidth),
        column("Мощн.\nдБВт", 9.0, Power),
        column("КУА,\nдБ", 9.0, Gain),
        column("Hант.,\nм", 8.0, Height),
        column("Азимут", 15.0, Azimuth),
        column("№ исходящего письма\n№ письма", 20.0, Blank),
        column("дата", 12.0, NoticeDate),
        column("Ответное письмо\n№ письма", 15.0, Blank),
        column("дата", 12.0, InUseDate),
        column("Результат", 12.0, Blank),
        column("Направлено в\nБРИФИК", 15.0, Blank),
        column("Примечание", 20.0, Blank),
        column("Исполнитель", 15.0, Blank),
        column("ID UZB", 15.0, AdmRefId),
    ],
    row_heights: SPS_ROW_HEIGHTS,
};

const SPS_BRIFIC: SheetLayout = SheetLayout {
    title: SPS_OUTGOING_TITLE,
    captions: &[],
    columns: &[
        column("Название станций\n(Пункт установки)", 18.0, SiteName),
        column("Координаты\nдолгот", 10.0, Longitude),
        column("широт", 10.0, Latitude),
        column("Частота, МГц\nпередача", 10.0, TxFrequency),
        column("прием", 10.0, RxFrequency),
        column("Ширина\nполосы", 10.0, Bandwidth),
        column("Мощн.\nдБВт", 9.0, Power),
        column("КУА,\nдБ", 9.0, Gain),
        column("Hант.,\nм", 8.0, Height),
        column("Азимут", 15.0, Azimuth),
        column("№ исходящего письма\n№ письма", 20.0, Blank),
        column("дата", 12.0, NoticeDate),
        column("Fragment", 15.0, Blank),
        column("BRIFIC\nID", 12.0, Blank),
        column("Част", 12.0, Blank),
        column("Примечание", 15.0, Blank),
        column("Исполнитель", 20.0, Blank),
        column("ID UZB", 15.0, AdmRefId),
    ],
    row_heights: SPS_ROW_HEIGHTS,
};

/// Layout of one sheet of a variant's workbook
pub fn layout_for(variant: Variant, group: ReportGroup) -> SheetLayout {
    match variant {
        Variant::RrlIncoming => RRL_INCOMING,
        Variant::RrlOutgoing => RRL_OUTGOING,
        Variant::SpsIncoming => SPS_INCOMING,
        Variant::SpsOutgoing if group == ReportGroup::ItuRegistration => SPS_BRIFIC,
        Variant::SpsOutgoing => SPS_OUTGOING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freqcoord_domain::{AntennaSummary, HeaderFields, NoticeRecord};

    fn record() -> StationRecord {
        StationRecord {
            notice: NoticeRecord {
                site_name: "Almaty".to_string(),
                assigned_frequency: "3600".to_string(),
                longitude: "0765500".to_string(),
                latitude: "431500".to_string(),
                bandwidth_code: "7M00".to_string(),
                adm_notice_date: "2025-02-15".to_string(),
                adm_ref_id: "REF-7".to_string(),
                in_use_date: "2025-04-01".to_string(),
                antenna: AntennaSummary {
                    gain: "17".to_string(),
                    height: "30.35".to_string(),
                    power: "20".to_string(),
                    azimuth: "90.90".to_string(),
                },
                header: HeaderFields::new("KAZ", "2025-03-01"),
                ..Default::default()
            },
            tx_frequency: "3600".to_string(),
            rx_frequency: "3700".to_string(),
        }
    }

    #[test]
    fn test_incoming_reference() {
        assert_eq!(incoming_reference("2025-01-10", "2025-01-05"), "2025-01-10/2025-01-05");
        assert_eq!(incoming_reference("2025-01-10", ""), "2025-01-10");
        assert_eq!(incoming_reference("", "2025-01-05"), "2025-01-05");
        assert_eq!(incoming_reference("", ""), "");
    }

    #[test]
    fn test_column_counts() {
        assert_eq!(layout_for(Variant::RrlOutgoing, ReportGroup::OutgoingRelay).width(), 17);
        assert_eq!(layout_for(Variant::RrlIncoming, ReportGroup::Kazakhstan).width(), 17);
        assert_eq!(layout_for(Variant::SpsIncoming, ReportGroup::Kazakhstan).width(), 17);
        assert_eq!(layout_for(Variant::SpsOutgoing, ReportGroup::Kazakhstan).width(), 19);
        assert_eq!(layout_for(Variant::SpsOutgoing, ReportGroup::ItuRegistration).width(), 18);
    }

    #[test]
    fn test_rrl_row() {
        let layout = layout_for(Variant::RrlOutgoing, ReportGroup::OutgoingRelay);
        let row = layout.render_row(&record());
        assert_eq!(row[0], "3600");
        assert_eq!(row[1], "3700");
        assert_eq!(row[2], "0765500");
        assert_eq!(row[4], "Almaty");
        assert_eq!(row[7], "20");
        assert_eq!(row[9], "2025-03-01/2025-02-15");
        assert!(row[10..16].iter().all(String::is_empty));
        assert_eq!(row[16], "REF-7");
    }

    #[test]
    fn test_rrl_captions_and_titles() {
        let outgoing = layout_for(Variant::RrlOutgoing, ReportGroup::OutgoingRelay);
        let incoming = layout_for(Variant::RrlIncoming, ReportGroup::Kyrgyzstan);
        assert_eq!(outgoing.captions.len(), 4);
        assert_eq!(outgoing.captions[2].text, "№ и дата входящего письма");
        assert!(outgoing.title.contains("(ИСХОДЯЩИЕ)-РРЛ"));
        assert!(incoming.title.contains("(ВХОДЯЩИЕ)-РРЛ"));
        assert_eq!(outgoing.columns, incoming.columns);
    }

    #[test]
    fn test_sps_incoming_row() {
        let layout = layout_for(Variant::SpsIncoming, ReportGroup::Kazakhstan);
        let row = layout.render_row(&record());
        assert_eq!(
            &row[..12],
            &[
                "Almaty",
                "0765500",
                "431500",
                "3600",
                "3700",
                "7M00",
                "20",
                "17",
                "30.35",
                "90.90",
                "2025-03-01/2025-02-15",
                "01.03.2025",
            ]
        );
        assert!(row[12..].iter().all(String::is_empty));
        assert!(layout.captions.is_empty());
    }

    #[test]
    fn test_sps_outgoing_standard_row() {
        let layout = layout_for(Variant::SpsOutgoing, ReportGroup::Tajikistan);
        let row = layout.render_row(&record());
        assert_eq!(row[10], "");
        assert_eq!(row[11], "15.02.2025");
        assert_eq!(row[12], "");
        assert_eq!(row[13], "01.04.2025");
        assert!(row[14..18].iter().all(String::is_empty));
        assert_eq!(row[18], "REF-7");
        assert_eq!(layout.headers()[15], "Направлено в\nБРИФИК");
    }

    #[test]
    fn test_sps_brific_row() {
        let layout = layout_for(Variant::SpsOutgoing, ReportGroup::ItuRegistration);
        let row = layout.render_row(&record());
        assert_eq!(row[11], "15.02.2025");
        assert!(row[12..17].iter().all(String::is_empty));
        assert_eq!(row[17], "REF-7");
        assert_eq!(layout.headers()[12], "Fragment");
    }

    #[test]
    fn test_render_rows_keeps_order() {
        let layout = layout_for(Variant::SpsIncoming, ReportGroup::Kazakhstan);
        let mut second = record();
        second.notice.site_name = "Shymkent".to_string();
        let rows = render_rows(&layout, &[record(), second]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "Shymkent");
    }
}
