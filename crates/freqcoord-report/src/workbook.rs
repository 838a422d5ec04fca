//! Workbook writer

use crate::error::ReportError;
use crate::layout::{layout_for, SheetLayout, CAPTION_ROW, FIRST_DATA_ROW, HEADER_ROW, TITLE_ROW};
use chrono::NaiveDateTime;
use freqcoord_domain::{StationRecord, Variant};
use freqcoord_linker::ReportBuckets;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const HEADER_FILL: u32 = 0x366092;
const HEADER_FONT_SIZE: f64 = 9.0;
const DATA_FONT_SIZE: f64 = 9.0;
const TITLE_FONT_SIZE: f64 = 11.0;

/// Cell formats shared by every sheet
struct Styles {
    title: Format,
    header: Format,
    data: Format,
}

impl Styles {
    fn new() -> Self {
        let title = Format::new()
            .set_bold()
            .set_font_size(TITLE_FONT_SIZE)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        let header = Format::new()
            .set_bold()
            .set_font_size(HEADER_FONT_SIZE)
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(HEADER_FILL))
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap();

        let data = Format::new()
            .set_font_size(DATA_FONT_SIZE)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap();

        Self {
            title,
            header,
            data,
        }
    }
}

/// Workbook file name for a run started at `timestamp`
pub fn output_file_name(variant: Variant, timestamp: NaiveDateTime) -> String {
    format!(
        "{}_{}.xlsx",
        variant.output_prefix(),
        timestamp.format("%Y-%m-%d_%H-%M-%S")
    )
}

/// Workbook path inside `dir`
pub fn output_path(dir: &Path, variant: Variant, timestamp: NaiveDateTime) -> PathBuf {
    dir.join(output_file_name(variant, timestamp))
}

/// Write one sheet per report group, in bucket order.
///
/// Groups without records still get a sheet with the header block. The
/// parent directory is created when missing.
pub fn write_workbook(
    path: &Path,
    variant: Variant,
    buckets: &ReportBuckets,
) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let styles = Styles::new();
    let mut workbook = Workbook::new();

    for (group, records) in buckets.iter() {
        let layout = layout_for(variant, group);
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(group.sheet_name())?;
        write_sheet(worksheet, &layout, records, &styles)?;
        debug!("Sheet '{}': {} row(s)", group.sheet_name(), records.len());
    }

    workbook.save(path)?;
    info!("Workbook written to {}", path.display());
    Ok(())
}

fn write_sheet(
    worksheet: &mut Worksheet,
    layout: &SheetLayout,
    records: &[StationRecord],
    styles: &Styles,
) -> Result<(), ReportError> {
    let last_col = layout.width().saturating_sub(1);
    worksheet.merge_range(TITLE_ROW, 0, TITLE_ROW, last_col, layout.title, &styles.title)?;

    if !layout.captions.is_empty() {
        for col in 0..layout.width() {
            let covered = layout
                .captions
                .iter()
                .any(|c| (c.first..=c.last).contains(&col));
            if !covered {
                worksheet.write_blank(CAPTION_ROW, col, &styles.header)?;
            }
        }
        for caption in layout.captions {
            worksheet.merge_range(
                CAPTION_ROW,
                caption.first,
                CAPTION_ROW,
                caption.last,
                caption.text,
                &styles.header,
            )?;
        }
    }

    for (col, column) in layout.columns.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(HEADER_ROW, col, column.header, &styles.header)?;
        worksheet.set_column_width(col, column.width)?;
    }

    for (offset, record) in records.iter().enumerate() {
        let row = FIRST_DATA_ROW + offset as u32;
        for (col, value) in layout.render_row(record).iter().enumerate() {
            let col = col as u16;
            if value.is_empty() {
                worksheet.write_blank(row, col, &styles.data)?;
            } else {
                worksheet.write_string_with_format(row, col, value, &styles.data)?;
            }
        }
    }

    for (row, height) in layout.row_heights {
        worksheet.set_row_height(*row, *height)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use freqcoord_domain::{NoticeRecord, ReportGroup};

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 10)
            .and_then(|d| d.and_hms_opt(9, 5, 7))
            .unwrap()
    }

    #[test]
    fn test_output_file_names() {
        assert_eq!(
            output_file_name(Variant::RrlOutgoing, timestamp()),
            "ИСХОДЯЩИЕ_РРЛ_2025-01-10_09-05-07.xlsx"
        );
        assert_eq!(
            output_file_name(Variant::SpsIncoming, timestamp()),
            "ВХОД_СПС_2025-01-10_09-05-07.xlsx"
        );
        assert_eq!(
            output_file_name(Variant::SpsOutgoing, timestamp()),
            "Учёт_данных_частот_2025-01-10_09-05-07.xlsx"
        );
    }

    #[test]
    fn test_output_path_is_inside_directory() {
        let path = output_path(Path::new("/data/in"), Variant::RrlIncoming, timestamp());
        assert_eq!(path.parent(), Some(Path::new("/data/in")));
    }

    #[test]
    fn test_write_workbook_with_empty_sheets() {
        let dir = tempfile::tempdir().unwrap();
        let path = output_path(dir.path(), Variant::SpsOutgoing, timestamp());

        let mut buckets = ReportBuckets::for_variant(Variant::SpsOutgoing);
        buckets.push(
            ReportGroup::ItuRegistration,
            StationRecord::seed(NoticeRecord {
                site_name: "Tashkent".to_string(),
                ..Default::default()
            }),
        );

        write_workbook(&path, Variant::SpsOutgoing, &buckets).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_write_workbook_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.xlsx");
        let buckets = ReportBuckets::for_variant(Variant::RrlOutgoing);
        write_workbook(&path, Variant::RrlOutgoing, &buckets).unwrap();
        assert!(path.exists());
    }
}
