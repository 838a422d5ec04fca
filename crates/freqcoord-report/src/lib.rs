//! freqcoord Report
//!
//! Lays station records out as spreadsheet rows and writes the workbook.
//!
//! Every sheet has the same frame: a merged title in row 1, optional merged
//! captions in row 2, column headers in row 3 and one row per station record
//! from row 4. The columns of each variant are fixed by a [`SheetLayout`];
//! [`render_rows`] gives the cell text without touching a file, and
//! [`write_workbook`] writes a styled `.xlsx` with one sheet per report group.

#![warn(missing_docs)]

mod error;
mod layout;
mod workbook;

pub use error::ReportError;
pub use layout::{
    incoming_reference, layout_for, render_rows, Caption, CellSource, Column, SheetLayout,
    CAPTION_ROW, FIRST_DATA_ROW, HEADER_ROW, TITLE_ROW,
};
pub use workbook::{output_file_name, output_path, write_workbook};
