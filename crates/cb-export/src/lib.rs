//! cb-export - Spreadsheet export for Cubero
//!
//! Writes a pivot cross-tabulation to an XLSX workbook: the corner cell
//! names the index dimension, the first row holds column labels, the first
//! column holds row labels, and cells hold summed sales. An existing file
//! at the target path is overwritten.

use cb_olap::CrossTab;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use thiserror::Error;

/// Export error type
#[derive(Error, Debug)]
pub enum ExportError {
    /// X001: XLSX workbook construction or save failed
    #[error("[X001] XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type alias for ExportError
pub type ExportResult<T> = Result<T, ExportError>;

/// Write a cross-tabulation to an XLSX file, overwriting in place
pub fn save_crosstab_xlsx(path: &Path, tab: &CrossTab) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("pivot")?;

    let header = Format::new().set_bold();

    // Corner cell names the index dimension
    worksheet.write_string_with_format(0, 0, tab.index_dim.to_string(), &header)?;
    for (c, label) in tab.col_labels.iter().enumerate() {
        worksheet.write_string_with_format(0, (c + 1) as u16, label, &header)?;
    }
    for (r, label) in tab.row_labels.iter().enumerate() {
        worksheet.write_string_with_format((r + 1) as u32, 0, label, &header)?;
        for (c, value) in tab.cells[r].iter().enumerate() {
            worksheet.write_number((r + 1) as u32, (c + 1) as u16, *value as f64)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
