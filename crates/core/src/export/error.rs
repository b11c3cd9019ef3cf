//! Export error types.

use thiserror::Error;

/// Errors raised while encoding a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Spreadsheet writer failure.
    #[error("Excel export failed: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),

    /// PDF writer failure.
    #[error("PDF export failed: {0}")]
    Pdf(String),
}
