//! # romdata-core
//!
//! Turns a ROM estimate workbook into the `rom-data.json` document read by
//! the web presentation.
//!
//! This crate provides:
//! - The document model and its hand-curated static sections
//! - Extraction of summary, phase and staffing figures from a [`Book`]
//! - Locating the source workbook on disk
//! - Writing the document and summarising the run
//!
//! ```
//! use chrono::NaiveDate;
//! use romdata_core::extract;
//! use romdata_sheet::Book;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
//! let document = extract(&Book::new(), "ROM.xlsx", today);
//! assert_eq!(document.summary.investment_avg, 300_000);
//! assert!(document.totals.is_none());
//! ```

/// Hand-curated static sections.
pub mod content;
/// Document model.
pub mod document;
/// Error types and result aliases.
pub mod error;
/// Workbook to document extraction.
pub mod extract;
/// Source workbook discovery.
pub mod locate;
/// JSON output and run reporting.
pub mod output;

use chrono::NaiveDate;
use romdata_sheet::Book;
use std::path::Path;
use tracing::info;

/// Re-export the document root.
pub use document::RomDocument;
/// Re-export core error types.
pub use error::{RomError, RomResult};
/// Re-export the extraction entry point.
pub use extract::extract;
/// Re-export the locator.
pub use locate::SourceLocator;
/// Re-export output helpers.
pub use output::{write_document, RunReport, DEFAULT_OUTPUT};

/// Read the workbook at `path` and build its document.
///
/// The workbook is fully loaded and closed before extraction starts.
pub fn build_document(path: &Path, today: NaiveDate) -> RomResult<RomDocument> {
    info!(path = %path.display(), "reading ROM data");
    let book = Book::from_xlsx(path).map_err(|source| RomError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    info!(sheets = ?book.sheet_names(), "loaded workbook");

    let source_file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(extract(&book, &source_file, today))
}
