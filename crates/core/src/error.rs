//! Error types for romdata.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for romdata operations.
pub type RomResult<T> = Result<T, RomError>;

/// Errors that stop a run before the document is written.
///
/// Cell-level problems never show up here: unreadable cells fall back to
/// their defaults during extraction.
#[derive(Debug, Error)]
pub enum RomError {
    /// No workbook was given or found by the locator.
    #[error("Could not find ROM Excel file{}", requested_suffix(.requested.as_ref()))]
    SourceNotFound { requested: Option<PathBuf> },

    /// The workbook exists but could not be read.
    #[error("Failed to read workbook {}: {source}", .path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: romdata_sheet::SheetError,
    },

    /// I/O error while writing the document.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn requested_suffix(requested: Option<&PathBuf>) -> String {
    requested.map_or_else(String::new, |path| format!(": {}", path.display()))
}

impl RomError {
    /// Create an I/O error tagged with the path involved.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
