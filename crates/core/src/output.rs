//! Writing the document and the run summary.

use crate::document::RomDocument;
use crate::error::{RomError, RomResult};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default location of the generated document, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "data/rom-data.json";

/// Render the document as 2-space indented JSON.
pub fn to_json(document: &RomDocument) -> RomResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write the document to `path`, creating parent directories and replacing
/// any existing file.
pub fn write_document(document: &RomDocument, path: &Path) -> RomResult<()> {
    let json = to_json(document)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| RomError::io(parent, e))?;
    }
    fs::write(path, json).map_err(|e| RomError::io(path, e))?;

    info!(path = %path.display(), "wrote ROM data");
    Ok(())
}

/// Human-readable outcome of a run, printed after the document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub last_updated: String,
    pub investment_avg: u64,
    pub weeks_avg: u32,
    pub year1_value: u64,
    pub payback_months: u32,
}

impl RunReport {
    #[must_use]
    pub fn new(document: &RomDocument, source: &Path, output: &Path) -> Self {
        RunReport {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            last_updated: document.meta.last_updated.clone(),
            investment_avg: document.summary.investment_avg,
            weeks_avg: document.summary.weeks_avg,
            year1_value: document.value_projections.total_year1_value,
            payback_months: document.value_projections.payback_months,
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source: {}", self.source.display())?;
        writeln!(f, "Output: {}", self.output.display())?;
        writeln!(f, "Last Updated: {}", self.last_updated)?;
        writeln!(f)?;
        writeln!(f, "Key Values:")?;
        writeln!(f, "  Investment: ${}", thousands(self.investment_avg))?;
        writeln!(f, "  Duration: {} weeks", self.weeks_avg)?;
        writeln!(f, "  Year 1 Value: ${}", thousands(self.year1_value))?;
        write!(f, "  Payback: {} months", self.payback_months)
    }
}

/// Format an integer with comma thousands separators.
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
