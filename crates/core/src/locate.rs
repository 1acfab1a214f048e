//! Finding the ROM workbook on disk.

use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Candidate workbook paths tried in order, relative to the base directory.
pub const DEFAULT_CANDIDATES: [&str; 2] = [
    "../MAHLE_ROM_2026_Populated_v1.xlsx",
    "MAHLE_ROM_2026_Populated_v1.xlsx",
];

/// File-name wildcard used as the last resort, in the parent directory.
pub const DEFAULT_PATTERN: &str = "*ROM*.xlsx";

/// Resolves the workbook to read.
///
/// An explicit path is used as-is (or rejected when missing). Otherwise the
/// candidate list is tried in order, then the wildcard in `search_dir`.
#[derive(Debug, Clone)]
pub struct SourceLocator {
    base_dir: PathBuf,
    candidates: Vec<PathBuf>,
    search_dir: PathBuf,
    pattern: String,
}

impl SourceLocator {
    /// Locator with the default candidates, rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let search_dir = base_dir.join("..");
        SourceLocator {
            base_dir,
            candidates: DEFAULT_CANDIDATES.iter().map(PathBuf::from).collect(),
            search_dir,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }

    /// Locator rooted at the current working directory.
    pub fn from_current_dir() -> Self {
        Self::new(".")
    }

    /// Replace the candidate list.
    #[must_use]
    pub fn with_candidates<I, P>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the wildcard directory and pattern.
    #[must_use]
    pub fn with_search(mut self, dir: impl Into<PathBuf>, pattern: &str) -> Self {
        self.search_dir = dir.into();
        self.pattern = pattern.to_string();
        self
    }

    /// Resolve the workbook path, or `None` when nothing suitable exists.
    pub fn locate(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            if path.exists() {
                return Some(path.to_path_buf());
            }
            debug!(path = %path.display(), "explicit workbook does not exist");
            return None;
        }

        for candidate in &self.candidates {
            let path = self.base_dir.join(candidate);
            if path.exists() {
                debug!(path = %path.display(), "found workbook candidate");
                return Some(path);
            }
        }

        self.search()
    }

    /// First file in `search_dir` (sorted by name) matching the wildcard.
    fn search(&self) -> Option<PathBuf> {
        let matcher = match wildcard_regex(&self.pattern) {
            Ok(matcher) => matcher,
            Err(e) => {
                warn!(pattern = %self.pattern, error = %e, "invalid workbook pattern");
                return None;
            }
        };
        let entries = match std::fs::read_dir(&self.search_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.search_dir.display(), error = %e, "cannot search for workbook");
                return None;
            }
        };

        let mut matches: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter(|entry| matcher.is_match(&entry.file_name().to_string_lossy()))
            .map(|entry| entry.path())
            .collect();
        matches.sort();
        debug!(count = matches.len(), pattern = %self.pattern, "wildcard search");
        matches.into_iter().next()
    }
}

impl Default for SourceLocator {
    fn default() -> Self {
        Self::from_current_dir()
    }
}

/// Compile a `*`/`?` file-name wildcard into an anchored regex.
fn wildcard_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut re = String::from("^");
    for c in pattern.chars() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            c => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    re.push('$');
    Regex::new(&re)
}
