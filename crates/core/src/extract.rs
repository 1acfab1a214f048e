//! Builds the ROM data document from a loaded workbook.
//!
//! Every sheet is optional. A missing sheet, or a sheet with no qualifying
//! rows, leaves its section at the default; nothing in here can fail.

use crate::content;
use crate::document::{
    Figure, Meta, Phase, RomDocument, StaffingEntry, Summary, Totals, CLIENT, DOCUMENT_VERSION,
    PROJECT,
};
use chrono::NaiveDate;
use indexmap::IndexMap;
use romdata_sheet::{Book, RowRange, Sheet};
use tracing::debug;

/// Sheet holding the velocity driver.
pub const DRIVERS_SHEET: &str = "Drivers & Estimates";
/// Sheet holding per-phase point estimates.
pub const POINTS_SHEET: &str = "Points";
/// Sheet holding the staffing plan.
pub const FEES_SHEET: &str = "Fees & costs";

const DRIVERS_ROWS: RowRange = RowRange::new(1, 20);
const POINTS_ROWS: RowRange = RowRange::new(2, 10);
const FEES_ROWS: RowRange = RowRange::new(10, 25);

/// Column of the velocity value on the drivers sheet (0-based, column F).
const VELOCITY_COLUMN: usize = 5;

/// Placeholder text the staffing template leaves in unused rows.
const STAFFING_PLACEHOLDER: &str = "Add rows as necessary";

/// Assemble the complete document.
///
/// `source_file` is the workbook's base name and `today` the generation date.
#[must_use]
pub fn extract(book: &Book, source_file: &str, today: NaiveDate) -> RomDocument {
    let summary = book
        .get_sheet(DRIVERS_SHEET)
        .map_or_else(Summary::default, extract_summary);
    let phases = book
        .get_sheet(POINTS_SHEET)
        .map(extract_phases)
        .unwrap_or_default();
    let staffing = book
        .get_sheet(FEES_SHEET)
        .map(extract_staffing)
        .unwrap_or_default();
    let totals = Totals::from_phases(phases.values());

    debug!(
        phases = phases.len(),
        staffing = staffing.len(),
        target_velocity = summary.target_velocity.value(),
        "extracted workbook sections"
    );

    RomDocument {
        meta: Meta {
            last_updated: today.format("%Y-%m-%d").to_string(),
            version: DOCUMENT_VERSION.to_string(),
            client: CLIENT.to_string(),
            project: PROJECT.to_string(),
            source_file: source_file.to_string(),
        },
        summary,
        team: Vec::new(),
        phases,
        totals,
        business_case: content::business_case(),
        value_projections: content::value_projections(),
        timeline: content::timeline(),
        use_cases: content::use_cases(),
        staffing,
    }
}

/// Summary defaults, with the target velocity taken from the drivers sheet.
///
/// The whole range is scanned; when several rows mention velocity the last
/// one wins.
pub fn extract_summary(sheet: &Sheet) -> Summary {
    let mut summary = Summary::default();

    for row in sheet.iter_rows(DRIVERS_ROWS) {
        let label = row.get(0);
        if !label.is_truthy() || !label.as_str().to_lowercase().contains("velocity") {
            continue;
        }
        summary.target_velocity =
            Figure::from_cell(row.get(VELOCITY_COLUMN), Summary::DEFAULT_TARGET_VELOCITY);
        debug!(
            row = row.number(),
            target_velocity = summary.target_velocity.value(),
            "velocity row"
        );
    }

    summary
}

/// Phase points keyed by normalized phase name, in row order.
pub fn extract_phases(sheet: &Sheet) -> IndexMap<String, Phase> {
    let mut phases = IndexMap::new();

    for row in sheet.iter_rows(POINTS_ROWS) {
        if !row.get(0).is_truthy() || row.get(1).is_null() {
            continue;
        }
        let name = normalize_phase_name(&row.get(0).as_str());
        let phase = Phase {
            points_low: row.get(1).int_or(0),
            points_high: row.get(2).int_or(0),
            features: row.get(3).int_or(0),
        };
        debug!(row = row.number(), phase = %name, "phase row");
        phases.insert(name, phase);
    }

    phases
}

/// Staffing rows, skipping blanks, totals and the template placeholder.
///
/// A row only counts as a role when both its label and its FTE cell are
/// filled in; section headers and unfilled template rows have no FTE.
pub fn extract_staffing(sheet: &Sheet) -> Vec<StaffingEntry> {
    let mut staffing = Vec::new();

    for row in sheet.iter_rows(FEES_ROWS) {
        let label = row.get(0);
        if !label.is_truthy() || !row.get(1).is_truthy() {
            continue;
        }
        let raw = label.as_str();
        let role = raw.trim();
        if role.is_empty()
            || role == STAFFING_PLACEHOLDER
            || raw.to_lowercase().contains("total")
        {
            debug!(row = row.number(), label = %raw, "skipping staffing row");
            continue;
        }
        staffing.push(StaffingEntry {
            role: role.to_string(),
            fte: Figure::from_cell(row.get(1), 0),
            cost_rate: Figure::from_cell(row.get(2), 0),
        });
    }

    staffing
}

/// Strip every space and ampersand: `"Phase & Two"` becomes `"PhaseTwo"`.
#[must_use]
pub fn normalize_phase_name(raw: &str) -> String {
    raw.chars().filter(|&c| c != ' ' && c != '&').collect()
}
