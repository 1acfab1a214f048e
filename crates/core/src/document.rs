//! The ROM data document written for the web presentation.
//!
//! Field order here is the key order of the serialized JSON.

use indexmap::IndexMap;
use romdata_sheet::CellValue;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Version stamped into `meta.version`.
pub const DOCUMENT_VERSION: &str = "1.0";
/// Client label stamped into `meta.client`.
pub const CLIENT: &str = "MAHLE";
/// Project label stamped into `meta.project`.
pub const PROJECT: &str = "AI Finance Transformation";

/// Root of `rom-data.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RomDocument {
    pub meta: Meta,
    pub summary: Summary,
    /// Never populated; kept so the presentation always finds the key.
    pub team: Vec<serde_json::Value>,
    pub phases: IndexMap<String, Phase>,
    #[serde(serialize_with = "object_or_empty")]
    pub totals: Option<Totals>,
    pub business_case: BusinessCase,
    pub value_projections: ValueProjections,
    pub timeline: Timeline,
    pub use_cases: Vec<UseCase>,
    pub staffing: Vec<StaffingEntry>,
}

/// Renders `None` as `{}` rather than `null`.
fn object_or_empty<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Generation date, `YYYY-MM-DD`.
    pub last_updated: String,
    pub version: String,
    pub client: String,
    pub project: String,
    /// Base name of the workbook the document was built from.
    pub source_file: String,
}

/// A number read from a workbook cell, or the whole-number fallback used
/// when the cell is empty, zero or not numeric.
///
/// Cell values serialize as floats (`75.0`); fallbacks as integers (`60`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Figure {
    Cell(f64),
    Fallback(i64),
}

impl Figure {
    /// Read `cell` as a float, falling back to `fallback` when it is falsy
    /// or not a finite number.
    #[must_use]
    pub fn from_cell(cell: &CellValue, fallback: i64) -> Self {
        match cell.as_float() {
            Some(value) if cell.is_truthy() => Figure::Cell(value),
            _ => Figure::Fallback(fallback),
        }
    }

    /// The numeric value, whichever way it was obtained.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Figure::Cell(value) => value,
            Figure::Fallback(value) => value as f64,
        }
    }
}

/// Headline investment, duration and velocity figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub investment_low: u64,
    pub investment_avg: u64,
    pub investment_high: u64,
    pub weeks_low: u32,
    pub weeks_avg: u32,
    pub weeks_high: u32,
    pub sprints_low: u32,
    pub sprints_avg: u32,
    pub sprints_high: u32,
    pub target_velocity: Figure,
    pub blended_rate: f64,
}

impl Default for Summary {
    fn default() -> Self {
        Summary {
            investment_low: 260_000,
            investment_avg: 300_000,
            investment_high: 370_000,
            weeks_low: 10,
            weeks_avg: 12,
            weeks_high: 14,
            sprints_low: 5,
            sprints_avg: 6,
            sprints_high: 7,
            target_velocity: Figure::Fallback(Summary::DEFAULT_TARGET_VELOCITY),
            blended_rate: 108.38,
        }
    }
}

impl Summary {
    /// Velocity used when the workbook gives none.
    pub const DEFAULT_TARGET_VELOCITY: i64 = 60;
}

/// Estimation points for one project phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub points_low: i64,
    pub points_high: i64,
    pub features: i64,
}

/// Sums over every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub points_low: i64,
    pub points_high: i64,
    pub total_features: i64,
}

impl Totals {
    /// Sum the phases, or `None` when there are none.
    pub fn from_phases<'a>(phases: impl IntoIterator<Item = &'a Phase>) -> Option<Self> {
        let mut phases = phases.into_iter().peekable();
        phases.peek()?;
        Some(phases.fold(Totals::default(), |acc, phase| Totals {
            points_low: acc.points_low + phase.points_low,
            points_high: acc.points_high + phase.points_high,
            total_features: acc.total_features + phase.features,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingEntry {
    pub role: String,
    pub fte: Figure,
    pub cost_rate: Figure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCase {
    #[serde(rename = "currentDSO")]
    pub current_dso: u32,
    #[serde(rename = "targetDSOReduction")]
    pub target_dso_reduction: u32,
    pub receivables: u64,
    pub daily_sales_rate: u64,
    pub working_capital_freed: u64,
    pub cost_of_capital: f64,
    pub annual_capital_savings: u64,
    #[serde(rename = "vendorInquiryFTEs")]
    pub vendor_inquiry_ftes: u32,
    pub deflection_rate_target: f64,
    pub ap_time_savings_target: f64,
    pub invoice_cycle_current_days: u32,
    pub invoice_cycle_target_days: u32,
    pub ai_accuracy_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueProjections {
    pub working_capital_value: u64,
    pub ap_productivity_value: u64,
    pub process_acceleration_value: u64,
    pub total_year1_value: u64,
    pub total_year2_value: u64,
    pub payback_months: u32,
    #[serde(rename = "threeYearROI")]
    pub three_year_roi: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub phases: Vec<TimelinePhase>,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePhase {
    pub name: &'static str,
    pub weeks: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub date: &'static str,
    pub event: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub id: u32,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub targets: Vec<Target>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub metric: &'static str,
    pub value: &'static str,
}
