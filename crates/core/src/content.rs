//! Hand-curated sections that do not come from the workbook.
//!
//! These are maintained here by hand and emitted verbatim on every run.

use crate::document::{
    BusinessCase, Milestone, Target, Timeline, TimelinePhase, UseCase, ValueProjections,
};

/// Working-capital and AP business case figures.
#[must_use]
pub fn business_case() -> BusinessCase {
    BusinessCase {
        current_dso: 60,
        target_dso_reduction: 10,
        receivables: 70_000_000,
        daily_sales_rate: 1_166_667,
        working_capital_freed: 11_666_670,
        cost_of_capital: 0.035,
        annual_capital_savings: 408_333,
        vendor_inquiry_ftes: 15,
        deflection_rate_target: 0.65,
        ap_time_savings_target: 0.25,
        invoice_cycle_current_days: 5,
        invoice_cycle_target_days: 2,
        ai_accuracy_target: 0.80,
    }
}

/// Projected value and payback.
#[must_use]
pub fn value_projections() -> ValueProjections {
    ValueProjections {
        working_capital_value: 400_000,
        ap_productivity_value: 180_000,
        process_acceleration_value: 70_000,
        total_year1_value: 650_000,
        total_year2_value: 850_000,
        payback_months: 5,
        three_year_roi: 5.5,
    }
}

const TIMELINE_PHASES: [(&str, &str, &str); 4] = [
    (
        "Discovery & Setup",
        "1-2",
        "Kickoff, data source identification, environment setup",
    ),
    (
        "AI Development",
        "3-5",
        "SAP integration, AI model configuration, prompt engineering",
    ),
    (
        "UI & Testing",
        "6-8",
        "Power Apps interface, workflow testing, UAT",
    ),
    (
        "Live Pilot",
        "9-12",
        "Process 100+ invoices, measure results, prepare recommendations",
    ),
];

const MILESTONES: [(&str, &str); 6] = [
    ("February 2026", "Scope & budget alignment"),
    ("End of February", "MSA terms complete"),
    ("Early March", "SOW delivered"),
    ("Mid-March", "Finalize agreements"),
    ("April 6", "Project kick-off"),
    ("Late June", "Pilot live"),
];

/// Delivery phases and commercial milestones.
#[must_use]
pub fn timeline() -> Timeline {
    Timeline {
        phases: TIMELINE_PHASES
            .iter()
            .map(|&(name, weeks, description)| TimelinePhase {
                name,
                weeks,
                description,
            })
            .collect(),
        milestones: MILESTONES
            .iter()
            .map(|&(date, event)| Milestone { date, event })
            .collect(),
    }
}

fn targets(pairs: &[(&'static str, &'static str)]) -> Vec<Target> {
    pairs
        .iter()
        .map(|&(metric, value)| Target { metric, value })
        .collect()
}

/// The two pilot use cases.
#[must_use]
pub fn use_cases() -> Vec<UseCase> {
    vec![
        UseCase {
            id: 1,
            name: "AI Vendor Communication Bot",
            kind: "Quick Win",
            challenge: "Vendor inquiries take 2-3 days via portal or 5-10 days via email",
            solution: "AI-powered chatbot handling invoice status and payment queries in real-time",
            targets: targets(&[
                ("Deflection rate", "60-70%"),
                ("Response time", "< 5 minutes"),
                ("AP time savings", "20-30%"),
            ]),
        },
        UseCase {
            id: 2,
            name: "Order-to-Cash AI Automation",
            kind: "Strategic Win",
            challenge: "$70M trapped in receivables, 60-day DSO due to ECN delays",
            solution: "AI identifies ECNs, calculates pricing impact, generates invoice drafts",
            targets: targets(&[
                ("Invoice cycle time", "30-40% reduction"),
                ("AI accuracy", "80%+ vs manual"),
                ("Working capital", "Faster unlock"),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_business_case_json() {
        let value = serde_json::to_value(business_case()).unwrap();
        assert_eq!(
            value,
            json!({
                "currentDSO": 60,
                "targetDSOReduction": 10,
                "receivables": 70_000_000,
                "dailySalesRate": 1_166_667,
                "workingCapitalFreed": 11_666_670,
                "costOfCapital": 0.035,
                "annualCapitalSavings": 408_333,
                "vendorInquiryFTEs": 15,
                "deflectionRateTarget": 0.65,
                "apTimeSavingsTarget": 0.25,
                "invoiceCycleCurrentDays": 5,
                "invoiceCycleTargetDays": 2,
                "aiAccuracyTarget": 0.80
            })
        );
    }

    #[test]
    fn test_value_projections_json() {
        let value = serde_json::to_value(value_projections()).unwrap();
        assert_eq!(
            value,
            json!({
                "workingCapitalValue": 400_000,
                "apProductivityValue": 180_000,
                "processAccelerationValue": 70_000,
                "totalYear1Value": 650_000,
                "totalYear2Value": 850_000,
                "paybackMonths": 5,
                "threeYearROI": 5.5
            })
        );
    }

    #[test]
    fn test_timeline_shape() {
        let timeline = timeline();
        let weeks: Vec<&str> = timeline.phases.iter().map(|p| p.weeks).collect();
        assert_eq!(weeks, vec!["1-2", "3-5", "6-8", "9-12"]);
        assert_eq!(timeline.milestones.len(), 6);
        assert_eq!(timeline.milestones[0].date, "February 2026");
        assert_eq!(timeline.milestones[5].event, "Pilot live");
    }

    #[test]
    fn test_use_cases_json() {
        let value = serde_json::to_value(use_cases()).unwrap();
        assert_eq!(value[0]["type"], "Quick Win");
        assert_eq!(value[1]["name"], "Order-to-Cash AI Automation");
        assert_eq!(
            value[1]["targets"][2],
            json!({"metric": "Working capital", "value": "Faster unlock"})
        );
    }
}
