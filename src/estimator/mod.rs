//! The calculation core: maps sizing inputs and a compliance checklist to
//! estimated time, cost, and risk-reduction savings.
//!
//! Everything here is pure arithmetic over a sanitized input record. No
//! operation can fail; invalid inputs are defaulted before the formulas
//! run, and the two division edge cases (zero manual hours, all-zero
//! savings) are explicitly defined rather than propagated as NaN.


use crate::config::{
    self, org_size_profile, GovroiConfig, OrgSizeProfile, AUTOMATED_HOURS_FRACTION,
    AUTOMATED_HOURS_MAX, AUTOMATED_HOURS_MIN, FALLBACK_TOTAL_MEETINGS,
};
use crate::core::{
    CalculationInput, CalculationResult, ComplianceChecklist, ComplianceTier, RawInput,
    SavingsShares,
};
use crate::risk::{self, RiskModel};

/// Owns the tunable constants; the benchmark tables are compiled-in
/// reference data. `Default` gives the published benchmark figures.
#[derive(Debug, Clone, Copy)]
pub struct Estimator {
    pub cost_per_page: f64,
    pub risk_reduction_factor: f64,
}

impl Default for Estimator {
    fn default() -> Self {
        Self {
            cost_per_page: config::COST_PER_PAGE,
            risk_reduction_factor: config::RISK_REDUCTION_FACTOR,
        }
    }
}

impl Estimator {
    pub fn from_config(cfg: &GovroiConfig) -> Self {
        Self {
            cost_per_page: cfg.cost_per_page(),
            risk_reduction_factor: cfg.risk_reduction_factor(),
        }
    }

    /// Compute every quantity the presenter displays. Pure and reentrant:
    /// identical input yields bit-identical output.
    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        let manual = input.manual_hours_per_meeting;
        let meetings = input.meetings as f64;

        // Non-positive manual hours produce no time component at all;
        // the percentage division is skipped.
        let (automated, hours_saved_per_meeting, time_savings_pct) = if manual > 0.0 {
            let automated = automated_hours(manual);
            let saved = manual - automated;
            let pct = (saved / manual * 100.0).round() as i32;
            (automated, saved, pct)
        } else {
            (0.0, 0.0, 0)
        };

        let total_hours_saved = meetings * hours_saved_per_meeting;
        let labor_savings = total_hours_saved * input.hourly_rate;
        let print_savings = meetings
            * input.packet_pages as f64
            * input.printed_copies as f64
            * self.cost_per_page;

        let compliance_tier = classify_compliance(&input.checklist);
        let bench = risk::benchmark(input.org_size, compliance_tier);
        let model = RiskModel::new(self.risk_reduction_factor);
        let annual_risk_cost_without = model.annual_cost(bench);
        let annual_risk_cost_with = model.annual_cost(model.mitigated(bench));
        let compliance_savings = annual_risk_cost_without - annual_risk_cost_with;

        let total_savings = labor_savings + print_savings;
        let total_value = total_savings + compliance_savings;

        CalculationResult {
            total_hours_saved,
            total_savings,
            total_value,
            labor_savings,
            print_savings,
            compliance_savings,
            current_risk_exposure: bench.exposure,
            annual_risk_cost_without,
            annual_risk_cost_with,
            automated_hours_per_meeting: automated,
            hours_saved_per_meeting,
            time_savings_pct,
            compliance_tier,
            shares: SavingsShares::of(labor_savings, print_savings, compliance_savings),
        }
    }
}

/// Estimated prep hours per meeting with automation: 20% of the manual
/// time, floored at 3 hours and capped at 8. Below 15 manual hours the
/// floor dominates; above 40 the cap does.
pub fn automated_hours(manual_hours: f64) -> f64 {
    (manual_hours * AUTOMATED_HOURS_FRACTION).clamp(AUTOMATED_HOURS_MIN, AUTOMATED_HOURS_MAX)
}

/// Bucket the checklist into a risk tier by checked count: 0-1 high,
/// 2-3 medium, 4-5 low. Total over all 32 flag combinations.
pub fn classify_compliance(checklist: &ComplianceChecklist) -> ComplianceTier {
    match checklist.checked_count() {
        0 | 1 => ComplianceTier::High,
        2 | 3 => ComplianceTier::Medium,
        _ => ComplianceTier::Low,
    }
}

/// Replace absent or unusable numeric fields with documented defaults.
/// Zero and negative values count as absent, matching the input widgets'
/// fail-open behavior, except for the meeting counts: those default to
/// zero individually and only their sum falls back to 48.
pub fn sanitize(raw: &RawInput) -> CalculationInput {
    let committee = raw.committee_meetings.unwrap_or(0);
    let council = raw.council_meetings.unwrap_or(0);
    let total = committee + council;
    let meetings = if total == 0 {
        FALLBACK_TOTAL_MEETINGS
    } else {
        total
    };

    CalculationInput {
        org_size: raw.org_size,
        meetings,
        staff_count: positive_or(raw.staff_count, 3),
        manual_hours_per_meeting: finite_positive_or(raw.manual_hours_per_meeting, 25.0),
        hourly_rate: finite_positive_or(raw.hourly_rate, 40.0),
        packet_pages: positive_or(raw.packet_pages, 150),
        printed_copies: positive_or(raw.printed_copies, 15),
        checklist: raw.checklist,
    }
}

/// Sizing defaults for an organization size. The presenter pushes these
/// back into editable fields when the size selector changes, then
/// recomputes.
pub fn apply_org_size_defaults(size: crate::core::OrgSize) -> &'static OrgSizeProfile {
    org_size_profile(size)
}

fn positive_or(value: Option<u32>, default: u32) -> u32 {
    value.filter(|&v| v > 0).unwrap_or(default)
}

fn finite_positive_or(value: Option<f64>, default: f64) -> f64 {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(default)
}
