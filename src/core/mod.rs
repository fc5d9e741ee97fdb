//! Core domain types shared by the estimator, the risk model, and the
//! output writers.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Organization size bracket. Selects both the sizing defaults and the
/// compliance risk benchmarks.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OrgSize {
    Small,
    #[default]
    Medium,
    Large,
    Major,
}

impl OrgSize {
    pub fn all() -> [OrgSize; 4] {
        [OrgSize::Small, OrgSize::Medium, OrgSize::Large, OrgSize::Major]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrgSize::Small => "small",
            OrgSize::Medium => "medium",
            OrgSize::Large => "large",
            OrgSize::Major => "major",
        }
    }
}

/// Compliance risk tier derived from the five-item checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceTier {
    High,
    Medium,
    Low,
}

impl ComplianceTier {
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceTier::High => "High Risk",
            ComplianceTier::Medium => "Medium Risk",
            ComplianceTier::Low => "Low Risk",
        }
    }

    pub fn all() -> [ComplianceTier; 3] {
        [
            ComplianceTier::High,
            ComplianceTier::Medium,
            ComplianceTier::Low,
        ]
    }
}

/// Five independent compliance posture flags. Each unchecked item is a gap
/// the classifier counts against the organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceChecklist {
    /// Meeting agendas and notices are posted within statutory deadlines.
    pub agenda_posting: bool,
    /// Published documents meet accessibility requirements.
    pub accessible_publishing: bool,
    /// A record retention schedule is in place and followed.
    pub retention_schedule: bool,
    /// Meeting decisions carry an audit trail.
    pub audit_trail: bool,
    /// Public records requests follow a documented workflow.
    pub records_workflow: bool,
}

impl ComplianceChecklist {
    pub fn flags(&self) -> [bool; 5] {
        [
            self.agenda_posting,
            self.accessible_publishing,
            self.retention_schedule,
            self.audit_trail,
            self.records_workflow,
        ]
    }

    pub fn checked_count(&self) -> usize {
        self.flags().iter().filter(|f| **f).count()
    }
}

/// Raw field values as reported by the input source. Numeric fields are
/// `None` when absent or unparseable; sanitization substitutes defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInput {
    pub org_size: OrgSize,
    pub committee_meetings: Option<u32>,
    pub council_meetings: Option<u32>,
    pub staff_count: Option<u32>,
    pub manual_hours_per_meeting: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub packet_pages: Option<u32>,
    pub printed_copies: Option<u32>,
    pub checklist: ComplianceChecklist,
}

/// Fully populated input record produced by sanitization. Every formula in
/// the estimator reads from this; no defaulting happens past this point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub org_size: OrgSize,
    /// Total meetings per year across committees and councils.
    pub meetings: u32,
    /// Parsed and defaulted, but consumed by no formula. Reported back to
    /// the presenter only.
    pub staff_count: u32,
    pub manual_hours_per_meeting: f64,
    pub hourly_rate: f64,
    pub packet_pages: u32,
    pub printed_copies: u32,
    pub checklist: ComplianceChecklist,
}

/// Relative share of each savings category in the combined total, for
/// rendering proportional indicators. All zero when the combined total is
/// not positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsShares {
    pub labor: f64,
    pub print: f64,
    pub compliance: f64,
}

impl SavingsShares {
    pub fn of(labor: f64, print: f64, compliance: f64) -> Self {
        let total = labor + print + compliance;
        if total > 0.0 {
            Self {
                labor: labor / total,
                print: print / total,
                compliance: compliance / total,
            }
        } else {
            Self {
                labor: 0.0,
                print: 0.0,
                compliance: 0.0,
            }
        }
    }
}

/// Everything the presenter needs to render the results panel. Ephemeral:
/// recomputed from scratch on every input change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_hours_saved: f64,
    /// Labor plus print savings.
    pub total_savings: f64,
    /// Total savings plus compliance savings.
    pub total_value: f64,
    pub labor_savings: f64,
    pub print_savings: f64,
    pub compliance_savings: f64,
    /// Modeled litigation exposure at the current compliance tier.
    pub current_risk_exposure: f64,
    pub annual_risk_cost_without: f64,
    pub annual_risk_cost_with: f64,
    pub automated_hours_per_meeting: f64,
    pub hours_saved_per_meeting: f64,
    /// Signed: manual hours below the automated floor produce negative
    /// savings, which the presenter shows as-is.
    pub time_savings_pct: i32,
    pub compliance_tier: ComplianceTier,
    pub shares: SavingsShares,
}
