//! Compliance risk benchmarks and the mitigation model.
//!
//! Exposure figures model expected litigation and compliance costs (open
//! meetings violations, records request failures, accessibility complaints)
//! per organization size and risk tier, amortized over a five-year window.

use serde::{Deserialize, Serialize};

use crate::config::RISK_AMORTIZATION_YEARS;
use crate::core::{ComplianceTier, OrgSize};

/// Expected exposure for one (size, tier) pair: a dollar amount and the
/// probability of incurring it within the amortization window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBenchmark {
    pub exposure: f64,
    pub probability: f64,
}

/// Benchmark lookup, total over the twelve (size, tier) pairs.
pub fn benchmark(size: OrgSize, tier: ComplianceTier) -> RiskBenchmark {
    use OrgSize::*;
    let (exposure, probability) = match (size, tier) {
        (Small, ComplianceTier::High) => (50_000.0, 0.10),
        (Small, ComplianceTier::Medium) => (30_000.0, 0.05),
        (Small, ComplianceTier::Low) => (15_000.0, 0.02),
        (Medium, ComplianceTier::High) => (150_000.0, 0.20),
        (Medium, ComplianceTier::Medium) => (75_000.0, 0.10),
        (Medium, ComplianceTier::Low) => (35_000.0, 0.05),
        (Large, ComplianceTier::High) => (250_000.0, 0.30),
        (Large, ComplianceTier::Medium) => (125_000.0, 0.15),
        (Large, ComplianceTier::Low) => (50_000.0, 0.07),
        (Major, ComplianceTier::High) => (400_000.0, 0.40),
        (Major, ComplianceTier::Medium) => (200_000.0, 0.20),
        (Major, ComplianceTier::Low) => (75_000.0, 0.10),
    };
    RiskBenchmark {
        exposure,
        probability,
    }
}

/// Applies the mitigation factor and the amortization window to a
/// benchmark. The factor scales both exposure and probability.
#[derive(Debug, Clone, Copy)]
pub struct RiskModel {
    reduction_factor: f64,
}

impl Default for RiskModel {
    fn default() -> Self {
        Self::new(crate::config::RISK_REDUCTION_FACTOR)
    }
}

impl RiskModel {
    pub fn new(reduction_factor: f64) -> Self {
        Self { reduction_factor }
    }

    /// Annual expected cost of the modeled exposure.
    pub fn annual_cost(&self, b: RiskBenchmark) -> f64 {
        b.exposure * b.probability / RISK_AMORTIZATION_YEARS
    }

    /// Benchmark after adoption.
    pub fn mitigated(&self, b: RiskBenchmark) -> RiskBenchmark {
        RiskBenchmark {
            exposure: b.exposure * (1.0 - self.reduction_factor),
            probability: b.probability * (1.0 - self.reduction_factor),
        }
    }

    /// Annual expected cost avoided by adoption.
    pub fn annual_savings(&self, b: RiskBenchmark) -> f64 {
        self.annual_cost(b) - self.annual_cost(self.mitigated(b))
    }
}

/// Advisory copy shown alongside the tier badge.
pub fn tier_advisory(tier: ComplianceTier) -> &'static str {
    match tier {
        ComplianceTier::High => {
            "Without automated compliance tooling, the organization faces significant \
             exposure to open meetings and public records litigation. Automated notice \
             posting, accessible publishing, and record retention close the most common gaps."
        }
        ComplianceTier::Medium => {
            "Some compliance measures are in place. Automated workflows strengthen \
             protection by keeping notice, publishing, and retention practices consistent \
             with open meetings and accessibility requirements."
        }
        ComplianceTier::Low => {
            "Good compliance practices are already in place. Automation adds audit \
             trails, compliant document publishing, and built-in retention policies as a \
             further layer of protection."
        }
    }
}
