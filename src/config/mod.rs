//! Calculation constants, organization size presets, and the optional
//! `.govroi.toml` override layer.

mod benchmarks;
mod loader;

pub use benchmarks::{org_size_profile, OrgSizeProfile};
pub use loader::{load_config, load_config_file, parse_and_validate_config};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::formatting::Currency;
use crate::io::output::OutputFormat;

/// Printing cost per page (B&W laser).
pub const COST_PER_PAGE: f64 = 0.07;

/// Assumed mitigation from adopting automated meeting management, applied
/// multiplicatively to both litigation exposure and its probability.
pub const RISK_REDUCTION_FACTOR: f64 = 0.80;

/// Litigation exposure is modeled over a five-year window; annual expected
/// cost divides by this.
pub const RISK_AMORTIZATION_YEARS: f64 = 5.0;

/// Automated prep takes 20% of the manual time per meeting.
pub const AUTOMATED_HOURS_FRACTION: f64 = 0.2;

/// Floor on automated prep hours per meeting.
pub const AUTOMATED_HOURS_MIN: f64 = 3.0;

/// Cap on automated prep hours per meeting, regardless of manual time.
pub const AUTOMATED_HOURS_MAX: f64 = 8.0;

/// Total meetings substituted when committee and council counts sum to zero.
pub const FALLBACK_TOTAL_MEETINGS: u32 = 48;

/// Errors surfaced when an explicitly requested config file cannot be used.
/// The ambient discovery path never raises these; it falls open to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Root configuration structure for govroi, loaded from `.govroi.toml`.
/// Every section is optional; absent sections use compiled-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GovroiConfig {
    /// Printing cost overrides
    #[serde(default)]
    pub costs: Option<CostConfig>,

    /// Risk model overrides
    #[serde(default)]
    pub risk: Option<RiskConfig>,

    /// Output defaults
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostConfig {
    #[serde(default = "default_cost_per_page")]
    pub cost_per_page: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            cost_per_page: default_cost_per_page(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    #[serde(default = "default_reduction_factor")]
    pub reduction_factor: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            reduction_factor: default_reduction_factor(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format when no --format flag is given
    #[serde(default)]
    pub default_format: Option<String>,

    /// Default display currency when no --currency flag is given
    #[serde(default)]
    pub default_currency: Option<String>,
}

fn default_cost_per_page() -> f64 {
    COST_PER_PAGE
}

fn default_reduction_factor() -> f64 {
    RISK_REDUCTION_FACTOR
}

impl GovroiConfig {
    pub fn cost_per_page(&self) -> f64 {
        self.costs
            .as_ref()
            .map(|c| c.cost_per_page)
            .unwrap_or(COST_PER_PAGE)
    }

    pub fn risk_reduction_factor(&self) -> f64 {
        self.risk
            .as_ref()
            .map(|r| r.reduction_factor)
            .unwrap_or(RISK_REDUCTION_FACTOR)
    }

    pub fn default_output_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
            .and_then(OutputFormat::parse)
    }

    pub fn default_currency(&self) -> Option<Currency> {
        self.output
            .as_ref()
            .and_then(|o| o.default_currency.as_deref())
            .and_then(Currency::parse)
    }

    /// Reject out-of-range overrides. Used by the loader, which falls back
    /// to defaults per section rather than failing the whole file.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref costs) = self.costs {
            if !costs.cost_per_page.is_finite() || costs.cost_per_page < 0.0 {
                return Err(format!(
                    "costs.cost_per_page must be non-negative, got {}",
                    costs.cost_per_page
                ));
            }
        }
        if let Some(ref risk) = self.risk {
            if !risk.reduction_factor.is_finite()
                || !(0.0..=1.0).contains(&risk.reduction_factor)
            {
                return Err(format!(
                    "risk.reduction_factor must be within [0, 1], got {}",
                    risk.reduction_factor
                ));
            }
        }
        Ok(())
    }
}
