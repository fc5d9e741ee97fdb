// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod estimator;
pub mod formatting;
pub mod io;
pub mod risk;

// Re-export commonly used types
pub use crate::core::{
    CalculationInput, CalculationResult, ComplianceChecklist, ComplianceTier, OrgSize,
    RawInput, SavingsShares,
};

pub use crate::config::{org_size_profile, GovroiConfig, OrgSizeProfile};

pub use crate::estimator::{
    apply_org_size_defaults, automated_hours, classify_compliance, sanitize, Estimator,
};

pub use crate::formatting::{format_currency, format_number, Currency, FormattingConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, Report};

pub use crate::risk::{benchmark, tier_advisory, RiskBenchmark, RiskModel};
