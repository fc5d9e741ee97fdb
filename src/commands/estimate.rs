use anyhow::Result;
use std::path::PathBuf;

use crate::config::{self, GovroiConfig};
use crate::core::{ComplianceChecklist, OrgSize, RawInput};
use crate::estimator::{self, Estimator};
use crate::formatting::{Currency, FormattingConfig};
use crate::io::output::{self, OutputFormat, Report};

/// Everything the estimate command needs, assembled from CLI flags.
pub struct EstimateConfig {
    pub size: OrgSize,
    pub committee_meetings: Option<u32>,
    pub council_meetings: Option<u32>,
    pub staff: Option<u32>,
    pub hours_per_meeting: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub packet_pages: Option<u32>,
    pub printed_copies: Option<u32>,
    pub checklist: ComplianceChecklist,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub currency: Option<Currency>,
    pub plain: bool,
    pub config: Option<PathBuf>,
}

pub fn run(cfg: EstimateConfig) -> Result<()> {
    let file_config = load_file_config(&cfg)?;

    let raw = build_raw_input(&cfg);
    let input = estimator::sanitize(&raw);
    let result = Estimator::from_config(&file_config).compute(&input);
    let report = Report::new(input, result);

    let format = cfg
        .format
        .or_else(|| file_config.default_output_format())
        .unwrap_or(OutputFormat::Terminal);
    let currency = cfg
        .currency
        .or_else(|| file_config.default_currency())
        .unwrap_or(Currency::Usd);
    let fmt = if cfg.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
    .with_currency(currency);

    let mut writer = output::create_writer(format, cfg.output.as_deref(), fmt)?;
    writer.write_report(&report)
}

fn load_file_config(cfg: &EstimateConfig) -> Result<GovroiConfig> {
    match &cfg.config {
        Some(path) => Ok(config::load_config_file(path)?),
        None => Ok(config::load_config()),
    }
}

/// Field precedence mirrors the original selector-then-edit flow: explicit
/// flags win, unset flags take the selected size profile's value, and
/// zero or invalid entries fall through to the sanitize defaults.
fn build_raw_input(cfg: &EstimateConfig) -> RawInput {
    let profile = estimator::apply_org_size_defaults(cfg.size);

    RawInput {
        org_size: cfg.size,
        committee_meetings: cfg.committee_meetings.or(Some(profile.committee_meetings)),
        council_meetings: cfg.council_meetings.or(Some(profile.council_meetings)),
        staff_count: cfg.staff.or(Some(profile.staff_count)),
        manual_hours_per_meeting: cfg
            .hours_per_meeting
            .or(Some(profile.hours_per_meeting)),
        hourly_rate: cfg.hourly_rate.or(Some(profile.hourly_rate)),
        packet_pages: cfg.packet_pages.or(Some(profile.packet_pages)),
        printed_copies: cfg.printed_copies.or(Some(profile.printed_copies)),
        checklist: cfg.checklist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config(size: OrgSize) -> EstimateConfig {
        EstimateConfig {
            size,
            committee_meetings: None,
            council_meetings: None,
            staff: None,
            hours_per_meeting: None,
            hourly_rate: None,
            packet_pages: None,
            printed_copies: None,
            checklist: ComplianceChecklist::default(),
            format: None,
            output: None,
            currency: None,
            plain: true,
            config: None,
        }
    }

    #[test]
    fn unset_fields_take_profile_values() {
        let raw = build_raw_input(&minimal_config(OrgSize::Large));
        assert_eq!(raw.committee_meetings, Some(36));
        assert_eq!(raw.hourly_rate, Some(45.0));
        assert_eq!(raw.packet_pages, Some(175));
    }

    #[test]
    fn explicit_flags_override_profile_values() {
        let cfg = EstimateConfig {
            committee_meetings: Some(5),
            hourly_rate: Some(99.0),
            ..minimal_config(OrgSize::Large)
        };
        let raw = build_raw_input(&cfg);
        assert_eq!(raw.committee_meetings, Some(5));
        assert_eq!(raw.council_meetings, Some(36));
        assert_eq!(raw.hourly_rate, Some(99.0));
    }
}
