//! Config parsing and the fail-open override layer.

use govroi::config::{load_config_file, parse_and_validate_config, GovroiConfig};
use govroi::Estimator;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn empty_config_uses_compiled_in_defaults() {
    let config = parse_and_validate_config("").unwrap();
    assert_eq!(config.cost_per_page(), 0.07);
    assert_eq!(config.risk_reduction_factor(), 0.80);
    assert!(config.default_output_format().is_none());
}

#[test]
fn overrides_flow_through_to_the_estimator() {
    let contents = indoc! {r#"
        [costs]
        cost_per_page = 0.05

        [risk]
        reduction_factor = 0.60

        [output]
        default_format = "json"
        default_currency = "cad"
    "#};
    let config = parse_and_validate_config(contents).unwrap();

    assert_eq!(config.cost_per_page(), 0.05);
    assert_eq!(config.risk_reduction_factor(), 0.60);
    assert_eq!(
        config.default_output_format(),
        Some(govroi::OutputFormat::Json)
    );
    assert_eq!(config.default_currency(), Some(govroi::Currency::Cad));

    let estimator = Estimator::from_config(&config);
    assert_eq!(estimator.cost_per_page, 0.05);
    assert_eq!(estimator.risk_reduction_factor, 0.60);
}

#[test]
fn out_of_range_reduction_factor_falls_back_to_defaults() {
    let contents = indoc! {r#"
        [risk]
        reduction_factor = 1.5
    "#};
    let config = parse_and_validate_config(contents).unwrap();
    assert_eq!(config.risk_reduction_factor(), 0.80);
}

#[test]
fn negative_cost_per_page_falls_back_to_defaults() {
    let contents = indoc! {r#"
        [costs]
        cost_per_page = -1.0
    "#};
    let config = parse_and_validate_config(contents).unwrap();
    assert_eq!(config.cost_per_page(), 0.07);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(parse_and_validate_config("not [valid").is_err());
}

#[test]
fn unknown_output_format_string_is_ignored() {
    let contents = indoc! {r#"
        [output]
        default_format = "xml"
    "#};
    let config = parse_and_validate_config(contents).unwrap();
    assert!(config.default_output_format().is_none());
}

#[test]
fn explicit_config_file_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        indoc! {r#"
            [costs]
            cost_per_page = 0.10
        "#},
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();
    assert_eq!(config.cost_per_page(), 0.10);
}

#[test]
fn explicit_config_file_missing_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(load_config_file(&missing).is_err());
}

#[test]
fn default_config_serializes_round_trip() {
    let config = GovroiConfig::default();
    let text = toml::to_string(&config).unwrap();
    let back = parse_and_validate_config(&text).unwrap();
    assert_eq!(back.cost_per_page(), config.cost_per_page());
}
