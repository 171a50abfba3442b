// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Switchboard configuration system.

use switchboard_config::diagnostic::{ConfigError, suggest_key};
use switchboard_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_switchboard_config() {
    let toml = r#"
[agent]
name = "router-test"
log_level = "debug"

[engine]
high_threshold = 0.85
medium_threshold = 0.4
multi_intent_margin = 0.1

[clarification]
idle_timeout_secs = 60
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "router-test");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.engine.high_threshold, 0.85);
    assert_eq!(config.engine.medium_threshold, 0.4);
    assert_eq!(config.engine.multi_intent_margin, 0.1);
    assert_eq!(config.clarification.idle_timeout_secs, 60);
}

/// Unknown field in [engine] section produces an error.
#[test]
fn unknown_field_in_engine_produces_error() {
    let toml = r#"
[engine]
high_treshold = 0.9
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("high_treshold"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// The high-level entry point converts figment errors to diagnostics.
#[test]
fn load_and_validate_str_reports_unknown_key_diagnostic() {
    let errors =
        load_and_validate_str("[engine]\nhigh_treshold = 0.9\n").expect_err("should reject");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::UnknownKey { .. } | ConfigError::Other(_))),
        "got: {errors:?}"
    );
}

/// Semantic validation runs after deserialization.
#[test]
fn load_and_validate_str_rejects_inverted_thresholds() {
    let errors = load_and_validate_str(
        r#"
[engine]
high_threshold = 0.3
medium_threshold = 0.6
"#,
    )
    .expect_err("should reject inverted thresholds");
    assert!(
        errors.iter().any(|e| {
            matches!(e, ConfigError::Validation { message } if message.contains("must be below"))
        }),
        "got: {errors:?}"
    );
}

/// An absent config still validates: every option has a compiled default.
#[test]
fn missing_config_falls_back_to_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert_eq!(config.engine.high_threshold, 0.8);
    assert_eq!(config.engine.medium_threshold, 0.5);
    assert_eq!(config.engine.multi_intent_margin, 0.15);
}

/// Wrong value type is reported, not silently coerced.
#[test]
fn wrong_value_type_is_rejected() {
    let toml = r#"
[engine]
high_threshold = "very high"
"#;
    assert!(load_config_from_str(toml).is_err());
}

/// Fuzzy suggestion helper proposes the nearest valid key.
#[test]
fn suggest_key_proposes_nearest_key() {
    let valid = ["idle_timeout_secs"];
    assert_eq!(
        suggest_key("idle_timout_secs", &valid),
        Some("idle_timeout_secs".to_string())
    );
}
