// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes: threshold ranges, threshold ordering, margin bounds.

use crate::diagnostic::ConfigError;
use crate::model::SwitchboardConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &SwitchboardConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    let high = config.engine.high_threshold;
    if !(high > 0.0 && high <= 1.0) {
        errors.push(ConfigError::Validation {
            message: format!("engine.high_threshold must be in (0, 1], got {high}"),
        });
    }

    let medium = config.engine.medium_threshold;
    if !(medium > 0.0 && medium < 1.0) {
        errors.push(ConfigError::Validation {
            message: format!("engine.medium_threshold must be in (0, 1), got {medium}"),
        });
    }

    // Ordering only makes sense when both thresholds are individually valid.
    if high.is_finite() && medium.is_finite() && medium >= high {
        errors.push(ConfigError::Validation {
            message: format!(
                "engine.medium_threshold ({medium}) must be below engine.high_threshold ({high})"
            ),
        });
    }

    let margin = config.engine.multi_intent_margin;
    if !(margin > 0.0 && margin < 1.0) {
        errors.push(ConfigError::Validation {
            message: format!("engine.multi_intent_margin must be in (0, 1), got {margin}"),
        });
    }

    if config.clarification.idle_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "clarification.idle_timeout_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
