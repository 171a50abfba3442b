// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Confidence banding.
//!
//! Pure function of the top normalized score and the configured
//! thresholds. Boundary values resolve toward the stricter band: a top
//! score exactly at the high threshold is Medium, not High.

use switchboard_config::model::EngineConfig;
use switchboard_core::ConfidenceBand;

/// Map a top normalized score to its confidence band.
///
/// High iff `top > high_threshold`; Medium iff
/// `medium_threshold <= top <= high_threshold`; Low otherwise.
pub fn band_for(top: f64, config: &EngineConfig) -> ConfidenceBand {
    if top > config.high_threshold {
        ConfidenceBand::High
    } else if top >= config.medium_threshold {
        ConfidenceBand::Medium
    } else {
        ConfidenceBand::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn above_high_threshold_is_high() {
        assert_eq!(band_for(0.81, &defaults()), ConfidenceBand::High);
        assert_eq!(band_for(1.0, &defaults()), ConfidenceBand::High);
    }

    #[test]
    fn exactly_high_threshold_is_medium() {
        // The boundary resolves to the stricter side.
        assert_eq!(band_for(0.8, &defaults()), ConfidenceBand::Medium);
    }

    #[test]
    fn exactly_medium_threshold_is_medium() {
        assert_eq!(band_for(0.5, &defaults()), ConfidenceBand::Medium);
    }

    #[test]
    fn below_medium_threshold_is_low() {
        assert_eq!(band_for(0.49, &defaults()), ConfidenceBand::Low);
        assert_eq!(band_for(1.0 / 3.0, &defaults()), ConfidenceBand::Low);
    }

    #[test]
    fn retuned_thresholds_are_respected() {
        let config = EngineConfig {
            high_threshold: 0.9,
            medium_threshold: 0.3,
            ..EngineConfig::default()
        };
        assert_eq!(band_for(0.85, &config), ConfidenceBand::Medium);
        assert_eq!(band_for(0.25, &config), ConfidenceBand::Low);
        assert_eq!(band_for(0.95, &config), ConfidenceBand::High);
    }
}
