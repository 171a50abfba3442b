// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Switchboard routing engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup. Every option has a compiled default; an empty
//! config file (or none at all) yields a fully usable configuration.

use serde::{Deserialize, Serialize};

/// Top-level Switchboard configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment
/// variable overrides. Read once at process start; no hot reload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchboardConfig {
    /// Process identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Decision engine policy thresholds.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Clarification state tracker settings.
    #[serde(default)]
    pub clarification: ClarificationConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the routing service.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "switchboard".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Decision engine policy thresholds.
///
/// The thresholds are configuration, not hardcoded literals, so
/// deployments can retune the confidence policy without a code change.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Top normalized score above which the classifier is trusted
    /// outright. A top score exactly at this value stays Medium.
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,

    /// Top normalized score below which confidence is Low. Scores at or
    /// above it (up to and including `high_threshold`) are Medium.
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: f64,

    /// Proximity margin: categories whose normalized score is within
    /// this distance of the top score count as comparable intents.
    #[serde(default = "default_multi_intent_margin")]
    pub multi_intent_margin: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            high_threshold: default_high_threshold(),
            medium_threshold: default_medium_threshold(),
            multi_intent_margin: default_multi_intent_margin(),
        }
    }
}

fn default_high_threshold() -> f64 {
    0.8
}

fn default_medium_threshold() -> f64 {
    0.5
}

fn default_multi_intent_margin() -> f64 {
    0.15
}

/// Clarification state tracker configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClarificationConfig {
    /// Idle expiry for a pending clarification, in seconds. The
    /// single-turn bound is structural (hints are consumed on read);
    /// this timeout covers conversations that go idle instead.
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for ClarificationConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

fn default_idle_timeout_secs() -> u64 {
    120
}
