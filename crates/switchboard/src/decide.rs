// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `switchboard decide` command implementation.
//!
//! One-shot mode: route a single utterance and print the decision as
//! JSON for the downstream dispatcher. Scores come either from the
//! `--scores` JSON argument (classifier-in-the-loop deployments) or from
//! the built-in keyword classifier.

use switchboard_classifier::KeywordClassifier;
use switchboard_config::SwitchboardConfig;
use switchboard_core::{
    ClassifierAdapter, RoutingRequest, ScoreVector, SwitchboardError,
};
use switchboard_router::DecisionEngine;
use tracing::debug;

/// Runs the `switchboard decide` command.
pub async fn run_decide(
    config: &SwitchboardConfig,
    utterance: &str,
    scores_json: Option<&str>,
    conversation: Option<String>,
) -> Result<(), SwitchboardError> {
    let scores = match scores_json {
        Some(json) => serde_json::from_str::<ScoreVector>(json)
            .map_err(|e| SwitchboardError::Config(format!("invalid --scores JSON: {e}")))?,
        None => {
            let classifier = KeywordClassifier::new();
            debug!(classifier = classifier.name(), "scoring utterance");
            classifier.classify(utterance).await?
        }
    };

    let conversation_id =
        conversation.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let request = RoutingRequest::new(conversation_id, utterance, scores);

    let engine = DecisionEngine::new(config.engine.clone());
    let decision = engine.decide(&request)?;

    let rendered = serde_json::to_string_pretty(&decision)
        .map_err(|e| SwitchboardError::Internal(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}
