// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness wiring the full routing pipeline.
//!
//! `RouterHarness` assembles classifier, decision engine, and
//! clarification tracker the way an embedding service would, and drives
//! one conversational turn per `route()` call: consume any pending
//! clarification hint, classify, decide, record the outcome.

use switchboard_classifier::KeywordClassifier;
use switchboard_config::SwitchboardConfig;
use switchboard_core::{
    ClassifierAdapter, ConversationId, RoutingDecision, RoutingRequest, ScoreVector,
    SwitchboardError,
};
use switchboard_router::DecisionEngine;
use switchboard_state::ClarificationTracker;

use crate::mock_classifier::MockClassifier;

/// Builder for a routing pipeline with configurable parts.
pub struct RouterHarnessBuilder {
    config_toml: Option<String>,
    classifier: Option<Box<dyn ClassifierAdapter>>,
}

impl RouterHarnessBuilder {
    fn new() -> Self {
        Self {
            config_toml: None,
            classifier: None,
        }
    }

    /// Use an explicit TOML configuration instead of defaults.
    pub fn with_config_toml(mut self, toml: impl Into<String>) -> Self {
        self.config_toml = Some(toml.into());
        self
    }

    /// Replace the default keyword classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn ClassifierAdapter>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Use a mock classifier that replays the given score vectors.
    pub fn with_scripted_scores(self, scores: Vec<ScoreVector>) -> Self {
        self.with_classifier(Box::new(MockClassifier::scripted(scores)))
    }

    pub fn build(self) -> Result<RouterHarness, SwitchboardError> {
        let config: SwitchboardConfig = match self.config_toml {
            Some(toml) => switchboard_config::load_and_validate_str(&toml),
            None => switchboard_config::load_and_validate_str(""),
        }
        .map_err(|errors| {
            let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
            SwitchboardError::Config(rendered.join("; "))
        })?;

        Ok(RouterHarness {
            engine: DecisionEngine::new(config.engine.clone()),
            tracker: ClarificationTracker::from_config(&config.clarification),
            classifier: self
                .classifier
                .unwrap_or_else(|| Box::new(KeywordClassifier::new())),
            config,
        })
    }
}

/// A complete routing pipeline for end-to-end tests.
pub struct RouterHarness {
    pub engine: DecisionEngine,
    pub tracker: ClarificationTracker,
    pub config: SwitchboardConfig,
    classifier: Box<dyn ClassifierAdapter>,
}

impl RouterHarness {
    pub fn builder() -> RouterHarnessBuilder {
        RouterHarnessBuilder::new()
    }

    /// Drive one conversational turn through the full pipeline.
    pub async fn route(
        &self,
        conversation: &str,
        utterance: &str,
    ) -> Result<RoutingDecision, SwitchboardError> {
        let id = ConversationId::from(conversation);
        let hint = self.tracker.hint(&id);
        let scores = self.classifier.classify(utterance).await?;
        let request = RoutingRequest::new(id.clone(), utterance, scores);
        let decision = self.engine.decide_with_hint(&request, hint.as_deref())?;
        self.tracker.observe(&id, utterance, &decision);
        Ok(decision)
    }
}
