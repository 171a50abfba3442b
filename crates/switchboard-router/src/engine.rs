// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The routing decision engine.
//!
//! Orchestrates normalization, confidence banding, multi-intent
//! resolution, and the safe-default policy into a single deterministic
//! [`RoutingDecision`]. The policy is asymmetric on purpose: Executor
//! actions carry real-world side effects, so under-triggering Executor
//! costs a clarifying turn while over-triggering it costs an unintended
//! action. Medium and Low bands, and any two-way ambiguity, therefore
//! collapse to Conversation rather than to a priority vote.
//!
//! `decide()` is a pure, synchronous computation: no wall clock, no
//! randomness, no shared mutable state. Identical inputs yield
//! bit-identical decisions.

use switchboard_config::model::EngineConfig;
use switchboard_core::{
    Category, ConfidenceBand, Rationale, RoutingDecision, RoutingRequest, SwitchboardError,
};
use tracing::{debug, info};

use crate::banding::band_for;
use crate::multi_intent::resolve;
use crate::normalize::normalize;

/// Converts classifier output into exactly one routing decision.
pub struct DecisionEngine {
    config: EngineConfig,
}

impl DecisionEngine {
    /// Create an engine with the given policy thresholds.
    ///
    /// The config is read per call and never mutated; a future learned
    /// policy store would be a new engine instance, not in-place change.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide where an utterance goes.
    ///
    /// The only surfaced error is `MalformedInput` for a structurally
    /// invalid score vector; every content of user input produces a
    /// normal decision.
    pub fn decide(&self, request: &RoutingRequest) -> Result<RoutingDecision, SwitchboardError> {
        self.decide_with_hint(request, None)
    }

    /// Decide with a remembered candidate list from a pending
    /// clarification turn.
    ///
    /// The hint only reorders tie-breaking among comparable candidates
    /// (see the multi-intent resolver); it never weakens the safe-default
    /// policy. The engine does not interpret clarification replies, it
    /// only consumes the stored candidate ordering.
    pub fn decide_with_hint(
        &self,
        request: &RoutingRequest,
        hint: Option<&[Category]>,
    ) -> Result<RoutingDecision, SwitchboardError> {
        let normalized = normalize(&request.scores)?;

        // Degenerate input: nothing to band or resolve. The reported band
        // is the floor value since no meaningful top score exists.
        if normalized.no_signal() || request.utterance.trim().is_empty() {
            let decision = RoutingDecision {
                target: Category::Conversation,
                band: ConfidenceBand::Low,
                used_fallback: true,
                multi_intent_detected: false,
                candidates: vec![Category::Conversation],
                rationale: Rationale::EmptyOrNoSignal,
            };
            info!(
                conversation = request.conversation_id.as_str(),
                no_signal = normalized.no_signal(),
                "empty or no-signal input, routing to safe default"
            );
            return Ok(decision);
        }

        let top = normalized.top_score();
        let band = band_for(top, &self.config);
        let resolution = resolve(&normalized, self.config.multi_intent_margin, hint);

        debug!(
            conversation = request.conversation_id.as_str(),
            top,
            %band,
            candidates = resolution.candidates.len(),
            "scored utterance"
        );

        // Two comparable candidates with no individually trusted score:
        // ambiguity always resolves to the zero-risk category, overriding
        // the priority order.
        let ambiguous_pair = resolution.candidates.len() == 2
            && resolution
                .candidates
                .iter()
                .all(|&c| normalized.score(c) <= self.config.high_threshold);

        let decision = if ambiguous_pair {
            RoutingDecision {
                target: Category::Conversation,
                band,
                used_fallback: true,
                multi_intent_detected: true,
                candidates: resolution.candidates,
                rationale: Rationale::AmbiguousDefaultToSafe,
            }
        } else {
            match band {
                ConfidenceBand::High => RoutingDecision {
                    target: resolution.primary,
                    band,
                    used_fallback: false,
                    multi_intent_detected: resolution.multi_intent,
                    candidates: resolution.candidates,
                    rationale: Rationale::HighConfidence,
                },
                ConfidenceBand::Medium => RoutingDecision {
                    // Conversation-continuity override is out of scope:
                    // Medium strictly leans safe.
                    target: Category::Conversation,
                    band,
                    used_fallback: true,
                    multi_intent_detected: resolution.multi_intent,
                    candidates: resolution.candidates,
                    rationale: Rationale::MediumConfidenceLeanSafe,
                },
                ConfidenceBand::Low => RoutingDecision {
                    target: Category::Conversation,
                    band,
                    used_fallback: true,
                    multi_intent_detected: resolution.multi_intent,
                    candidates: resolution.candidates,
                    rationale: Rationale::LowConfidence,
                },
            }
        };

        if decision.used_fallback {
            info!(
                conversation = request.conversation_id.as_str(),
                %decision.target,
                %decision.rationale,
                "routed to safe default"
            );
        }

        Ok(decision)
    }
}
