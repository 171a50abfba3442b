// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Switchboard workspace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub String);

impl ConversationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ConversationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Destination classes for a routed utterance.
///
/// The set is closed: every policy function matches exhaustively, so
/// adding a category forces every decision branch to be revisited at
/// compile time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Chat, explanations, Q&A. The safe default: routing here never
    /// triggers a side effect.
    Conversation,
    /// Commands with real-world side effects (file, system, deployment
    /// changes). Dispatched behind human-in-the-loop approval downstream.
    Executor,
    /// Web search, documentation lookup, current information.
    Research,
}

impl Category {
    /// Every known category, in declaration order.
    pub const ALL: [Category; 3] = [Category::Conversation, Category::Executor, Category::Research];

    /// Tie-break rank: action-taking intents surface ahead of passive
    /// ones (Executor > Research > Conversation). Lower rank wins.
    pub fn priority_rank(self) -> u8 {
        match self {
            Category::Executor => 0,
            Category::Research => 1,
            Category::Conversation => 2,
        }
    }
}

/// Raw per-category scores produced by the external classifier.
///
/// Values are unnormalized and need not sum to 1. The map may be partial
/// or carry invalid values; the score normalizer is the validation gate
/// and rejects contract violations as [`MalformedInput`].
///
/// [`MalformedInput`]: crate::error::SwitchboardError::MalformedInput
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreVector(pub BTreeMap<Category, f64>);

impl ScoreVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, mainly for tests and the reference classifier.
    pub fn with(mut self, category: Category, score: f64) -> Self {
        self.0.insert(category, score);
        self
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.0.get(&category).copied()
    }

    pub fn insert(&mut self, category: Category, score: f64) {
        self.0.insert(category, score);
    }
}

impl<const N: usize> From<[(Category, f64); N]> for ScoreVector {
    fn from(entries: [(Category, f64); N]) -> Self {
        Self(BTreeMap::from(entries))
    }
}

/// Coarse confidence tier derived from the top normalized score.
///
/// Boundary values resolve to the stricter side: a top score exactly at
/// the high threshold is Medium, not High.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    /// Top score above the high threshold: the classifier is trusted.
    High,
    /// Top score between the medium and high thresholds, both inclusive.
    Medium,
    /// Top score below the medium threshold.
    Low,
}

/// Enumerated reason codes explaining why a decision came out the way it did.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Rationale {
    /// High band: the primary candidate was routed directly.
    HighConfidence,
    /// Medium band: leaned to the safe default instead of the top candidate.
    MediumConfidenceLeanSafe,
    /// Low band: no candidate earned trust.
    LowConfidence,
    /// Two comparable candidates with no clear winner; ambiguity always
    /// resolves to the zero-risk category.
    AmbiguousDefaultToSafe,
    /// Empty utterance or a classifier that abstained entirely.
    EmptyOrNoSignal,
}

/// The single, final outcome of one classification attempt.
///
/// Immutable once produced. `target` is always a member of the closed
/// [`Category`] set: the engine never returns "no decision".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Where the utterance goes.
    pub target: Category,
    /// Confidence tier the decision was made under.
    pub band: ConfidenceBand,
    /// Whether the safe-default policy picked the target instead of the
    /// classifier's top candidate.
    pub used_fallback: bool,
    /// Whether more than one category carried comparable signal.
    pub multi_intent_detected: bool,
    /// All categories within the proximity margin of the top score,
    /// ordered by the tie-break policy. Single-element when no overlap.
    pub candidates: Vec<Category>,
    /// Reason code for audit logs and downstream display.
    pub rationale: Rationale,
}

/// Inbound envelope: one utterance plus the classifier's scores for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingRequest {
    pub conversation_id: ConversationId,
    pub utterance: String,
    pub scores: ScoreVector,
}

impl RoutingRequest {
    pub fn new(
        conversation_id: impl Into<ConversationId>,
        utterance: impl Into<String>,
        scores: ScoreVector,
    ) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            utterance: utterance.into(),
            scores,
        }
    }
}
