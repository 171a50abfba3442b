// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic keyword classifier.
//!
//! Scores utterances against the category set using keyword rules: zero
//! cost, zero latency, fully deterministic. This is the reference
//! [`ClassifierAdapter`] used by the CLI and tests; production
//! deployments plug a model-backed adapter behind the same trait.

use async_trait::async_trait;
use switchboard_core::{Category, ClassifierAdapter, ScoreVector, SwitchboardError};

/// Action verbs indicating a command to execute (contains, case-insensitive).
const ACTION_VERBS: &[&str] = &[
    "run", "deploy", "create", "delete", "remove", "install", "build", "restart", "stop",
    "start", "execute", "commit", "push", "merge", "revert", "rename", "move",
];

/// Phrases indicating a need for current or external information.
const RESEARCH_INDICATORS: &[&str] = &[
    "what's new", "whats new", "latest", "search for", "search the", "look up", "find",
    "documentation", "docs", "current version", "news", "best practices",
];

/// Greeting/acknowledgement patterns (exact match, case-insensitive).
const CONVERSATION_EXACT: &[&str] = &[
    "hi", "hello", "hey", "thanks", "thank you", "bye", "ok", "okay", "yes", "no", "sure",
    "good", "great", "cool",
];

/// Question openers that read as chat, not action.
const CONVERSATION_OPENERS: &[&str] = &[
    "what is", "what are", "how do", "how does", "why", "explain", "tell me about",
    "who", "can you explain",
];

/// Baseline mass so an utterance matching nothing still resolves (to
/// Conversation, via low confidence) instead of abstaining. Small enough
/// that a single clear action verb still dominates the distribution.
const CONVERSATION_BASELINE: f64 = 0.5;
const KEYWORD_WEIGHT: f64 = 2.0;
const EXACT_MATCH_WEIGHT: f64 = 4.0;
const LEADING_VERB_BONUS: f64 = 1.0;

/// Deterministic rule-based classifier.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous scoring core; the trait impl wraps it.
    pub fn score(&self, utterance: &str) -> ScoreVector {
        let trimmed = utterance.trim();
        if trimmed.is_empty() {
            // Abstain entirely: the engine's no-signal path owns this.
            return ScoreVector::from([
                (Category::Conversation, 0.0),
                (Category::Executor, 0.0),
                (Category::Research, 0.0),
            ]);
        }

        let lower = trimmed.to_lowercase();
        let mut conversation = CONVERSATION_BASELINE;
        let mut executor = 0.0;
        let mut research = 0.0;

        if CONVERSATION_EXACT.iter().any(|p| lower == *p) {
            conversation += EXACT_MATCH_WEIGHT;
        }
        if CONVERSATION_OPENERS.iter().any(|p| lower.starts_with(p)) {
            conversation += KEYWORD_WEIGHT;
        }

        for verb in ACTION_VERBS {
            if contains_word(&lower, verb) {
                executor += KEYWORD_WEIGHT;
                if lower.starts_with(verb) {
                    executor += LEADING_VERB_BONUS;
                }
            }
        }

        for indicator in RESEARCH_INDICATORS {
            if lower.contains(indicator) {
                research += KEYWORD_WEIGHT;
            }
        }

        ScoreVector::from([
            (Category::Conversation, conversation),
            (Category::Executor, executor),
            (Category::Research, research),
        ])
    }
}

/// Word-boundary contains: "run" matches "run the tests" but not "running late".
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == needle)
}

#[async_trait]
impl ClassifierAdapter for KeywordClassifier {
    async fn classify(&self, utterance: &str) -> Result<ScoreVector, SwitchboardError> {
        Ok(self.score(utterance))
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
