// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-conversation clarification state.
//!
//! When a decision falls back safely while suspecting the user wanted
//! something else (fallback with more than one candidate), the candidate
//! list is remembered for exactly one subsequent turn. The external
//! caller may feed it back into the decision engine as a hint; the
//! tracker itself never interprets clarification replies.
//!
//! Each conversation is a minimal state machine: Idle (no entry) ->
//! AwaitingClarification (entry with expiry) -> Idle. Entries expire on
//! consumption (single turn) or after the configured idle timeout,
//! whichever comes first, so stale candidates never bias unrelated
//! future utterances.

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use switchboard_config::model::ClarificationConfig;
use switchboard_core::{Category, ConversationId, RoutingDecision};
use tracing::debug;

/// State held for one conversation awaiting clarification.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationState {
    pub conversation_id: ConversationId,
    /// The utterance that produced the deferred decision.
    pub last_utterance: String,
    pub pending_clarification: bool,
    /// Candidate ordering remembered for the next turn.
    pub prior_candidates: Vec<Category>,
    /// Hard expiry; reads at or after this instant see nothing.
    pub expires_at: DateTime<Utc>,
}

/// Keyed store of pending clarifications.
///
/// The map's per-key entry lock provides the single-writer-per-conversation
/// discipline: concurrent turns within one conversation serialize on the
/// entry, turns across conversations share nothing.
pub struct ClarificationTracker {
    entries: DashMap<ConversationId, ConversationState>,
    idle_timeout: Duration,
}

impl ClarificationTracker {
    pub fn new(idle_timeout: std::time::Duration) -> Self {
        Self {
            entries: DashMap::new(),
            idle_timeout: Duration::from_std(idle_timeout)
                .unwrap_or_else(|_| Duration::seconds(i64::MAX / 1_000)),
        }
    }

    pub fn from_config(config: &ClarificationConfig) -> Self {
        Self::new(std::time::Duration::from_secs(config.idle_timeout_secs))
    }

    /// Record the outcome of a turn.
    ///
    /// A fallback decision with more than one candidate arms the
    /// clarification state; any other outcome returns the conversation
    /// to Idle.
    pub fn observe(
        &self,
        conversation_id: &ConversationId,
        utterance: &str,
        decision: &RoutingDecision,
    ) {
        self.observe_at(Utc::now(), conversation_id, utterance, decision);
    }

    /// Clock-explicit variant of [`observe`](Self::observe) for tests.
    pub fn observe_at(
        &self,
        now: DateTime<Utc>,
        conversation_id: &ConversationId,
        utterance: &str,
        decision: &RoutingDecision,
    ) {
        if decision.used_fallback && decision.candidates.len() > 1 {
            debug!(
                conversation = conversation_id.as_str(),
                candidates = decision.candidates.len(),
                "awaiting clarification"
            );
            self.entries.insert(
                conversation_id.clone(),
                ConversationState {
                    conversation_id: conversation_id.clone(),
                    last_utterance: utterance.to_string(),
                    pending_clarification: true,
                    prior_candidates: decision.candidates.clone(),
                    expires_at: now + self.idle_timeout,
                },
            );
        } else {
            self.entries.remove(conversation_id);
        }
    }

    /// Consume the remembered candidate list for a conversation.
    ///
    /// Single-turn semantics: the entry is removed on read, so a second
    /// call returns `None`. Expired entries also return `None`.
    pub fn hint(&self, conversation_id: &ConversationId) -> Option<Vec<Category>> {
        self.hint_at(Utc::now(), conversation_id)
    }

    /// Clock-explicit variant of [`hint`](Self::hint) for tests.
    pub fn hint_at(
        &self,
        now: DateTime<Utc>,
        conversation_id: &ConversationId,
    ) -> Option<Vec<Category>> {
        let (_, state) = self.entries.remove(conversation_id)?;
        if now >= state.expires_at {
            debug!(
                conversation = conversation_id.as_str(),
                "pending clarification expired"
            );
            return None;
        }
        Some(state.prior_candidates)
    }

    /// Whether a conversation currently awaits clarification.
    pub fn pending(&self, conversation_id: &ConversationId) -> bool {
        self.entries.contains_key(conversation_id)
    }

    /// Drop all expired entries. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    /// Clock-explicit variant of [`purge_expired`](Self::purge_expired).
    pub fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, state| state.expires_at > now);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchboard_core::{ConfidenceBand, Rationale};

    fn tracker() -> ClarificationTracker {
        ClarificationTracker::new(std::time::Duration::from_secs(120))
    }

    fn fallback_decision(candidates: Vec<Category>) -> RoutingDecision {
        RoutingDecision {
            target: Category::Conversation,
            band: ConfidenceBand::Medium,
            used_fallback: true,
            multi_intent_detected: candidates.len() > 1,
            candidates,
            rationale: Rationale::AmbiguousDefaultToSafe,
        }
    }

    fn direct_decision(target: Category) -> RoutingDecision {
        RoutingDecision {
            target,
            band: ConfidenceBand::High,
            used_fallback: false,
            multi_intent_detected: false,
            candidates: vec![target],
            rationale: Rationale::HighConfidence,
        }
    }

    #[test]
    fn candidates_are_returned_exactly_once() {
        let tracker = tracker();
        let id = ConversationId::from("c1");
        let candidates = vec![Category::Executor, Category::Conversation];

        tracker.observe(&id, "check the status", &fallback_decision(candidates.clone()));
        assert!(tracker.pending(&id));

        assert_eq!(tracker.hint(&id), Some(candidates));
        // Consumed: the conversation is back to Idle.
        assert_eq!(tracker.hint(&id), None);
        assert!(!tracker.pending(&id));
    }

    #[test]
    fn expired_entry_yields_no_hint() {
        let tracker = tracker();
        let id = ConversationId::from("c1");
        let now = Utc::now();

        tracker.observe_at(
            now,
            &id,
            "check the status",
            &fallback_decision(vec![Category::Executor, Category::Conversation]),
        );

        let later = now + Duration::seconds(121);
        assert_eq!(tracker.hint_at(later, &id), None);
    }

    #[test]
    fn confident_decision_returns_conversation_to_idle() {
        let tracker = tracker();
        let id = ConversationId::from("c1");

        tracker.observe(
            &id,
            "check the status",
            &fallback_decision(vec![Category::Executor, Category::Conversation]),
        );
        tracker.observe(&id, "yes, restart it", &direct_decision(Category::Executor));

        assert!(!tracker.pending(&id));
        assert_eq!(tracker.hint(&id), None);
    }

    #[test]
    fn single_candidate_fallback_is_not_recorded() {
        let tracker = tracker();
        let id = ConversationId::from("c1");

        // Low confidence but nothing else the user could have meant:
        // nothing to clarify.
        tracker.observe(&id, "hmm", &fallback_decision(vec![Category::Conversation]));
        assert!(!tracker.pending(&id));
    }

    #[test]
    fn conversations_are_independent() {
        let tracker = tracker();
        let a = ConversationId::from("a");
        let b = ConversationId::from("b");

        tracker.observe(
            &a,
            "check the status",
            &fallback_decision(vec![Category::Executor, Category::Conversation]),
        );

        assert!(tracker.pending(&a));
        assert!(!tracker.pending(&b));
        assert_eq!(tracker.hint(&b), None);
        // Consuming b's (absent) hint leaves a's untouched.
        assert!(tracker.pending(&a));
    }

    #[test]
    fn purge_removes_only_stale_entries() {
        let tracker = tracker();
        let now = Utc::now();
        let old = ConversationId::from("old");
        let fresh = ConversationId::from("fresh");
        let decision = fallback_decision(vec![Category::Executor, Category::Conversation]);

        tracker.observe_at(now - Duration::seconds(300), &old, "stale", &decision);
        tracker.observe_at(now, &fresh, "recent", &decision);

        assert_eq!(tracker.purge_expired_at(now), 1);
        assert!(!tracker.pending(&old));
        assert!(tracker.pending(&fresh));
    }
}
