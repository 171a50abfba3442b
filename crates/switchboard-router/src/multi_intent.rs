// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-intent detection and primary-intent selection.
//!
//! An utterance like "search for React docs and deploy" gives several
//! categories comparable signal. The resolver collects every category
//! within the proximity margin of the top score and selects a single
//! primary intent by the fixed priority order Executor > Research >
//! Conversation: under-routing an actionable request costs a clarifying
//! turn, over-routing a conversational one costs nothing.

use switchboard_core::Category;

use crate::normalize::Normalized;

/// Outcome of proximity analysis over a normalized distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentResolution {
    /// The single category selected as the routing target candidate.
    pub primary: Category,
    /// All categories within the margin of the top score, ordered by the
    /// tie-break policy. Contains only the top category when no overlap
    /// exists.
    pub candidates: Vec<Category>,
    /// True when more than one category carried comparable signal.
    pub multi_intent: bool,
}

/// Collect categories within `margin` of the top score and pick the
/// primary intent.
///
/// Any two candidates differ by at most the margin (each is within the
/// margin of the top), so the whole candidate set carries comparable
/// signal and is ordered by the priority tie-break rather than by raw
/// score. A remembered candidate list from a pending clarification, when
/// supplied, takes precedence for the categories it names: those are
/// ranked by hint position, remaining candidates follow in priority
/// order. The hint reorders tie-breaking only; band policy and the
/// ambiguity override are decided elsewhere and keep the safety floor
/// intact.
pub fn resolve(normalized: &Normalized, margin: f64, hint: Option<&[Category]>) -> IntentResolution {
    let top = normalized.top_score();

    let mut candidates: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|&c| normalized.score(c) >= top - margin)
        .collect();
    candidates.sort_by_key(|&c| tie_break_rank(c, hint));

    // Non-empty by construction: the top category is always within the
    // margin of itself.
    IntentResolution {
        primary: candidates[0],
        multi_intent: candidates.len() > 1,
        candidates,
    }
}

/// Rank used to order comparable candidates. Lower wins.
fn tie_break_rank(category: Category, hint: Option<&[Category]>) -> usize {
    if let Some(hint) = hint
        && let Some(position) = hint.iter().position(|&h| h == category)
    {
        return position;
    }
    let offset = hint.map_or(0, <[Category]>::len);
    offset + category.priority_rank() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchboard_core::ScoreVector;

    use crate::normalize::normalize;

    fn normalized(conversation: f64, executor: f64, research: f64) -> Normalized {
        normalize(&ScoreVector::from([
            (Category::Conversation, conversation),
            (Category::Executor, executor),
            (Category::Research, research),
        ]))
        .expect("valid input")
    }

    #[test]
    fn clear_winner_yields_single_candidate() {
        let dist = normalized(0.95, 0.03, 0.02);
        let resolution = resolve(&dist, 0.15, None);
        assert!(!resolution.multi_intent);
        assert_eq!(resolution.candidates, vec![Category::Conversation]);
        assert_eq!(resolution.primary, Category::Conversation);
    }

    #[test]
    fn comparable_pair_is_detected_and_priority_ordered() {
        // 0.6 and 0.58 normalize to ~0.469 and ~0.453: within the margin.
        let dist = normalized(0.1, 0.58, 0.6);
        let resolution = resolve(&dist, 0.15, None);
        assert!(resolution.multi_intent);
        // Comparable signal: priority order, not raw score order.
        assert_eq!(
            resolution.candidates,
            vec![Category::Executor, Category::Research]
        );
        assert_eq!(resolution.primary, Category::Executor);
    }

    #[test]
    fn conversation_never_outranks_action_intents_on_ties() {
        let dist = normalized(0.5, 0.5, 0.0);
        let resolution = resolve(&dist, 0.15, None);
        assert_eq!(
            resolution.candidates,
            vec![Category::Executor, Category::Conversation]
        );
        assert_eq!(resolution.primary, Category::Executor);
    }

    #[test]
    fn all_three_within_margin() {
        let dist = normalized(0.35, 0.34, 0.31);
        let resolution = resolve(&dist, 0.15, None);
        assert_eq!(resolution.candidates.len(), 3);
        assert_eq!(
            resolution.candidates,
            vec![Category::Executor, Category::Research, Category::Conversation]
        );
    }

    #[test]
    fn margin_boundary_is_inclusive() {
        // 0.5 and 0.25 are exact in binary, so the runner-ups sit exactly
        // at top - margin with no rounding slack.
        let dist = normalized(0.25, 0.5, 0.25);
        let resolution = resolve(&dist, 0.25, None);
        assert_eq!(
            resolution.candidates,
            vec![Category::Executor, Category::Research, Category::Conversation]
        );
    }

    #[test]
    fn hint_reorders_comparable_candidates() {
        let dist = normalized(0.5, 0.0, 0.5);
        // Priority order alone would put Research first.
        let no_hint = resolve(&dist, 0.15, None);
        assert_eq!(
            no_hint.candidates,
            vec![Category::Research, Category::Conversation]
        );

        let hint = [Category::Conversation, Category::Research];
        let hinted = resolve(&dist, 0.15, Some(&hint));
        assert_eq!(
            hinted.candidates,
            vec![Category::Conversation, Category::Research]
        );
        assert_eq!(hinted.primary, Category::Conversation);
    }

    #[test]
    fn hint_does_not_inject_out_of_margin_categories() {
        let dist = normalized(0.95, 0.03, 0.02);
        let hint = [Category::Executor, Category::Research];
        let resolution = resolve(&dist, 0.15, Some(&hint));
        assert_eq!(resolution.candidates, vec![Category::Conversation]);
    }
}
