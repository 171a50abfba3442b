// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property tests for the decision policy.
//!
//! The engine's reliability target is totality: for any well-formed
//! score vector and any utterance content it returns a decision, and it
//! only ever fails for structurally invalid classifier output.

use proptest::prelude::*;
use switchboard_config::model::EngineConfig;
use switchboard_core::{Category, RoutingRequest, ScoreVector, SwitchboardError};
use switchboard_router::{DecisionEngine, normalize};

fn valid_scores() -> impl Strategy<Value = ScoreVector> {
    // Non-negative finite raw scores; need not sum to 1.
    (0.0..1000.0f64, 0.0..1000.0f64, 0.0..1000.0f64).prop_map(|(c, e, r)| {
        ScoreVector::from([
            (Category::Conversation, c),
            (Category::Executor, e),
            (Category::Research, r),
        ])
    })
}

fn arbitrary_scores() -> impl Strategy<Value = ScoreVector> {
    // Possibly partial maps with possibly non-finite or negative values.
    let value = prop_oneof![
        0.0..1000.0f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1000.0..0.0f64,
    ];
    proptest::collection::btree_map(
        prop_oneof![
            Just(Category::Conversation),
            Just(Category::Executor),
            Just(Category::Research),
        ],
        value,
        0..=3,
    )
    .prop_map(ScoreVector)
}

proptest! {
    /// Totality: every well-formed vector yields a decision, never an error.
    #[test]
    fn decide_is_total_over_valid_input(scores in valid_scores(), utterance in ".{0,64}") {
        let engine = DecisionEngine::new(EngineConfig::default());
        let request = RoutingRequest::new("prop-conv", utterance, scores);
        let decision = engine.decide(&request).expect("well-formed input never errors");
        prop_assert!(!decision.candidates.is_empty());
        // Every fallback path lands on the zero-risk category.
        if decision.used_fallback {
            prop_assert_eq!(decision.target, Category::Conversation);
        }
    }

    /// Safety floor: whenever the top normalized score does not clear the
    /// high threshold, the target is Conversation.
    #[test]
    fn safety_floor_below_high_threshold(scores in valid_scores(), utterance in ".{1,64}") {
        let config = EngineConfig::default();
        let engine = DecisionEngine::new(config.clone());
        let request = RoutingRequest::new("prop-conv", utterance, scores);
        let decision = engine.decide(&request).expect("well-formed input never errors");

        if let Ok(normalized) = normalize(&request.scores)
            && normalized.top_score() <= config.high_threshold
        {
            prop_assert_eq!(decision.target, Category::Conversation);
            prop_assert!(decision.used_fallback);
        }
    }

    /// Determinism: identical inputs yield bit-identical decisions.
    #[test]
    fn decide_is_deterministic(scores in valid_scores(), utterance in ".{0,64}") {
        let engine = DecisionEngine::new(EngineConfig::default());
        let request = RoutingRequest::new("prop-conv", utterance, scores);
        let first = engine.decide(&request).expect("well-formed input never errors");
        let second = engine.decide(&request).expect("well-formed input never errors");
        prop_assert_eq!(first, second);
    }

    /// The engine never panics: arbitrary (possibly malformed) vectors
    /// either decide or fail with `MalformedInput`, nothing else.
    #[test]
    fn malformed_input_is_the_only_error(scores in arbitrary_scores(), utterance in ".{0,64}") {
        let engine = DecisionEngine::new(EngineConfig::default());
        let request = RoutingRequest::new("prop-conv", utterance, scores.clone());

        let structurally_valid = Category::ALL.iter().all(|&c| {
            scores.get(c).is_some_and(|v| v.is_finite() && v >= 0.0)
        });

        match engine.decide(&request) {
            Ok(_) => prop_assert!(structurally_valid),
            Err(SwitchboardError::MalformedInput(_)) => prop_assert!(!structurally_valid),
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
