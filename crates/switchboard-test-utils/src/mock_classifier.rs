// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted classifier for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use switchboard_core::{Category, ClassifierAdapter, ScoreVector, SwitchboardError};

/// Returns pre-scripted score vectors in order, one per `classify` call.
///
/// Exhausting the script is a test bug and surfaces as an `Internal`
/// error rather than a panic, so async test output stays readable.
pub struct MockClassifier {
    script: Mutex<VecDeque<ScoreVector>>,
}

impl MockClassifier {
    pub fn scripted(scores: Vec<ScoreVector>) -> Self {
        Self {
            script: Mutex::new(scores.into()),
        }
    }

    /// A script of one structurally invalid vector (missing Research),
    /// for exercising `MalformedInput` paths end to end.
    pub fn malformed() -> Self {
        Self::scripted(vec![ScoreVector::from([
            (Category::Conversation, 0.5),
            (Category::Executor, 0.5),
        ])])
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().expect("script lock poisoned").len()
    }
}

#[async_trait]
impl ClassifierAdapter for MockClassifier {
    async fn classify(&self, _utterance: &str) -> Result<ScoreVector, SwitchboardError> {
        self.script
            .lock()
            .expect("script lock poisoned")
            .pop_front()
            .ok_or_else(|| SwitchboardError::Internal("mock classifier script exhausted".into()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
