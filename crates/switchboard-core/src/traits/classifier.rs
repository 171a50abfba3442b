// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classifier adapter trait.
//!
//! The classification model is an external capability with an arbitrary
//! implementation: rule-based, an on-device model, or a hosted language
//! model behind a network call. The trait is async for the latter; the
//! decision engine that consumes the scores stays synchronous and pure.

use async_trait::async_trait;

use crate::error::SwitchboardError;
use crate::types::ScoreVector;

/// Produces per-category confidence scores for an utterance.
///
/// Implementations should return an entry for every [`Category`] with
/// non-negative, finite values. Violations are not corrected here; the
/// score normalizer rejects them as `MalformedInput`.
///
/// [`Category`]: crate::types::Category
#[async_trait]
pub trait ClassifierAdapter: Send + Sync {
    /// Score an utterance against every known category.
    async fn classify(&self, utterance: &str) -> Result<ScoreVector, SwitchboardError>;

    /// Adapter name for logs and diagnostics.
    fn name(&self) -> &str;
}
