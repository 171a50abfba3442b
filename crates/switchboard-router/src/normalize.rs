// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Score vector validation and normalization.
//!
//! The normalizer is the single validation gate between the external
//! classifier and the decision policy. Structural defects (missing
//! category, negative, NaN, or infinite values) are contract violations
//! and fail with `MalformedInput`; everything that passes produces a
//! probability-like distribution the rest of the policy can trust.

use std::collections::BTreeMap;

use switchboard_core::{Category, MalformedScore, ScoreVector, SwitchboardError};

/// A validated, normalized distribution over the closed category set.
///
/// Derived from a [`ScoreVector`], never persisted independently of it.
/// Every category has an entry, all values are in [0, 1], and they sum
/// to 1 within floating tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    dist: BTreeMap<Category, f64>,
    no_signal: bool,
}

impl Normalized {
    /// Normalized score for a category. Total over the closed set.
    pub fn score(&self, category: Category) -> f64 {
        // Every category is present by construction.
        self.dist[&category]
    }

    /// The highest normalized score.
    pub fn top_score(&self) -> f64 {
        self.dist.values().copied().fold(0.0, f64::max)
    }

    /// True when the classifier abstained entirely (raw sum was zero)
    /// and the distribution is uniform filler. The decision engine must
    /// fall back regardless of banding.
    pub fn no_signal(&self) -> bool {
        self.no_signal
    }

    /// Iterate entries in stable (key) order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.dist.iter().map(|(&c, &v)| (c, v))
    }
}

/// Validate a raw score vector and normalize it to a distribution.
///
/// Fails with `MalformedInput` when a category is missing or a value is
/// negative, NaN, or infinite. A zero sum (full abstention) yields a
/// uniform distribution with the `no_signal` flag set.
pub fn normalize(scores: &ScoreVector) -> Result<Normalized, SwitchboardError> {
    let mut raw = BTreeMap::new();
    for category in Category::ALL {
        let value = scores.get(category).ok_or_else(|| {
            SwitchboardError::MalformedInput(MalformedScore::MissingCategory(category))
        })?;
        if !value.is_finite() {
            return Err(SwitchboardError::MalformedInput(
                MalformedScore::NonFiniteScore { category },
            ));
        }
        if value < 0.0 {
            return Err(SwitchboardError::MalformedInput(
                MalformedScore::NegativeScore { category, value },
            ));
        }
        raw.insert(category, value);
    }

    let sum: f64 = raw.values().sum();
    if sum == 0.0 {
        let uniform = 1.0 / Category::ALL.len() as f64;
        return Ok(Normalized {
            dist: Category::ALL.iter().map(|&c| (c, uniform)).collect(),
            no_signal: true,
        });
    }

    Ok(Normalized {
        dist: raw.into_iter().map(|(c, v)| (c, v / sum)).collect(),
        no_signal: false,
    })
}
