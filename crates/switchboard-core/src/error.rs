// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Switchboard routing engine.
//!
//! The central guarantee of the engine is that no content of user input
//! is an error: empty text, zero signal, and ambiguity are all valid
//! decisions. Only a structurally invalid classifier output surfaces as
//! [`SwitchboardError::MalformedInput`].

use thiserror::Error;

use crate::types::Category;

/// The primary error type used across Switchboard crates.
#[derive(Debug, Error)]
pub enum SwitchboardError {
    /// Configuration errors (invalid TOML, out-of-range thresholds).
    #[error("configuration error: {0}")]
    Config(String),

    /// The external classifier violated its output contract. The caller
    /// decides retry policy; the engine performs no implicit recovery.
    #[error("malformed classifier output: {0}")]
    MalformedInput(MalformedScore),

    /// Classifier adapter failure (transport, upstream model errors).
    #[error("classifier error: {message}")]
    Classifier {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Structural defect in a raw score vector.
///
/// Carried inside [`SwitchboardError::MalformedInput`] so callers and
/// tests can assert on the exact contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MalformedScore {
    /// The vector is missing an entry for a known category.
    #[error("missing entry for category `{0}`")]
    MissingCategory(Category),

    /// A score is negative.
    #[error("negative score {value} for category `{category}`")]
    NegativeScore { category: Category, value: f64 },

    /// A score is NaN or infinite.
    #[error("non-finite score for category `{category}`")]
    NonFiniteScore { category: Category },
}
