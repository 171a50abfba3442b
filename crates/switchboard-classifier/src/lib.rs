// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reference classifier for the Switchboard routing engine.
//!
//! The classification model proper is an external collaborator; this
//! crate ships the in-repo stand-in: a deterministic keyword classifier
//! behind the [`ClassifierAdapter`] trait, good enough for the CLI, the
//! test suites, and offline runs.
//!
//! [`ClassifierAdapter`]: switchboard_core::ClassifierAdapter

pub mod keyword;

pub use keyword::KeywordClassifier;
