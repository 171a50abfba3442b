// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the Switchboard workspace: a scripted mock
//! classifier and an end-to-end harness that drives the full
//! classify → decide → observe pipeline.

pub mod harness;
pub mod mock_classifier;

pub use harness::{RouterHarness, RouterHarnessBuilder};
pub use mock_classifier::MockClassifier;
