// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing decision engine for the Switchboard agent router.
//!
//! This crate converts noisy, possibly multi-topic, possibly
//! low-confidence classifier output into a single deterministic,
//! auditable routing decision:
//!
//! - [`normalize`]: validates a raw score vector into a
//!   probability-like distribution (the only failure point)
//! - [`band_for`]: maps the top normalized score to High/Medium/Low
//! - [`resolve`]: detects comparable multi-intent signal and selects a
//!   primary candidate by priority
//! - [`DecisionEngine`]: orchestrates the above with the safe-default
//!   fallback policy, Conversation being the zero-risk floor
//!
//! [`normalize`]: normalize::normalize
//! [`band_for`]: banding::band_for
//! [`resolve`]: multi_intent::resolve

pub mod banding;
pub mod engine;
pub mod multi_intent;
pub mod normalize;

pub use banding::band_for;
pub use engine::DecisionEngine;
pub use multi_intent::{IntentResolution, resolve};
pub use normalize::{Normalized, normalize};
