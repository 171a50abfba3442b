// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Clarification state tracking for the Switchboard routing engine.
//!
//! Holds per-conversation state when a decision is deferred pending user
//! clarification, and hands the remembered candidate ordering back to
//! the caller on the next turn. Entries live for a single turn or a
//! configurable idle timeout, whichever ends first.

pub mod tracker;

pub use tracker::{ClarificationTracker, ConversationState};
