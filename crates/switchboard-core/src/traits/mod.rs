// SPDX-FileCopyrightText: 2026 Switchboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait seams between the routing core and its external
//! collaborators.

pub mod classifier;

pub use classifier::ClassifierAdapter;
