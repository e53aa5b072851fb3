// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for other Understory crates.
//!
//! Modules in this file are behind feature flags so `understory_composite` can
//! remain usable with hosts that do not depend on those crates.
//!
//! - [`item_tree`] (`item_tree_adapter` feature): implement
//!   [`crate::CompositeHost`] for an [`understory_item_tree::Tree`].

#[cfg(feature = "item_tree_adapter")]
pub mod item_tree;
