// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported at mount.

use core::fmt::Debug;

use crate::item::Role;

/// The consumer's markup cannot form a valid composite.
///
/// Only [`Composite::mount`](crate::Composite::mount) returns this; every
/// later operation treats invalid input as a silent no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError<K: Debug> {
    /// More than one item is checked in a single-select container.
    #[error("{count} items are checked in single-select container {container:?} (first {first:?}, second {second:?})")]
    MultipleChecked {
        /// The container being mounted.
        container: K,
        /// First checked item in document order.
        first: K,
        /// Second checked item in document order.
        second: K,
        /// Total number of checked items.
        count: usize,
    },
    /// The container has no items but the widget requires at least one.
    #[error("container {container:?} has no items")]
    NoItems {
        /// The container being mounted.
        container: K,
    },
    /// The container node does not have the configured role.
    #[error("container {container:?} has role {found:?}, expected {expected:?}")]
    RoleMismatch {
        /// The container being mounted.
        container: K,
        /// Role the configuration asks for.
        expected: Role,
        /// Role the host reports.
        found: Option<Role>,
    },
}
