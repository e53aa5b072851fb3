// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host interface: how the controller sees the consumer's tree.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::item::{ContainerAttributes, ItemAttributes, ItemFlags, Role};

/// Capability interface between the controller and the consumer's markup.
///
/// The host owns every node and its state. The controller never stores an
/// item list; it asks the host to enumerate descendants at the start of each
/// operation and reads flags on demand.
///
/// A node is a selectable item of a container when [`role_of`](Self::role_of)
/// reports a role in the container's configured
/// [`item_roles`](crate::CompositeConfig::item_roles). This replaces checks on
/// concrete element types.
pub trait CompositeHost {
    /// Node handle.
    type Key: Copy + Eq + Debug;

    /// Push every descendant of `root` in document order, excluding `root` itself.
    fn collect_descendants(&self, root: Self::Key, out: &mut Vec<Self::Key>);

    /// The parent of `id`, or `None` for roots and stale handles.
    fn parent_of(&self, id: Self::Key) -> Option<Self::Key>;

    /// The composite role of `id`, or `None` if the node plays no part in composites.
    fn role_of(&self, id: Self::Key) -> Option<Role>;

    /// Current state of `id`. Stale handles report empty flags.
    fn flags(&self, id: Self::Key) -> ItemFlags;

    /// The opaque value of `id`.
    fn value(&self, id: Self::Key) -> &str;

    /// Write the checked / selected field of `id`.
    fn set_checked(&mut self, id: Self::Key, checked: bool);

    /// Write role, tabindex, and state attributes onto `id`.
    fn apply_attributes(&mut self, id: Self::Key, attributes: &ItemAttributes);

    /// Write role and orientation onto the container.
    ///
    /// The default does nothing, for hosts that render these themselves.
    fn apply_container_attributes(&mut self, id: Self::Key, attributes: &ContainerAttributes) {
        let _ = (id, attributes);
    }

    /// Move input focus to `id`.
    fn focus(&mut self, id: Self::Key);
}
