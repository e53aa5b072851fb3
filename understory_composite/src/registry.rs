// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item registry: derive a container's ordered items from the live tree.
//!
//! Nothing here is cached. Every call walks the host's current structure, so
//! items inserted, removed, or reordered since the last call are reflected
//! immediately.

use alloc::vec::Vec;

use crate::CompositeHost;
use crate::config::CompositeConfig;

/// Collect the items of `container` in document order into `out`.
///
/// A descendant is an item when its role is in
/// [`CompositeConfig::item_roles`] and its nearest ancestor with the
/// container's role is `container` itself. Items of a nested container of the
/// same kind are therefore excluded.
///
/// `out` is cleared first.
pub fn collect_items<H>(
    host: &H,
    container: H::Key,
    config: &CompositeConfig,
    out: &mut Vec<H::Key>,
) where
    H: CompositeHost + ?Sized,
{
    out.clear();
    host.collect_descendants(container, out);
    out.retain(|&id| {
        host.role_of(id)
            .is_some_and(|role| config.item_roles.contains_role(role))
            && owning_container(host, id, config) == Some(container)
    });
}

/// The nearest ancestor of `id` whose role is the configured container role.
pub fn owning_container<H>(host: &H, id: H::Key, config: &CompositeConfig) -> Option<H::Key>
where
    H: CompositeHost + ?Sized,
{
    let mut node = host.parent_of(id);
    while let Some(n) = node {
        if host.role_of(n) == Some(config.container_role) {
            return Some(n);
        }
        node = host.parent_of(n);
    }
    None
}

/// Resolve an event target to the item that contains it.
///
/// Walks from `target` towards the root and returns the first node found in
/// `items`. The walk stops at `container`.
pub fn closest_item<H>(host: &H, container: H::Key, target: H::Key, items: &[H::Key]) -> Option<H::Key>
where
    H: CompositeHost + ?Sized,
{
    let mut node = Some(target);
    while let Some(n) = node {
        if n == container {
            return None;
        }
        if items.contains(&n) {
            return Some(n);
        }
        node = host.parent_of(n);
    }
    None
}

/// Index of the first navigable item.
pub fn first_navigable<H>(host: &H, items: &[H::Key]) -> Option<usize>
where
    H: CompositeHost + ?Sized,
{
    items.iter().position(|&id| host.flags(id).is_navigable())
}

/// Index of the last navigable item.
pub fn last_navigable<H>(host: &H, items: &[H::Key]) -> Option<usize>
where
    H: CompositeHost + ?Sized,
{
    items.iter().rposition(|&id| host.flags(id).is_navigable())
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::test_host::{CONTAINER, SliceHost};

    #[test]
    fn collects_items_in_order() {
        let host = SliceHost::new(&[false, true, false]);
        let mut out = vec![99];
        collect_items(&host, CONTAINER, &CompositeConfig::radio_group(), &mut out);
        assert_eq!(out, [1, 2, 3]);
    }

    #[test]
    fn other_item_roles_are_excluded() {
        let host = SliceHost::new(&[false, false]);
        let mut out = Vec::new();
        let config = CompositeConfig {
            container_role: crate::item::Role::RadioGroup,
            ..CompositeConfig::tab_group()
        };
        collect_items(&host, CONTAINER, &config, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn closest_item_stops_at_the_container() {
        let host = SliceHost::new(&[false, false]);
        let items = host.items();
        assert_eq!(closest_item(&host, CONTAINER, 2, &items), Some(2));
        assert_eq!(closest_item(&host, CONTAINER, CONTAINER, &items), None);
        assert_eq!(closest_item(&host, CONTAINER, 7, &items), None);
    }

    #[test]
    fn navigable_bounds() {
        let host = SliceHost::new(&[true, false, false, true]);
        let items = host.items();
        assert_eq!(first_navigable(&host, &items), Some(1));
        assert_eq!(last_navigable(&host, &items), Some(2));
    }
}
