// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving tab stop: which single item is reachable with Tab.
//!
//! Invariant: after any operation, the tab stop is a navigable item of the
//! current registry whenever one exists, and `None` only when every item is
//! disabled or hidden. Since there is one slot, two items can never both be
//! reachable.

use crate::CompositeHost;
use crate::registry::first_navigable;

/// Roving tabindex state for one container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RovingFocus<K> {
    tab_stop: Option<K>,
}

impl<K> RovingFocus<K>
where
    K: Copy + Eq,
{
    /// Creates state with no tab stop.
    #[must_use]
    pub const fn new() -> Self {
        Self { tab_stop: None }
    }

    /// The item currently reachable with Tab.
    #[must_use]
    pub fn tab_stop(&self) -> Option<K> {
        self.tab_stop
    }

    /// Assign the initial tab stop.
    ///
    /// Picks the checked item if exactly one navigable item is checked,
    /// otherwise the first navigable item, otherwise none.
    pub fn initialize<H>(&mut self, host: &H, items: &[K]) -> Option<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let mut checked = items
            .iter()
            .copied()
            .filter(|&id| host.flags(id).is_checked());
        let only_checked = match (checked.next(), checked.next()) {
            (Some(one), None) => Some(one),
            _ => None,
        };
        self.tab_stop = None;
        self.resolve(host, items, only_checked)
    }

    /// The newly checked item becomes the tab stop.
    ///
    /// If it cannot take focus (for example a disabled item checked from
    /// code), the current tab stop is kept when still valid.
    pub fn on_selection_change<H>(&mut self, host: &H, items: &[K], newly_checked: Option<K>) -> Option<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        if let Some(item) = newly_checked
            && is_valid(host, items, item)
        {
            self.tab_stop = Some(item);
            return self.tab_stop;
        }
        let keep = self.tab_stop;
        self.resolve(host, items, keep)
    }

    /// Make `item` the tab stop because it received keyboard focus.
    ///
    /// Ignored when `item` cannot take focus.
    pub fn follow_focus<H>(&mut self, host: &H, items: &[K], item: K) -> Option<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        if is_valid(host, items, item) {
            self.tab_stop = Some(item);
        }
        self.tab_stop
    }

    /// Transfer input focus to `item`. Does not change selection or the tab stop.
    pub fn move_focus_to<H>(&self, host: &mut H, item: K)
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        host.focus(item);
    }

    /// Set the tab stop to `preferred` if valid, else the first navigable item.
    pub fn resolve<H>(&mut self, host: &H, items: &[K], preferred: Option<K>) -> Option<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        self.tab_stop = preferred
            .filter(|&p| is_valid(host, items, p))
            .or_else(|| first_navigable(host, items).map(|idx| items[idx]));
        self.tab_stop
    }
}

fn is_valid<H>(host: &H, items: &[H::Key], item: H::Key) -> bool
where
    H: CompositeHost + ?Sized,
{
    items.contains(&item) && host.flags(item).is_navigable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::SliceHost;

    #[test]
    fn initialize_prefers_the_single_checked_item() {
        let host = SliceHost::new(&[false, false, false]).check(3);
        let mut roving = RovingFocus::new();
        assert_eq!(roving.initialize(&host, &host.items()), Some(3));

        let host = SliceHost::new(&[true, false, false]);
        assert_eq!(roving.initialize(&host, &host.items()), Some(2));

        let host = SliceHost::new(&[true, true]);
        assert_eq!(roving.initialize(&host, &host.items()), None);
    }

    #[test]
    fn initialize_ignores_a_disabled_checked_item() {
        let host = SliceHost::new(&[false, true]).check(2);
        let mut roving = RovingFocus::new();
        assert_eq!(roving.initialize(&host, &host.items()), Some(1));
    }

    #[test]
    fn selection_change_moves_the_tab_stop() {
        let host = SliceHost::new(&[false, false, true]);
        let items = host.items();
        let mut roving = RovingFocus::new();
        roving.initialize(&host, &items);

        assert_eq!(roving.on_selection_change(&host, &items, Some(2)), Some(2));
        // A disabled item checked from code cannot take the tab stop.
        assert_eq!(roving.on_selection_change(&host, &items, Some(3)), Some(2));
        assert_eq!(roving.on_selection_change(&host, &items, None), Some(2));
    }

    #[test]
    fn resolve_falls_back_to_first_navigable() {
        let mut host = SliceHost::new(&[false, false, false]);
        let items = host.items();
        let mut roving = RovingFocus::new();
        roving.follow_focus(&host, &items, 2);

        host.set_disabled(2, true);
        assert_eq!(roving.resolve(&host, &items, Some(3)), Some(3));
        host.set_disabled(3, true);
        assert_eq!(roving.resolve(&host, &items, Some(3)), Some(1));
        host.set_disabled(1, true);
        assert_eq!(roving.resolve(&host, &items, None), None);
        host.set_disabled(2, false);
        assert_eq!(roving.resolve(&host, &items, None), Some(2));
    }

    #[test]
    fn move_focus_keeps_the_tab_stop() {
        let mut host = SliceHost::new(&[false, false]);
        let items = host.items();
        let mut roving = RovingFocus::new();
        roving.initialize(&host, &items);

        roving.move_focus_to(&mut host, 2);
        assert_eq!(host.focused, Some(2));
        assert_eq!(roving.tab_stop(), Some(1));
    }
}
