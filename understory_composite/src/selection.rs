// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection coordinator: owns the checked-state invariant of one container.
//!
//! In [`SelectionMode::Single`] the coordinator holds the authoritative
//! reference to the checked item, updated in the same step that writes the
//! items' own fields. Reading the current item never rescans siblings.
//!
//! The coordinator only mutates state and reports what changed as a
//! [`SelectionChange`]. Deciding whether that change is announced with events
//! is up to the caller: user gestures are, programmatic sets are not.

use smallvec::SmallVec;

use crate::CompositeHost;
use crate::config::SelectionMode;

/// A committed change to checked state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange<K> {
    /// The item that became checked, if any.
    pub checked: Option<K>,
    /// Items that became unchecked.
    pub unchecked: SmallVec<[K; 2]>,
}

impl<K> SelectionChange<K> {
    fn checked(item: K) -> Self {
        Self {
            checked: Some(item),
            unchecked: SmallVec::new(),
        }
    }

    fn unchecked(item: K) -> Self {
        let mut unchecked = SmallVec::new();
        unchecked.push(item);
        Self {
            checked: None,
            unchecked,
        }
    }
}

/// Reason a set of items cannot be adopted at mount.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MultipleChecked<K> {
    /// First checked item in document order.
    pub first: K,
    /// Second checked item in document order.
    pub second: K,
    /// Number of checked items.
    pub count: usize,
}

/// Checked-state coordinator for one container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionCoordinator<K> {
    mode: SelectionMode,
    current: Option<K>,
}

impl<K> SelectionCoordinator<K>
where
    K: Copy + Eq,
{
    /// Creates a coordinator with nothing checked.
    #[must_use]
    pub const fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            current: None,
        }
    }

    /// The checked item of a single-select container.
    ///
    /// Always `None` for other modes; read item flags instead.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Take over the initial state of `items`.
    ///
    /// In single mode more than one checked item is rejected.
    pub fn adopt<H>(&mut self, host: &H, items: &[K]) -> Result<(), MultipleChecked<K>>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        self.current = None;
        if self.mode != SelectionMode::Single {
            return Ok(());
        }
        let mut checked = items.iter().copied().filter(|&id| host.flags(id).is_checked());
        let first = checked.next();
        if let (Some(first), Some(second)) = (first, checked.next()) {
            return Err(MultipleChecked {
                first,
                second,
                count: 2 + checked.count(),
            });
        }
        self.current = first;
        Ok(())
    }

    /// Check `item` as a result of a user gesture.
    ///
    /// A no-op (returning `None`) if `item` is disabled or already checked,
    /// or if the mode is [`SelectionMode::None`]. In single mode every other
    /// checked item is unchecked first.
    pub fn select<H>(&mut self, host: &mut H, items: &[K], item: K) -> Option<SelectionChange<K>>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let flags = host.flags(item);
        if flags.is_disabled() || flags.is_checked() {
            return None;
        }
        match self.mode {
            SelectionMode::Single => Some(self.check_exclusive(host, items, item)),
            SelectionMode::Toggle => {
                host.set_checked(item, true);
                Some(SelectionChange::checked(item))
            }
            SelectionMode::None => None,
        }
    }

    /// Flip `item` as a result of a user gesture (checkbox semantics).
    ///
    /// A no-op if `item` is disabled. In single mode this behaves like
    /// [`select`](Self::select), since a radio cannot be unchecked by the user.
    pub fn toggle<H>(&mut self, host: &mut H, items: &[K], item: K) -> Option<SelectionChange<K>>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let flags = host.flags(item);
        if flags.is_disabled() {
            return None;
        }
        match self.mode {
            SelectionMode::Single => self.select(host, items, item),
            SelectionMode::Toggle => {
                let checked = !flags.is_checked();
                host.set_checked(item, checked);
                Some(if checked {
                    SelectionChange::checked(item)
                } else {
                    SelectionChange::unchecked(item)
                })
            }
            SelectionMode::None => None,
        }
    }

    /// Set `item` from code.
    ///
    /// The single-select invariant is enforced exactly as for gestures, but
    /// disabled items may be set: consumer code is not a user interaction.
    /// Returns `None` when nothing changed.
    pub fn set_checked<H>(
        &mut self,
        host: &mut H,
        items: &[K],
        item: K,
        checked: bool,
    ) -> Option<SelectionChange<K>>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        if self.mode == SelectionMode::None || !items.contains(&item) {
            return None;
        }
        let was = host.flags(item).is_checked();
        match (self.mode, checked) {
            (SelectionMode::Single, true) => {
                let others_checked = items
                    .iter()
                    .any(|&id| id != item && host.flags(id).is_checked());
                if was && !others_checked {
                    self.current = Some(item);
                    return None;
                }
                Some(self.check_exclusive(host, items, item))
            }
            (_, false) if was => {
                host.set_checked(item, false);
                if self.current == Some(item) {
                    self.current = None;
                }
                Some(SelectionChange::unchecked(item))
            }
            (SelectionMode::Toggle, true) if !was => {
                host.set_checked(item, true);
                Some(SelectionChange::checked(item))
            }
            _ => None,
        }
    }

    /// Restore the single-select invariant after the item list changed.
    ///
    /// If the current item was removed, the checked item found in `items`
    /// (if any) takes its place. If several items are checked, an item other
    /// than the previous current one wins, mirroring how inserting a checked
    /// radio unchecks the group's old selection; the rest are unchecked.
    /// Returns the items that were unchecked.
    pub fn reconcile<H>(&mut self, host: &mut H, items: &[K]) -> SmallVec<[K; 2]>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let mut unchecked = SmallVec::new();
        if self.mode != SelectionMode::Single {
            self.current = None;
            return unchecked;
        }
        let previous = self.current;
        let mut checked: SmallVec<[K; 4]> = items
            .iter()
            .copied()
            .filter(|&id| host.flags(id).is_checked())
            .collect();
        let winner = match checked.len() {
            0 => None,
            1 => Some(checked[0]),
            _ => checked
                .iter()
                .copied()
                .find(|&id| Some(id) != previous)
                .or(previous),
        };
        checked.retain(|id| Some(*id) != winner);
        for id in checked {
            host.set_checked(id, false);
            unchecked.push(id);
        }
        self.current = winner;
        unchecked
    }

    fn check_exclusive<H>(&mut self, host: &mut H, items: &[K], item: K) -> SelectionChange<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let mut unchecked = SmallVec::new();
        for &id in items {
            if id != item && host.flags(id).is_checked() {
                host.set_checked(id, false);
                unchecked.push(id);
            }
        }
        host.set_checked(item, true);
        self.current = Some(item);
        SelectionChange {
            checked: Some(item),
            unchecked,
        }
    }
}
