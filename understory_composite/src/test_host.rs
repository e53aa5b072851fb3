// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flat host for unit tests: node `0` is a radio group, nodes `1..=n` are its radios.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::CompositeHost;
use crate::item::{ItemAttributes, ItemFlags, Role};

pub(crate) const CONTAINER: usize = 0;

#[derive(Clone, Debug, Default)]
pub(crate) struct SliceHost {
    pub(crate) flags: Vec<ItemFlags>,
    pub(crate) values: Vec<String>,
    pub(crate) attributes: Vec<Option<ItemAttributes>>,
    pub(crate) focused: Option<usize>,
}

impl SliceHost {
    /// One item per entry; `true` means disabled.
    pub(crate) fn new(disabled: &[bool]) -> Self {
        Self {
            flags: disabled
                .iter()
                .map(|&d| if d { ItemFlags::DISABLED } else { ItemFlags::empty() })
                .collect(),
            values: (1..=disabled.len()).map(|i| format!("v{i}")).collect(),
            attributes: alloc::vec![None; disabled.len()],
            focused: None,
        }
    }

    pub(crate) fn items(&self) -> Vec<usize> {
        (1..=self.flags.len()).collect()
    }

    pub(crate) fn check(mut self, id: usize) -> Self {
        self.flags[id - 1] |= ItemFlags::CHECKED;
        self
    }

    pub(crate) fn set_disabled(&mut self, id: usize, disabled: bool) {
        self.flags[id - 1].set(ItemFlags::DISABLED, disabled);
    }

    pub(crate) fn checked(&self) -> Vec<usize> {
        self.items()
            .into_iter()
            .filter(|&id| self.flags[id - 1].is_checked())
            .collect()
    }
}

impl CompositeHost for SliceHost {
    type Key = usize;

    fn collect_descendants(&self, root: usize, out: &mut Vec<usize>) {
        if root == CONTAINER {
            out.extend(1..=self.flags.len());
        }
    }

    fn parent_of(&self, id: usize) -> Option<usize> {
        (id != CONTAINER && id <= self.flags.len()).then_some(CONTAINER)
    }

    fn role_of(&self, id: usize) -> Option<Role> {
        match id {
            CONTAINER => Some(Role::RadioGroup),
            _ if id <= self.flags.len() => Some(Role::Radio),
            _ => None,
        }
    }

    fn flags(&self, id: usize) -> ItemFlags {
        id.checked_sub(1)
            .and_then(|i| self.flags.get(i).copied())
            .unwrap_or_default()
    }

    fn value(&self, id: usize) -> &str {
        id.checked_sub(1)
            .and_then(|i| self.values.get(i))
            .map_or("", String::as_str)
    }

    fn set_checked(&mut self, id: usize, checked: bool) {
        if let Some(f) = id.checked_sub(1).and_then(|i| self.flags.get_mut(i)) {
            f.set(ItemFlags::CHECKED, checked);
        }
    }

    fn apply_attributes(&mut self, id: usize, attributes: &ItemAttributes) {
        if let Some(slot) = id.checked_sub(1).and_then(|i| self.attributes.get_mut(i)) {
            *slot = Some(*attributes);
        }
    }

    fn focus(&mut self, id: usize) {
        self.focused = Some(id);
    }
}
