// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item-tree adapter: drive composites over an `understory_item_tree::Tree`.
//!
//! Element kinds map to roles one to one (a `Select` acts as a listbox).
//! Generic elements and tab panels have no role, so they are transparent:
//! a click on a label inside a radio resolves to the radio.
//!
//! Attributes are written as `role`, `tabindex`, the configured state
//! attribute (`aria-checked`, `aria-selected`, or `aria-pressed`), and
//! `aria-disabled`; containers get `role` and `aria-orientation`.
//!
//! ## Example
//!
//! ```rust
//! use understory_composite::{Composite, CompositeConfig};
//! use understory_item_tree::{AttrValue, Element, ElementKind, Tree};
//!
//! let mut tree = Tree::new();
//! let group = tree.insert(None, Element::new(ElementKind::RadioGroup));
//! let a = tree.insert(Some(group), Element::new(ElementKind::Radio).with_value("a"));
//! let b = tree.insert(Some(group), Element::new(ElementKind::Radio).with_value("b").checked());
//!
//! let composite = Composite::mount(&mut tree, group, CompositeConfig::radio_group()).unwrap();
//! assert_eq!(composite.value(&tree), Some("b"));
//! assert_eq!(tree.attribute(a, "tabindex"), Some(AttrValue::Int(-1)));
//! assert_eq!(tree.attribute(b, "tabindex"), Some(AttrValue::Int(0)));
//! assert_eq!(tree.attribute(b, "aria-checked"), Some(AttrValue::Bool(true)));
//! ```

use alloc::vec::Vec;
use understory_item_tree::{AttrValue, ElementFlags, ElementKind, NodeId, Tree};

use crate::CompositeHost;
use crate::item::{ContainerAttributes, ItemAttributes, ItemFlags, Role};

/// The composite role an element kind plays, if any.
#[must_use]
pub fn role_for(kind: ElementKind) -> Option<Role> {
    Some(match kind {
        ElementKind::ButtonGroup => Role::Group,
        ElementKind::Button => Role::Button,
        ElementKind::RadioGroup => Role::RadioGroup,
        ElementKind::Radio => Role::Radio,
        ElementKind::TabGroup => Role::TabList,
        ElementKind::Tab => Role::Tab,
        ElementKind::Tree => Role::Tree,
        ElementKind::TreeItem => Role::TreeItem,
        ElementKind::Menu => Role::Menu,
        ElementKind::MenuItem => Role::MenuItem,
        ElementKind::Select => Role::Listbox,
        ElementKind::Option => Role::Option,
        ElementKind::Generic | ElementKind::TabPanel => return None,
    })
}

fn item_flags(flags: ElementFlags) -> ItemFlags {
    let mut out = ItemFlags::empty();
    out.set(ItemFlags::DISABLED, flags.contains(ElementFlags::DISABLED));
    out.set(ItemFlags::CHECKED, flags.contains(ElementFlags::CHECKED));
    out.set(ItemFlags::HIDDEN, flags.contains(ElementFlags::HIDDEN));
    out
}

impl CompositeHost for Tree {
    type Key = NodeId;

    fn collect_descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        out.extend(self.descendants(root));
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        Self::parent_of(self, id)
    }

    fn role_of(&self, id: NodeId) -> Option<Role> {
        self.element(id).and_then(|e| role_for(e.kind))
    }

    fn flags(&self, id: NodeId) -> ItemFlags {
        Self::flags(self, id).map(item_flags).unwrap_or_default()
    }

    fn value(&self, id: NodeId) -> &str {
        Self::value(self, id).unwrap_or("")
    }

    fn set_checked(&mut self, id: NodeId, checked: bool) {
        Self::set_checked(self, id, checked);
    }

    fn apply_attributes(&mut self, id: NodeId, attributes: &ItemAttributes) {
        self.set_attribute(id, "role", AttrValue::Str(attributes.role.as_str()));
        self.set_attribute(id, "tabindex", AttrValue::Int(attributes.tab_index.as_i32()));
        if let Some((state, on)) = attributes.state {
            self.set_attribute(id, state.name(), AttrValue::Bool(on));
        }
        if attributes.disabled {
            self.set_attribute(id, "aria-disabled", AttrValue::Bool(true));
        } else {
            self.remove_attribute(id, "aria-disabled");
        }
    }

    fn apply_container_attributes(&mut self, id: NodeId, attributes: &ContainerAttributes) {
        self.set_attribute(id, "role", AttrValue::Str(attributes.role.as_str()));
        self.set_attribute(
            id,
            "aria-orientation",
            AttrValue::Str(attributes.orientation.as_str()),
        );
    }

    fn focus(&mut self, id: NodeId) {
        Self::focus(self, id);
    }
}
