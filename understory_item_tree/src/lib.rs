// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_item_tree --heading-base-level=0

//! Understory Item Tree: a small, ordered element tree for headless widgets.
//!
//! Composite widgets (radio groups, tab groups, trees, menus) are assembled by
//! the consumer out of independent child elements. This crate models that
//! consumer-owned markup without any rendering:
//!
//! - [`Tree`]: ordered parent/child structure with generational [`NodeId`] handles.
//! - [`Element`]: per-node [`ElementKind`], consumer-owned [`ElementFlags`]
//!   (disabled, checked, hidden), and an opaque `value`.
//! - Attribute storage ([`Attribute`], [`AttrValue`]) that higher layers write
//!   accessibility state into (`role`, `tabindex`, `aria-checked`, …).
//! - A single document-level focused node ([`Tree::focus`] / [`Tree::focused`]).
//!
//! Order is always live: [`Tree::descendants`] walks the current structure in
//! document order, so inserting or removing nodes is immediately reflected by
//! the next traversal.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_item_tree::{AttrValue, Element, ElementKind, Tree};
//!
//! let mut tree = Tree::new();
//! let tabs = tree.insert(None, Element::new(ElementKind::TabGroup));
//! let general = tree.insert(Some(tabs), Element::new(ElementKind::Tab).with_value("general"));
//! let advanced = tree.insert(Some(tabs), Element::new(ElementKind::Tab).with_value("advanced").disabled());
//!
//! tree.set_attribute(general, "tabindex", AttrValue::Int(0));
//! tree.focus(general);
//!
//! assert_eq!(tree.focused(), Some(general));
//! assert_eq!(tree.attribute(general, "tabindex"), Some(AttrValue::Int(0)));
//! assert!(tree.flags(advanced).unwrap().contains(understory_item_tree::ElementFlags::DISABLED));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{Descendants, Tree};
pub use types::{AttrValue, Attribute, Element, ElementFlags, ElementKind, NodeId};
