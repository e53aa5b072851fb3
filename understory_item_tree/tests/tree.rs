// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_item_tree` crate.
//!
//! These exercise document order under structural edits, stale handles, and
//! the attribute and focus bookkeeping higher layers rely on.

use pretty_assertions::assert_eq;
use understory_item_tree::{AttrValue, Element, ElementFlags, ElementKind, NodeId, Tree};

fn values(tree: &Tree, root: NodeId) -> Vec<String> {
    tree.descendants(root)
        .map(|id| tree.value(id).unwrap_or_default().to_owned())
        .collect()
}

fn radio(value: &str) -> Element {
    Element::new(ElementKind::Radio).with_value(value)
}

#[test]
fn order_follows_structural_edits() {
    let mut tree = Tree::new();
    let group = tree.insert(None, Element::new(ElementKind::RadioGroup));
    let a = tree.insert(Some(group), radio("a"));
    let c = tree.insert(Some(group), radio("c"));
    tree.insert_at(group, 1, radio("b"));
    assert_eq!(values(&tree, group), ["a", "b", "c"]);

    // Moving a node to the end of another parent.
    let other = tree.insert(Some(group), Element::new(ElementKind::Generic));
    tree.reparent(a, Some(other));
    assert_eq!(values(&tree, group), ["b", "c", "", "a"]);

    tree.remove(c);
    assert_eq!(values(&tree, group), ["b", "", "a"]);
    assert_eq!(tree.parent_of(a), Some(other));
}

#[test]
fn removing_a_subtree_invalidates_every_handle() {
    let mut tree = Tree::new();
    let root = tree.insert(None, Element::new(ElementKind::Tree));
    let branch = tree.insert(Some(root), Element::new(ElementKind::TreeItem));
    let leaf = tree.insert(Some(branch), Element::new(ElementKind::TreeItem));
    tree.focus(leaf);

    tree.remove(branch);
    assert!(!tree.is_alive(branch));
    assert!(!tree.is_alive(leaf));
    assert_eq!(tree.focused(), None);
    assert_eq!(tree.flags(leaf), None);
    assert_eq!(tree.descendants(root).count(), 0);

    // A reused slot does not alias the stale handle.
    let fresh = tree.insert(Some(root), Element::new(ElementKind::TreeItem));
    assert_ne!(fresh, branch);
    assert!(!tree.is_alive(branch));
}

#[test]
fn flags_and_attributes_round_out_an_element() {
    let mut tree = Tree::new();
    let tab = tree.insert(None, Element::new(ElementKind::Tab).with_value("general"));

    tree.set_checked(tab, true);
    tree.set_disabled(tab, true);
    assert_eq!(
        tree.flags(tab),
        Some(ElementFlags::CHECKED | ElementFlags::DISABLED)
    );

    tree.set_attribute(tab, "tabindex", AttrValue::Int(-1));
    tree.set_attribute(tab, "tabindex", AttrValue::Int(0));
    tree.set_attribute(tab, "aria-selected", AttrValue::Bool(true));
    assert_eq!(tree.attributes(tab).len(), 2);
    assert_eq!(tree.attribute(tab, "tabindex"), Some(AttrValue::Int(0)));

    tree.remove_attribute(tab, "aria-selected");
    assert_eq!(tree.attribute(tab, "aria-selected"), None);
}

#[test]
fn moving_a_branch_into_itself_keeps_the_outline() {
    let mut tree = Tree::new();
    let root = tree.insert(None, Element::new(ElementKind::Tree));
    let a = tree.insert(Some(root), Element::new(ElementKind::TreeItem));
    let a1 = tree.insert(Some(a), Element::new(ElementKind::TreeItem));
    let b = tree.insert(Some(root), Element::new(ElementKind::TreeItem));

    tree.reparent(a, Some(a1));
    assert_eq!(tree.parent_of(a), Some(root));
    let outline: Vec<NodeId> = tree.descendants(root).collect();
    assert_eq!(outline, [a, a1, b]);

    tree.reparent(a, Some(b));
    let outline: Vec<NodeId> = tree.descendants(root).collect();
    assert_eq!(outline, [b, a, a1]);
}
