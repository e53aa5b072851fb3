// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the composite integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use understory_composite::{EventKind, Response};
use understory_item_tree::{AttrValue, Element, ElementFlags, ElementKind, NodeId, Tree};

/// A container with one flat level of items.
pub struct Fixture {
    pub tree: Tree,
    pub container: NodeId,
    pub items: Vec<NodeId>,
}

/// Build a container of `kind` whose items are `item` elements.
///
/// Each entry of `states` describes one item: `d` disabled, `c` checked,
/// `h` hidden; the empty string is a plain enabled item. Item `i` gets the
/// value `"i{i}"`.
pub fn group(kind: ElementKind, item: ElementKind, states: &[&str]) -> Fixture {
    let mut tree = Tree::new();
    let container = tree.insert(None, Element::new(kind));
    let items = states
        .iter()
        .enumerate()
        .map(|(i, state)| tree.insert(Some(container), element(item, format!("i{i}"), state)))
        .collect();
    Fixture {
        tree,
        container,
        items,
    }
}

pub fn element(kind: ElementKind, value: String, state: &str) -> Element {
    let mut element = Element::new(kind).with_value(value);
    for c in state.chars() {
        element = match c {
            'd' => element.disabled(),
            'c' => element.checked(),
            'h' => element.hidden(),
            other => panic!("unknown item state {other:?}"),
        };
    }
    element
}

/// Items carrying `tabindex="0"`.
pub fn tab_stops(tree: &Tree, items: &[NodeId]) -> Vec<NodeId> {
    items
        .iter()
        .copied()
        .filter(|&id| tree.attribute(id, "tabindex") == Some(AttrValue::Int(0)))
        .collect()
}

/// Items whose checked field is set.
pub fn checked(tree: &Tree, items: &[NodeId]) -> Vec<NodeId> {
    items
        .iter()
        .copied()
        .filter(|&id| tree.flags(id).is_some_and(|f| f.contains(ElementFlags::CHECKED)))
        .collect()
}

pub fn kinds(response: &Response<NodeId>) -> Vec<EventKind> {
    response.events.iter().map(|e| e.kind).collect()
}

/// Deterministic xorshift generator for randomized interaction sequences.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    pub fn chance(&mut self, percent: u64) -> bool {
        self.next_u64() % 100 < percent
    }
}
