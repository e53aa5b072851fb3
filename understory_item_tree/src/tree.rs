// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, element state, attributes, and focus.

use alloc::vec::Vec;
use smallvec::SmallVec;

use crate::types::{AttrValue, Attribute, Element, ElementFlags, NodeId};

/// Top-level element tree.
///
/// Nodes are ordered: children keep their insertion order (or the position
/// given to [`Tree::insert_at`]), and [`Tree::descendants`] walks them in
/// document order. Changes take effect immediately; there is no commit step.
///
/// ## Example
///
/// ```rust
/// use understory_item_tree::{Element, ElementKind, Tree};
///
/// let mut tree = Tree::new();
/// let group = tree.insert(None, Element::new(ElementKind::RadioGroup));
/// let a = tree.insert(Some(group), Element::new(ElementKind::Radio).with_value("a"));
/// let b = tree.insert(Some(group), Element::new(ElementKind::Radio).with_value("b"));
///
/// assert_eq!(tree.descendants(group).collect::<Vec<_>>(), vec![a, b]);
/// assert_eq!(tree.value(b), Some("b"));
/// ```
#[derive(Clone, Default)]
pub struct Tree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    focused: Option<NodeId>,
}

impl core::fmt::Debug for Tree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Tree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    element: Element,
    attributes: SmallVec<[Attribute; 4]>,
}

impl Node {
    fn new(generation: u32, element: Element) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            element,
            attributes: SmallVec::new(),
        }
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new node as the last child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let id = self.allocate(element);
        if let Some(p) = parent
            && self.is_alive(p)
        {
            self.link_parent(id, p, None);
        }
        id
    }

    /// Insert a new node as child number `index` of `parent`.
    ///
    /// `index` is clamped to the number of existing children.
    pub fn insert_at(&mut self, parent: NodeId, index: usize, element: Element) -> NodeId {
        let id = self.allocate(element);
        if self.is_alive(parent) {
            self.link_parent(id, parent, Some(index));
        }
        id
    }

    /// Remove a node (and its subtree) from the tree.
    ///
    /// If the focused node is removed, nothing is focused afterwards.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` under `new_parent` as its last child.
    ///
    /// Moving a node under itself or one of its own descendants is ignored.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id)
            || new_parent.is_some_and(|p| self.is_inclusive_ancestor(id, p))
        {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent
            && self.is_alive(p)
        {
            self.link_parent(id, p, None);
        }
    }

    /// Returns true if `id` refers to a live node.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .is_some_and(|n| n.generation == id.1)
    }

    /// Returns the parent of a node if live, or `None` for roots or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Get the children of a node, or empty slice if node is stale.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            Some(node) => &node.children,
            None => &[],
        }
    }

    /// Returns the element stored at a live node.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.get(id).map(|node| &node.element)
    }

    /// Returns the flags of a node if the identifier is live.
    pub fn flags(&self, id: NodeId) -> Option<ElementFlags> {
        self.get(id).map(|node| node.element.flags)
    }

    /// Returns the value of a node if the identifier is live.
    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|node| node.element.value.as_str())
    }

    /// Set or clear [`ElementFlags::DISABLED`].
    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        self.set_flag(id, ElementFlags::DISABLED, disabled);
    }

    /// Set or clear [`ElementFlags::CHECKED`].
    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        self.set_flag(id, ElementFlags::CHECKED, checked);
    }

    /// Set or clear [`ElementFlags::HIDDEN`].
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        self.set_flag(id, ElementFlags::HIDDEN, hidden);
    }

    /// Replace the value of a live node.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<alloc::string::String>) {
        if let Some(node) = self.get_mut(id) {
            node.element.value = value.into();
        }
    }

    /// Write an attribute, replacing any previous value with the same name.
    pub fn set_attribute(&mut self, id: NodeId, name: &'static str, value: AttrValue) {
        let Some(node) = self.get_mut(id) else {
            return;
        };
        if let Some(existing) = node.attributes.iter_mut().find(|a| a.name == name) {
            existing.value = value;
        } else {
            node.attributes.push(Attribute { name, value });
        }
    }

    /// Remove an attribute if present.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(node) = self.get_mut(id) {
            node.attributes.retain(|a| a.name != name);
        }
    }

    /// Read an attribute.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<AttrValue> {
        self.get(id)?
            .attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value)
    }

    /// All attributes of a node, in the order they were first written.
    pub fn attributes(&self, id: NodeId) -> &[Attribute] {
        match self.get(id) {
            Some(node) => &node.attributes,
            None => &[],
        }
    }

    /// Move document focus to `id`. Stale ids clear focus.
    pub fn focus(&mut self, id: NodeId) {
        self.focused = self.is_alive(id).then_some(id);
    }

    /// The currently focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Iterate the strict descendants of `root` in document (depth-first, pre-order) order.
    ///
    /// The iterator is empty for stale roots.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if self.is_alive(root) {
            stack.extend(self.node(root).children.iter().rev().copied());
        }
        Descendants { tree: self, stack }
    }

    // --- internals ---

    fn allocate(&mut self, element: Element) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, element));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, element)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.parent_of(node) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn set_flag(&mut self, id: NodeId, flag: ElementFlags, on: bool) {
        if let Some(node) = self.get_mut(id) {
            node.element.flags.set(flag, on);
        }
    }

    fn get(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.1).then_some(n)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    /// Callers must have checked liveness.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()]
            .as_ref()
            .unwrap_or_else(|| unreachable!("dead node {id:?}"))
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId, index: Option<usize>) {
        if let Some(parent_node) = self.get_mut(parent) {
            let at = index.map_or(parent_node.children.len(), |i| {
                i.min(parent_node.children.len())
            });
            parent_node.children.insert(at, id);
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.retain(|&c| c != id);
        }
        if let Some(node) = self.get_mut(id) {
            node.parent = None;
        }
    }
}

/// Depth-first, pre-order iterator over a subtree, created by [`Tree::descendants`].
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children_of(id).iter().rev().copied());
        Some(id)
    }
}
