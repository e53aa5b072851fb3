// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the composite demos.

use std::fmt::Write as _;

use tracing_subscriber::EnvFilter;
use understory_item_tree::{AttrValue, NodeId, Tree};

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG`, controller logs are shown at `debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_composite=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Render `root` and its descendants as an indented outline.
///
/// Each line shows the element kind, its value, and the attributes written
/// by the controller. The focused node is marked with `*`.
pub fn outline(tree: &Tree, root: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, root, 0, &mut out);
    out
}

fn write_node(tree: &Tree, id: NodeId, depth: usize, out: &mut String) {
    let Some(element) = tree.element(id) else {
        return;
    };
    let marker = if tree.focused() == Some(id) { '*' } else { ' ' };
    let _ = write!(out, "{marker} {:indent$}{:?}", "", element.kind, indent = depth * 2);
    if !element.value.is_empty() {
        let _ = write!(out, " {:?}", element.value);
    }
    for attr in tree.attributes(id) {
        let _ = match attr.value {
            AttrValue::Bool(b) => write!(out, " {}={b}", attr.name),
            AttrValue::Int(i) => write!(out, " {}={i}", attr.name),
            AttrValue::Str(s) => write!(out, " {}={s}", attr.name),
        };
    }
    out.push('\n');
    for &child in tree.children_of(id) {
        write_node(tree, child, depth + 1, out);
    }
}
