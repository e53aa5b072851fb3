// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-select tree whose tab stop follows focus.
//!
//! Collapsed branches are hidden items: navigation skips them until the
//! branch is expanded and the controller is told about it.
//!
//! Run:
//! - `cargo run -p understory_demos --example file_tree`

use understory_composite::{Click, Composite, CompositeConfig, Key, KeyPress};
use understory_demos::{init_tracing, outline};
use understory_item_tree::{Element, ElementKind, Tree};

fn main() {
    init_tracing();

    let mut tree = Tree::new();
    let root = tree.insert(None, Element::new(ElementKind::Tree));
    let src = tree.insert(Some(root), Element::new(ElementKind::TreeItem).with_value("src"));
    let lib = tree.insert(
        Some(src),
        Element::new(ElementKind::TreeItem).with_value("src/lib.rs").hidden(),
    );
    let readme = tree.insert(Some(root), Element::new(ElementKind::TreeItem).with_value("README.md"));

    let mut files = match Composite::mount(&mut tree, root, CompositeConfig::tree_multiple()) {
        Ok(files) => files,
        Err(err) => {
            eprintln!("cannot mount: {err}");
            return;
        }
    };

    files.handle_key(&mut tree, src, KeyPress::new(Key::ArrowDown));
    println!("Collapsed, focus skips src/lib.rs:\n{}", outline(&tree, root));

    tree.set_hidden(lib, false);
    files.disabled_changed(&mut tree, lib);
    files.handle_key(&mut tree, readme, KeyPress::new(Key::ArrowUp));
    files.handle_click(&mut tree, lib, Click::new());
    files.handle_click(&mut tree, readme, Click::new());
    println!("Expanded, two files selected:\n{}", outline(&tree, root));
    println!("selected = {:?}", files.values(&tree));
}
