// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab group with manual activation.
//!
//! Arrow keys move focus between tabs without switching panels; Enter shows
//! the focused tab and reports `tab-hide` / `tab-show`.
//!
//! Run:
//! - `cargo run -p understory_demos --example tab_group`

use understory_composite::{Composite, CompositeConfig, Key, KeyPress};
use understory_demos::{init_tracing, outline};
use understory_item_tree::{Element, ElementKind, Tree};

fn main() {
    init_tracing();

    let mut tree = Tree::new();
    let tabs = tree.insert(None, Element::new(ElementKind::TabGroup));
    let general = tree.insert(
        Some(tabs),
        Element::new(ElementKind::Tab).with_value("general").checked(),
    );
    let _ = tree.insert(Some(tabs), Element::new(ElementKind::Tab).with_value("network"));
    let _ = tree.insert(Some(tabs), Element::new(ElementKind::Tab).with_value("about"));
    for panel in ["general", "network", "about"] {
        tree.insert(Some(tabs), Element::new(ElementKind::TabPanel).with_value(panel));
    }

    let mut composite = match Composite::mount(&mut tree, tabs, CompositeConfig::tab_group()) {
        Ok(composite) => composite,
        Err(err) => {
            eprintln!("cannot mount: {err}");
            return;
        }
    };

    let mut origin = general;
    for key in [Key::ArrowLeft, Key::ArrowLeft, Key::Enter] {
        let response = composite.handle_key(&mut tree, origin, KeyPress::new(key));
        for event in &response.events {
            println!("{key:?}: {} {:?}", event.kind.name(), event.detail);
        }
        if let Some(focused) = tree.focused() {
            origin = focused;
        }
    }
    println!("{}", outline(&tree, tabs));
    println!("shown = {:?}", composite.value(&tree));
}
