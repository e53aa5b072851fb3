// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle button group.
//!
//! Each button toggles independently and reports `aria-pressed`. Setting the
//! pressed buttons from code emits no events.
//!
//! Run:
//! - `cargo run -p understory_demos --example button_group`

use understory_composite::{Click, Composite, CompositeConfig, Key, KeyPress};
use understory_demos::{init_tracing, outline};
use understory_item_tree::{Element, ElementKind, Tree};

fn main() {
    init_tracing();

    let mut tree = Tree::new();
    let toolbar = tree.insert(None, Element::new(ElementKind::ButtonGroup));
    let bold = tree.insert(Some(toolbar), Element::new(ElementKind::Button).with_value("bold"));
    let italic = tree.insert(Some(toolbar), Element::new(ElementKind::Button).with_value("italic"));
    let _ = tree.insert(
        Some(toolbar),
        Element::new(ElementKind::Button).with_value("strike").disabled(),
    );

    let mut buttons = match Composite::mount(&mut tree, toolbar, CompositeConfig::button_group()) {
        Ok(buttons) => buttons,
        Err(err) => {
            eprintln!("cannot mount: {err}");
            return;
        }
    };

    let response = buttons.handle_click(&mut tree, bold, Click::new());
    println!("click bold -> {} events", response.events.len());
    buttons.handle_key(&mut tree, bold, KeyPress::new(Key::ArrowRight));
    let response = buttons.handle_key(&mut tree, italic, KeyPress::new(Key::Enter));
    println!("Enter on italic -> {} events", response.events.len());
    println!("{}", outline(&tree, toolbar));

    let changed = buttons.set_values(&mut tree, ["italic"]);
    println!("set_values changed = {changed}, pressed = {:?}", buttons.values(&tree));
}
