// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio group basics.
//!
//! Drive a radio group with arrow keys and clicks, dispatch the resulting
//! events to a listener, and let the listener veto a choice.
//!
//! Run:
//! - `cargo run -p understory_demos --example radio_group`
//! - `RUST_LOG=understory_composite=trace cargo run -p understory_demos --example radio_group`

use tracing::info;
use understory_composite::{Click, Composite, CompositeConfig, Key, KeyPress, Outcome};
use understory_demos::{init_tracing, outline};
use understory_item_tree::{Element, ElementKind, Tree};

fn main() {
    init_tracing();

    let mut tree = Tree::new();
    let sizes = tree.insert(None, Element::new(ElementKind::RadioGroup));
    let small = tree.insert(Some(sizes), Element::new(ElementKind::Radio).with_value("small"));
    let medium = tree.insert(
        Some(sizes),
        Element::new(ElementKind::Radio).with_value("medium").checked(),
    );
    let _sold_out = tree.insert(
        Some(sizes),
        Element::new(ElementKind::Radio).with_value("large").disabled(),
    );
    let huge = tree.insert(Some(sizes), Element::new(ElementKind::Radio).with_value("huge"));

    let mut radios = match Composite::mount(&mut tree, sizes, CompositeConfig::radio_group()) {
        Ok(radios) => radios,
        Err(err) => {
            eprintln!("cannot mount: {err}");
            return;
        }
    };
    println!("After mount:\n{}", outline(&tree, sizes));

    // ArrowDown skips the disabled radio.
    let response = radios.handle_key(&mut tree, medium, KeyPress::new(Key::ArrowDown));
    radios.emit(&mut tree, &response, |event, _, _| {
        info!(kind = event.kind.name(), value = ?event.detail, "event");
        Outcome::Continue
    });
    println!("After ArrowDown:\n{}", outline(&tree, sizes));
    assert_eq!(radios.current(), Some(huge));

    // A listener that refuses "small" and restores the previous value.
    let previous = radios.value(&tree).map(str::to_owned);
    let response = radios.handle_click(&mut tree, small, Click::new());
    radios.emit(&mut tree, &response, |event, radios, tree| {
        if event.detail.as_deref() == Some("small") {
            if let Some(previous) = &previous {
                radios.set_value(tree, previous);
            }
            info!("vetoed");
            return Outcome::Stop;
        }
        Outcome::Continue
    });
    println!("After vetoed click:\n{}", outline(&tree, sizes));
    println!("value = {:?}", radios.value(&tree));
}
