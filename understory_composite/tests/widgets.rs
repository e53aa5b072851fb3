// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trees, button groups, menus, and listboxes: the presets that let the tab
//! stop follow focus.

mod common;

use common::{checked, element, group, kinds, tab_stops};
use pretty_assertions::assert_eq;
use understory_composite::{Click, Composite, CompositeConfig, EventKind, Key, KeyPress};
use understory_item_tree::{AttrValue, Element, ElementKind, Tree};

#[test]
fn tree_items_nest_and_hidden_branches_are_skipped() {
    let mut tree = Tree::new();
    let root = tree.insert(None, Element::new(ElementKind::Tree));
    let docs = tree.insert(Some(root), element(ElementKind::TreeItem, "docs".into(), ""));
    let guide = tree.insert(Some(docs), element(ElementKind::TreeItem, "guide".into(), "h"));
    let src = tree.insert(Some(root), element(ElementKind::TreeItem, "src".into(), ""));

    let mut composite = Composite::mount(&mut tree, root, CompositeConfig::tree()).unwrap();
    assert_eq!(composite.items(&tree), [docs, guide, src]);

    composite.handle_key(&mut tree, docs, KeyPress::new(Key::ArrowDown));
    assert_eq!(tree.focused(), Some(src));
    assert_eq!(composite.tab_stop(), Some(src));

    // Expanding the branch makes the child reachable.
    tree.set_hidden(guide, false);
    composite.disabled_changed(&mut tree, guide);
    composite.handle_key(&mut tree, src, KeyPress::new(Key::ArrowUp));
    assert_eq!(tree.focused(), Some(guide));
}

#[test]
fn tree_navigation_stops_at_the_ends() {
    let mut f = group(ElementKind::Tree, ElementKind::TreeItem, &["", ""]);
    let mut composite = Composite::mount(&mut f.tree, f.container, CompositeConfig::tree()).unwrap();
    let [first, last] = f.items[..] else { unreachable!() };

    let response = composite.handle_key(&mut f.tree, last, KeyPress::new(Key::ArrowDown));
    assert!(!response.handled);
    let response = composite.handle_key(&mut f.tree, first, KeyPress::new(Key::ArrowUp));
    assert!(!response.handled);
    assert_eq!(composite.tab_stop(), Some(first));
}

#[test]
fn tree_selection_change_on_activation_only() {
    let mut f = group(ElementKind::Tree, ElementKind::TreeItem, &["", "", ""]);
    let mut composite = Composite::mount(&mut f.tree, f.container, CompositeConfig::tree()).unwrap();
    let [a, b, c] = f.items[..] else { unreachable!() };

    let response = composite.handle_key(&mut f.tree, a, KeyPress::new(Key::ArrowDown));
    assert!(response.is_empty());
    assert_eq!(composite.current(), None);
    assert_eq!(tab_stops(&f.tree, &f.items), [b]);

    let response = composite.handle_key(&mut f.tree, b, KeyPress::new(Key::Space));
    assert_eq!(kinds(&response), [EventKind::SelectionChange]);
    assert_eq!(composite.current(), Some(b));

    composite.handle_click(&mut f.tree, c, Click::new());
    assert_eq!(checked(&f.tree, &f.items), [c]);
    assert_eq!(f.tree.attribute(b, "aria-selected"), Some(AttrValue::Bool(false)));
    assert_eq!(f.tree.attribute(c, "aria-selected"), Some(AttrValue::Bool(true)));
}

#[test]
fn tab_stop_follows_focus_from_outside() {
    let mut f = group(ElementKind::Tree, ElementKind::TreeItem, &["", "", ""]);
    let mut composite = Composite::mount(&mut f.tree, f.container, CompositeConfig::tree()).unwrap();
    let [_, _, c] = f.items[..] else { unreachable!() };

    composite.focus_in(&mut f.tree, c);
    assert_eq!(composite.tab_stop(), Some(c));
    assert_eq!(tab_stops(&f.tree, &f.items), [c]);
}

#[test]
fn multi_select_tree_toggles_and_reports_values() {
    let mut f = group(ElementKind::Tree, ElementKind::TreeItem, &["c", "", ""]);
    let mut composite =
        Composite::mount(&mut f.tree, f.container, CompositeConfig::tree_multiple()).unwrap();
    let [a, _, c] = f.items[..] else { unreachable!() };

    composite.handle_click(&mut f.tree, c, Click::new());
    assert_eq!(composite.values(&f.tree), ["i0", "i2"]);
    assert_eq!(composite.value(&f.tree), None);

    let response = composite.handle_click(&mut f.tree, a, Click::new());
    assert_eq!(kinds(&response), [EventKind::SelectionChange]);
    assert_eq!(composite.values(&f.tree), ["i2"]);

    assert!(composite.set_values(&mut f.tree, ["i0", "i1"]));
    assert_eq!(composite.values(&f.tree), ["i0", "i1"]);
    assert!(!composite.set_values(&mut f.tree, ["i1", "i0"]));
}

#[test]
fn button_group_toggles_independently() {
    let mut f = group(ElementKind::ButtonGroup, ElementKind::Button, &["", "", "d"]);
    let mut composite =
        Composite::mount(&mut f.tree, f.container, CompositeConfig::button_group()).unwrap();
    let [bold, italic, underline] = f.items[..] else { unreachable!() };

    assert_eq!(f.tree.attribute(f.container, "role"), Some(AttrValue::Str("group")));
    assert_eq!(
        f.tree.attribute(f.container, "aria-orientation"),
        Some(AttrValue::Str("horizontal"))
    );

    let response = composite.handle_click(&mut f.tree, bold, Click::new());
    assert_eq!(kinds(&response), [EventKind::Input, EventKind::Change]);
    composite.handle_click(&mut f.tree, italic, Click::new());
    assert_eq!(checked(&f.tree, &f.items), [bold, italic]);
    assert_eq!(f.tree.attribute(bold, "aria-pressed"), Some(AttrValue::Bool(true)));

    // Arrows only move focus; Space toggles.
    composite.handle_key(&mut f.tree, italic, KeyPress::new(Key::ArrowRight));
    assert_eq!(f.tree.focused(), Some(bold));
    composite.handle_key(&mut f.tree, bold, KeyPress::new(Key::Space));
    assert_eq!(checked(&f.tree, &f.items), [italic]);

    assert!(composite.toggle(&mut f.tree, underline).is_empty());
    assert_eq!(tab_stops(&f.tree, &f.items), [bold]);
}

#[test]
fn menu_items_are_activated_not_checked() {
    let mut f = group(ElementKind::Menu, ElementKind::MenuItem, &["", "", ""]);
    let mut composite = Composite::mount(&mut f.tree, f.container, CompositeConfig::menu()).unwrap();
    let [open, save, _] = f.items[..] else { unreachable!() };

    assert_eq!(f.tree.attribute(open, "aria-checked"), None);
    let response = composite.handle_key(&mut f.tree, open, KeyPress::new(Key::ArrowDown));
    assert!(response.is_empty());
    let response = composite.handle_key(&mut f.tree, save, KeyPress::new(Key::Enter));
    assert_eq!(kinds(&response), [EventKind::Selected]);
    assert_eq!(response.events[0].detail.as_deref(), Some("i1"));

    // Activating again fires again: there is no state to be idempotent about.
    let again = composite.activate(&mut f.tree, save);
    assert_eq!(kinds(&again), [EventKind::Selected]);
    assert!(checked(&f.tree, &f.items).is_empty());
    assert!(!composite.set_checked(&mut f.tree, save, true));
}

#[test]
fn listbox_commits_on_enter() {
    let mut f = group(ElementKind::Select, ElementKind::Option, &["c", "", ""]);
    let mut composite = Composite::mount(&mut f.tree, f.container, CompositeConfig::listbox()).unwrap();
    let [a, _, c] = f.items[..] else { unreachable!() };

    composite.handle_key(&mut f.tree, a, KeyPress::new(Key::End));
    assert_eq!(f.tree.focused(), Some(c));
    assert_eq!(composite.value(&f.tree), Some("i0"));

    let response = composite.handle_key(&mut f.tree, c, KeyPress::new(Key::Enter));
    assert_eq!(kinds(&response), [EventKind::Input, EventKind::Change]);
    assert_eq!(composite.value(&f.tree), Some("i2"));
}
