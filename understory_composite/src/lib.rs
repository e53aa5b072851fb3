// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_composite --heading-base-level=0

//! Understory Composite: keyboard, selection, and focus for grouped widgets.
//!
//! Radio groups, button groups, tab groups, trees, menus, and listboxes are
//! _composite_ widgets: one container coordinates a set of independent items
//! that the consumer places in markup. This crate is the headless controller
//! behind all of them:
//!
//! - It enumerates the container's items from the live tree on every
//!   operation ([`registry`]), honoring nested containers of the same kind.
//! - It keeps exactly one item reachable with Tab (roving tabindex, [`roving`]).
//! - It enforces single selection where configured ([`selection`]).
//! - It maps arrow keys, Home, End, Space, and Enter to focus moves and
//!   activation ([`keyboard`]), skipping disabled items and optionally wrapping.
//! - It distinguishes user gestures from programmatic changes: only gestures
//!   produce public events ([`event`]).
//!
//! The controller never owns the tree. A [`CompositeHost`] gives it the
//! structure, roles, state flags, and values, and receives checked-state
//! writes, attribute projections, and focus moves. An implementation for
//! `understory_item_tree::Tree` lives in [`adapters::item_tree`].
//!
//! Widget behavior is data: a [`CompositeConfig`] picks the container and item
//! roles, selection mode, tab stop policy, wrapping, and which events fire.
//! Presets exist for every widget in the catalog.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_composite::{Composite, CompositeConfig, EventKind, Key, KeyPress};
//! use understory_item_tree::{Element, ElementKind, Tree};
//!
//! let mut tree = Tree::new();
//! let group = tree.insert(None, Element::new(ElementKind::RadioGroup));
//! let small = tree.insert(Some(group), Element::new(ElementKind::Radio).with_value("s"));
//! let large = tree.insert(Some(group), Element::new(ElementKind::Radio).with_value("l"));
//!
//! let mut radios = Composite::mount(&mut tree, group, CompositeConfig::radio_group()).unwrap();
//! assert_eq!(radios.tab_stop(), Some(small));
//!
//! // ArrowDown moves focus and selection; the change is committed before
//! // any event is handed back.
//! let response = radios.handle_key(&mut tree, small, KeyPress::new(Key::ArrowDown));
//! assert!(response.handled);
//! assert_eq!(radios.value(&tree), Some("l"));
//! assert_eq!(tree.focused(), Some(large));
//! let kinds: Vec<_> = response.events.iter().map(|e| e.kind).collect();
//! assert_eq!(kinds, [EventKind::Input, EventKind::Change]);
//!
//! // Setting the value from code is silent.
//! radios.set_value(&mut tree, "s");
//! assert_eq!(radios.current(), Some(small));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. The `std` feature only forwards to
//! `tracing` and `thiserror`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod config;
pub mod event;
pub mod item;
pub mod keyboard;
pub mod registry;
pub mod roving;
pub mod selection;

mod composite;
mod error;
mod host;

#[cfg(test)]
mod test_host;

pub use composite::{Click, Composite, KeyPress};
pub use config::{CompositeConfig, SelectionMode, TabStopPolicy, TextDirection};
pub use error::ConfigError;
pub use event::{CompositeEvent, EventFlags, EventKind, EventSet, Outcome, Response};
pub use host::CompositeHost;
pub use item::{
    ContainerAttributes, ItemAttributes, ItemFlags, Orientation, Role, RoleSet, StateAttribute,
    TabIndex,
};
pub use keyboard::{Key, KeyIntent};
pub use selection::{SelectionChange, SelectionCoordinator};
