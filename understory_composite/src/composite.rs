// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composite controller for one container.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashSet;
use tracing::{debug, trace, warn};

use crate::CompositeHost;
use crate::config::{CompositeConfig, SelectionMode, TabStopPolicy};
use crate::error::ConfigError;
use crate::event::{self, CompositeEvent, Outcome, Response};
use crate::item::{ContainerAttributes, ItemAttributes, TabIndex};
use crate::keyboard::{self, Key, KeyIntent};
use crate::registry::{closest_item, collect_items};
use crate::roving::RovingFocus;
use crate::selection::{SelectionChange, SelectionCoordinator};

/// A key press delivered to the container.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub key: Key,
    /// Another handler already prevented the default action.
    pub default_prevented: bool,
}

impl KeyPress {
    /// A key press nobody has handled yet.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    /// Mark the press as already handled elsewhere.
    #[must_use]
    pub const fn prevented(mut self) -> Self {
        self.default_prevented = true;
        self
    }
}

/// A pointer click delivered to the container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Click {
    /// Another handler already prevented the default action.
    pub default_prevented: bool,
}

impl Click {
    /// A click nobody has handled yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    /// Mark the click as already handled elsewhere.
    #[must_use]
    pub const fn prevented(mut self) -> Self {
        self.default_prevented = true;
        self
    }
}

/// Keyboard, selection, and focus controller for one composite container.
///
/// The controller keeps only what the tree cannot tell it: the
/// authoritative checked item of a single-select container and the roving
/// tab stop. Items are re-derived from the host on every call.
///
/// State changes come from two sources:
///
/// - Gestures ([`select`](Self::select), [`toggle`](Self::toggle),
///   [`activate`](Self::activate), [`handle_key`](Self::handle_key),
///   [`handle_click`](Self::handle_click)) commit their changes and return a
///   [`Response`] with the events to dispatch.
/// - Programmatic setters ([`set_checked`](Self::set_checked),
///   [`set_value`](Self::set_value), [`set_values`](Self::set_values)) commit
///   the same changes silently.
///
/// Every method takes the host explicitly, so listeners passed to
/// [`emit`](Self::emit) may call back into the controller.
#[derive(Clone, Debug)]
pub struct Composite<K> {
    container: K,
    config: CompositeConfig,
    selection: SelectionCoordinator<K>,
    roving: RovingFocus<K>,
    disabled: bool,
}

impl<K> Composite<K>
where
    K: Copy + Eq + Debug,
{
    /// Attach a controller to `container`.
    ///
    /// Adopts the initial checked state, assigns the tab stop, and writes
    /// attributes onto the container and its items.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::RoleMismatch`] if `container` does not have
    ///   [`CompositeConfig::container_role`].
    /// - [`ConfigError::NoItems`] if the container has no items and
    ///   [`CompositeConfig::require_items`] is set.
    /// - [`ConfigError::MultipleChecked`] if a single-select container starts
    ///   with more than one checked item.
    pub fn mount<H>(host: &mut H, container: K, config: CompositeConfig) -> Result<Self, ConfigError<K>>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let found = host.role_of(container);
        if found != Some(config.container_role) {
            warn!(?container, ?found, expected = ?config.container_role, "container role mismatch");
            return Err(ConfigError::RoleMismatch {
                container,
                expected: config.container_role,
                found,
            });
        }

        let mut this = Self {
            container,
            config,
            selection: SelectionCoordinator::new(config.selection),
            roving: RovingFocus::new(),
            disabled: false,
        };

        let items = this.items(host);
        if items.is_empty() && config.require_items {
            warn!(?container, "composite has no items");
            return Err(ConfigError::NoItems { container });
        }
        if let Err(e) = this.selection.adopt(host, &items) {
            warn!(?container, first = ?e.first, second = ?e.second, count = e.count, "multiple checked items");
            return Err(ConfigError::MultipleChecked {
                container,
                first: e.first,
                second: e.second,
                count: e.count,
            });
        }

        let tab_stop = this.roving.initialize(host, &items);
        host.apply_container_attributes(container, &this.container_attributes());
        this.project(host, &items);
        debug!(?container, items = items.len(), ?tab_stop, current = ?this.selection.current(), "mounted composite");
        Ok(this)
    }

    /// The container node.
    #[must_use]
    pub fn container(&self) -> K {
        self.container
    }

    /// The configuration this controller was mounted with.
    #[must_use]
    pub fn config(&self) -> &CompositeConfig {
        &self.config
    }

    /// The current items, in document order, read fresh from the host.
    pub fn items<H>(&self, host: &H) -> Vec<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let mut out = Vec::new();
        collect_items(host, self.container, &self.config, &mut out);
        out
    }

    /// The checked item of a single-select container.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.selection.current()
    }

    /// The item reachable with Tab.
    #[must_use]
    pub fn tab_stop(&self) -> Option<K> {
        self.roving.tab_stop()
    }

    /// The value of the checked item of a single-select container.
    ///
    /// `None` when nothing is checked and for the other selection modes; use
    /// [`values`](Self::values) for multi-select containers.
    pub fn value<'h, H>(&self, host: &'h H) -> Option<&'h str>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        if self.config.selection != SelectionMode::Single {
            return None;
        }
        self.selection.current().map(|id| host.value(id))
    }

    /// Values of every checked item, in document order.
    pub fn values<'h, H>(&self, host: &'h H) -> Vec<&'h str>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        self.items(host)
            .into_iter()
            .filter(|&id| host.flags(id).is_checked())
            .map(|id| host.value(id))
            .collect()
    }

    /// Role and orientation to render on the container.
    #[must_use]
    pub fn container_attributes(&self) -> ContainerAttributes {
        ContainerAttributes {
            role: self.config.container_role,
            orientation: self.config.orientation,
        }
    }

    /// Whether the whole container ignores user input.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable or re-enable user input for the whole container.
    ///
    /// Programmatic setters keep working while disabled.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Select `item` as a user gesture.
    ///
    /// No-op for disabled or already checked items, for nodes that are not
    /// items of this container, and while the container is disabled.
    pub fn select<H>(&mut self, host: &mut H, item: K) -> Response<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let Some(items) = self.gesture_items(host, item) else {
            return Response::ignored();
        };
        self.commit_select(host, &items, item)
    }

    /// Flip `item` as a user gesture.
    ///
    /// In single-select containers this is the same as [`select`](Self::select).
    pub fn toggle<H>(&mut self, host: &mut H, item: K) -> Response<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let Some(items) = self.gesture_items(host, item) else {
            return Response::ignored();
        };
        self.commit_toggle(host, &items, item)
    }

    /// Activate `item` the way a click or Space/Enter would.
    ///
    /// Selects in single mode, toggles in toggle mode, and only reports
    /// `selected` in containers without selection state.
    pub fn activate<H>(&mut self, host: &mut H, item: K) -> Response<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let Some(items) = self.gesture_items(host, item) else {
            return Response::ignored();
        };
        self.activate_in(host, &items, item)
    }

    /// Handle a key press whose event target is `origin`.
    ///
    /// `origin` may be an item or any node inside one; when it is not, the
    /// current tab stop is used. Navigation moves focus to the destination
    /// and, when configured, selects it. Space and Enter activate the
    /// focused item. Nothing happens if no navigable item can be reached.
    pub fn handle_key<H>(&mut self, host: &mut H, origin: K, press: KeyPress) -> Response<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        if press.default_prevented || self.disabled {
            trace!(container = ?self.container, key = ?press.key, "key ignored");
            return Response::ignored();
        }
        let items = self.items(host);
        let focused = closest_item(host, self.container, origin, &items).or(self.roving.tab_stop());
        let intent = keyboard::intent(press.key, self.config.direction);

        if intent == KeyIntent::Activate {
            let Some(item) = focused.filter(|&id| host.flags(id).is_navigable()) else {
                return Response::ignored();
            };
            let mut response = self.activate_in(host, &items, item);
            response.handled = true;
            return response;
        }

        let origin_idx = focused.and_then(|id| items.iter().position(|&i| i == id));
        let Some(idx) = keyboard::find_target(host, &items, origin_idx, intent, self.config.wraps) else {
            trace!(container = ?self.container, ?intent, "no navigable target");
            return Response::ignored();
        };
        let target = items[idx];
        trace!(container = ?self.container, ?intent, ?target, "keyboard navigation");

        self.roving.move_focus_to(host, target);
        if self.config.tab_stop == TabStopPolicy::Focus {
            self.roving.follow_focus(host, &items, target);
        }
        let mut response = if self.config.arrow_moves_selection && self.config.selection == SelectionMode::Single {
            self.commit_select(host, &items, target)
        } else {
            Response::consumed()
        };
        self.project(host, &items);
        response.handled = true;
        response
    }

    /// Handle a click whose event target is `target`.
    ///
    /// The target is resolved to the item containing it. Clicks outside any
    /// item, on items that cannot take focus, or already prevented elsewhere
    /// are ignored.
    pub fn handle_click<H>(&mut self, host: &mut H, target: K, click: Click) -> Response<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        if click.default_prevented || self.disabled {
            return Response::ignored();
        }
        let items = self.items(host);
        let Some(item) = closest_item(host, self.container, target, &items) else {
            return Response::ignored();
        };
        if !host.flags(item).is_navigable() {
            trace!(container = ?self.container, ?item, "click on item that cannot take focus");
            return Response::ignored();
        }

        self.roving.move_focus_to(host, item);
        if self.config.tab_stop == TabStopPolicy::Focus {
            self.roving.follow_focus(host, &items, item);
        }
        let mut response = self.activate_in(host, &items, item);
        self.project(host, &items);
        response.handled = true;
        response
    }

    /// Set the checked state of `item` from code. Emits no events.
    ///
    /// Disabled items may be set. Returns `true` if anything changed.
    pub fn set_checked<H>(&mut self, host: &mut H, item: K, checked: bool) -> bool
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let items = self.items(host);
        match self.selection.set_checked(host, &items, item, checked) {
            Some(change) => {
                self.after_change(host, &items, &change);
                true
            }
            None => false,
        }
    }

    /// Check the first item whose value is `value`. Emits no events.
    ///
    /// When no item has that value, every checked item is unchecked.
    /// Returns `true` if anything changed.
    pub fn set_value<H>(&mut self, host: &mut H, value: &str) -> bool
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let items = self.items(host);
        if let Some(item) = items.iter().copied().find(|&id| host.value(id) == value) {
            return match self.selection.set_checked(host, &items, item, true) {
                Some(change) => {
                    self.after_change(host, &items, &change);
                    true
                }
                None => false,
            };
        }

        trace!(container = ?self.container, value, "no item has value; clearing");
        let checked: Vec<K> = items
            .iter()
            .copied()
            .filter(|&id| host.flags(id).is_checked())
            .collect();
        let mut changed = false;
        for id in checked {
            changed |= self.selection.set_checked(host, &items, id, false).is_some();
        }
        if changed {
            self.roving.on_selection_change(host, &items, None);
            self.project(host, &items);
        }
        changed
    }

    /// Check exactly the items whose value is in `values`. Emits no events.
    ///
    /// In single-select containers only the first matching item in document
    /// order is checked. Returns `true` if anything changed.
    pub fn set_values<'a, H, I>(&mut self, host: &mut H, values: I) -> bool
    where
        H: CompositeHost<Key = K> + ?Sized,
        I: IntoIterator<Item = &'a str>,
    {
        let wanted: HashSet<&str> = values.into_iter().collect();
        let items = self.items(host);
        let desired: Vec<(K, bool)> = items
            .iter()
            .map(|&id| (id, wanted.contains(host.value(id))))
            .collect();

        let single = self.config.selection == SelectionMode::Single;
        let mut changed = false;
        let mut newly_checked = None;
        let mut matched = false;
        for (id, on) in desired {
            let on = on && !(single && matched);
            matched |= on;
            if let Some(change) = self.selection.set_checked(host, &items, id, on) {
                changed = true;
                if change.checked.is_some() {
                    newly_checked = change.checked;
                }
            }
        }
        if changed {
            self.roving.on_selection_change(host, &items, newly_checked);
            self.project(host, &items);
        }
        changed
    }

    /// The container's children were added, removed, or reordered.
    ///
    /// Re-applies the single-select invariant (a newly inserted checked item
    /// wins over the previous selection), revalidates the tab stop, and
    /// rewrites attributes. Emits no events.
    pub fn children_changed<H>(&mut self, host: &mut H)
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let items = self.items(host);
        let unchecked = self.selection.reconcile(host, &items);
        let preferred = self.preferred_tab_stop(host, &items);
        let tab_stop = self.roving.resolve(host, &items, preferred);
        self.project(host, &items);
        debug!(
            container = ?self.container,
            items = items.len(),
            ?unchecked,
            current = ?self.selection.current(),
            ?tab_stop,
            "children changed"
        );
    }

    /// The disabled or hidden state of `item` changed.
    ///
    /// The tab stop is re-resolved the same way as in
    /// [`children_changed`](Self::children_changed), so under
    /// [`TabStopPolicy::Selection`] a checked item that becomes focusable
    /// again takes it back.
    pub fn disabled_changed<H>(&mut self, host: &mut H, item: K)
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let items = self.items(host);
        let preferred = self.preferred_tab_stop(host, &items);
        let tab_stop = self.roving.resolve(host, &items, preferred);
        self.project(host, &items);
        trace!(container = ?self.container, ?item, ?tab_stop, "disabled changed");
    }

    /// `item` received input focus by some other means (for example Tab).
    ///
    /// Under [`TabStopPolicy::Focus`] the tab stop follows it.
    pub fn focus_in<H>(&mut self, host: &mut H, item: K)
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        if self.config.tab_stop != TabStopPolicy::Focus {
            return;
        }
        let items = self.items(host);
        let Some(item) = closest_item(host, self.container, item, &items) else {
            return;
        };
        if self.roving.tab_stop() != Some(item) {
            self.roving.follow_focus(host, &items, item);
            self.project(host, &items);
        }
    }

    /// Deliver the events of `response` to `listener`, in order.
    ///
    /// The listener may call back into the controller, for example to revert
    /// the change with a programmatic setter; such calls emit nothing.
    /// Returning [`Outcome::Stop`] drops the remaining events. Returns the
    /// number of events delivered.
    pub fn emit<H, F>(&mut self, host: &mut H, response: &Response<K>, mut listener: F) -> usize
    where
        H: CompositeHost<Key = K> + ?Sized,
        F: FnMut(&CompositeEvent<K>, &mut Self, &mut H) -> Outcome,
    {
        let mut delivered = 0;
        for event in &response.events {
            delivered += 1;
            if listener(event, self, host) == Outcome::Stop {
                trace!(container = ?self.container, kind = ?event.kind, "dispatch stopped");
                break;
            }
        }
        delivered
    }

    fn gesture_items<H>(&self, host: &H, item: K) -> Option<Vec<K>>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        if self.disabled {
            trace!(container = ?self.container, ?item, "container disabled");
            return None;
        }
        let items = self.items(host);
        items.contains(&item).then_some(items)
    }

    fn activate_in<H>(&mut self, host: &mut H, items: &[K], item: K) -> Response<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        match self.config.selection {
            SelectionMode::Single => self.commit_select(host, items, item),
            SelectionMode::Toggle => self.commit_toggle(host, items, item),
            SelectionMode::None => {
                if !host.flags(item).is_navigable() {
                    return Response::ignored();
                }
                Response {
                    handled: true,
                    events: event::gesture_events(host, &self.config, self.container, item, None),
                }
            }
        }
    }

    fn commit_select<H>(&mut self, host: &mut H, items: &[K], item: K) -> Response<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let previous = self.selection.current();
        let Some(change) = self.selection.select(host, items, item) else {
            trace!(container = ?self.container, ?item, "select is a no-op");
            return Response::ignored();
        };
        self.after_change(host, items, &change);
        Response {
            handled: true,
            events: event::gesture_events(host, &self.config, self.container, item, previous),
        }
    }

    fn commit_toggle<H>(&mut self, host: &mut H, items: &[K], item: K) -> Response<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        if self.config.selection == SelectionMode::Single {
            return self.commit_select(host, items, item);
        }
        let Some(change) = self.selection.toggle(host, items, item) else {
            trace!(container = ?self.container, ?item, "toggle is a no-op");
            return Response::ignored();
        };
        self.after_change(host, items, &change);
        Response {
            handled: true,
            events: event::gesture_events(host, &self.config, self.container, item, None),
        }
    }

    fn after_change<H>(&mut self, host: &mut H, items: &[K], change: &SelectionChange<K>)
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let tab_stop = self.roving.on_selection_change(host, items, change.checked);
        self.project(host, items);
        debug!(
            container = ?self.container,
            checked = ?change.checked,
            unchecked = ?change.unchecked,
            ?tab_stop,
            "selection committed"
        );
    }

    /// First checked item that can take focus.
    fn checked_navigable<H>(&self, host: &H, items: &[K]) -> Option<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let navigable = |id: &K| host.flags(*id).is_navigable();
        match self.config.selection {
            SelectionMode::Single => self.selection.current().filter(navigable),
            _ => items
                .iter()
                .copied()
                .filter(|&id| host.flags(id).is_checked())
                .find(navigable),
        }
    }

    fn preferred_tab_stop<H>(&self, host: &H, items: &[K]) -> Option<K>
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let valid = |id: &K| items.contains(id) && host.flags(*id).is_navigable();
        let kept = self.roving.tab_stop().filter(valid);
        match self.config.tab_stop {
            TabStopPolicy::Selection => self.checked_navigable(host, items).or(kept),
            TabStopPolicy::Focus => kept.or_else(|| self.checked_navigable(host, items)),
        }
    }

    /// Write ARIA-style attributes onto every item.
    fn project<H>(&self, host: &mut H, items: &[K])
    where
        H: CompositeHost<Key = K> + ?Sized,
    {
        let tab_stop = self.roving.tab_stop();
        let stateful = self.config.selection != SelectionMode::None;
        for &id in items {
            let Some(role) = host.role_of(id) else {
                continue;
            };
            let flags = host.flags(id);
            let attributes = ItemAttributes {
                role,
                tab_index: if tab_stop == Some(id) {
                    TabIndex::Reachable
                } else {
                    TabIndex::Programmatic
                },
                state: stateful.then_some((self.config.state_attribute, flags.is_checked())),
                disabled: flags.is_disabled(),
            };
            host.apply_attributes(id, &attributes);
        }
    }
}
