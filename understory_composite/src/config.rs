// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration and per-widget presets.

use crate::event::EventSet;
use crate::item::{Orientation, Role, RoleSet, StateAttribute};

/// How checking an item affects its siblings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one item is checked; checking one unchecks the rest (radio semantics).
    Single,
    /// Each item's checked state is independent (checkbox semantics).
    Toggle,
    /// Items are activated but never checked (action menus).
    None,
}

/// Which item carries the roving tab stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabStopPolicy {
    /// The checked item, else the first navigable item.
    Selection,
    /// The item that last had keyboard focus.
    Focus,
}

/// Writing direction; RTL swaps the meaning of ArrowLeft and ArrowRight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Parameterization of one composite widget.
///
/// Every field is public; start from a preset such as
/// [`CompositeConfig::radio_group`] and adjust with the `with_*` helpers.
///
/// ```rust
/// use understory_composite::{CompositeConfig, SelectionMode};
///
/// // A tab group that activates tabs as the arrow keys move.
/// let config = CompositeConfig::tab_group().with_arrow_selection(true);
/// assert_eq!(config.selection, SelectionMode::Single);
/// assert!(config.arrow_moves_selection);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompositeConfig {
    /// Role the container node must have.
    pub container_role: Role,
    /// Roles of descendants that count as items.
    pub item_roles: RoleSet,
    /// Selection semantics.
    pub selection: SelectionMode,
    /// Arrow keys select the destination item as well as focusing it.
    pub arrow_moves_selection: bool,
    /// Navigation past either end continues from the other end.
    pub wraps: bool,
    /// Which item carries the tab stop.
    pub tab_stop: TabStopPolicy,
    /// Layout axis.
    pub orientation: Orientation,
    /// Writing direction.
    pub direction: TextDirection,
    /// ARIA state attribute mirroring `checked`.
    pub state_attribute: StateAttribute,
    /// Events emitted for user gestures.
    pub events: EventSet,
    /// Emitted events cross shadow boundaries.
    pub composed: bool,
    /// Mounting a container without items is a configuration error.
    pub require_items: bool,
}

impl CompositeConfig {
    /// Radio group: arrows move focus and selection together.
    #[must_use]
    pub const fn radio_group() -> Self {
        Self {
            container_role: Role::RadioGroup,
            item_roles: RoleSet::RADIO,
            selection: SelectionMode::Single,
            arrow_moves_selection: true,
            wraps: true,
            tab_stop: TabStopPolicy::Selection,
            orientation: Orientation::Vertical,
            direction: TextDirection::Ltr,
            state_attribute: StateAttribute::Checked,
            events: EventSet::INPUT.union(EventSet::CHANGE),
            composed: true,
            require_items: false,
        }
    }

    /// Button group of independent toggle buttons.
    #[must_use]
    pub const fn button_group() -> Self {
        Self {
            container_role: Role::Group,
            item_roles: RoleSet::BUTTON,
            selection: SelectionMode::Toggle,
            arrow_moves_selection: false,
            wraps: true,
            tab_stop: TabStopPolicy::Focus,
            orientation: Orientation::Horizontal,
            direction: TextDirection::Ltr,
            state_attribute: StateAttribute::Pressed,
            events: EventSet::INPUT.union(EventSet::CHANGE),
            composed: true,
            require_items: false,
        }
    }

    /// Tab group with manual activation: arrows move focus, Enter/Space or a click shows a tab.
    #[must_use]
    pub const fn tab_group() -> Self {
        Self {
            container_role: Role::TabList,
            item_roles: RoleSet::TAB,
            selection: SelectionMode::Single,
            arrow_moves_selection: false,
            wraps: true,
            tab_stop: TabStopPolicy::Selection,
            orientation: Orientation::Horizontal,
            direction: TextDirection::Ltr,
            state_attribute: StateAttribute::Selected,
            events: EventSet::TAB_HIDE.union(EventSet::TAB_SHOW),
            composed: true,
            require_items: true,
        }
    }

    /// Single-selection tree. The tab stop follows focus and navigation stops at the ends.
    #[must_use]
    pub const fn tree() -> Self {
        Self {
            container_role: Role::Tree,
            item_roles: RoleSet::TREE_ITEM,
            selection: SelectionMode::Single,
            arrow_moves_selection: false,
            wraps: false,
            tab_stop: TabStopPolicy::Focus,
            orientation: Orientation::Vertical,
            direction: TextDirection::Ltr,
            state_attribute: StateAttribute::Selected,
            events: EventSet::SELECTION_CHANGE,
            composed: true,
            require_items: false,
        }
    }

    /// Tree where each item toggles independently.
    #[must_use]
    pub const fn tree_multiple() -> Self {
        Self {
            selection: SelectionMode::Toggle,
            ..Self::tree()
        }
    }

    /// Action menu: items are activated, never checked.
    #[must_use]
    pub const fn menu() -> Self {
        Self {
            container_role: Role::Menu,
            item_roles: RoleSet::MENU_ITEM,
            selection: SelectionMode::None,
            arrow_moves_selection: false,
            wraps: true,
            tab_stop: TabStopPolicy::Focus,
            orientation: Orientation::Vertical,
            direction: TextDirection::Ltr,
            state_attribute: StateAttribute::Checked,
            events: EventSet::SELECTED,
            composed: true,
            require_items: false,
        }
    }

    /// Listbox of a select: arrows move the active option, Enter/Space commits it.
    #[must_use]
    pub const fn listbox() -> Self {
        Self {
            container_role: Role::Listbox,
            item_roles: RoleSet::OPTION,
            selection: SelectionMode::Single,
            arrow_moves_selection: false,
            wraps: false,
            tab_stop: TabStopPolicy::Focus,
            orientation: Orientation::Vertical,
            direction: TextDirection::Ltr,
            state_attribute: StateAttribute::Selected,
            events: EventSet::INPUT.union(EventSet::CHANGE),
            composed: true,
            require_items: false,
        }
    }

    /// Listbox allowing several options.
    #[must_use]
    pub const fn listbox_multiple() -> Self {
        Self {
            selection: SelectionMode::Toggle,
            ..Self::listbox()
        }
    }

    /// Set whether navigation wraps around the ends.
    #[must_use]
    pub const fn with_wrap(mut self, wraps: bool) -> Self {
        self.wraps = wraps;
        self
    }

    /// Set whether arrow keys also select the destination item.
    #[must_use]
    pub const fn with_arrow_selection(mut self, on: bool) -> Self {
        self.arrow_moves_selection = on;
        self
    }

    /// Set the layout axis.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the writing direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Replace the set of emitted events.
    #[must_use]
    pub const fn with_events(mut self, events: EventSet) -> Self {
        self.events = events;
        self
    }

    /// Set whether a container without items fails to mount.
    #[must_use]
    pub const fn with_require_items(mut self, required: bool) -> Self {
        self.require_items = required;
        self
    }
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self::radio_group()
    }
}
