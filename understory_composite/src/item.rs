// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item-level types: state flags, roles, and the accessibility attributes the
//! controller projects onto every item.

bitflags::bitflags! {
    /// Item state as reported by the host.
    ///
    /// The consumer owns these fields. The controller only ever writes
    /// `CHECKED`, and only through [`CompositeHost::set_checked`](crate::CompositeHost::set_checked).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item does not accept interaction and is skipped by navigation.
        const DISABLED = 0b0000_0001;
        /// Item is checked / selected / pressed.
        const CHECKED  = 0b0000_0010;
        /// Item is not rendered (for example inside a collapsed tree branch).
        ///
        /// Hidden items stay in the registry but are skipped like disabled ones.
        const HIDDEN   = 0b0000_0100;
    }
}

impl ItemFlags {
    /// Returns `true` if an item with these flags can be focused and navigated to.
    #[must_use]
    pub const fn is_navigable(self) -> bool {
        !self.intersects(Self::DISABLED.union(Self::HIDDEN))
    }

    /// Returns `true` if the item is checked.
    #[must_use]
    pub const fn is_checked(self) -> bool {
        self.contains(Self::CHECKED)
    }

    /// Returns `true` if the item is disabled.
    #[must_use]
    pub const fn is_disabled(self) -> bool {
        self.contains(Self::DISABLED)
    }
}

/// Composite role of a node.
///
/// Container roles describe the widget that owns a set of items; item roles
/// describe the items themselves. The names follow WAI-ARIA.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// `group` (a button group).
    Group,
    /// `radiogroup`.
    RadioGroup,
    /// `tablist`.
    TabList,
    /// `tree`.
    Tree,
    /// `menu`.
    Menu,
    /// `listbox`.
    Listbox,
    /// `button`.
    Button,
    /// `radio`.
    Radio,
    /// `tab`.
    Tab,
    /// `treeitem`.
    TreeItem,
    /// `menuitem`.
    MenuItem,
    /// `option`.
    Option,
}

impl Role {
    /// The ARIA role token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::RadioGroup => "radiogroup",
            Self::TabList => "tablist",
            Self::Tree => "tree",
            Self::Menu => "menu",
            Self::Listbox => "listbox",
            Self::Button => "button",
            Self::Radio => "radio",
            Self::Tab => "tab",
            Self::TreeItem => "treeitem",
            Self::MenuItem => "menuitem",
            Self::Option => "option",
        }
    }

    /// Returns `true` for roles that own items.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Self::Group | Self::RadioGroup | Self::TabList | Self::Tree | Self::Menu | Self::Listbox
        )
    }

    /// The [`RoleSet`] bit for an item role; empty for container roles.
    #[must_use]
    pub const fn bit(self) -> RoleSet {
        match self {
            Self::Button => RoleSet::BUTTON,
            Self::Radio => RoleSet::RADIO,
            Self::Tab => RoleSet::TAB,
            Self::TreeItem => RoleSet::TREE_ITEM,
            Self::MenuItem => RoleSet::MENU_ITEM,
            Self::Option => RoleSet::OPTION,
            Self::Group
            | Self::RadioGroup
            | Self::TabList
            | Self::Tree
            | Self::Menu
            | Self::Listbox => RoleSet::empty(),
        }
    }
}

bitflags::bitflags! {
    /// A set of item roles a container enumerates as its items.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RoleSet: u8 {
        /// [`Role::Button`].
        const BUTTON    = 0b0000_0001;
        /// [`Role::Radio`].
        const RADIO     = 0b0000_0010;
        /// [`Role::Tab`].
        const TAB       = 0b0000_0100;
        /// [`Role::TreeItem`].
        const TREE_ITEM = 0b0000_1000;
        /// [`Role::MenuItem`].
        const MENU_ITEM = 0b0001_0000;
        /// [`Role::Option`].
        const OPTION    = 0b0010_0000;
    }
}

impl RoleSet {
    /// Returns `true` if `role` is an item role in this set.
    #[must_use]
    pub const fn contains_role(self, role: Role) -> bool {
        let bit = role.bit();
        !bit.is_empty() && self.contains(bit)
    }
}

/// Roving tabindex designation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabIndex {
    /// `tabindex="0"`: reachable with Tab.
    Reachable,
    /// `tabindex="-1"`: focusable from code only.
    Programmatic,
}

impl TabIndex {
    /// The numeric `tabindex` value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Reachable => 0,
            Self::Programmatic => -1,
        }
    }
}

/// Which ARIA state attribute mirrors an item's checked field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StateAttribute {
    /// `aria-checked` (radios, checkbox menu items).
    Checked,
    /// `aria-selected` (tabs, tree items, options).
    Selected,
    /// `aria-pressed` (toggle buttons).
    Pressed,
}

impl StateAttribute {
    /// The attribute name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checked => "aria-checked",
            Self::Selected => "aria-selected",
            Self::Pressed => "aria-pressed",
        }
    }
}

/// Attributes the controller writes onto one item after every mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemAttributes {
    /// The item's own role.
    pub role: Role,
    /// Roving tabindex.
    pub tab_index: TabIndex,
    /// State attribute and its value; `None` for containers without selection.
    pub state: Option<(StateAttribute, bool)>,
    /// Mirrors [`ItemFlags::DISABLED`] as `aria-disabled`.
    pub disabled: bool,
}

/// Layout axis of a container; projected as `aria-orientation`.
///
/// Orientation does not restrict which arrow keys are active.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items flow left to right (or right to left).
    #[default]
    Horizontal,
    /// Items flow top to bottom.
    Vertical,
}

impl Orientation {
    /// The `aria-orientation` token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Attributes the controller writes onto the container at mount.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContainerAttributes {
    /// Container role.
    pub role: Role,
    /// Container orientation.
    pub orientation: Orientation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigable_excludes_disabled_and_hidden() {
        assert!(ItemFlags::empty().is_navigable());
        assert!(ItemFlags::CHECKED.is_navigable());
        assert!(!ItemFlags::DISABLED.is_navigable());
        assert!(!ItemFlags::HIDDEN.is_navigable());
        assert!(!(ItemFlags::CHECKED | ItemFlags::HIDDEN).is_navigable());
    }

    #[test]
    fn role_sets_only_hold_item_roles() {
        let set = RoleSet::RADIO | RoleSet::BUTTON;
        assert!(set.contains_role(Role::Radio));
        assert!(set.contains_role(Role::Button));
        assert!(!set.contains_role(Role::Tab));
        assert!(!RoleSet::all().contains_role(Role::RadioGroup));
        assert!(Role::RadioGroup.is_container());
        assert!(!Role::Radio.is_container());
    }

    #[test]
    fn tab_index_values() {
        assert_eq!(TabIndex::Reachable.as_i32(), 0);
        assert_eq!(TabIndex::Programmatic.as_i32(), -1);
    }
}
