// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the item tree: node identifiers, element kinds, flags, and attributes.

use alloc::string::String;

/// Identifier for a node in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check whether a `NodeId` still refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What kind of element a node is.
///
/// These mirror the widget catalog's custom elements. The tree itself attaches
/// no behavior to them; higher layers (for example a composite controller)
/// decide which kinds act as containers and which act as items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Any element without widget semantics (a `div`, a label, an icon).
    #[default]
    Generic,
    /// A group of buttons.
    ButtonGroup,
    /// A button.
    Button,
    /// A group of radios.
    RadioGroup,
    /// A radio (or radio-styled button).
    Radio,
    /// A tab group.
    TabGroup,
    /// A tab inside a tab group.
    Tab,
    /// A panel shown for a tab.
    TabPanel,
    /// A tree.
    Tree,
    /// A tree item; tree items nest inside each other.
    TreeItem,
    /// A menu.
    Menu,
    /// A menu item.
    MenuItem,
    /// A select / listbox.
    Select,
    /// An option inside a select.
    Option,
}

bitflags::bitflags! {
    /// Per-element state owned by the consumer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element does not accept interaction.
        const DISABLED = 0b0000_0001;
        /// Element is checked / selected / pressed.
        const CHECKED  = 0b0000_0010;
        /// Element is not rendered (for example inside a collapsed branch).
        const HIDDEN   = 0b0000_0100;
    }
}

/// Element data stored per node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Element kind.
    pub kind: ElementKind,
    /// Consumer-owned state flags.
    pub flags: ElementFlags,
    /// Opaque value; uniqueness is not enforced.
    pub value: String,
}

impl Element {
    /// Create an element of `kind` with no flags and an empty value.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the element value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Mark the element disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.flags |= ElementFlags::DISABLED;
        self
    }

    /// Mark the element checked.
    #[must_use]
    pub fn checked(mut self) -> Self {
        self.flags |= ElementFlags::CHECKED;
        self
    }

    /// Mark the element hidden.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.flags |= ElementFlags::HIDDEN;
        self
    }
}

/// Value of an attribute written onto an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttrValue {
    /// A boolean attribute such as `aria-checked`.
    Bool(bool),
    /// An integer attribute such as `tabindex`.
    Int(i32),
    /// A token attribute such as `role`.
    Str(&'static str),
}

/// A single named attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Attribute name, for example `"tabindex"`.
    pub name: &'static str,
    /// Attribute value.
    pub value: AttrValue,
}
