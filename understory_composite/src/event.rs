// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public events produced by user gestures.
//!
//! Gesture methods on [`Composite`](crate::Composite) commit every state change
//! first and only then return a [`Response`] carrying the events to dispatch.
//! Programmatic changes never produce events.
//!
//! Within one gesture the order is fixed:
//! `input`, `change`, `selected`, `tab-hide`, `tab-show`, `selection-change`.
//! Only the kinds enabled in [`CompositeConfig::events`](crate::CompositeConfig::events)
//! are produced.

use alloc::string::String;
use smallvec::SmallVec;

use crate::CompositeHost;
use crate::config::CompositeConfig;

/// Kind of a public event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// `input`: the value is changing because of the user.
    Input,
    /// `change`: the user committed a new value.
    Change,
    /// `selected`: an item was activated.
    Selected,
    /// `tab-hide`: the previously shown tab was hidden.
    TabHide,
    /// `tab-show`: a tab was shown.
    TabShow,
    /// `selection-change`: the selected tree items changed.
    SelectionChange,
}

impl EventKind {
    /// Dispatch order within one gesture.
    pub const ORDER: [Self; 6] = [
        Self::Input,
        Self::Change,
        Self::Selected,
        Self::TabHide,
        Self::TabShow,
        Self::SelectionChange,
    ];

    /// DOM event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Change => "change",
            Self::Selected => "selected",
            Self::TabHide => "tab-hide",
            Self::TabShow => "tab-show",
            Self::SelectionChange => "selection-change",
        }
    }

    /// The [`EventSet`] bit for this kind.
    #[must_use]
    pub const fn bit(self) -> EventSet {
        match self {
            Self::Input => EventSet::INPUT,
            Self::Change => EventSet::CHANGE,
            Self::Selected => EventSet::SELECTED,
            Self::TabHide => EventSet::TAB_HIDE,
            Self::TabShow => EventSet::TAB_SHOW,
            Self::SelectionChange => EventSet::SELECTION_CHANGE,
        }
    }
}

bitflags::bitflags! {
    /// Which event kinds a widget emits.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventSet: u8 {
        /// [`EventKind::Input`].
        const INPUT            = 0b0000_0001;
        /// [`EventKind::Change`].
        const CHANGE           = 0b0000_0010;
        /// [`EventKind::Selected`].
        const SELECTED         = 0b0000_0100;
        /// [`EventKind::TabHide`].
        const TAB_HIDE         = 0b0000_1000;
        /// [`EventKind::TabShow`].
        const TAB_SHOW         = 0b0001_0000;
        /// [`EventKind::SelectionChange`].
        const SELECTION_CHANGE = 0b0010_0000;
    }
}

bitflags::bitflags! {
    /// Standard DOM event flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventFlags: u8 {
        /// The event bubbles.
        const BUBBLES  = 0b0000_0001;
        /// The event crosses shadow boundaries.
        const COMPOSED = 0b0000_0010;
    }
}

/// A public event to dispatch on behalf of a composite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeEvent<K> {
    /// Event kind.
    pub kind: EventKind,
    /// The container that emits the event.
    pub container: K,
    /// The item the event is about (the hidden tab for `tab-hide`).
    pub target: K,
    /// The target item's value.
    pub detail: Option<String>,
    /// Dispatch flags.
    pub flags: EventFlags,
}

/// Result of a user gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response<K> {
    /// The source input was consumed; the host should prevent its default action.
    pub handled: bool,
    /// Events to dispatch, in order.
    pub events: SmallVec<[CompositeEvent<K>; 4]>,
}

impl<K> Response<K> {
    /// The input was not for this composite, or was a no-op.
    #[must_use]
    pub fn ignored() -> Self {
        Self {
            handled: false,
            events: SmallVec::new(),
        }
    }

    /// The input was consumed without emitting events.
    #[must_use]
    pub fn consumed() -> Self {
        Self {
            handled: true,
            events: SmallVec::new(),
        }
    }

    /// Returns `true` if there is nothing to dispatch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// What a listener wants to happen with the remaining events of a gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep dispatching.
    Continue,
    /// Drop the remaining events of this gesture.
    Stop,
}

/// Build the events for one committed gesture on `target`.
///
/// `previous` is the item that was checked before the gesture; it is the
/// target of `tab-hide`, which is skipped when there was none.
pub(crate) fn gesture_events<H>(
    host: &H,
    config: &CompositeConfig,
    container: H::Key,
    target: H::Key,
    previous: Option<H::Key>,
) -> SmallVec<[CompositeEvent<H::Key>; 4]>
where
    H: CompositeHost + ?Sized,
{
    let mut flags = EventFlags::BUBBLES;
    if config.composed {
        flags |= EventFlags::COMPOSED;
    }

    let mut out = SmallVec::new();
    for kind in EventKind::ORDER {
        if !config.events.contains(kind.bit()) {
            continue;
        }
        let subject = if kind == EventKind::TabHide {
            match previous {
                Some(p) if p != target => p,
                _ => continue,
            }
        } else {
            target
        };
        out.push(CompositeEvent {
            kind,
            container,
            target: subject,
            detail: Some(String::from(host.value(subject))),
            flags,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_bits() {
        let mut seen = EventSet::empty();
        for kind in EventKind::ORDER {
            assert!(!seen.contains(kind.bit()), "duplicate kind {kind:?}");
            seen |= kind.bit();
        }
        assert_eq!(seen, EventSet::all());
    }

    #[test]
    fn names_are_dom_names() {
        assert_eq!(EventKind::Input.name(), "input");
        assert_eq!(EventKind::TabShow.name(), "tab-show");
        assert_eq!(EventKind::SelectionChange.name(), "selection-change");
    }
}
