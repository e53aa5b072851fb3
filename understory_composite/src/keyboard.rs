// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation: map keys to intents and search for the destination item.
//!
//! All four arrow keys are always active regardless of orientation:
//! Right/Down mean "next" and Left/Up mean "previous" (swapped for Left/Right
//! in right-to-left containers). Home and End jump to the first and last
//! navigable item. Space and Enter activate the focused item.

use crate::CompositeHost;
use crate::config::TextDirection;
use crate::registry::{first_navigable, last_navigable};

/// Keys the controller reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `ArrowUp`.
    ArrowUp,
    /// `ArrowDown`.
    ArrowDown,
    /// `ArrowLeft`.
    ArrowLeft,
    /// `ArrowRight`.
    ArrowRight,
    /// `Home`.
    Home,
    /// `End`.
    End,
    /// Space bar.
    Space,
    /// `Enter`.
    Enter,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value. Unrelated keys yield `None`.
    ///
    /// ```rust
    /// use understory_composite::Key;
    ///
    /// assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::ArrowLeft));
    /// assert_eq!(Key::from_dom_key(" "), Some(Key::Space));
    /// assert_eq!(Key::from_dom_key("a"), None);
    /// ```
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        Some(match key {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            " " | "Spacebar" => Self::Space,
            "Enter" => Self::Enter,
            _ => return None,
        })
    }
}

/// What a key asks the container to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyIntent {
    /// Move to the next navigable item.
    Next,
    /// Move to the previous navigable item.
    Prev,
    /// Move to the first navigable item.
    First,
    /// Move to the last navigable item.
    Last,
    /// Activate the focused item.
    Activate,
}

/// Map `key` to an intent for a container with the given writing direction.
#[must_use]
pub fn intent(key: Key, direction: TextDirection) -> KeyIntent {
    let rtl = direction == TextDirection::Rtl;
    match key {
        Key::ArrowDown => KeyIntent::Next,
        Key::ArrowUp => KeyIntent::Prev,
        Key::ArrowRight if rtl => KeyIntent::Prev,
        Key::ArrowRight => KeyIntent::Next,
        Key::ArrowLeft if rtl => KeyIntent::Next,
        Key::ArrowLeft => KeyIntent::Prev,
        Key::Home => KeyIntent::First,
        Key::End => KeyIntent::Last,
        Key::Space | Key::Enter => KeyIntent::Activate,
    }
}

/// Find the index of the item a navigation intent lands on.
///
/// - `origin` is the index of the focused item, if it is in `items`.
/// - `Next`/`Prev` step from `origin`, skipping items that are not navigable.
///   With `wraps`, stepping off one end continues at the other; without it,
///   the search stops at the end. From no origin they pick the first/last
///   navigable item.
/// - `First`/`Last` pick the first/last navigable item.
///
/// Returns `None` when no navigable item can be reached, including when every
/// item is disabled, and for [`KeyIntent::Activate`].
pub fn find_target<H>(
    host: &H,
    items: &[H::Key],
    origin: Option<usize>,
    intent: KeyIntent,
    wraps: bool,
) -> Option<usize>
where
    H: CompositeHost + ?Sized,
{
    let len = items.len();
    if len == 0 {
        return None;
    }
    let navigable = |idx: usize| host.flags(items[idx]).is_navigable();

    match (intent, origin) {
        (KeyIntent::First, _) | (KeyIntent::Next, None) => first_navigable(host, items),
        (KeyIntent::Last, _) | (KeyIntent::Prev, None) => last_navigable(host, items),
        (KeyIntent::Next, Some(start)) => {
            for step in 1..=len {
                let idx = start + step;
                if idx >= len && !wraps {
                    return None;
                }
                let idx = idx % len;
                if navigable(idx) {
                    return Some(idx);
                }
            }
            None
        }
        (KeyIntent::Prev, Some(start)) => {
            for step in 1..=len {
                let idx = if step > start {
                    if !wraps {
                        return None;
                    }
                    start + len - step
                } else {
                    start - step
                };
                if navigable(idx) {
                    return Some(idx);
                }
            }
            None
        }
        (KeyIntent::Activate, _) => None,
    }
}
