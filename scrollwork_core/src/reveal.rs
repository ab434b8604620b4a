// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-intersection tracking for entrance ("reveal") animations.
//!
//! [`RevealTracker`] remembers, per element id, whether it currently counts
//! as visible and reports only transitions. The animation context feeds those
//! transitions into the [`AnimationRegistry`](crate::registry::AnimationRegistry)
//! so off-screen timelines are paused.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::backend::SectionLayout;

/// How an element is judged visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element's area that must intersect the viewport,
    /// in `[0, 1]`. `0` means "any overlap".
    pub amount: f64,
    /// Once revealed, stay visible for the rest of the session.
    pub once: bool,
}

impl RevealOptions {
    /// Entrance animation that plays once a fifth of the element is visible.
    pub const ENTRANCE: Self = Self {
        amount: 0.2,
        once: true,
    };

    /// Continuous tracking: visible whenever any part is on screen.
    pub const CONTINUOUS: Self = Self {
        amount: 0.0,
        once: false,
    };
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::ENTRANCE
    }
}

/// Fraction of `element`'s area inside `viewport`.
///
/// Empty elements have ratio `0`.
#[must_use]
pub fn intersection_ratio(element: Rect, viewport: Rect) -> f64 {
    let area = element.area();
    if area <= 0.0 {
        return 0.0;
    }
    (element.intersect(viewport).area() / area).clamp(0.0, 1.0)
}

/// Whether `element` satisfies `options` against `viewport`.
#[must_use]
pub fn meets_threshold(element: Rect, viewport: Rect, options: &RevealOptions) -> bool {
    let ratio = intersection_ratio(element, viewport);
    if options.amount <= 0.0 {
        ratio > 0.0
    } else {
        ratio >= options.amount.min(1.0)
    }
}

/// A visibility transition for one tracked element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityChange {
    /// Element id.
    pub id: String,
    /// New visibility.
    pub visible: bool,
}

#[derive(Clone, Copy, Debug)]
struct Tracked {
    options: RevealOptions,
    visible: bool,
    revealed: bool,
}

/// Per-element visibility with transition reporting.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    tracked: BTreeMap<String, Tracked>,
}

impl RevealTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tracked: BTreeMap::new(),
        }
    }

    /// Starts tracking `id`. Elements start out visible, matching a freshly
    /// registered animation handle; the next [`observe`](Self::observe)
    /// corrects that if the element is off screen.
    ///
    /// Tracking an id again replaces its options and resets its state.
    pub fn track(&mut self, id: impl Into<String>, options: RevealOptions) {
        self.tracked.insert(
            id.into(),
            Tracked {
                options,
                visible: true,
                revealed: false,
            },
        );
    }

    /// Stops tracking `id`.
    pub fn untrack(&mut self, id: &str) -> bool {
        self.tracked.remove(id).is_some()
    }

    /// Whether `id` is tracked.
    #[must_use]
    pub fn is_tracked(&self, id: &str) -> bool {
        self.tracked.contains_key(id)
    }

    /// Current visibility of `id`, if tracked.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.tracked.get(id).map(|t| t.visible)
    }

    /// Whether `id` has been revealed at least once.
    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.tracked.get(id).is_some_and(|t| t.revealed)
    }

    /// Re-evaluates every tracked element and returns the transitions.
    ///
    /// Elements that are not rendered count as not visible. Without a
    /// viewport nothing changes.
    pub fn observe<L: SectionLayout + ?Sized>(&mut self, layout: &L) -> Vec<VisibilityChange> {
        let mut changes = Vec::new();
        let Some(viewport) = layout.viewport() else {
            return changes;
        };
        for (id, t) in &mut self.tracked {
            if t.options.once && t.revealed {
                continue;
            }
            let now = layout
                .bounds(id)
                .is_some_and(|bounds| meets_threshold(bounds, viewport, &t.options));
            if now {
                t.revealed = true;
            }
            if now != t.visible {
                t.visible = now;
                changes.push(VisibilityChange {
                    id: id.clone(),
                    visible: now,
                });
            }
        }
        changes
    }
}
