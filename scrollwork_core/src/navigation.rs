// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth scrolling to a section by id.

use crate::backend::{Scroller, SectionLayout};
use crate::trace::{NavigationEvent, Tracer};

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationOutcome {
    /// A smooth scroll was started.
    Scrolled,
    /// No element matches the id; nothing was scrolled.
    MissingTarget,
}

/// Smoothly scrolls so the top of section `id` sits `offset` pixels below the
/// top of the viewport (e.g. under a fixed navigation bar).
///
/// A missing element is reported through `tracer` as a warning and leaves the
/// viewport untouched. This never panics.
pub fn scroll_to_section<L, S>(
    layout: &L,
    scroller: &mut S,
    id: &str,
    offset: f64,
    tracer: &mut Tracer<'_>,
) -> NavigationOutcome
where
    L: SectionLayout + ?Sized,
    S: Scroller + ?Sized,
{
    let Some(bounds) = layout.bounds(id) else {
        tracer.navigation(&NavigationEvent {
            id,
            outcome: NavigationOutcome::MissingTarget,
            target_y: None,
        });
        return NavigationOutcome::MissingTarget;
    };
    let target = (scroller.scroll_y() + bounds.y0 - offset).max(0.0);
    scroller.smooth_scroll_to(target);
    tracer.navigation(&NavigationEvent {
        id,
        outcome: NavigationOutcome::Scrolled,
        target_y: Some(target),
    });
    NavigationOutcome::Scrolled
}
