// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Scrollwork keeps the core free of platform calls. A backend crate supplies
//! the following pieces:
//!
//! - **Scroll sampling** reads [`ScrollMetrics`] on a coalesced animation
//!   frame (see [`FrameCoalescer`]) and feeds them to
//!   [`AnimationContext::on_scroll`]. Not abstracted by a trait because the
//!   event wiring differs fundamentally across platforms.
//!
//! - **Motion preference** reads the initial reduced-motion value and
//!   forwards change events to
//!   [`AnimationContext::set_motion_preference`].
//!
//! - **Layout** implements [`SectionLayout`] so section detection, reveal
//!   tracking and navigation can read element bounds.
//!
//! - **Scrolling** implements [`Scroller`] for smooth navigation.
//!
//! - **Animations** wraps platform animation timelines in
//!   [`AnimationController`] so the registry can pause, resume and dispose
//!   them.
//!
//! [`ScrollMetrics`]: crate::scroll::ScrollMetrics
//! [`FrameCoalescer`]: crate::frame::FrameCoalescer
//! [`AnimationContext::on_scroll`]: crate::context::AnimationContext::on_scroll
//! [`AnimationContext::set_motion_preference`]: crate::context::AnimationContext::set_motion_preference

use kurbo::Rect;

/// An opaque, controllable animation timeline.
///
/// The [`AnimationRegistry`](crate::registry::AnimationRegistry) is the only
/// caller. `pause` may be called on an already-paused timeline and must be
/// harmless. After `dispose` the controller is dropped and never called again.
pub trait AnimationController {
    /// Pauses the timeline, keeping its progress.
    fn pause(&mut self);
    /// Resumes a paused timeline (or starts one that never ran).
    fn resume(&mut self);
    /// Tears the timeline down. Irreversible.
    fn dispose(&mut self);
}

/// Read access to the rendered page geometry.
///
/// All rectangles are viewport-relative, the way
/// `Element.getBoundingClientRect()` reports them: the viewport itself spans
/// `(0, 0)` to `(width, height)` and a section above the fold has a negative
/// `y0`.
pub trait SectionLayout {
    /// The visible viewport, or `None` without a document context.
    fn viewport(&self) -> Option<Rect>;

    /// The bounding box of the element with the given id, or `None` if no
    /// such element is rendered.
    fn bounds(&self, id: &str) -> Option<Rect>;
}

/// Moves the viewport.
pub trait Scroller {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Starts a smooth scroll to the absolute vertical offset `y`.
    fn smooth_scroll_to(&mut self, y: f64);
}
