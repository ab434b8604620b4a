// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for scroll-driven updates.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`AnimationContext`](crate::context::AnimationContext) calls as it
//! processes scroll samples, preference changes, registry operations and
//! navigation. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::navigation::NavigationOutcome;
use crate::registry::HandleState;
use crate::scroll::ScrollMetrics;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What happened to an animation handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationEventKind {
    /// A controller was registered.
    Registered,
    /// A controller was disposed and removed.
    Unregistered,
    /// A controller was paused.
    Paused,
    /// A controller was resumed.
    Resumed,
}

impl AnimationEventKind {
    /// Short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Unregistered => "unregistered",
            Self::Paused => "paused",
            Self::Resumed => "resumed",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for every coalesced scroll sample.
#[derive(Clone, Copy, Debug)]
pub struct ScrollSampleEvent {
    /// Monotonic sample counter.
    pub sample_index: u64,
    /// Resulting scroll fraction.
    pub fraction: f64,
    /// Raw geometry, `None` without a document context.
    pub metrics: Option<ScrollMetrics>,
}

/// Emitted when the current section changes.
#[derive(Clone, Copy, Debug)]
pub struct SectionChangeEvent<'a> {
    /// Sample counter at the time of the change. Explicit sets carry the
    /// index of the last sample taken, `0` before the first one.
    pub sample_index: u64,
    /// Previous section, if any.
    pub previous: Option<&'a str>,
    /// New section.
    pub current: &'a str,
}

/// Emitted when the reduced-motion preference flips.
#[derive(Clone, Copy, Debug)]
pub struct MotionChangeEvent {
    /// New value.
    pub reduced: bool,
    /// Number of controllers paused or resumed by the sweep.
    pub swept: usize,
}

/// Emitted for each registry operation that touched a controller.
#[derive(Clone, Copy, Debug)]
pub struct AnimationEvent<'a> {
    /// Handle id.
    pub id: &'a str,
    /// What happened.
    pub kind: AnimationEventKind,
    /// State after the operation, `None` once unregistered.
    pub state: Option<HandleState>,
}

/// Emitted after parallax offsets are recomputed.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxFrameEvent {
    /// Sample the frame was computed for.
    pub sample_index: u64,
    /// Number of layers in the frame.
    pub layers: usize,
    /// Whether parallax was disabled.
    pub disabled: bool,
}

/// Emitted for every navigation request.
///
/// A [`NavigationOutcome::MissingTarget`] outcome is a warning.
#[derive(Clone, Copy, Debug)]
pub struct NavigationEvent<'a> {
    /// Requested section id.
    pub id: &'a str,
    /// What happened.
    pub outcome: NavigationOutcome,
    /// Scroll target, if a scroll was started.
    pub target_y: Option<f64>,
}

impl NavigationEvent<'_> {
    /// Whether this event should be surfaced as a warning.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.outcome, NavigationOutcome::MissingTarget)
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the animation context.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called for every scroll sample.
    fn on_scroll_sample(&mut self, e: &ScrollSampleEvent) {
        _ = e;
    }

    /// Called when the current section changes.
    fn on_section_change(&mut self, e: &SectionChangeEvent<'_>) {
        _ = e;
    }

    /// Called when the motion preference flips.
    fn on_motion_change(&mut self, e: &MotionChangeEvent) {
        _ = e;
    }

    /// Called for registry operations.
    fn on_animation(&mut self, e: &AnimationEvent<'_>) {
        _ = e;
    }

    /// Called after a parallax frame is computed.
    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        _ = e;
    }

    /// Called for navigation requests.
    fn on_navigation(&mut self, e: &NavigationEvent<'_>) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ScrollSampleEvent`].
    #[inline]
    pub fn scroll_sample(&mut self, e: &ScrollSampleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_scroll_sample(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SectionChangeEvent`].
    #[inline]
    pub fn section_change(&mut self, e: &SectionChangeEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_section_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MotionChangeEvent`].
    #[inline]
    pub fn motion_change(&mut self, e: &MotionChangeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_motion_change(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AnimationEvent`].
    #[inline]
    pub fn animation(&mut self, e: &AnimationEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_animation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ParallaxFrameEvent`].
    #[inline]
    pub fn parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_parallax_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavigationEvent`].
    #[inline]
    pub fn navigation(&mut self, e: &NavigationEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_navigation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
