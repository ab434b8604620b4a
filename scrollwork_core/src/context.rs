// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition root.
//!
//! [`AnimationContext`] owns the scroll tracker, the motion detector, the
//! animation registry, reveal tracking, parallax layers and the current
//! section. It is constructed once per page session and handed to visual
//! components (directly, or through [`SharedContext`]); components only read
//! its values and call the registration methods.
//!
//! # Update flow
//!
//! ```text
//!   scroll/resize ──► (coalesced frame) ──► on_scroll(metrics, layout)
//!                                               │
//!           ┌───────────────────┬───────────────┴──────────────┐
//!           ▼                   ▼                              ▼
//!     ScrollProgressTracker  detect_current_section     RevealTracker::observe
//!                               │                              │
//!                               ▼                              ▼
//!                        current_section            AnimationRegistry::set_visibility
//!
//!   prefers-reduced-motion ──► set_motion_preference ──► registry sweep
//! ```
//!
//! [`SharedContext`]: crate::shared::SharedContext

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::backend::{AnimationController, Scroller, SectionLayout};
use crate::motion::{MotionPreference, ReducedMotionDetector, SubscriptionId};
use crate::navigation::{self, NavigationOutcome};
use crate::parallax::{ParallaxEngine, ParallaxFrame, ParallaxLayer, ParallaxOptions};
use crate::registry::{AnimationRegistry, ControllerAction, HandleState};
use crate::reveal::{RevealOptions, RevealTracker, VisibilityChange};
use crate::scroll::{ScrollMetrics, ScrollProgressTracker};
use crate::section::{SectionDescriptor, detect_current_section};
use crate::trace::{
    AnimationEvent, AnimationEventKind, MotionChangeEvent, ParallaxFrameEvent, ScrollSampleEvent,
    SectionChangeEvent, TraceSink, Tracer,
};

/// Configuration for the [`AnimationContext`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextConfig {
    /// Run section detection on every scroll sample.
    pub detect_sections: bool,
    /// Default options for [`AnimationContext::track_reveal`].
    pub reveal: RevealOptions,
    /// Distance kept between a navigation target and the viewport top, e.g.
    /// the height of a fixed navigation bar.
    pub navigation_offset: f64,
    /// Parallax options used by [`AnimationContext::parallax_frame`].
    pub parallax: ParallaxOptions,
}

impl ContextConfig {
    /// Browser defaults: entrance reveals, a 72px fixed header, parallax on.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            detect_sections: true,
            reveal: RevealOptions::ENTRANCE,
            navigation_offset: 72.0,
            parallax: ParallaxOptions::ENABLED,
        }
    }

    /// Headless defaults for tests and pre-rendering: continuous visibility,
    /// no header offset.
    #[must_use]
    pub const fn headless() -> Self {
        Self {
            detect_sections: true,
            reveal: RevealOptions::CONTINUOUS,
            navigation_offset: 0.0,
            parallax: ParallaxOptions::ENABLED,
        }
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self::web()
    }
}

/// What a scroll sample changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollUpdate {
    /// Scroll fraction after the sample.
    pub fraction: f64,
    /// Whether the fraction changed.
    pub fraction_changed: bool,
    /// The new current section, if it changed.
    pub section_changed: Option<String>,
    /// Reveal visibility transitions forwarded to the registry.
    pub visibility: Vec<VisibilityChange>,
}

/// Owns all scroll-driven animation state for one page session.
pub struct AnimationContext {
    config: ContextConfig,
    scroll: ScrollProgressTracker,
    motion: ReducedMotionDetector,
    registry: AnimationRegistry,
    reveal: RevealTracker,
    parallax: ParallaxEngine,
    sections: Vec<SectionDescriptor>,
    current_section: Option<String>,
    sink: Option<Box<dyn TraceSink>>,
}

impl fmt::Debug for AnimationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationContext")
            .field("config", &self.config)
            .field("scroll", &self.scroll)
            .field("motion", &self.motion)
            .field("registry", &self.registry)
            .field("reveal", &self.reveal)
            .field("parallax", &self.parallax)
            .field("sections", &self.sections)
            .field("current_section", &self.current_section)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl Default for AnimationContext {
    fn default() -> Self {
        Self::new(ContextConfig::default(), MotionPreference::FULL)
    }
}

/// Builds a tracer over the context's sink without borrowing the whole
/// context.
fn tracer(sink: &mut Option<Box<dyn TraceSink>>) -> Tracer<'_> {
    match sink.as_deref_mut() {
        Some(sink) => Tracer::new(sink),
        None => Tracer::none(),
    }
}

impl AnimationContext {
    /// Creates a context with the platform's initial motion preference.
    #[must_use]
    pub fn new(config: ContextConfig, motion: MotionPreference) -> Self {
        Self {
            config,
            scroll: ScrollProgressTracker::new(),
            motion: ReducedMotionDetector::new(motion),
            registry: AnimationRegistry::new(motion.reduced),
            reveal: RevealTracker::new(),
            parallax: ParallaxEngine::new(),
            sections: Vec::new(),
            current_section: None,
            sink: None,
        }
    }

    /// Attaches a trace sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn TraceSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replaces the trace sink, returning the previous one.
    pub fn set_sink(&mut self, sink: Option<Box<dyn TraceSink>>) -> Option<Box<dyn TraceSink>> {
        core::mem::replace(&mut self.sink, sink)
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ContextConfig {
        &self.config
    }

    // -- Read-only values -------------------------------------------------

    /// Current scroll fraction in `[0, 1]`.
    #[must_use]
    pub const fn scroll_fraction(&self) -> f64 {
        self.scroll.fraction()
    }

    /// The last scroll sample, if any.
    #[must_use]
    pub const fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        self.scroll.metrics()
    }

    /// Whether reduced motion is active.
    #[must_use]
    pub const fn reduced_motion(&self) -> bool {
        self.motion.is_reduced()
    }

    /// The current section, if one has been detected or set.
    #[must_use]
    pub fn current_section_id(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    /// The page's sections in layout order.
    #[must_use]
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// Read access to the registry.
    #[must_use]
    pub const fn registry(&self) -> &AnimationRegistry {
        &self.registry
    }

    /// Read access to reveal tracking.
    #[must_use]
    pub const fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    // -- Sections ---------------------------------------------------------

    /// Sets the ordered section list used for detection.
    ///
    /// The first section becomes current if none is set yet.
    pub fn set_sections(&mut self, sections: Vec<SectionDescriptor>) {
        self.sections = sections;
        if self.current_section.is_none()
            && let Some(first) = self.sections.first()
        {
            self.current_section = Some(first.id.clone());
        }
    }

    /// Sets the current section explicitly. Returns `true` if it changed.
    pub fn set_current_section(&mut self, id: &str) -> bool {
        if self.current_section.as_deref() == Some(id) {
            return false;
        }
        let previous = self.current_section.replace(String::from(id));
        tracer(&mut self.sink).section_change(&SectionChangeEvent {
            sample_index: self.scroll.sample_count(),
            previous: previous.as_deref(),
            current: id,
        });
        true
    }

    // -- Scroll -----------------------------------------------------------

    /// Processes one coalesced scroll sample.
    ///
    /// Updates the fraction, re-detects the current section (if enabled and
    /// sections are set), and forwards reveal visibility transitions to the
    /// registry.
    pub fn on_scroll<L>(&mut self, metrics: Option<ScrollMetrics>, layout: &L) -> ScrollUpdate
    where
        L: SectionLayout + ?Sized,
    {
        let fraction_changed = self.scroll.sample(metrics);
        let fraction = self.scroll.fraction();
        tracer(&mut self.sink).scroll_sample(&ScrollSampleEvent {
            sample_index: self.scroll.sample_count(),
            fraction,
            metrics,
        });

        let mut section_changed = None;
        if self.config.detect_sections {
            let detected = detect_current_section(&self.sections, layout).map(String::from);
            if let Some(id) = detected
                && self.set_current_section(&id)
            {
                section_changed = Some(id);
            }
        }

        let visibility = self.reveal.observe(layout);
        for change in &visibility {
            self.set_animation_visibility(&change.id, change.visible);
        }

        ScrollUpdate {
            fraction,
            fraction_changed,
            section_changed,
            visibility,
        }
    }

    // -- Motion preference ------------------------------------------------

    /// Applies a platform motion-preference change.
    ///
    /// Notifies subscribers and sweeps every registered animation. Returns
    /// `true` if the preference changed.
    pub fn set_motion_preference(&mut self, preference: MotionPreference) -> bool {
        if !self.motion.set(preference) {
            return false;
        }
        let applied = self.registry.set_reduced_motion(preference.reduced);
        let mut t = tracer(&mut self.sink);
        for a in &applied {
            t.animation(&AnimationEvent {
                id: &a.id,
                kind: action_kind(a.action),
                state: Some(a.state),
            });
        }
        t.motion_change(&MotionChangeEvent {
            reduced: preference.reduced,
            swept: applied.len(),
        });
        true
    }

    /// Subscribes to motion-preference changes.
    pub fn subscribe_motion(
        &mut self,
        listener: impl FnMut(MotionPreference) + 'static,
    ) -> SubscriptionId {
        self.motion.subscribe(listener)
    }

    /// Removes a motion-preference subscription.
    pub fn unsubscribe_motion(&mut self, id: SubscriptionId) {
        self.motion.unsubscribe(id);
    }

    // -- Animation registry -----------------------------------------------

    /// Registers an animation controller under `id`.
    ///
    /// If reveal tracking already knows the element is off screen, the
    /// handle starts paused.
    pub fn register_animation(
        &mut self,
        id: &str,
        controller: Box<dyn AnimationController>,
    ) -> HandleState {
        let visible = self.reveal.is_visible(id).unwrap_or(true);
        let state = self.registry.register_with_visibility(id, controller, visible);
        tracer(&mut self.sink).animation(&AnimationEvent {
            id,
            kind: AnimationEventKind::Registered,
            state: Some(state),
        });
        state
    }

    /// Registers an animation and tracks its element for reveal visibility.
    ///
    /// `None` uses the configured default options. Looping animations want
    /// [`RevealOptions::CONTINUOUS`] so they pause again whenever they leave
    /// the viewport.
    pub fn register_reveal_animation(
        &mut self,
        id: &str,
        controller: Box<dyn AnimationController>,
        options: Option<RevealOptions>,
    ) -> HandleState {
        self.track_reveal(id, options);
        self.register_animation(id, controller)
    }

    /// Disposes and removes the animation registered under `id`, and stops
    /// reveal tracking for it. Unknown ids are ignored.
    pub fn unregister_animation(&mut self, id: &str) {
        self.reveal.untrack(id);
        if self.registry.unregister(id) {
            tracer(&mut self.sink).animation(&AnimationEvent {
                id,
                kind: AnimationEventKind::Unregistered,
                state: None,
            });
        }
    }

    /// Updates an animation's visibility. Unknown ids are ignored.
    pub fn set_animation_visibility(&mut self, id: &str, visible: bool) {
        let Some(action) = self.registry.set_visibility(id, visible) else {
            return;
        };
        if action != ControllerAction::None {
            tracer(&mut self.sink).animation(&AnimationEvent {
                id,
                kind: action_kind(action),
                state: self.registry.state(id),
            });
        }
    }

    /// Starts reveal tracking for `id` (`None` uses the configured default).
    pub fn track_reveal(&mut self, id: &str, options: Option<RevealOptions>) {
        self.reveal.track(id, options.unwrap_or(self.config.reveal));
    }

    /// Stops reveal tracking for `id`.
    pub fn untrack_reveal(&mut self, id: &str) {
        self.reveal.untrack(id);
    }

    // -- Parallax ---------------------------------------------------------

    /// Registers or reconfigures a parallax layer.
    pub fn register_parallax_layer(&mut self, layer: ParallaxLayer) {
        self.parallax.register(layer);
    }

    /// Removes a parallax layer.
    pub fn unregister_parallax_layer(&mut self, id: &str) -> bool {
        self.parallax.unregister(id)
    }

    /// Computes parallax offsets for the current scroll fraction with the
    /// configured options.
    pub fn parallax_frame(&mut self) -> ParallaxFrame {
        let options = self.config.parallax;
        self.parallax_frame_with(&options)
    }

    /// Computes parallax offsets with explicit options.
    ///
    /// Reduced motion disables the frame regardless of `options`.
    pub fn parallax_frame_with(&mut self, options: &ParallaxOptions) -> ParallaxFrame {
        let frame = self.parallax.frame(
            self.scroll.fraction(),
            self.scroll.viewport_height(),
            options,
            self.motion.is_reduced(),
        );
        tracer(&mut self.sink).parallax_frame(&ParallaxFrameEvent {
            sample_index: self.scroll.sample_count(),
            layers: frame.layers.len(),
            disabled: frame.disabled,
        });
        frame
    }

    // -- Navigation -------------------------------------------------------

    /// Smoothly scrolls to section `id`, keeping the configured navigation
    /// offset. A missing element is reported as a warning and nothing
    /// scrolls.
    pub fn scroll_to_section<L, S>(&mut self, layout: &L, scroller: &mut S, id: &str) -> NavigationOutcome
    where
        L: SectionLayout + ?Sized,
        S: Scroller + ?Sized,
    {
        navigation::scroll_to_section(
            layout,
            scroller,
            id,
            self.config.navigation_offset,
            &mut tracer(&mut self.sink),
        )
    }

    // -- Teardown ---------------------------------------------------------

    /// Disposes every registered animation and clears reveal tracking.
    pub fn dispose(&mut self) {
        for (id, _) in self.registry.iter() {
            tracer(&mut self.sink).animation(&AnimationEvent {
                id,
                kind: AnimationEventKind::Unregistered,
                state: None,
            });
        }
        self.registry.dispose_all();
        self.reveal = RevealTracker::new();
    }
}

const fn action_kind(action: ControllerAction) -> AnimationEventKind {
    match action {
        ControllerAction::Resume => AnimationEventKind::Resumed,
        ControllerAction::Pause | ControllerAction::None => AnimationEventKind::Paused,
    }
}
