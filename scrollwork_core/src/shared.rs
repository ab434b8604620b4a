// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-threaded shared handle to an [`AnimationContext`].
//!
//! Visual components hold clones of a [`SharedContext`]. Mutations may arrive
//! while another mutation is still running on the same call stack, for
//! example an [`AnimationController`] whose `pause` unregisters a sibling
//! animation. Such nested calls are queued and applied, in order, before the
//! outermost call returns, so a `RefCell` borrow is never taken twice.
//!
//! Reads go through a [`ContextSnapshot`] committed after every operation and
//! therefore also work from inside nested calls (they see the last committed
//! values).

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use crate::backend::{AnimationController, Scroller, SectionLayout};
use crate::context::{AnimationContext, ScrollUpdate};
use crate::motion::MotionPreference;
use crate::navigation::NavigationOutcome;
use crate::parallax::ParallaxFrame;
use crate::reveal::RevealOptions;
use crate::scroll::ScrollMetrics;

/// Values visual components may read at any time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContextSnapshot {
    /// Scroll fraction in `[0, 1]`.
    pub scroll_fraction: f64,
    /// Whether reduced motion is active.
    pub reduced_motion: bool,
    /// Current section id.
    pub current_section: Option<String>,
}

impl ContextSnapshot {
    fn of(ctx: &AnimationContext) -> Self {
        Self {
            scroll_fraction: ctx.scroll_fraction(),
            reduced_motion: ctx.reduced_motion(),
            current_section: ctx.current_section_id().map(String::from),
        }
    }
}

enum Deferred {
    Register(String, Box<dyn AnimationController>),
    RegisterReveal(String, Box<dyn AnimationController>, Option<RevealOptions>),
    Unregister(String),
    SetVisibility(String, bool),
    SetCurrentSection(String),
    SetMotion(MotionPreference),
    Dispose,
}

impl Deferred {
    fn apply(self, ctx: &mut AnimationContext) {
        match self {
            Self::Register(id, controller) => {
                ctx.register_animation(&id, controller);
            }
            Self::RegisterReveal(id, controller, options) => {
                ctx.register_reveal_animation(&id, controller, options);
            }
            Self::Unregister(id) => ctx.unregister_animation(&id),
            Self::SetVisibility(id, visible) => ctx.set_animation_visibility(&id, visible),
            Self::SetCurrentSection(id) => {
                ctx.set_current_section(&id);
            }
            Self::SetMotion(preference) => {
                ctx.set_motion_preference(preference);
            }
            Self::Dispose => ctx.dispose(),
        }
    }
}

struct Inner {
    context: RefCell<AnimationContext>,
    deferred: RefCell<VecDeque<Deferred>>,
    snapshot: RefCell<ContextSnapshot>,
}

/// Cloneable, reentrancy-safe handle to an [`AnimationContext`].
#[derive(Clone)]
pub struct SharedContext {
    inner: Rc<Inner>,
}

impl fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedContext")
            .field("snapshot", &*self.inner.snapshot.borrow())
            .field("deferred", &self.inner.deferred.borrow().len())
            .finish_non_exhaustive()
    }
}

impl SharedContext {
    /// Wraps a context.
    #[must_use]
    pub fn new(context: AnimationContext) -> Self {
        let snapshot = ContextSnapshot::of(&context);
        Self {
            inner: Rc::new(Inner {
                context: RefCell::new(context),
                deferred: RefCell::new(VecDeque::new()),
                snapshot: RefCell::new(snapshot),
            }),
        }
    }

    // -- Reads ------------------------------------------------------------

    /// The last committed snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ContextSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    /// Current scroll fraction.
    #[must_use]
    pub fn scroll_fraction(&self) -> f64 {
        self.inner.snapshot.borrow().scroll_fraction
    }

    /// Whether reduced motion is active.
    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.inner.snapshot.borrow().reduced_motion
    }

    /// Current section id.
    #[must_use]
    pub fn current_section_id(&self) -> Option<String> {
        self.inner.snapshot.borrow().current_section.clone()
    }

    // -- Mutations (queued when nested) -----------------------------------

    /// See [`AnimationContext::register_animation`].
    pub fn register_animation(&self, id: &str, controller: Box<dyn AnimationController>) {
        self.submit(Deferred::Register(String::from(id), controller));
    }

    /// See [`AnimationContext::register_reveal_animation`].
    pub fn register_reveal_animation(
        &self,
        id: &str,
        controller: Box<dyn AnimationController>,
        options: Option<RevealOptions>,
    ) {
        self.submit(Deferred::RegisterReveal(String::from(id), controller, options));
    }

    /// See [`AnimationContext::unregister_animation`].
    pub fn unregister_animation(&self, id: &str) {
        self.submit(Deferred::Unregister(String::from(id)));
    }

    /// See [`AnimationContext::set_animation_visibility`].
    pub fn set_animation_visibility(&self, id: &str, visible: bool) {
        self.submit(Deferred::SetVisibility(String::from(id), visible));
    }

    /// See [`AnimationContext::set_current_section`].
    pub fn set_current_section(&self, id: &str) {
        self.submit(Deferred::SetCurrentSection(String::from(id)));
    }

    /// See [`AnimationContext::set_motion_preference`].
    pub fn set_motion_preference(&self, preference: MotionPreference) {
        self.submit(Deferred::SetMotion(preference));
    }

    /// Disposes every registered animation.
    pub fn dispose(&self) {
        self.submit(Deferred::Dispose);
    }

    // -- Direct access (skipped when nested) ------------------------------

    /// Runs `f` with exclusive access to the context.
    ///
    /// Returns `None` without running `f` if called from inside another
    /// operation on the same context.
    pub fn with<R>(&self, f: impl FnOnce(&mut AnimationContext) -> R) -> Option<R> {
        let mut ctx = self.inner.context.try_borrow_mut().ok()?;
        let result = f(&mut ctx);
        self.drain(&mut ctx);
        Some(result)
    }

    /// Processes a scroll sample. Nested calls are dropped; the next frame
    /// samples again.
    pub fn on_scroll<L>(&self, metrics: Option<ScrollMetrics>, layout: &L) -> Option<ScrollUpdate>
    where
        L: SectionLayout + ?Sized,
    {
        self.with(|ctx| ctx.on_scroll(metrics, layout))
    }

    /// Computes the parallax frame for the current scroll fraction.
    pub fn parallax_frame(&self) -> Option<ParallaxFrame> {
        self.with(AnimationContext::parallax_frame)
    }

    /// See [`AnimationContext::scroll_to_section`]. `None` when nested.
    pub fn scroll_to_section<L, S>(
        &self,
        layout: &L,
        scroller: &mut S,
        id: &str,
    ) -> Option<NavigationOutcome>
    where
        L: SectionLayout + ?Sized,
        S: Scroller + ?Sized,
    {
        self.with(|ctx| ctx.scroll_to_section(layout, scroller, id))
    }

    fn submit(&self, op: Deferred) {
        self.inner.deferred.borrow_mut().push_back(op);
        // When the context is busy, the outermost caller drains the queue.
        if let Ok(mut ctx) = self.inner.context.try_borrow_mut() {
            self.drain(&mut ctx);
        }
    }

    fn drain(&self, ctx: &mut AnimationContext) {
        loop {
            // Scope the queue borrow so nested submits can push.
            let next = self.inner.deferred.borrow_mut().pop_front();
            let Some(op) = next else {
                break;
            };
            op.apply(ctx);
        }
        *self.inner.snapshot.borrow_mut() = ContextSnapshot::of(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextConfig;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::Rect;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Unregisters `victim` from inside its own `pause`.
    struct Meddler {
        shared: SharedContext,
        victim: &'static str,
        log: Log,
    }

    impl AnimationController for Meddler {
        fn pause(&mut self) {
            self.log.borrow_mut().push("meddler:pause".into());
            // Reads must work mid-operation.
            let _ = self.shared.reduced_motion();
            self.shared.unregister_animation(self.victim);
        }
        fn resume(&mut self) {}
        fn dispose(&mut self) {
            self.log.borrow_mut().push("meddler:dispose".into());
        }
    }

    struct Plain(&'static str, Log);

    impl AnimationController for Plain {
        fn pause(&mut self) {
            self.1.borrow_mut().push(alloc::format!("{}:pause", self.0));
        }
        fn resume(&mut self) {
            self.1.borrow_mut().push(alloc::format!("{}:resume", self.0));
        }
        fn dispose(&mut self) {
            self.1.borrow_mut().push(alloc::format!("{}:dispose", self.0));
        }
    }

    fn shared() -> SharedContext {
        SharedContext::new(AnimationContext::new(
            ContextConfig::headless(),
            MotionPreference::FULL,
        ))
    }

    #[test]
    fn nested_mutation_is_applied_after_outer_call() {
        let log = Log::default();
        let ctx = shared();
        ctx.register_animation("victim", Box::new(Plain("victim", Rc::clone(&log))));
        ctx.register_animation(
            "meddler",
            Box::new(Meddler {
                shared: ctx.clone(),
                victim: "victim",
                log: Rc::clone(&log),
            }),
        );

        ctx.set_animation_visibility("meddler", false);

        assert_eq!(
            *log.borrow(),
            vec![String::from("meddler:pause"), String::from("victim:dispose")]
        );
        let remaining = ctx.with(|c| c.registry().len());
        assert_eq!(remaining, Some(1));
    }

    #[test]
    fn nested_with_is_refused() {
        let ctx = shared();
        let inner = ctx.clone();
        let nested = ctx.with(move |_| inner.with(|_| ()));
        assert_eq!(nested, Some(None));
    }

    #[test]
    fn snapshot_tracks_committed_state() {
        struct Empty;
        impl SectionLayout for Empty {
            fn viewport(&self) -> Option<Rect> {
                None
            }
            fn bounds(&self, _: &str) -> Option<Rect> {
                None
            }
        }

        let ctx = shared();
        assert_eq!(ctx.snapshot(), ContextSnapshot::default());

        ctx.on_scroll(Some(ScrollMetrics::new(250.0, 1500.0, 1000.0)), &Empty);
        ctx.set_motion_preference(MotionPreference::REDUCED);
        ctx.set_current_section("contact");

        assert_eq!(ctx.scroll_fraction(), 0.5);
        assert!(ctx.reduced_motion());
        assert_eq!(ctx.current_section_id().as_deref(), Some("contact"));
    }

    #[test]
    fn reveal_options_reach_the_tracker() {
        struct Strip(f64);
        impl SectionLayout for Strip {
            fn viewport(&self) -> Option<Rect> {
                Some(Rect::new(0.0, 0.0, 100.0, 100.0))
            }
            fn bounds(&self, _: &str) -> Option<Rect> {
                Some(Rect::new(0.0, -self.0, 100.0, 100.0 - self.0))
            }
        }

        let log = Log::default();
        let ctx = SharedContext::new(AnimationContext::new(
            ContextConfig::web(),
            MotionPreference::FULL,
        ));
        ctx.register_reveal_animation(
            "orb",
            Box::new(Plain("orb", Rc::clone(&log))),
            Some(RevealOptions::CONTINUOUS),
        );
        for y in [0.0, 1000.0, 0.0] {
            ctx.on_scroll(None, &Strip(y));
        }
        assert_eq!(
            *log.borrow(),
            vec![String::from("orb:pause"), String::from("orb:resume")]
        );
    }

    #[test]
    fn dispose_through_handle() {
        let log = Log::default();
        let ctx = shared();
        ctx.register_reveal_animation("a", Box::new(Plain("a", Rc::clone(&log))), None);
        ctx.dispose();
        assert_eq!(*log.borrow(), vec![String::from("a:dispose")]);
    }
}
