// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and stores every event as an
//! owned [`RecordedEvent`]. The sink is a cheap handle: clone it, move one
//! clone into the [`AnimationContext`](scrollwork_core::context::AnimationContext)
//! and read the recording through the other.

use std::cell::RefCell;
use std::rc::Rc;

use scrollwork_core::navigation::NavigationOutcome;
use scrollwork_core::registry::HandleState;
use scrollwork_core::scroll::ScrollMetrics;
use scrollwork_core::trace::{
    AnimationEvent, AnimationEventKind, MotionChangeEvent, NavigationEvent, ParallaxFrameEvent,
    ScrollSampleEvent, SectionChangeEvent, TraceSink,
};

/// An owned copy of one trace event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`ScrollSampleEvent`].
    ScrollSample {
        /// Sample counter.
        sample_index: u64,
        /// Resulting fraction.
        fraction: f64,
        /// Raw geometry.
        metrics: Option<ScrollMetrics>,
    },
    /// See [`SectionChangeEvent`].
    SectionChange {
        /// Sample counter at the change.
        sample_index: u64,
        /// Previous section.
        previous: Option<String>,
        /// New section.
        current: String,
    },
    /// See [`MotionChangeEvent`].
    MotionChange {
        /// New value.
        reduced: bool,
        /// Controllers touched by the sweep.
        swept: usize,
    },
    /// See [`AnimationEvent`].
    Animation {
        /// Handle id.
        id: String,
        /// What happened.
        kind: AnimationEventKind,
        /// State afterwards.
        state: Option<HandleState>,
    },
    /// See [`ParallaxFrameEvent`].
    ParallaxFrame {
        /// Sample counter.
        sample_index: u64,
        /// Number of layers.
        layers: usize,
        /// Whether parallax was disabled.
        disabled: bool,
    },
    /// See [`NavigationEvent`].
    Navigation {
        /// Requested id.
        id: String,
        /// Outcome.
        outcome: NavigationOutcome,
        /// Scroll target.
        target_y: Option<f64>,
    },
}

impl RecordedEvent {
    /// Short name of the event type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ScrollSample { .. } => "ScrollSample",
            Self::SectionChange { .. } => "SectionChange",
            Self::MotionChange { .. } => "MotionChange",
            Self::Animation { .. } => "Animation",
            Self::ParallaxFrame { .. } => "ParallaxFrame",
            Self::Navigation { .. } => "Navigation",
        }
    }

    /// Returns `true` for events that should be surfaced as warnings.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::Navigation {
                outcome: NavigationOutcome::MissingTarget,
                ..
            }
        )
    }
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recording so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Takes the recording, leaving it empty.
    #[must_use]
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Ids of every section that became current, in order.
    #[must_use]
    pub fn section_history(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                RecordedEvent::SectionChange { current, .. } => Some(current.clone()),
                _ => None,
            })
            .collect()
    }

    /// All warning events.
    #[must_use]
    pub fn warnings(&self) -> Vec<RecordedEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.is_warning())
            .cloned()
            .collect()
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_scroll_sample(&mut self, e: &ScrollSampleEvent) {
        self.push(RecordedEvent::ScrollSample {
            sample_index: e.sample_index,
            fraction: e.fraction,
            metrics: e.metrics,
        });
    }

    fn on_section_change(&mut self, e: &SectionChangeEvent<'_>) {
        self.push(RecordedEvent::SectionChange {
            sample_index: e.sample_index,
            previous: e.previous.map(String::from),
            current: e.current.into(),
        });
    }

    fn on_motion_change(&mut self, e: &MotionChangeEvent) {
        self.push(RecordedEvent::MotionChange {
            reduced: e.reduced,
            swept: e.swept,
        });
    }

    fn on_animation(&mut self, e: &AnimationEvent<'_>) {
        self.push(RecordedEvent::Animation {
            id: e.id.into(),
            kind: e.kind,
            state: e.state,
        });
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        self.push(RecordedEvent::ParallaxFrame {
            sample_index: e.sample_index,
            layers: e.layers,
            disabled: e.disabled,
        });
    }

    fn on_navigation(&mut self, e: &NavigationEvent<'_>) {
        self.push(RecordedEvent::Navigation {
            id: e.id.into(),
            outcome: e.outcome,
            target_y: e.target_y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use scrollwork_core::backend::{AnimationController, SectionLayout};
    use scrollwork_core::context::{AnimationContext, ContextConfig};
    use scrollwork_core::motion::MotionPreference;
    use scrollwork_core::section::SectionDescriptor;

    struct Idle;

    impl AnimationController for Idle {
        fn pause(&mut self) {}
        fn resume(&mut self) {}
        fn dispose(&mut self) {}
    }

    struct TwoSections {
        scroll_y: f64,
    }

    impl SectionLayout for TwoSections {
        fn viewport(&self) -> Option<Rect> {
            Some(Rect::new(0.0, 0.0, 1000.0, 800.0))
        }
        fn bounds(&self, id: &str) -> Option<Rect> {
            let top = match id {
                "hero" => 0.0,
                "projects" => 800.0,
                _ => return None,
            };
            Some(Rect::new(0.0, top - self.scroll_y, 1000.0, top + 800.0 - self.scroll_y))
        }
    }

    fn recorded_context() -> (AnimationContext, RecorderSink) {
        let rec = RecorderSink::new();
        let mut ctx = AnimationContext::new(ContextConfig::headless(), MotionPreference::FULL)
            .with_sink(Box::new(rec.clone()));
        ctx.set_sections(vec![
            SectionDescriptor::new("hero", "Home"),
            SectionDescriptor::new("projects", "Projects"),
        ]);
        (ctx, rec)
    }

    #[test]
    fn records_context_activity_in_order() {
        let (mut ctx, rec) = recorded_context();
        ctx.register_animation("orb", Box::new(Idle));
        ctx.on_scroll(
            Some(ScrollMetrics::new(800.0, 1600.0, 800.0)),
            &TwoSections { scroll_y: 800.0 },
        );
        ctx.set_motion_preference(MotionPreference::REDUCED);

        let names: Vec<_> = rec.events().iter().map(RecordedEvent::name).collect();
        assert_eq!(
            names,
            [
                "Animation",
                "ScrollSample",
                "SectionChange",
                "Animation",
                "MotionChange"
            ]
        );
        assert_eq!(rec.section_history(), ["projects"]);
        assert!(rec.events().contains(&RecordedEvent::MotionChange {
            reduced: true,
            swept: 1,
        }));
    }

    #[test]
    fn navigation_miss_is_a_warning() {
        struct Still;
        impl scrollwork_core::backend::Scroller for Still {
            fn scroll_y(&self) -> f64 {
                0.0
            }
            fn smooth_scroll_to(&mut self, _: f64) {
                panic!("must not scroll");
            }
        }

        let (mut ctx, rec) = recorded_context();
        let outcome = ctx.scroll_to_section(&TwoSections { scroll_y: 0.0 }, &mut Still, "missing-id");
        assert_eq!(outcome, NavigationOutcome::MissingTarget);
        assert_eq!(
            rec.warnings(),
            [RecordedEvent::Navigation {
                id: "missing-id".into(),
                outcome: NavigationOutcome::MissingTarget,
                target_y: None,
            }]
        );
    }

    #[test]
    fn take_empties_the_recording() {
        let (mut ctx, rec) = recorded_context();
        ctx.register_animation("a", Box::new(Idle));
        assert_eq!(rec.take().len(), 1);
        assert!(rec.is_empty());
    }
}
