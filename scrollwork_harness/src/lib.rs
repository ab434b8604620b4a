// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless page simulation for scrollwork.
//!
//! [`Harness`] drives an [`AnimationContext`] against a [`SimulatedPage`]
//! the way the web backend drives it against the DOM: every scroll produces
//! one coalesced sample, navigation goes through a [`Scroller`] and lands on
//! the requested offset once the smooth scroll "finishes".
//!
//! [`Scroller`]: scrollwork_core::backend::Scroller

#![no_std]

extern crate alloc;

mod controller;
mod page;

pub use controller::{CallLog, ControllerCall, ControllerOp, RecordingController};
pub use page::{ScrollRecorder, SimulatedPage};

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Size;
use scrollwork_core::context::{AnimationContext, ContextConfig, ScrollUpdate};
use scrollwork_core::motion::MotionPreference;
use scrollwork_core::navigation::NavigationOutcome;
use scrollwork_core::parallax::ParallaxFrame;
use scrollwork_core::registry::HandleState;
use scrollwork_core::reveal::RevealOptions;
use scrollwork_core::section::SectionDescriptor;

/// The sections of the portfolio page, top to bottom, with typical desktop
/// heights.
pub const PORTFOLIO_SECTIONS: [(&str, &str, f64); 6] = [
    ("hero", "Home", 900.0),
    ("education", "Education", 700.0),
    ("experience", "Experience", 1100.0),
    ("achievements", "Achievements", 600.0),
    ("projects", "Projects", 1200.0),
    ("contact", "Contact", 700.0),
];

/// A desktop viewport.
pub const DESKTOP_VIEWPORT: Size = Size::new(1280.0, 800.0);

/// An [`AnimationContext`] wired to a [`SimulatedPage`].
#[derive(Debug)]
pub struct Harness {
    /// The page.
    pub page: SimulatedPage,
    /// The context under test.
    pub context: AnimationContext,
    /// Calls made on controllers created through [`register`](Self::register).
    pub log: CallLog,
    scroll_requests: Vec<f64>,
}

impl Harness {
    /// Creates a harness over `page`. `sections` is the detection order and
    /// need not match what the page renders.
    #[must_use]
    pub fn new(
        page: SimulatedPage,
        sections: Vec<SectionDescriptor>,
        config: ContextConfig,
        motion: MotionPreference,
    ) -> Self {
        let mut context = AnimationContext::new(config, motion);
        context.set_sections(sections);
        Self {
            page,
            context,
            log: CallLog::new(),
            scroll_requests: Vec::new(),
        }
    }

    /// The full portfolio page in a desktop viewport.
    #[must_use]
    pub fn portfolio(config: ContextConfig, motion: MotionPreference) -> Self {
        let mut page = SimulatedPage::new(DESKTOP_VIEWPORT);
        let mut sections = Vec::new();
        for (id, label, height) in PORTFOLIO_SECTIONS {
            page.push_section(id, height);
            sections.push(SectionDescriptor::new(id, label));
        }
        Self::new(page, sections, config, motion)
    }

    /// Registers a logging controller under `id`.
    pub fn register(&mut self, id: &str) -> HandleState {
        let controller = self.log.controller(id);
        self.context.register_animation(id, Box::new(controller))
    }

    /// Registers a logging controller under `id` and tracks its element for
    /// reveal visibility.
    pub fn register_reveal(&mut self, id: &str) -> HandleState {
        let controller = self.log.controller(id);
        self.context.register_reveal_animation(id, Box::new(controller), None)
    }

    /// Registers a logging controller for an endless animation, paused
    /// whenever its element is off screen.
    pub fn register_looping(&mut self, id: &str) -> HandleState {
        let controller = self.log.controller(id);
        self.context
            .register_reveal_animation(id, Box::new(controller), Some(RevealOptions::CONTINUOUS))
    }

    /// Feeds the current page geometry to the context.
    pub fn sample(&mut self) -> ScrollUpdate {
        self.context.on_scroll(self.page.metrics(), &self.page)
    }

    /// Scrolls the page and samples once.
    pub fn scroll_to(&mut self, y: f64) -> ScrollUpdate {
        self.page.scroll_to(y);
        self.sample()
    }

    /// Scrolls so that the top of element `id` is at the viewport top.
    pub fn scroll_to_element(&mut self, id: &str) -> Option<ScrollUpdate> {
        let top = self.page.document_rect(id)?.y0;
        Some(self.scroll_to(top))
    }

    /// Navigates to a section. A started smooth scroll completes immediately
    /// and is followed by one sample.
    pub fn navigate(&mut self, id: &str) -> NavigationOutcome {
        let mut scroller = ScrollRecorder::at(self.page.scroll_y());
        let outcome = self.context.scroll_to_section(&self.page, &mut scroller, id);
        self.scroll_requests.extend_from_slice(scroller.targets());
        if let Some(y) = scroller.last_target() {
            self.scroll_to(y);
        }
        outcome
    }

    /// Every smooth-scroll target requested so far.
    #[must_use]
    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }

    /// Applies a platform motion-preference change.
    pub fn set_reduced_motion(&mut self, reduced: bool) -> bool {
        self.context.set_motion_preference(MotionPreference { reduced })
    }

    /// Parallax offsets for the current scroll position.
    pub fn parallax(&mut self) -> ParallaxFrame {
        self.context.parallax_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_page_is_stacked() {
        let h = Harness::portfolio(ContextConfig::headless(), MotionPreference::FULL);
        assert_eq!(h.page.document_height(), 5200.0);
        assert_eq!(h.context.sections().len(), 6);
        assert_eq!(h.context.current_section_id(), Some("hero"));
    }

    #[test]
    fn navigation_lands_and_samples() {
        let mut h = Harness::portfolio(ContextConfig::headless(), MotionPreference::FULL);
        assert_eq!(h.navigate("projects"), NavigationOutcome::Scrolled);
        assert_eq!(h.scroll_requests(), &[3300.0]);
        assert_eq!(h.page.scroll_y(), 3300.0);
        assert_eq!(h.context.current_section_id(), Some("projects"));
    }
}
