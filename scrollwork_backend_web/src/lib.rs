// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for scrollwork.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`FrameDebouncer`]: `requestAnimationFrame` coalescing
//! - [`ScrollWatcher`]: window `scroll`/`resize` sampling, one sample per frame
//! - [`MotionQuery`]: `prefers-reduced-motion` change listener
//! - [`DomLayout`] / [`WindowScroller`]: DOM implementations of the core's
//!   layout and scrolling traits
//! - [`ParallaxPresenter`]: CSS transforms for parallax layers
//! - [`WebAnimationController`]: Web Animations API timelines for the registry
//! - [`ConsoleSink`]: trace output to the browser console

#![no_std]

extern crate alloc;

mod animation;
mod console;
mod layout;
mod motion;
mod presenter;
mod raf;
mod scroll;

pub use animation::{AnimationTiming, WebAnimationController, fade_up_keyframes, float_keyframes};
pub use console::{ConsoleSink, warn_missing_section};
pub use layout::{DomLayout, WindowScroller, dom_rect_to_rect};
pub use motion::{MotionQuery, REDUCED_MOTION_QUERY, current_motion_preference};
pub use presenter::{ParallaxPresenter, css_translate};
pub use raf::FrameDebouncer;
pub use scroll::{ScrollWatcher, page_metrics};
pub use scrollwork_core::backend::{AnimationController, Scroller, SectionLayout};

/// Returns milliseconds from `performance.now()`.
#[must_use]
pub fn now_ms() -> f64 {
    raf::performance_now()
}
