// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;

use wasm_bindgen::JsValue;
use web_sys::console;

use scrollwork_core::trace::{
    AnimationEvent, MotionChangeEvent, NavigationEvent, ParallaxFrameEvent, ScrollSampleEvent,
    SectionChangeEvent, TraceSink,
};

/// Logs a missing navigation target with `console.warn`.
///
/// Called by pages on [`NavigationOutcome::MissingTarget`] so the miss is
/// visible even when tracing is compiled out.
///
/// [`NavigationOutcome::MissingTarget`]: scrollwork_core::navigation::NavigationOutcome::MissingTarget
pub fn warn_missing_section(id: &str) {
    console::warn_1(&JsValue::from_str(&format!(
        "scrollwork: no element with id \"{id}\" to scroll to"
    )));
}

/// Writes trace events to the browser console.
///
/// Scroll samples and parallax frames fire on every frame and are only
/// logged when `verbose` is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    /// Also log per-frame events.
    pub verbose: bool,
}

impl ConsoleSink {
    /// Logs state changes only.
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: false }
    }

    /// Logs every event.
    #[must_use]
    pub const fn verbose() -> Self {
        Self { verbose: true }
    }
}

fn log(line: &str) {
    console::log_1(&JsValue::from_str(line));
}

impl TraceSink for ConsoleSink {
    fn on_scroll_sample(&mut self, e: &ScrollSampleEvent) {
        if self.verbose {
            log(&format!(
                "[scroll] sample={} fraction={:.4}",
                e.sample_index, e.fraction
            ));
        }
    }

    fn on_section_change(&mut self, e: &SectionChangeEvent<'_>) {
        log(&format!(
            "[section] {} -> {}",
            e.previous.unwrap_or("-"),
            e.current
        ));
    }

    fn on_motion_change(&mut self, e: &MotionChangeEvent) {
        log(&format!("[motion] reduced={} swept={}", e.reduced, e.swept));
    }

    fn on_animation(&mut self, e: &AnimationEvent<'_>) {
        log(&format!("[animation] {} {}", e.id, e.kind.as_str()));
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        if self.verbose {
            log(&format!(
                "[parallax] sample={} layers={} disabled={}",
                e.sample_index, e.layers, e.disabled
            ));
        }
    }

    fn on_navigation(&mut self, e: &NavigationEvent<'_>) {
        if e.is_warning() {
            warn_missing_section(e.id);
        } else if let Some(y) = e.target_y {
            log(&format!("[nav] {} -> y={y:.0}", e.id));
        }
    }
}
