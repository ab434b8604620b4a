// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window scroll and resize sampling.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Window};

use scrollwork_core::scroll::ScrollMetrics;

use crate::raf::FrameDebouncer;

/// Reads the current page scroll geometry.
///
/// Returns `None` outside a browser document (no window, no document
/// element, or an unreadable viewport size); callers treat that as fraction
/// `0`.
#[must_use]
pub fn page_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = f64::from(root.scroll_height());
    Some(ScrollMetrics::new(scroll_y, document_height, viewport_height))
}

const EVENTS: [&str; 2] = ["scroll", "resize"];

/// Listens for window `scroll` and `resize` and delivers at most one
/// [`ScrollMetrics`] sample per animation frame.
///
/// Listeners are removed and any pending frame is cancelled on drop.
pub struct ScrollWatcher {
    window: Window,
    listener: Closure<dyn FnMut()>,
    debouncer: FrameDebouncer,
}

impl ScrollWatcher {
    /// Starts watching the global window.
    ///
    /// `on_frame` receives [`page_metrics`] once per frame in which at least
    /// one scroll or resize event arrived.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no global window or a listener cannot be
    /// attached.
    pub fn new(mut on_frame: impl FnMut(Option<ScrollMetrics>) + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let debouncer = FrameDebouncer::new(move || on_frame(page_metrics()));

        let signal = debouncer.clone();
        let listener = Closure::wrap(Box::new(move || {
            signal.request();
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        for event in EVENTS {
            window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                listener.as_ref().unchecked_ref(),
                &options,
            )?;
        }

        Ok(Self {
            window,
            listener,
            debouncer,
        })
    }

    /// Requests a sample on the next frame without waiting for an event,
    /// e.g. to take the initial measurement after mounting.
    pub fn request_sample(&self) {
        self.debouncer.request();
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        for event in EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref());
        }
        self.debouncer.cancel();
    }
}

impl core::fmt::Debug for ScrollWatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollWatcher")
            .field("debouncer", &self.debouncer)
            .finish_non_exhaustive()
    }
}
