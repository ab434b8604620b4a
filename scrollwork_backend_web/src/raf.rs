// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` debouncing.
//!
//! [`FrameDebouncer`] runs a callback at most once per animation frame no
//! matter how many times [`request`](FrameDebouncer::request) is called in
//! between. The bookkeeping is a [`FrameCoalescer`] holding the id returned by
//! `requestAnimationFrame`; dropping the debouncer cancels the pending frame.
//!
//! [`FrameCoalescer`]: scrollwork_core::frame::FrameCoalescer

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use scrollwork_core::frame::FrameCoalescer;

// Direct global bindings instead of `web_sys::Window` methods, so a frame
// request does not need to fetch (and unwrap) the Window object.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct DebouncerInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Set once in `new()`; referenced from inside itself when scheduling.
    closure: RefCell<Option<RafClosure>>,

    /// The user callback, run once per fired frame.
    callback: RefCell<Box<dyn FnMut()>>,

    /// Pending request id, if any.
    coalescer: RefCell<FrameCoalescer<i32>>,
}

/// Runs a callback at most once per animation frame.
///
/// Clones share the same pending request.
#[derive(Clone)]
pub struct FrameDebouncer {
    inner: Rc<DebouncerInner>,
}

impl FrameDebouncer {
    /// Creates an idle debouncer.
    pub fn new(callback: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(DebouncerInner {
            closure: RefCell::new(None),
            callback: RefCell::new(Box::new(callback)),
            coalescer: RefCell::new(FrameCoalescer::new()),
        });

        let weak = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |_timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // Scoped so the callback may request the next frame.
            let due = inner.coalescer.borrow_mut().fire();
            if due {
                inner.callback.borrow_mut()();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);

        Self { inner }
    }

    /// Schedules the callback for the next animation frame.
    ///
    /// Returns `false` if a frame was already pending (the signal is
    /// absorbed).
    pub fn request(&self) -> bool {
        let closure = self.inner.closure.borrow();
        let Some(closure) = closure.as_ref() else {
            return false;
        };
        self.inner
            .coalescer
            .borrow_mut()
            .request(|| request_animation_frame(closure.as_ref().unchecked_ref()))
    }

    /// Cancels the pending frame, if any.
    pub fn cancel(&self) {
        self.inner.coalescer.borrow_mut().cancel(cancel_animation_frame);
    }

    /// Returns `true` while a frame is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.coalescer.borrow().is_pending()
    }
}

impl Drop for DebouncerInner {
    fn drop(&mut self) {
        self.coalescer.get_mut().cancel(cancel_animation_frame);
        // Drop the JS closure so it doesn't leak.
        self.closure.get_mut().take();
    }
}

impl core::fmt::Debug for FrameDebouncer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let coalescer = self.inner.coalescer.borrow();
        f.debug_struct("FrameDebouncer")
            .field("pending", &coalescer.is_pending())
            .field("requested", &coalescer.requested())
            .field("absorbed", &coalescer.absorbed())
            .finish_non_exhaustive()
    }
}
