// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM geometry reads and smooth scrolling.

use kurbo::Rect;
use web_sys::{Document, DomRect, ScrollBehavior, ScrollToOptions, Window};

use scrollwork_core::backend::{Scroller, SectionLayout};

/// Converts a `getBoundingClientRect()` result.
#[must_use]
pub fn dom_rect_to_rect(r: &DomRect) -> Rect {
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// [`SectionLayout`] over the live document.
///
/// Element bounds come from `getElementById(id).getBoundingClientRect()`; the
/// viewport is `(0, 0, innerWidth, innerHeight)`.
#[derive(Clone, Debug)]
pub struct DomLayout {
    window: Window,
    document: Document,
}

impl DomLayout {
    /// Binds to the global window. `None` outside a browser document.
    #[must_use]
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl SectionLayout for DomLayout {
    fn viewport(&self) -> Option<Rect> {
        let width = self.window.inner_width().ok()?.as_f64()?;
        let height = self.window.inner_height().ok()?.as_f64()?;
        Some(Rect::new(0.0, 0.0, width, height))
    }

    fn bounds(&self, id: &str) -> Option<Rect> {
        let element = self.document.get_element_by_id(id)?;
        Some(dom_rect_to_rect(&element.get_bounding_client_rect()))
    }
}

/// [`Scroller`] over the global window using `scrollTo({ behavior: "smooth" })`.
#[derive(Clone, Debug)]
pub struct WindowScroller {
    window: Window,
}

impl WindowScroller {
    /// Binds to the global window. `None` outside a browser.
    #[must_use]
    pub fn new() -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
        })
    }
}

impl Scroller for WindowScroller {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&mut self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}
