// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated document.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Rect, Size};
use scrollwork_core::backend::{Scroller, SectionLayout};
use scrollwork_core::scroll::ScrollMetrics;

#[derive(Clone, Debug)]
struct Element {
    id: String,
    /// Document coordinates.
    rect: Rect,
}

/// A page of absolutely positioned elements with a scrollable viewport.
///
/// Element rectangles are stored in document coordinates and reported
/// viewport-relative through [`SectionLayout`], the way
/// `getBoundingClientRect()` does.
#[derive(Clone, Debug)]
pub struct SimulatedPage {
    viewport: Size,
    elements: Vec<Element>,
    stacked_height: f64,
    scroll_y: f64,
    has_document: bool,
}

impl SimulatedPage {
    /// Creates an empty page with the given viewport size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
            stacked_height: 0.0,
            scroll_y: 0.0,
            has_document: true,
        }
    }

    /// A page with no document context, as outside a browser.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            has_document: false,
            ..Self::new(Size::ZERO)
        }
    }

    /// Appends a full-width section below the previous ones.
    #[must_use]
    pub fn with_section(mut self, id: &str, height: f64) -> Self {
        self.push_section(id, height);
        self
    }

    /// Appends a full-width section below the previous ones and returns its
    /// document rectangle.
    pub fn push_section(&mut self, id: &str, height: f64) -> Rect {
        let top = self.stacked_height;
        self.stacked_height += height;
        self.place(id, Rect::new(0.0, top, self.viewport.width, top + height))
    }

    /// Places an element at a document rectangle, replacing an element with
    /// the same id.
    pub fn place(&mut self, id: &str, rect: Rect) -> Rect {
        match self.elements.iter_mut().find(|e| e.id == id) {
            Some(e) => e.rect = rect,
            None => self.elements.push(Element {
                id: id.into(),
                rect,
            }),
        }
        rect
    }

    /// Removes an element. Returns `false` if it was not placed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id != id);
        self.elements.len() != before
    }

    /// Document rectangle of an element.
    #[must_use]
    pub fn document_rect(&self, id: &str) -> Option<Rect> {
        self.elements.iter().find(|e| e.id == id).map(|e| e.rect)
    }

    /// Total scrollable height: the lowest element bottom, at least the
    /// viewport height.
    #[must_use]
    pub fn document_height(&self) -> f64 {
        self.elements
            .iter()
            .map(|e| e.rect.y1)
            .fold(self.viewport.height, f64::max)
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Jumps to `y`, clamped to the scrollable range like a browser does.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
    }

    /// Resizes the viewport, keeping the scroll offset in range.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.scroll_to(self.scroll_y);
    }

    /// Scroll geometry as the web backend would sample it.
    #[must_use]
    pub fn metrics(&self) -> Option<ScrollMetrics> {
        self.has_document.then(|| {
            ScrollMetrics::new(self.scroll_y, self.document_height(), self.viewport.height)
        })
    }
}

impl SectionLayout for SimulatedPage {
    fn viewport(&self) -> Option<Rect> {
        self.has_document
            .then(|| Rect::from_origin_size((0.0, 0.0), self.viewport))
    }

    fn bounds(&self, id: &str) -> Option<Rect> {
        if !self.has_document {
            return None;
        }
        let rect = self.document_rect(id)?;
        Some(Rect::new(
            rect.x0,
            rect.y0 - self.scroll_y,
            rect.x1,
            rect.y1 - self.scroll_y,
        ))
    }
}

/// A [`Scroller`] that records smooth-scroll targets instead of animating.
#[derive(Clone, Debug, Default)]
pub struct ScrollRecorder {
    scroll_y: f64,
    targets: Vec<f64>,
}

impl ScrollRecorder {
    /// Starts at the given scroll offset.
    #[must_use]
    pub fn at(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            targets: Vec::new(),
        }
    }

    /// Every requested target, in order.
    #[must_use]
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// The most recent target.
    #[must_use]
    pub fn last_target(&self) -> Option<f64> {
        self.targets.last().copied()
    }
}

impl Scroller for ScrollRecorder {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn smooth_scroll_to(&mut self, y: f64) {
        self.targets.push(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> SimulatedPage {
        SimulatedPage::new(Size::new(1000.0, 800.0))
            .with_section("hero", 800.0)
            .with_section("education", 1200.0)
    }

    #[test]
    fn sections_stack_in_document_order() {
        let p = page();
        assert_eq!(p.document_rect("education"), Some(Rect::new(0.0, 800.0, 1000.0, 2000.0)));
        assert_eq!(p.document_height(), 2000.0);
        assert_eq!(p.max_scroll(), 1200.0);
    }

    #[test]
    fn bounds_are_viewport_relative() {
        let mut p = page();
        p.scroll_to(300.0);
        assert_eq!(p.bounds("hero"), Some(Rect::new(0.0, -300.0, 1000.0, 500.0)));
        assert_eq!(p.bounds("nope"), None);
    }

    #[test]
    fn scrolling_is_clamped() {
        let mut p = page();
        p.scroll_to(-50.0);
        assert_eq!(p.scroll_y(), 0.0);
        p.scroll_to(99_999.0);
        assert_eq!(p.scroll_y(), 1200.0);
    }

    #[test]
    fn detached_page_reports_nothing() {
        let p = SimulatedPage::detached();
        assert_eq!(p.metrics(), None);
        assert_eq!(p.viewport(), None);
    }
}
