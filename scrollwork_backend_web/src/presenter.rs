// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parallax style application.
//!
//! Translates a [`ParallaxFrame`] into CSS `transform` values on the layer
//! elements. A layer without a transform (parallax disabled) has its
//! `transform` property removed so the element sits at its layout position.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use scrollwork_core::parallax::{Axis, ParallaxFrame, ParallaxTransform};
use web_sys::HtmlElement;

/// Formats a transform as a CSS `translate3d()` value.
#[must_use]
pub fn css_translate(t: ParallaxTransform) -> String {
    match t.axis {
        Axis::Vertical => format!("translate3d(0px, {}px, 0px)", t.offset),
        Axis::Horizontal => format!("translate3d({}px, 0px, 0px)", t.offset),
    }
}

/// Maps parallax layer ids to live DOM elements.
pub struct ParallaxPresenter {
    elements: Vec<(String, HtmlElement)>,
}

impl core::fmt::Debug for ParallaxPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParallaxPresenter")
            .field("elements_len", &self.elements.len())
            .finish()
    }
}

impl Default for ParallaxPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallaxPresenter {
    /// Creates a presenter with no elements.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Binds `element` to the layer `id`, replacing an earlier binding.
    pub fn attach(&mut self, id: impl Into<String>, element: HtmlElement) {
        let id = id.into();
        let _ = element.style().set_property("will-change", "transform");
        match self.elements.iter_mut().find(|(e, _)| *e == id) {
            Some(slot) => slot.1 = element,
            None => self.elements.push((id, element)),
        }
    }

    /// Unbinds layer `id`, clearing its transform.
    pub fn detach(&mut self, id: &str) {
        if let Some(pos) = self.elements.iter().position(|(e, _)| e == id) {
            let (_, el) = self.elements.remove(pos);
            let s = el.style();
            let _ = s.remove_property("transform");
            let _ = s.remove_property("will-change");
        }
    }

    /// Returns the element bound to `id`.
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&HtmlElement> {
        self.elements.iter().find(|(e, _)| e == id).map(|(_, el)| el)
    }

    /// Writes every layer's transform. Layers without a bound element are
    /// skipped.
    pub fn apply(&self, frame: &ParallaxFrame) {
        for layer in &frame.layers {
            let Some(el) = self.get_element(&layer.id) else {
                continue;
            };
            let s = el.style();
            match layer.transform {
                Some(t) => {
                    let _ = s.set_property("transform", &css_translate(t));
                }
                None => {
                    let _ = s.remove_property("transform");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_translation() {
        let css = css_translate(ParallaxTransform {
            axis: Axis::Vertical,
            offset: 200.0,
        });
        assert_eq!(css, "translate3d(0px, 200px, 0px)");
    }

    #[test]
    fn horizontal_translation_keeps_sign() {
        let css = css_translate(ParallaxTransform {
            axis: Axis::Horizontal,
            offset: -37.5,
        });
        assert_eq!(css, "translate3d(-37.5px, 0px, 0px)");
    }
}
