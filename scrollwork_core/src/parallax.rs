// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-linked parallax offsets.
//!
//! A [`ParallaxLayer`] moves along one [`Axis`] by
//!
//! ```text
//! offset = effective_progress(p, bounds) * base_range * speed_multiplier
//! ```
//!
//! where `p` is the page scroll fraction and `base_range` defaults to the
//! viewport height. Without bounds the offset is exactly linear in `p`; with
//! bounds the layer only moves while `p` is inside the window and holds its
//! end positions outside it.
//!
//! Disabling parallax, explicitly or through reduced motion, is a hard
//! override: every offset is `0` and no transform is produced.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Vec2;

/// Axis a layer moves along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Moves up/down.
    #[default]
    Vertical,
    /// Moves left/right.
    Horizontal,
}

/// A sub-range of the scroll fraction in which a layer moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollBounds {
    start: f64,
    end: f64,
}

impl ScrollBounds {
    /// Creates bounds. Returns `None` unless `0 <= start < end <= 1`.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Option<Self> {
        (0.0 <= start && start < end && end <= 1.0).then_some(Self { start, end })
    }

    /// Start of the window.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// End of the window.
    #[must_use]
    pub const fn end(&self) -> f64 {
        self.end
    }
}

/// Maps the page scroll fraction into the layer's own progress.
#[must_use]
pub fn effective_progress(fraction: f64, bounds: Option<ScrollBounds>) -> f64 {
    let Some(b) = bounds else {
        return fraction;
    };
    if fraction < b.start {
        0.0
    } else if fraction > b.end {
        1.0
    } else {
        (fraction - b.start) / (b.end - b.start)
    }
}

/// Pixel offset of a layer for the given scroll fraction.
#[must_use]
pub fn calculate_parallax_position(
    fraction: f64,
    speed_multiplier: f64,
    base_range: f64,
    bounds: Option<ScrollBounds>,
) -> f64 {
    effective_progress(fraction, bounds) * base_range * speed_multiplier
}

/// Configuration of one parallax layer.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxLayer {
    /// Element id; unique within an engine.
    pub id: String,
    /// Scale applied to the base range. Negative values move the other way.
    pub speed_multiplier: f64,
    /// Axis the offset is applied on.
    pub direction: Axis,
    /// Optional scroll window.
    pub bounds: Option<ScrollBounds>,
}

impl ParallaxLayer {
    /// A vertical layer without bounds.
    #[must_use]
    pub fn vertical(id: impl Into<String>, speed_multiplier: f64) -> Self {
        Self {
            id: id.into(),
            speed_multiplier,
            direction: Axis::Vertical,
            bounds: None,
        }
    }

    /// A horizontal layer without bounds.
    #[must_use]
    pub fn horizontal(id: impl Into<String>, speed_multiplier: f64) -> Self {
        Self {
            direction: Axis::Horizontal,
            ..Self::vertical(id, speed_multiplier)
        }
    }

    /// Restricts movement to a scroll window.
    #[must_use]
    pub fn with_bounds(mut self, bounds: ScrollBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

/// Options shared by all layers of a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxOptions {
    /// Overrides the base range; defaults to the viewport height.
    pub base_scroll_range: Option<f64>,
    /// Force every offset to `0`.
    pub disabled: bool,
}

impl ParallaxOptions {
    /// Parallax enabled, base range = viewport height.
    pub const ENABLED: Self = Self {
        base_scroll_range: None,
        disabled: false,
    };
}

/// A ready-to-apply single-axis translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxTransform {
    /// Axis of the translation.
    pub axis: Axis,
    /// Translation in pixels.
    pub offset: f64,
}

impl ParallaxTransform {
    /// The translation as a 2D vector.
    #[must_use]
    pub const fn to_vec2(self) -> Vec2 {
        match self.axis {
            Axis::Vertical => Vec2::new(0.0, self.offset),
            Axis::Horizontal => Vec2::new(self.offset, 0.0),
        }
    }
}

/// Computed position of one layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerOffset {
    /// Layer id.
    pub id: String,
    /// Offset in pixels along the layer's axis.
    pub offset: f64,
    /// Transform to apply, `None` when parallax is disabled.
    pub transform: Option<ParallaxTransform>,
}

/// All layer offsets for one scroll fraction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParallaxFrame {
    /// Offsets in registration order.
    pub layers: Vec<LayerOffset>,
    /// Whether parallax was disabled for this frame.
    pub disabled: bool,
}

impl ParallaxFrame {
    /// Offset of the layer with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LayerOffset> {
        self.layers.iter().find(|l| l.id == id)
    }
}

/// Registered parallax layers, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct ParallaxEngine {
    layers: Vec<ParallaxLayer>,
}

impl ParallaxEngine {
    /// Creates an empty engine.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Registers a layer, replacing the configuration of an existing layer
    /// with the same id in place.
    pub fn register(&mut self, layer: ParallaxLayer) {
        match self.layers.iter_mut().find(|l| l.id == layer.id) {
            Some(existing) => *existing = layer,
            None => self.layers.push(layer),
        }
    }

    /// Removes a layer. Returns `false` for unknown ids.
    pub fn unregister(&mut self, id: &str) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| l.id != id);
        self.layers.len() != before
    }

    /// Configuration of a layer.
    #[must_use]
    pub fn layer(&self, id: &str) -> Option<&ParallaxLayer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Number of registered layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` when no layers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Computes every layer's offset.
    ///
    /// `viewport_height` is the default base range. `reduced_motion` disables
    /// the frame the same way [`ParallaxOptions::disabled`] does.
    #[must_use]
    pub fn frame(
        &self,
        fraction: f64,
        viewport_height: f64,
        options: &ParallaxOptions,
        reduced_motion: bool,
    ) -> ParallaxFrame {
        let disabled = options.disabled || reduced_motion;
        let base_range = options.base_scroll_range.unwrap_or(viewport_height);
        let layers = self
            .layers
            .iter()
            .map(|layer| {
                if disabled {
                    return LayerOffset {
                        id: layer.id.clone(),
                        offset: 0.0,
                        transform: None,
                    };
                }
                let offset = calculate_parallax_position(
                    fraction,
                    layer.speed_multiplier,
                    base_range,
                    layer.bounds,
                );
                LayerOffset {
                    id: layer.id.clone(),
                    offset,
                    transform: Some(ParallaxTransform {
                        axis: layer.direction,
                        offset,
                    }),
                }
            })
            .collect();
        ParallaxFrame { layers, disabled }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn reference_positions() {
        assert_eq!(calculate_parallax_position(1.0, 0.5, 800.0, None), 400.0);
        assert_eq!(calculate_parallax_position(0.5, 1.0, 800.0, None), 400.0);

        let b = ScrollBounds::new(0.3, 0.7);
        assert_eq!(calculate_parallax_position(0.1, 0.5, 800.0, b), 0.0);
        assert_eq!(calculate_parallax_position(0.9, 0.5, 800.0, b), 400.0);
        assert!(close(calculate_parallax_position(0.5, 1.0, 800.0, b), 400.0));
    }

    #[test]
    fn unbounded_delta_is_linear_and_proportional() {
        let fractions = [0.0, 0.13, 0.25, 0.5, 0.77, 1.0];
        for &s in &[-1.5, 0.0, 0.2, 0.5, 1.0, 2.0] {
            for &p1 in &fractions {
                for &p2 in &fractions {
                    let d = calculate_parallax_position(p2, s, 800.0, None)
                        - calculate_parallax_position(p1, s, 800.0, None);
                    assert!(close(d, (p2 - p1) * 800.0 * s), "s={s} p1={p1} p2={p2}");
                }
            }
        }
    }

    #[test]
    fn bounds_window_edges() {
        let b = ScrollBounds::new(0.3, 0.7);
        assert_eq!(effective_progress(0.3, b), 0.0);
        assert_eq!(effective_progress(0.7, b), 1.0);
        assert!(close(effective_progress(0.4, b), 0.25));
    }

    #[test]
    fn invalid_bounds_rejected() {
        assert!(ScrollBounds::new(0.5, 0.5).is_none());
        assert!(ScrollBounds::new(0.7, 0.3).is_none());
        assert!(ScrollBounds::new(-0.1, 0.3).is_none());
        assert!(ScrollBounds::new(0.2, 1.1).is_none());
        assert!(ScrollBounds::new(0.0, 1.0).is_some());
    }

    #[test]
    fn disabled_forces_zero_without_transform() {
        let mut engine = ParallaxEngine::new();
        engine.register(ParallaxLayer::vertical("orb", 0.5));
        engine.register(ParallaxLayer::horizontal("grid", -0.3));

        for disabled_by_motion in [false, true] {
            let options = ParallaxOptions {
                base_scroll_range: None,
                disabled: !disabled_by_motion,
            };
            for &p in &[0.0, 0.4, 1.0] {
                let frame = engine.frame(p, 800.0, &options, disabled_by_motion);
                assert!(frame.disabled);
                for layer in &frame.layers {
                    assert_eq!(layer.offset, 0.0);
                    assert_eq!(layer.transform, None);
                }
            }
        }
    }

    #[test]
    fn frame_uses_viewport_or_override() {
        let mut engine = ParallaxEngine::new();
        engine.register(ParallaxLayer::horizontal("grid", 0.5));

        let frame = engine.frame(1.0, 600.0, &ParallaxOptions::ENABLED, false);
        let grid = frame.get("grid").unwrap();
        assert_eq!(grid.offset, 300.0);
        assert_eq!(grid.transform.unwrap().to_vec2(), Vec2::new(300.0, 0.0));

        let options = ParallaxOptions {
            base_scroll_range: Some(1000.0),
            disabled: false,
        };
        assert_eq!(engine.frame(1.0, 600.0, &options, false).layers[0].offset, 500.0);
    }

    #[test]
    fn reregister_replaces_configuration() {
        let mut engine = ParallaxEngine::new();
        engine.register(ParallaxLayer::vertical("orb", 0.5));
        engine.register(ParallaxLayer::vertical("dots", 1.0));
        engine.register(
            ParallaxLayer::horizontal("orb", 2.0).with_bounds(ScrollBounds::new(0.0, 0.5).unwrap()),
        );
        assert_eq!(engine.len(), 2);
        let orb = engine.layer("orb").unwrap();
        assert_eq!(orb.direction, Axis::Horizontal);
        assert_eq!(orb.speed_multiplier, 2.0);

        let frame = engine.frame(0.25, 100.0, &ParallaxOptions::ENABLED, false);
        assert_eq!(frame.layers[0].id, "orb", "replacement keeps its slot");
        assert!(close(frame.layers[0].offset, 100.0));
        assert!(engine.unregister("dots"));
        assert!(!engine.unregister("dots"));
    }
}
