// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll geometry and normalized scroll progress.
//!
//! [`ScrollMetrics`] is one sample of the page's scroll geometry, read by a
//! backend on a coalesced animation frame. [`scroll_fraction`] turns a sample
//! into a value in `[0, 1]`, and [`ScrollProgressTracker`] keeps the latest
//! sample for the rest of the core.
//!
//! A missing sample (no window or document, e.g. native test runs) is not an
//! error: the fraction is simply `0`.

/// One sample of page scroll geometry, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the viewport (`window.scrollY`).
    pub scroll_y: f64,
    /// Full scrollable height of the document.
    pub document_height: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Creates a sample from raw values.
    #[must_use]
    pub const fn new(scroll_y: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            document_height,
            viewport_height,
        }
    }

    /// Returns the largest reachable scroll offset, or `None` when the
    /// document is not taller than the viewport.
    #[must_use]
    pub fn max_scroll(&self) -> Option<f64> {
        let range = self.document_height - self.viewport_height;
        (range.is_finite() && range > 0.0).then_some(range)
    }

    /// Returns the normalized scroll fraction for this sample.
    ///
    /// A `NaN` offset reads as the top of the page; infinite offsets clamp.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        let Some(range) = self.max_scroll() else {
            return 0.0;
        };
        let raw = self.scroll_y / range;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }
}

/// Computes the scroll fraction for an optional sample.
///
/// `None` stands for "no document context" and yields `0`.
#[must_use]
pub fn scroll_fraction(metrics: Option<ScrollMetrics>) -> f64 {
    metrics.map_or(0.0, |m| m.fraction())
}

/// Holds the most recent scroll sample and its derived fraction.
#[derive(Clone, Debug, Default)]
pub struct ScrollProgressTracker {
    fraction: f64,
    metrics: Option<ScrollMetrics>,
    samples: u64,
}

impl ScrollProgressTracker {
    /// Creates a tracker at fraction `0` with no sample.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fraction: 0.0,
            metrics: None,
            samples: 0,
        }
    }

    /// Records a new sample. Returns `true` if the fraction changed.
    pub fn sample(&mut self, metrics: Option<ScrollMetrics>) -> bool {
        self.samples = self.samples.wrapping_add(1);
        self.metrics = metrics;
        let fraction = scroll_fraction(metrics);
        let changed = fraction != self.fraction;
        self.fraction = fraction;
        changed
    }

    /// Current scroll fraction in `[0, 1]`.
    #[inline]
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// The last recorded sample, if any.
    #[inline]
    #[must_use]
    pub const fn metrics(&self) -> Option<ScrollMetrics> {
        self.metrics
    }

    /// Viewport height from the last sample, `0` when there is none.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.metrics.map_or(0.0, |m| m.viewport_height)
    }

    /// Number of samples recorded so far.
    #[inline]
    #[must_use]
    pub const fn sample_count(&self) -> u64 {
        self.samples
    }
}
