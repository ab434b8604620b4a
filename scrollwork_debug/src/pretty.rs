// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use scrollwork_core::registry::HandleState;
use scrollwork_core::trace::{
    AnimationEvent, MotionChangeEvent, NavigationEvent, ParallaxFrameEvent, ScrollSampleEvent,
    SectionChangeEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    scroll_samples: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("scroll_samples", &self.scroll_samples)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            scroll_samples: true,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            scroll_samples: true,
        }
    }

    /// Skips per-frame scroll sample lines.
    #[must_use]
    pub fn without_scroll_samples(mut self) -> Self {
        self.scroll_samples = false;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn state_name(state: Option<HandleState>) -> &'static str {
    match state {
        Some(HandleState::Active) => "active",
        Some(HandleState::PausedByVisibility) => "paused(visibility)",
        Some(HandleState::PausedByMotion { .. }) => "paused(motion)",
        None => "gone",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_scroll_sample(&mut self, e: &ScrollSampleEvent) {
        if !self.scroll_samples {
            return;
        }
        match e.metrics {
            Some(m) => {
                let _ = writeln!(
                    self.writer,
                    "[scroll] sample={} fraction={:.4} y={:.0} doc={:.0} vp={:.0}",
                    e.sample_index, e.fraction, m.scroll_y, m.document_height, m.viewport_height,
                );
            }
            None => {
                let _ = writeln!(
                    self.writer,
                    "[scroll] sample={} fraction={:.4} (no document)",
                    e.sample_index, e.fraction,
                );
            }
        }
    }

    fn on_section_change(&mut self, e: &SectionChangeEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[section] sample={} {} -> {}",
            e.sample_index,
            e.previous.unwrap_or("-"),
            e.current,
        );
    }

    fn on_motion_change(&mut self, e: &MotionChangeEvent) {
        let _ = writeln!(
            self.writer,
            "[motion] reduced={} swept={}",
            e.reduced, e.swept,
        );
    }

    fn on_animation(&mut self, e: &AnimationEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[animation] {} {} state={}",
            e.id,
            e.kind.as_str(),
            state_name(e.state),
        );
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        let disabled = if e.disabled { " DISABLED" } else { "" };
        let _ = writeln!(
            self.writer,
            "[parallax] sample={} layers={}{disabled}",
            e.sample_index, e.layers,
        );
    }

    fn on_navigation(&mut self, e: &NavigationEvent<'_>) {
        let _ = match e.target_y {
            Some(y) => writeln!(self.writer, "[nav] {} -> y={y:.1}", e.id),
            None => writeln!(self.writer, "[nav] WARNING no element with id \"{}\"", e.id),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollwork_core::navigation::NavigationOutcome;
    use scrollwork_core::scroll::ScrollMetrics;
    use scrollwork_core::trace::AnimationEventKind;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_scroll_sample() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_scroll_sample(&ScrollSampleEvent {
            sample_index: 3,
            fraction: 0.5,
            metrics: Some(ScrollMetrics::new(500.0, 2000.0, 1000.0)),
        });
        let output = output(sink);
        assert!(output.starts_with("[scroll]"), "got: {output}");
        assert!(output.contains("sample=3"), "got: {output}");
        assert!(output.contains("fraction=0.5000"), "got: {output}");
    }

    #[test]
    fn scroll_samples_can_be_muted() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new()).without_scroll_samples();
        sink.on_scroll_sample(&ScrollSampleEvent {
            sample_index: 1,
            fraction: 0.0,
            metrics: None,
        });
        sink.on_animation(&AnimationEvent {
            id: "hero-title",
            kind: AnimationEventKind::Paused,
            state: Some(HandleState::PausedByVisibility),
        });
        let output = output(sink);
        assert_eq!(output, "[animation] hero-title paused state=paused(visibility)\n");
    }

    #[test]
    fn navigation_miss_is_flagged() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_navigation(&NavigationEvent {
            id: "missing-id",
            outcome: NavigationOutcome::MissingTarget,
            target_y: None,
        });
        let output = output(sink);
        assert!(output.contains("WARNING"), "got: {output}");
        assert!(output.contains("missing-id"), "got: {output}");
    }
}
