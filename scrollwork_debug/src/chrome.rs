// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] writes events recorded by a
//! [`RecorderSink`](super::recorder::RecorderSink) as
//! [Chrome Trace Event Format][trace-format] JSON.
//!
//! Recorded events carry no wall-clock time, so each event's position in the
//! recording is used as its timestamp (one microsecond per event). The scroll
//! fraction is additionally emitted as a counter track.
//!
//! [trace-format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::new();

    for (ts, recorded) in events.iter().enumerate() {
        match recorded {
            RecordedEvent::ScrollSample {
                sample_index,
                fraction,
                ..
            } => {
                out.push(json!({
                    "ph": "C",
                    "name": "ScrollFraction",
                    "cat": "Scroll",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "args": { "fraction": fraction, "sample_index": sample_index }
                }));
            }
            RecordedEvent::SectionChange {
                sample_index,
                previous,
                current,
            } => {
                out.push(json!({
                    "ph": "i",
                    "name": format!("Section {current}"),
                    "cat": "Section",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "sample_index": sample_index,
                        "previous": previous,
                        "current": current,
                    }
                }));
            }
            RecordedEvent::MotionChange { reduced, swept } => {
                out.push(json!({
                    "ph": "i",
                    "name": "MotionChange",
                    "cat": "Motion",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": { "reduced": reduced, "swept": swept }
                }));
            }
            RecordedEvent::Animation { id, kind, state } => {
                out.push(json!({
                    "ph": "i",
                    "name": format!("{id} {}", kind.as_str()),
                    "cat": "Animation",
                    "ts": ts,
                    "pid": 0,
                    "tid": 1,
                    "s": "t",
                    "args": {
                        "id": id,
                        "kind": kind.as_str(),
                        "state": state.map(|s| format!("{s:?}")),
                    }
                }));
            }
            RecordedEvent::ParallaxFrame {
                sample_index,
                layers,
                disabled,
            } => {
                out.push(json!({
                    "ph": "i",
                    "name": "ParallaxFrame",
                    "cat": "Parallax",
                    "ts": ts,
                    "pid": 0,
                    "tid": 2,
                    "s": "t",
                    "args": {
                        "sample_index": sample_index,
                        "layers": layers,
                        "disabled": disabled,
                    }
                }));
            }
            RecordedEvent::Navigation {
                id,
                outcome,
                target_y,
            } => {
                out.push(json!({
                    "ph": "i",
                    "name": format!("Navigate {id}"),
                    "cat": "Navigation",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "outcome": format!("{outcome:?}"),
                        "target_y": target_y,
                        "warning": recorded.is_warning(),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollwork_core::navigation::NavigationOutcome;
    use scrollwork_core::trace::AnimationEventKind;

    #[test]
    fn export_produces_valid_json() {
        let events = [
            RecordedEvent::ScrollSample {
                sample_index: 1,
                fraction: 0.25,
                metrics: None,
            },
            RecordedEvent::SectionChange {
                sample_index: 1,
                previous: Some("hero".into()),
                current: "education".into(),
            },
            RecordedEvent::Animation {
                id: "timeline".into(),
                kind: AnimationEventKind::Resumed,
                state: None,
            },
            RecordedEvent::Navigation {
                id: "missing-id".into(),
                outcome: NavigationOutcome::MissingTarget,
                target_y: None,
            },
        ];

        let mut out = Vec::new();
        export(&events, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 4);

        // Scroll samples become a counter track.
        assert_eq!(parsed[0]["ph"], "C");
        assert_eq!(parsed[0]["args"]["fraction"], 0.25);

        assert_eq!(parsed[1]["ph"], "i");
        assert_eq!(parsed[1]["args"]["previous"], "hero");
        assert_eq!(parsed[1]["ts"], 1);

        assert_eq!(parsed[2]["name"], "timeline resumed");
        assert_eq!(parsed[3]["args"]["warning"], true);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
