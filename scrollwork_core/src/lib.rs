// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll progress, parallax, section detection and animation registry for
//! scroll-driven pages.
//!
//! `scrollwork_core` holds the platform-independent part of an animated
//! single-page site: it turns scroll geometry into a normalized progress
//! value, decides which section is current, computes parallax offsets, and
//! pauses or resumes registered animations according to visibility and the
//! user's reduced-motion preference. It is `no_std` compatible (with
//! `alloc`); platform glue lives in backend crates.
//!
//! # Architecture
//!
//! ```text
//!   Backend (scroll/resize signals)
//!       │
//!       ▼
//!   FrameCoalescer ──► ScrollMetrics ──► AnimationContext::on_scroll()
//!                                             │
//!               ┌─────────────────────────────┼──────────────────────┐
//!               ▼                             ▼                      ▼
//!   ScrollProgressTracker        detect_current_section()   RevealTracker
//!               │                                                    │
//!               ▼                                                    ▼
//!   ParallaxEngine::frame() ──► ParallaxFrame       AnimationRegistry (pause/resume)
//!                                                                    ▲
//!   Backend (prefers-reduced-motion) ──► set_motion_preference() ────┘
//! ```
//!
//! **[`scroll`]**: [`ScrollMetrics`](scroll::ScrollMetrics) and the clamped
//! scroll fraction.
//!
//! **[`frame`]**: At-most-one-pending-request coalescing for per-frame
//! recomputation.
//!
//! **[`motion`]**: Reduced-motion preference with change subscriptions.
//!
//! **[`registry`]**: Animation handles and their explicit pause/resume
//! state machine.
//!
//! **[`section`]**: Current-section scoring and detection.
//!
//! **[`reveal`]**: Viewport intersection tracking for entrance animations.
//!
//! **[`parallax`]**: Layer offsets as a linear function of scroll progress.
//!
//! **[`navigation`]**: Smooth scrolling to a section.
//!
//! **[`context`]**: [`AnimationContext`](context::AnimationContext), the
//! composition root.
//!
//! **[`shared`]**: Reentrancy-safe shared handle for visual components.
//!
//! **[`backend`]**: Traits platform backends implement.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod context;
pub mod frame;
pub mod motion;
pub mod navigation;
pub mod parallax;
pub mod registry;
pub mod reveal;
pub mod scroll;
pub mod section;
pub mod shared;
pub mod trace;
