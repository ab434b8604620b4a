// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounce-by-animation-frame bookkeeping.
//!
//! Scroll and resize signals can arrive many times per frame. A
//! [`FrameCoalescer`] makes sure at most one frame request is outstanding:
//! the first signal schedules a request, later signals are absorbed until the
//! request fires, and a pending request can be cancelled on teardown.
//!
//! The coalescer does not know how frames are requested; the backend passes
//! closures that talk to the platform (`requestAnimationFrame` /
//! `cancelAnimationFrame` on the web). The token type `T` is whatever the
//! platform hands back.
//!
//! ```text
//!   signal ──► request() ──(idle)──► schedule() ──► Pending(token)
//!   signal ──► request() ──(pending)──► absorbed
//!   frame  ──► fire() ──► Idle, run recomputation once
//!   drop   ──► cancel() ──► cancel(token), Idle
//! ```

/// Tracks whether a coalesced frame request is outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    requested: u64,
    absorbed: u64,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameCoalescer<T> {
    /// Creates an idle coalescer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            requested: 0,
            absorbed: 0,
        }
    }

    /// Asks for a recomputation on the next frame.
    ///
    /// Calls `schedule` only when no request is pending. Returns `true` if a
    /// new request was scheduled, `false` if the signal was absorbed.
    pub fn request(&mut self, schedule: impl FnOnce() -> T) -> bool {
        if self.pending.is_some() {
            self.absorbed = self.absorbed.wrapping_add(1);
            return false;
        }
        self.pending = Some(schedule());
        self.requested = self.requested.wrapping_add(1);
        true
    }

    /// Marks the pending request as fired.
    ///
    /// Returns `true` if a request was pending, meaning the caller should run
    /// its recomputation. A frame that fires after [`cancel`](Self::cancel)
    /// returns `false` and must not call back into torn-down state.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Cancels the pending request, if any, handing its token to `cancel`.
    pub fn cancel(&mut self, cancel: impl FnOnce(T)) {
        if let Some(token) = self.pending.take() {
            cancel(token);
        }
    }

    /// Returns `true` while a request is outstanding.
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of requests actually scheduled.
    #[must_use]
    pub const fn requested(&self) -> u64 {
        self.requested
    }

    /// Number of signals absorbed by an already-pending request.
    #[must_use]
    pub const fn absorbed(&self) -> u64 {
        self.absorbed
    }
}
