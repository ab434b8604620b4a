// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation controllers that log every call.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use scrollwork_core::backend::AnimationController;

/// A controller method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControllerOp {
    /// `pause()`.
    Pause,
    /// `resume()`.
    Resume,
    /// `dispose()`.
    Dispose,
}

/// One logged controller call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerCall {
    /// Id the controller was created with.
    pub id: String,
    /// The call.
    pub op: ControllerOp,
}

/// Shared, ordered log of controller calls.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<ControllerCall>>>,
}

impl CallLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller that logs into this log under `id`.
    #[must_use]
    pub fn controller(&self, id: &str) -> RecordingController {
        RecordingController {
            id: id.into(),
            log: self.clone(),
        }
    }

    /// Every call, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<ControllerCall> {
        self.calls.borrow().clone()
    }

    /// Calls made on the controller `id`, in order.
    #[must_use]
    pub fn ops_for(&self, id: &str) -> Vec<ControllerOp> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.id == id)
            .map(|c| c.op)
            .collect()
    }

    /// Whether the timeline `id` is currently playing.
    ///
    /// Controllers start playing; a pause stops them, a resume restarts them
    /// and a dispose ends them for good.
    #[must_use]
    pub fn is_playing(&self, id: &str) -> bool {
        self.ops_for(id)
            .last()
            .is_none_or(|op| *op == ControllerOp::Resume)
    }

    /// Whether `id` was disposed.
    #[must_use]
    pub fn is_disposed(&self, id: &str) -> bool {
        self.ops_for(id).contains(&ControllerOp::Dispose)
    }

    /// Clears the log.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn push(&self, id: &str, op: ControllerOp) {
        self.calls.borrow_mut().push(ControllerCall { id: id.into(), op });
    }
}

/// An [`AnimationController`] that records its calls in a [`CallLog`].
#[derive(Debug)]
pub struct RecordingController {
    id: String,
    log: CallLog,
}

impl AnimationController for RecordingController {
    fn pause(&mut self) {
        self.log.push(&self.id, ControllerOp::Pause);
    }

    fn resume(&mut self) {
        self.log.push(&self.id, ControllerOp::Resume);
    }

    fn dispose(&mut self) {
        self.log.push(&self.id, ControllerOp::Dispose);
    }
}
