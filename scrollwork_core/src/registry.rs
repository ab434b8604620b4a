// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live animation handles and their pause/resume state machine.
//!
//! Each registered animation is tracked by a [`HandleState`]. Visibility and
//! motion-preference changes are fed in as [`HandleEvent`]s and resolved by
//! the transition table in [`HandleState::transition`], which returns the
//! [`ControllerAction`] to perform on the underlying timeline.
//!
//! | state \ event                 | `Show`           | `Hide`                 | `MotionReduced`          | `MotionRestored`        |
//! |-------------------------------|------------------|------------------------|--------------------------|-------------------------|
//! | `Active`                      | `Active`         | `PausedByVisibility` ⏸ | `PausedByMotion(vis)` ⏸  | `Active`                |
//! | `PausedByVisibility`          | `Active` ▶       | `PausedByVisibility`   | `PausedByMotion(hidden)` | `PausedByVisibility`    |
//! | `PausedByMotion { visible }`  | `… { true }`     | `… { false }` ⏸        | unchanged                | `Active` ▶ if visible   |
//!
//! Nothing leaves `PausedByMotion` except `MotionRestored`, so a handle is
//! never resumed while motion is reduced.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::backend::AnimationController;

/// Per-handle playback state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleState {
    /// Visible and playing.
    Active,
    /// Scrolled out of view; motion is allowed.
    PausedByVisibility,
    /// Motion is reduced. `visible` remembers the element's visibility so the
    /// handle can resume correctly once motion is restored.
    PausedByMotion {
        /// Whether the element is currently in view.
        visible: bool,
    },
}

/// Inputs to the per-handle state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleEvent {
    /// The element entered the viewport.
    Show,
    /// The element left the viewport.
    Hide,
    /// The user switched to reduced motion.
    MotionReduced,
    /// The user switched back to full motion.
    MotionRestored,
}

/// What to do with the underlying timeline after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControllerAction {
    /// Leave the timeline alone.
    None,
    /// Pause it.
    Pause,
    /// Resume it.
    Resume,
}

impl HandleState {
    /// The state a freshly registered, visible handle starts in.
    #[must_use]
    pub const fn initial(reduced_motion: bool) -> Self {
        Self::seeded(reduced_motion, true)
    }

    /// The state a freshly registered handle starts in when its element's
    /// visibility is already known.
    #[must_use]
    pub const fn seeded(reduced_motion: bool, visible: bool) -> Self {
        match (reduced_motion, visible) {
            (true, visible) => Self::PausedByMotion { visible },
            (false, true) => Self::Active,
            (false, false) => Self::PausedByVisibility,
        }
    }

    /// Whether the element is considered in view.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        match self {
            Self::Active => true,
            Self::PausedByVisibility => false,
            Self::PausedByMotion { visible } => visible,
        }
    }

    /// Whether the timeline should currently be running.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Applies one event and returns the next state plus the controller
    /// action it requires.
    #[must_use]
    pub const fn transition(self, event: HandleEvent) -> (Self, ControllerAction) {
        use ControllerAction as A;
        use HandleEvent as E;
        match (self, event) {
            (Self::Active, E::Show | E::MotionRestored) => (Self::Active, A::None),
            (Self::Active, E::Hide) => (Self::PausedByVisibility, A::Pause),
            (Self::Active, E::MotionReduced) => (Self::PausedByMotion { visible: true }, A::Pause),

            (Self::PausedByVisibility, E::Show) => (Self::Active, A::Resume),
            // Re-pausing is harmless and keeps repeated hide signals idempotent.
            (Self::PausedByVisibility, E::Hide) => (Self::PausedByVisibility, A::Pause),
            (Self::PausedByVisibility, E::MotionReduced) => {
                (Self::PausedByMotion { visible: false }, A::None)
            }
            (Self::PausedByVisibility, E::MotionRestored) => (Self::PausedByVisibility, A::None),

            (Self::PausedByMotion { .. }, E::Show) => (Self::PausedByMotion { visible: true }, A::None),
            (Self::PausedByMotion { .. }, E::Hide) => {
                (Self::PausedByMotion { visible: false }, A::Pause)
            }
            (Self::PausedByMotion { visible }, E::MotionReduced) => {
                (Self::PausedByMotion { visible }, A::None)
            }
            (Self::PausedByMotion { visible: true }, E::MotionRestored) => (Self::Active, A::Resume),
            (Self::PausedByMotion { visible: false }, E::MotionRestored) => {
                (Self::PausedByVisibility, A::None)
            }
        }
    }
}

/// A performed controller call, reported back for tracing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedAction {
    /// Handle id.
    pub id: String,
    /// The call made on the controller.
    pub action: ControllerAction,
    /// State after the transition.
    pub state: HandleState,
}

struct Entry {
    controller: Box<dyn AnimationController>,
    state: HandleState,
}

/// Owns every live [`AnimationController`], keyed by id.
///
/// Components keep only the id; the registry is the sole owner of the
/// controller and disposes it on [`unregister`](Self::unregister), on
/// replacement, on [`dispose_all`](Self::dispose_all), and on drop.
pub struct AnimationRegistry {
    entries: BTreeMap<String, Entry>,
    reduced_motion: bool,
}

impl fmt::Debug for AnimationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationRegistry")
            .field("len", &self.entries.len())
            .field("reduced_motion", &self.reduced_motion)
            .finish()
    }
}

impl Default for AnimationRegistry {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AnimationRegistry {
    /// Creates an empty registry aware of the current motion preference.
    #[must_use]
    pub const fn new(reduced_motion: bool) -> Self {
        Self {
            entries: BTreeMap::new(),
            reduced_motion,
        }
    }

    /// Registers a controller under `id`.
    ///
    /// An existing controller with the same id is disposed first. Under
    /// reduced motion the new controller is paused before it ever plays.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        controller: Box<dyn AnimationController>,
    ) -> HandleState {
        self.register_with_visibility(id, controller, true)
    }

    /// Like [`register`](Self::register), for an element whose visibility
    /// is already known. A hidden element's controller is paused before it
    /// ever plays.
    pub fn register_with_visibility(
        &mut self,
        id: impl Into<String>,
        mut controller: Box<dyn AnimationController>,
        visible: bool,
    ) -> HandleState {
        let state = HandleState::seeded(self.reduced_motion, visible);
        if !state.is_playing() {
            controller.pause();
        }
        if let Some(mut old) = self.entries.insert(id.into(), Entry { controller, state }) {
            old.controller.dispose();
        }
        state
    }

    /// Disposes and removes the controller for `id`.
    ///
    /// Returns `false` for unknown ids, which are otherwise ignored.
    pub fn unregister(&mut self, id: &str) -> bool {
        match self.entries.remove(id) {
            Some(mut entry) => {
                entry.controller.dispose();
                true
            }
            None => false,
        }
    }

    /// Updates the visibility of one handle.
    ///
    /// Returns the action performed, or `None` for unknown ids.
    pub fn set_visibility(&mut self, id: &str, visible: bool) -> Option<ControllerAction> {
        let entry = self.entries.get_mut(id)?;
        let event = if visible {
            HandleEvent::Show
        } else {
            HandleEvent::Hide
        };
        Some(apply(entry, event))
    }

    /// Sweeps every handle after a global motion-preference change.
    ///
    /// Returns the controller calls actually made (actions other than
    /// [`ControllerAction::None`]).
    pub fn set_reduced_motion(&mut self, reduced: bool) -> Vec<AppliedAction> {
        let mut applied = Vec::new();
        if reduced == self.reduced_motion {
            return applied;
        }
        self.reduced_motion = reduced;
        let event = if reduced {
            HandleEvent::MotionReduced
        } else {
            HandleEvent::MotionRestored
        };
        for (id, entry) in &mut self.entries {
            let action = apply(entry, event);
            if action != ControllerAction::None {
                applied.push(AppliedAction {
                    id: id.clone(),
                    action,
                    state: entry.state,
                });
            }
        }
        applied
    }

    /// Disposes every remaining handle and empties the registry.
    pub fn dispose_all(&mut self) {
        for (_, mut entry) in core::mem::take(&mut self.entries) {
            entry.controller.dispose();
        }
    }

    /// The motion preference the registry currently enforces.
    #[must_use]
    pub const fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// State of a handle, if registered.
    #[must_use]
    pub fn state(&self, id: &str) -> Option<HandleState> {
        self.entries.get(id).map(|e| e.state)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of live handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no handles are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(id, state)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, HandleState)> + '_ {
        self.entries.iter().map(|(id, e)| (id.as_str(), e.state))
    }
}

impl Drop for AnimationRegistry {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

fn apply(entry: &mut Entry, event: HandleEvent) -> ControllerAction {
    let (next, action) = entry.state.transition(event);
    entry.state = next;
    match action {
        ControllerAction::None => {}
        ControllerAction::Pause => entry.controller.pause(),
        ControllerAction::Resume => entry.controller.resume(),
    }
    action
}
