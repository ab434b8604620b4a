// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reduced-motion preference.
//!
//! [`ReducedMotionDetector`] holds the current [`MotionPreference`] and
//! notifies subscribers synchronously whenever the platform reports a change.
//! The backend reads the initial value once (e.g. from
//! `matchMedia("(prefers-reduced-motion: reduce)")`) and forwards change
//! events through [`set`](ReducedMotionDetector::set).

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// The user's motion preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MotionPreference {
    /// Non-essential animation should be suppressed.
    pub reduced: bool,
}

impl MotionPreference {
    /// Full motion.
    pub const FULL: Self = Self { reduced: false };
    /// Reduced motion.
    pub const REDUCED: Self = Self { reduced: true };
}

/// Identifies a subscription returned by [`ReducedMotionDetector::subscribe`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u32);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

type Listener = Box<dyn FnMut(MotionPreference)>;

/// Current motion preference plus change subscribers.
pub struct ReducedMotionDetector {
    preference: MotionPreference,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u32,
}

impl fmt::Debug for ReducedMotionDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReducedMotionDetector")
            .field("preference", &self.preference)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for ReducedMotionDetector {
    fn default() -> Self {
        Self::new(MotionPreference::FULL)
    }
}

impl ReducedMotionDetector {
    /// Creates a detector seeded with the platform's initial value.
    #[must_use]
    pub fn new(initial: MotionPreference) -> Self {
        Self {
            preference: initial,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current preference.
    #[inline]
    #[must_use]
    pub const fn preference(&self) -> MotionPreference {
        self.preference
    }

    /// Shorthand for `preference().reduced`.
    #[inline]
    #[must_use]
    pub const fn is_reduced(&self) -> bool {
        self.preference.reduced
    }

    /// Registers a callback invoked on every subsequent change.
    pub fn subscribe(&mut self, listener: impl FnMut(MotionPreference) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _)| *sid != id);
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Applies a platform change.
    ///
    /// Returns `true` and notifies every subscriber, in subscription order,
    /// if the value actually changed.
    pub fn set(&mut self, preference: MotionPreference) -> bool {
        if preference == self.preference {
            return false;
        }
        self.preference = preference;
        for (_, listener) in &mut self.listeners {
            listener(preference);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    #[test]
    fn notifies_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut detector = ReducedMotionDetector::default();
        let log = Rc::clone(&seen);
        detector.subscribe(move |p| log.borrow_mut().push(p.reduced));

        assert!(!detector.set(MotionPreference::FULL));
        assert!(detector.set(MotionPreference::REDUCED));
        assert!(!detector.set(MotionPreference::REDUCED));
        assert!(detector.set(MotionPreference::FULL));
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0_u32));
        let mut detector = ReducedMotionDetector::new(MotionPreference::REDUCED);
        assert!(detector.is_reduced());
        let c = Rc::clone(&count);
        let id = detector.subscribe(move |_| *c.borrow_mut() += 1);
        detector.set(MotionPreference::FULL);
        detector.unsubscribe(id);
        detector.unsubscribe(id);
        detector.set(MotionPreference::REDUCED);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(detector.subscriber_count(), 0);
    }
}
