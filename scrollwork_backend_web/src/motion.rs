// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `prefers-reduced-motion` media query.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::MediaQueryList;

use scrollwork_core::motion::MotionPreference;

/// The media query that reports the reduced-motion accessibility setting.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok()?
}

/// Reads the current motion preference once.
///
/// Without a window, or in browsers that do not support the query, motion is
/// not reduced.
#[must_use]
pub fn current_motion_preference() -> MotionPreference {
    MotionPreference {
        reduced: media_query().is_some_and(|mql| mql.matches()),
    }
}

/// Forwards `change` events of the reduced-motion media query.
///
/// The listener is removed on drop.
pub struct MotionQuery {
    mql: MediaQueryList,
    listener: Closure<dyn FnMut()>,
}

impl MotionQuery {
    /// Subscribes to preference changes.
    ///
    /// Returns `None` if the query is unavailable; the preference is then
    /// fixed at [`current_motion_preference`].
    pub fn new(mut on_change: impl FnMut(MotionPreference) + 'static) -> Option<Self> {
        let mql = media_query()?;
        let source = mql.clone();
        let listener = Closure::wrap(Box::new(move || {
            on_change(MotionPreference {
                reduced: source.matches(),
            });
        }) as Box<dyn FnMut()>);
        mql.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { mql, listener })
    }

    /// The preference as currently reported by the query.
    #[must_use]
    pub fn preference(&self) -> MotionPreference {
        MotionPreference {
            reduced: self.mql.matches(),
        }
    }
}

impl Drop for MotionQuery {
    fn drop(&mut self) {
        let _ = self
            .mql
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
    }
}

impl core::fmt::Debug for MotionQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MotionQuery")
            .field("reduced", &self.mql.matches())
            .finish_non_exhaustive()
    }
}
