// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web Animations API controllers.

use alloc::format;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Animation, AnimationPlayState, Element};

use scrollwork_core::backend::AnimationController;

#[wasm_bindgen]
extern "C" {
    /// An `Element` viewed through its `animate` method.
    #[wasm_bindgen(extends = Element)]
    type AnimatableElement;

    /// `Element.animate(keyframes, options)` with a plain options object.
    #[wasm_bindgen(method, js_name = "animate")]
    fn animate_with_options(this: &AnimatableElement, keyframes: &Array, options: &Object) -> Animation;
}

/// Timing of a Web Animations effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTiming {
    /// Duration of one iteration in milliseconds.
    pub duration_ms: f64,
    /// Delay before the first iteration in milliseconds.
    pub delay_ms: f64,
    /// Iteration count, `None` for endless.
    pub iterations: Option<f64>,
    /// Play every other iteration backwards.
    pub alternate: bool,
    /// CSS easing function.
    pub easing: &'static str,
}

impl AnimationTiming {
    /// A single eased-out entrance.
    #[must_use]
    pub const fn entrance(duration_ms: f64, delay_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms,
            iterations: Some(1.0),
            alternate: false,
            easing: "cubic-bezier(0.22, 1, 0.36, 1)",
        }
    }

    /// An endless back-and-forth loop.
    #[must_use]
    pub const fn looping(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            iterations: None,
            alternate: true,
            easing: "ease-in-out",
        }
    }

    fn to_object(self) -> Result<Object, JsValue> {
        let options = Object::new();
        Reflect::set(&options, &"duration".into(), &self.duration_ms.into())?;
        Reflect::set(&options, &"delay".into(), &self.delay_ms.into())?;
        let iterations = self.iterations.unwrap_or(f64::INFINITY);
        Reflect::set(&options, &"iterations".into(), &iterations.into())?;
        let direction = if self.alternate { "alternate" } else { "normal" };
        Reflect::set(&options, &"direction".into(), &direction.into())?;
        Reflect::set(&options, &"easing".into(), &self.easing.into())?;
        // Backwards fill holds the first keyframe during the delay.
        Reflect::set(&options, &"fill".into(), &"backwards".into())?;
        Ok(options)
    }
}

/// Lifetime flags of a wrapped animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Latch {
    disposed: bool,
    /// The timeline reached its end once. `play()` would rewind it.
    finished: bool,
}

impl Latch {
    /// Records the timeline's current play state and returns whether
    /// `pause()`/`play()` may still be called on it.
    fn allows_playback(&mut self, state: AnimationPlayState) -> bool {
        if state == AnimationPlayState::Finished {
            self.finished = true;
        }
        !self.disposed && !self.finished
    }
}

/// Wraps a `web_sys::Animation` so the registry can pause, resume and
/// cancel it.
///
/// A finished single-run animation is never paused or replayed, so revealed
/// content stays in its final state across motion-preference changes.
#[derive(Debug)]
pub struct WebAnimationController {
    animation: Animation,
    latch: Latch,
}

impl WebAnimationController {
    /// Wraps an existing animation. It is assumed to be playing.
    #[must_use]
    pub fn new(animation: Animation) -> Self {
        Self {
            animation,
            latch: Latch::default(),
        }
    }

    /// Starts `keyframes` on `element` and wraps the resulting animation.
    ///
    /// # Errors
    ///
    /// Propagates a failed write while building the timing object.
    pub fn animate(
        element: &Element,
        keyframes: &Array,
        timing: AnimationTiming,
    ) -> Result<Self, JsValue> {
        let options = timing.to_object()?;
        let element: &AnimatableElement = element.unchecked_ref();
        Ok(Self::new(element.animate_with_options(keyframes, &options)))
    }

    /// The underlying animation.
    #[must_use]
    pub fn animation(&self) -> &Animation {
        &self.animation
    }
}

impl AnimationController for WebAnimationController {
    fn pause(&mut self) {
        if self.latch.allows_playback(self.animation.play_state()) {
            let _ = self.animation.pause();
        }
    }

    fn resume(&mut self) {
        if self.latch.allows_playback(self.animation.play_state()) {
            let _ = self.animation.play();
        }
    }

    fn dispose(&mut self) {
        if !self.latch.disposed {
            self.animation.cancel();
            self.latch.disposed = true;
        }
    }
}

fn keyframe(opacity: f64, transform: &str) -> Result<Object, JsValue> {
    let frame = Object::new();
    Reflect::set(&frame, &"opacity".into(), &opacity.into())?;
    Reflect::set(&frame, &"transform".into(), &transform.into())?;
    Ok(frame)
}

/// Fade-in keyframes that rise `distance` pixels into place.
///
/// # Errors
///
/// Propagates a failed property write on the keyframe objects.
pub fn fade_up_keyframes(distance: f64) -> Result<Array, JsValue> {
    let from = keyframe(0.0, &format!("translateY({distance}px)"))?;
    let to = keyframe(1.0, "translateY(0px)")?;
    Ok(Array::of2(&from, &to))
}

/// Endless gentle bobbing keyframes for decorative elements.
///
/// # Errors
///
/// Propagates a failed property write on the keyframe objects.
pub fn float_keyframes(amplitude: f64) -> Result<Array, JsValue> {
    let rest = keyframe(1.0, "translateY(0px)")?;
    let up = keyframe(1.0, &format!("translateY({}px)", -amplitude))?;
    Ok(Array::of3(&rest, &up, &rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_timeline_is_never_replayed() {
        let mut latch = Latch::default();
        assert!(latch.allows_playback(AnimationPlayState::Running));
        assert!(latch.allows_playback(AnimationPlayState::Paused));

        // Reduced motion arrives after the entrance ran to its end.
        assert!(!latch.allows_playback(AnimationPlayState::Finished));
        // Restoring motion must not rewind it.
        assert!(!latch.allows_playback(AnimationPlayState::Paused));
        assert!(!latch.allows_playback(AnimationPlayState::Running));
    }

    #[test]
    fn disposed_timeline_is_left_alone() {
        let mut latch = Latch {
            disposed: true,
            finished: false,
        };
        assert!(!latch.allows_playback(AnimationPlayState::Running));
        assert!(!latch.finished);
    }
}
