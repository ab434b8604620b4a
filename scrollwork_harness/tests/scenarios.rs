// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end scenarios against a simulated portfolio page.

use kurbo::{Rect, Size};
use scrollwork_core::backend::AnimationController;
use scrollwork_core::context::{AnimationContext, ContextConfig};
use scrollwork_core::motion::MotionPreference;
use scrollwork_core::navigation::NavigationOutcome;
use scrollwork_core::parallax::{Axis, ParallaxLayer, ParallaxOptions, ScrollBounds};
use scrollwork_core::registry::HandleState;
use scrollwork_core::scroll::ScrollMetrics;
use scrollwork_core::section::{SectionDescriptor, detect_current_section};
use scrollwork_core::shared::SharedContext;
use scrollwork_debug::recorder::{RecordedEvent, RecorderSink};
use scrollwork_harness::{CallLog, ControllerOp, Harness, SimulatedPage};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn headless() -> Harness {
    Harness::portfolio(ContextConfig::headless(), MotionPreference::FULL)
}

// ---------------------------------------------------------------------------
// Scroll fraction
// ---------------------------------------------------------------------------

#[test]
fn scroll_fraction_reference_points() {
    let page = SimulatedPage::new(Size::new(1000.0, 1000.0)).with_section("only", 2000.0);
    let mut h = Harness::new(
        page,
        vec![SectionDescriptor::new("only", "Only")],
        ContextConfig::headless(),
        MotionPreference::FULL,
    );

    assert_eq!(h.scroll_to(0.0).fraction, 0.0);
    assert_eq!(h.scroll_to(500.0).fraction, 0.5);
    assert_eq!(h.scroll_to(1000.0).fraction, 1.0);

    // Overscroll as reported by rubber-banding browsers.
    let before = h.context.on_scroll(Some(ScrollMetrics::new(-100.0, 2000.0, 1000.0)), &h.page);
    assert_eq!(before.fraction, 0.0);
    let past = h.context.on_scroll(Some(ScrollMetrics::new(1500.0, 2000.0, 1000.0)), &h.page);
    assert_eq!(past.fraction, 1.0);
}

#[test]
fn short_page_has_no_progress() {
    let page = SimulatedPage::new(Size::new(1000.0, 1000.0)).with_section("only", 600.0);
    let mut h = Harness::new(page, Vec::new(), ContextConfig::headless(), MotionPreference::FULL);
    assert_eq!(h.scroll_to(300.0).fraction, 0.0);
    assert_eq!(h.context.scroll_fraction(), 0.0);
}

#[test]
fn detached_page_degrades_to_defaults() {
    let mut h = Harness::new(
        SimulatedPage::detached(),
        vec![
            SectionDescriptor::new("hero", "Home"),
            SectionDescriptor::new("contact", "Contact"),
        ],
        ContextConfig::web(),
        MotionPreference::FULL,
    );
    let update = h.sample();
    assert_eq!(update.fraction, 0.0);
    assert!(update.visibility.is_empty());
    assert_eq!(h.context.current_section_id(), Some("hero"));
    assert!(h.parallax().layers.is_empty());
}

// ---------------------------------------------------------------------------
// Parallax
// ---------------------------------------------------------------------------

#[test]
fn parallax_reference_points() {
    let mut h = headless();
    h.context.register_parallax_layer(ParallaxLayer::vertical("orb", 0.5));
    h.context.register_parallax_layer(ParallaxLayer::vertical("band", 1.0));
    let window = ScrollBounds::new(0.3, 0.7).unwrap();
    h.context
        .register_parallax_layer(ParallaxLayer::vertical("glow", 1.0).with_bounds(window));

    // 4400px of scroll range, 800px viewport.
    h.scroll_to(4400.0);
    let frame = h.parallax();
    assert_eq!(frame.get("orb").unwrap().offset, 400.0);
    assert_eq!(frame.get("glow").unwrap().offset, 800.0);

    h.scroll_to(2200.0);
    let frame = h.parallax();
    assert_eq!(frame.get("band").unwrap().offset, 400.0);
    assert!(close(frame.get("glow").unwrap().offset, 400.0));

    h.scroll_to(440.0);
    assert_eq!(h.parallax().get("glow").unwrap().offset, 0.0);
}

#[test]
fn parallax_is_linear_and_proportional() {
    let mut h = headless();
    h.context.register_parallax_layer(ParallaxLayer::vertical("slow", 0.25));
    h.context.register_parallax_layer(ParallaxLayer::horizontal("fast", 1.5));

    let mut previous = None;
    for step in 0..=10 {
        h.scroll_to(f64::from(step) * 440.0);
        let frame = h.parallax();
        let slow = frame.get("slow").unwrap().offset;
        let fast = frame.get("fast").unwrap();
        assert!(close(fast.offset, slow * 6.0));
        assert_eq!(fast.transform.unwrap().to_vec2().y, 0.0);
        if let Some(p) = previous {
            assert!(close(slow - p, 0.025 * 800.0));
        }
        previous = Some(slow);
    }
}

#[test]
fn disabled_parallax_emits_no_transforms() {
    let mut h = headless();
    h.context.register_parallax_layer(ParallaxLayer::vertical("orb", 0.5));
    h.context.register_parallax_layer(ParallaxLayer::horizontal("band", -0.3));
    h.scroll_to(3000.0);

    let frame = h.context.parallax_frame_with(&ParallaxOptions {
        disabled: true,
        ..ParallaxOptions::ENABLED
    });
    assert!(frame.disabled);
    for layer in &frame.layers {
        assert_eq!(layer.offset, 0.0);
        assert_eq!(layer.transform, None);
    }

    h.set_reduced_motion(true);
    let frame = h.parallax();
    assert!(frame.disabled);
    assert!(frame.layers.iter().all(|l| l.offset == 0.0 && l.transform.is_none()));

    h.set_reduced_motion(false);
    let frame = h.parallax();
    assert_eq!(frame.get("band").unwrap().transform.unwrap().axis, Axis::Horizontal);
}

#[test]
fn base_range_override() {
    let mut h = headless();
    h.context.register_parallax_layer(ParallaxLayer::vertical("orb", 0.5));
    h.scroll_to(4400.0);
    let frame = h.context.parallax_frame_with(&ParallaxOptions {
        base_scroll_range: Some(200.0),
        disabled: false,
    });
    assert_eq!(frame.get("orb").unwrap().offset, 100.0);
}

// ---------------------------------------------------------------------------
// Reduced motion and the registry
// ---------------------------------------------------------------------------

#[test]
fn reduced_motion_pauses_on_registration_and_restores_visible_only() {
    let mut h = Harness::portfolio(ContextConfig::headless(), MotionPreference::REDUCED);

    assert_eq!(
        h.register("hero-orb"),
        HandleState::PausedByMotion { visible: true }
    );
    h.register_reveal("contact");
    assert_eq!(h.log.ops_for("hero-orb"), [ControllerOp::Pause]);
    assert!(!h.log.is_playing("contact"));

    // The contact section is far below the fold.
    let update = h.scroll_to(0.0);
    assert_eq!(update.visibility.len(), 1);
    assert!(!update.visibility[0].visible);

    assert!(h.set_reduced_motion(false));
    assert!(h.log.is_playing("hero-orb"));
    assert!(!h.log.is_playing("contact"));
    assert!(!h.log.ops_for("contact").contains(&ControllerOp::Resume));
    assert_eq!(h.context.registry().state("contact"), Some(HandleState::PausedByVisibility));

    h.scroll_to(4400.0);
    assert!(h.log.is_playing("contact"));
}

#[test]
fn never_resumed_while_reduced() {
    let mut h = headless();
    h.register_reveal("projects");
    h.set_reduced_motion(true);
    h.log.clear();

    for y in [0.0, 3300.0, 0.0, 3300.0] {
        h.scroll_to(y);
        h.context.set_animation_visibility("projects", true);
    }
    assert!(!h.log.ops_for("projects").contains(&ControllerOp::Resume));

    // Each hide re-pauses.
    assert_eq!(h.log.ops_for("projects"), [ControllerOp::Pause, ControllerOp::Pause]);

    h.set_reduced_motion(false);
    assert_eq!(h.log.ops_for("projects").last(), Some(&ControllerOp::Resume));
    assert!(h.log.is_playing("projects"));
}

#[test]
fn entrance_reveals_latch() {
    let mut h = Harness::portfolio(ContextConfig::web(), MotionPreference::FULL);
    h.page.place("project-card", Rect::new(100.0, 3400.0, 600.0, 3800.0));
    h.register_reveal("project-card");

    h.scroll_to(0.0);
    assert!(!h.log.is_playing("project-card"));

    // A quarter of the card is on screen: past the 20% threshold.
    h.scroll_to(2700.0);
    assert!(h.log.is_playing("project-card"));
    assert!(h.context.reveal().is_revealed("project-card"));

    h.scroll_to(0.0);
    assert_eq!(
        h.log.ops_for("project-card"),
        [ControllerOp::Pause, ControllerOp::Resume]
    );
}

#[test]
fn looping_decoration_pauses_offscreen_after_reveal() {
    let mut h = Harness::portfolio(ContextConfig::web(), MotionPreference::FULL);
    h.page.place("orb", Rect::new(0.0, 1000.0, 100.0, 1100.0));
    h.register_looping("orb");

    h.scroll_to(0.0);
    assert_eq!(h.context.registry().state("orb"), Some(HandleState::PausedByVisibility));
    h.scroll_to(900.0);
    assert_eq!(h.context.registry().state("orb"), Some(HandleState::Active));
    h.scroll_to(4000.0);
    assert_eq!(h.context.registry().state("orb"), Some(HandleState::PausedByVisibility));
    h.scroll_to(900.0);

    assert_eq!(
        h.log.ops_for("orb"),
        [
            ControllerOp::Pause,
            ControllerOp::Resume,
            ControllerOp::Pause,
            ControllerOp::Resume,
        ]
    );
}

#[test]
fn replacing_a_hidden_reveal_controller_keeps_it_paused() {
    let mut h = headless();
    h.register_reveal("contact");
    h.sample();
    assert_eq!(h.context.registry().state("contact"), Some(HandleState::PausedByVisibility));

    h.register("contact");
    h.sample();
    assert_eq!(h.context.registry().state("contact"), Some(HandleState::PausedByVisibility));
    // Old pauses, new starts paused, then old is disposed.
    assert_eq!(
        h.log.ops_for("contact"),
        [ControllerOp::Pause, ControllerOp::Pause, ControllerOp::Dispose]
    );
}

#[test]
fn unrendered_reveal_target_is_paused() {
    let mut h = headless();
    h.register_reveal("not-in-dom");
    h.sample();
    assert_eq!(h.log.ops_for("not-in-dom"), [ControllerOp::Pause]);
}

#[test]
fn teardown_disposes_every_handle() {
    let log = CallLog::new();
    {
        let mut h = headless();
        h.log = log.clone();
        h.register("a");
        h.register_reveal("education");
        h.context.unregister_animation("a");
        h.register("b");
    }
    assert!(log.is_disposed("a"));
    assert!(log.is_disposed("b"));
    assert!(log.is_disposed("education"));
    assert_eq!(
        log.calls().iter().filter(|c| c.op == ControllerOp::Dispose).count(),
        3
    );
}

#[test]
fn reregistering_disposes_previous_controller() {
    let mut h = headless();
    h.register("timeline");
    h.register("timeline");
    assert_eq!(h.log.ops_for("timeline"), [ControllerOp::Dispose]);
    assert_eq!(h.context.registry().len(), 1);
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[test]
fn hero_above_education_resolves_to_education() {
    let page = SimulatedPage::new(Size::new(1200.0, 800.0))
        .with_section("hero", 800.0)
        .with_section("education", 800.0);
    let mut h = Harness::new(
        page,
        vec![
            SectionDescriptor::new("hero", "Home"),
            SectionDescriptor::new("education", "Education"),
        ],
        ContextConfig::headless(),
        MotionPreference::FULL,
    );
    // hero at -600..200, education at 200..1000.
    let update = h.scroll_to(600.0);
    assert_eq!(update.section_changed.as_deref(), Some("education"));
}

#[test]
fn empty_and_unrendered_section_lists() {
    let h = headless();
    let none: &[&str] = &[];
    assert_eq!(detect_current_section(none, &h.page), None);
    assert_eq!(
        detect_current_section(&["ghost", "phantom"], &h.page),
        Some("ghost")
    );
}

#[test]
fn scrolling_through_the_page_visits_every_section_in_order() {
    let mut h = headless();
    let rec = RecorderSink::new();
    h.context.set_sink(Some(Box::new(rec.clone())));

    for step in 0..=44 {
        h.scroll_to(f64::from(step) * 100.0);
    }
    assert_eq!(
        rec.section_history(),
        ["education", "experience", "achievements", "projects", "contact"]
    );

    assert!(!rec.take().is_empty());
    for step in (0..=44).rev() {
        h.scroll_to(f64::from(step) * 100.0);
    }
    assert_eq!(
        rec.section_history(),
        ["projects", "achievements", "experience", "education", "hero"]
    );
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn missing_navigation_target_warns_without_scrolling() {
    let mut h = headless();
    let rec = RecorderSink::new();
    h.context.set_sink(Some(Box::new(rec.clone())));
    h.scroll_to(1200.0);

    assert_eq!(h.navigate("missing-id"), NavigationOutcome::MissingTarget);
    assert!(h.scroll_requests().is_empty());
    assert_eq!(h.page.scroll_y(), 1200.0);
    assert_eq!(
        rec.warnings(),
        [RecordedEvent::Navigation {
            id: "missing-id".into(),
            outcome: NavigationOutcome::MissingTarget,
            target_y: None,
        }]
    );
}

#[test]
fn navigation_keeps_header_offset() {
    let mut h = Harness::portfolio(ContextConfig::web(), MotionPreference::FULL);
    assert_eq!(h.navigate("experience"), NavigationOutcome::Scrolled);
    assert_eq!(h.navigate("hero"), NavigationOutcome::Scrolled);
    assert_eq!(h.scroll_requests(), &[1528.0, 0.0]);
}

// ---------------------------------------------------------------------------
// Shared context
// ---------------------------------------------------------------------------

/// Registers a follow-up animation from inside its own `pause`.
struct Spawner {
    shared: SharedContext,
    log: CallLog,
}

impl AnimationController for Spawner {
    fn pause(&mut self) {
        let follow_up = self.log.controller("spawned");
        self.shared.register_animation("spawned", Box::new(follow_up));
    }
    fn resume(&mut self) {}
    fn dispose(&mut self) {}
}

#[test]
fn reentrant_registration_is_deferred_not_lost() {
    let log = CallLog::new();
    let shared = SharedContext::new(AnimationContext::new(
        ContextConfig::headless(),
        MotionPreference::FULL,
    ));
    shared.register_animation(
        "spawner",
        Box::new(Spawner {
            shared: shared.clone(),
            log: log.clone(),
        }),
    );

    shared.set_motion_preference(MotionPreference::REDUCED);

    assert!(shared.reduced_motion());
    // Registered after the sweep, so paused on arrival.
    assert_eq!(log.ops_for("spawned"), [ControllerOp::Pause]);
    let state = shared.with(|ctx| ctx.registry().state("spawned"));
    assert_eq!(state, Some(Some(HandleState::PausedByMotion { visible: true })));
}
