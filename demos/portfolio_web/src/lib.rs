// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: an animated single-page portfolio driven by
//! `scrollwork_backend_web`.
//!
//! Builds six stacked sections (hero, education, experience, achievements,
//! projects, contact) with parallax background shapes, entrance reveals on
//! headings and cards, a nav bar that follows the current section, and a
//! validated contact form. All scroll-driven state lives in one
//! [`SharedContext`]:
//!
//! - a [`ScrollWatcher`] feeds one sample per frame into it,
//! - a [`ParallaxPresenter`] applies the resulting parallax frame,
//! - a [`MotionQuery`] forwards `prefers-reduced-motion` changes,
//! - nav clicks go through [`SharedContext::scroll_to_section`].
//!
//! Build with: `wasm-pack build --target web demos/portfolio_web`
//!
//! Then serve `demos/portfolio_web/` and open `index.html` in a browser.
//!
//! [`ScrollWatcher`]: scrollwork_backend_web::ScrollWatcher
//! [`ParallaxPresenter`]: scrollwork_backend_web::ParallaxPresenter
//! [`MotionQuery`]: scrollwork_backend_web::MotionQuery

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

pub mod contact;
mod content;
mod markup;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, console};

use scrollwork_backend_web::{
    AnimationTiming, ConsoleSink, DomLayout, MotionQuery, ParallaxPresenter, ScrollWatcher,
    WebAnimationController, WindowScroller, current_motion_preference, fade_up_keyframes,
    float_keyframes, now_ms, page_metrics,
};
use scrollwork_core::context::{AnimationContext, ContextConfig};
use scrollwork_core::reveal::RevealOptions;
use scrollwork_core::scroll::ScrollMetrics;
use scrollwork_core::shared::SharedContext;

use crate::contact::{ContactForm, ContactMessage};
use crate::markup::{ContactFields, Mounted};

const REVEAL_DISTANCE_PX: f64 = 32.0;
const REVEAL_DURATION_MS: f64 = 700.0;
const FLOAT_AMPLITUDE_PX: f64 = 18.0;
const FLOAT_PERIOD_MS: f64 = 4200.0;

struct PageState {
    shared: SharedContext,
    layout: DomLayout,
    scroller: WindowScroller,
    presenter: ParallaxPresenter,
    nav_links: Vec<(String, HtmlElement)>,
    /// Section whose nav link carries `aria-current`.
    highlighted: Option<String>,
}

fn missing(what: &str) -> JsValue {
    JsValue::from_str(&format!("portfolio_web: no {what}"))
}

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let started = now_ms();
    let window = web_sys::window().ok_or_else(|| missing("global window"))?;
    let document = window.document().ok_or_else(|| missing("document"))?;
    let body = document.body().ok_or_else(|| missing("body"))?;

    let mounted = markup::mount(&document, &body)?;

    let mut context = AnimationContext::new(ContextConfig::web(), current_motion_preference())
        .with_sink(Box::new(ConsoleSink::new()));
    context.set_sections(content::section_descriptors());
    for layer in content::parallax_layers() {
        context.register_parallax_layer(layer);
    }
    let shared = SharedContext::new(context);
    start_animations(&shared, &mounted)?;

    let Mounted {
        nav_links,
        jump_links,
        decorations,
        contact,
        ..
    } = mounted;

    let mut presenter = ParallaxPresenter::new();
    for (id, element) in decorations {
        presenter.attach(id, element);
    }

    let state = Rc::new(RefCell::new(PageState {
        shared,
        layout: DomLayout::new().ok_or_else(|| missing("document layout"))?,
        scroller: WindowScroller::new().ok_or_else(|| missing("scrollable window"))?,
        presenter,
        nav_links: nav_links.clone(),
        highlighted: None,
    }));

    for (target, link) in nav_links.into_iter().chain(jump_links) {
        wire_link(&state, target, &link)?;
    }
    wire_contact_form(contact)?;

    let frame_state = Rc::clone(&state);
    let watcher = ScrollWatcher::new(move |metrics| on_frame(&frame_state, metrics))?;
    watcher.request_sample();

    let motion_state = Rc::clone(&state);
    let motion = MotionQuery::new(move |preference| {
        let shared = motion_state.borrow().shared.clone();
        shared.set_motion_preference(preference);
        // Reapply parallax right away: reduced motion clears the transforms.
        on_frame(&motion_state, page_metrics());
    });

    let teardown_state = Rc::clone(&state);
    let teardown = Closure::wrap(Box::new(move || {
        teardown_state.borrow().shared.dispose();
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("pagehide", teardown.as_ref().unchecked_ref())?;
    teardown.forget();

    // Keep the listeners alive: the page never unmounts.
    core::mem::forget(watcher);
    core::mem::forget(motion);

    console::log_1(&JsValue::from_str(&format!(
        "portfolio_web: mounted in {:.1} ms",
        now_ms() - started
    )));
    Ok(())
}

/// Starts entrance reveals and looping decorations and hands them to the
/// registry.
///
/// Under reduced motion at load, reveals are skipped so content is shown in
/// its final state. Decorations are tracked continuously and pause whenever
/// they leave the viewport.
fn start_animations(shared: &SharedContext, mounted: &Mounted) -> Result<(), JsValue> {
    if !shared.reduced_motion() {
        let rise = fade_up_keyframes(REVEAL_DISTANCE_PX)?;
        for reveal in &mounted.reveals {
            let controller = WebAnimationController::animate(
                &reveal.element,
                &rise,
                AnimationTiming::entrance(REVEAL_DURATION_MS, reveal.delay_ms),
            )?;
            shared.register_reveal_animation(&reveal.id, Box::new(controller), None);
        }
    }

    let bob = float_keyframes(FLOAT_AMPLITUDE_PX)?;
    for (id, element) in &mounted.floaters {
        let controller =
            WebAnimationController::animate(element, &bob, AnimationTiming::looping(FLOAT_PERIOD_MS))?;
        shared.register_reveal_animation(
            id,
            Box::new(controller),
            Some(RevealOptions::CONTINUOUS),
        );
    }
    Ok(())
}

/// Processes one coalesced scroll sample.
fn on_frame(state: &Rc<RefCell<PageState>>, metrics: Option<ScrollMetrics>) {
    let Ok(mut page) = state.try_borrow_mut() else {
        return;
    };
    let page = &mut *page;
    if page.shared.on_scroll(metrics, &page.layout).is_none() {
        return;
    }
    if let Some(frame) = page.shared.parallax_frame() {
        page.presenter.apply(&frame);
    }

    let current = page.shared.current_section_id();
    if current == page.highlighted {
        return;
    }
    for (id, link) in &page.nav_links {
        if current.as_deref() == Some(id.as_str()) {
            let _ = link.set_attribute("aria-current", "location");
        } else {
            let _ = link.remove_attribute("aria-current");
        }
    }
    page.highlighted = current;
}

/// Routes clicks on an in-page link through smooth navigation.
///
/// Missing targets are reported by the [`ConsoleSink`].
fn wire_link(state: &Rc<RefCell<PageState>>, target: String, link: &HtmlElement) -> Result<(), JsValue> {
    let nav_state = Rc::clone(state);
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let Ok(mut page) = nav_state.try_borrow_mut() else {
            return;
        };
        let page = &mut *page;
        page.shared.scroll_to_section(&page.layout, &mut page.scroller, &target);
    }) as Box<dyn FnMut(Event)>);
    link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Validates the contact form on submit. Nothing is sent anywhere; a valid
/// message is acknowledged in place.
fn wire_contact_form(fields: ContactFields) -> Result<(), JsValue> {
    let status = fields.status.clone();
    let mut form = ContactForm::new(move |message: &ContactMessage| {
        status.set_text_content(Some(&format!(
            "Thanks, {}! I will reply to {}.",
            message.name, message.email
        )));
    });

    let target = fields.form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        let result = form.submit(
            &fields.name.value(),
            &fields.email.value(),
            &fields.message.value(),
        );
        match result {
            Ok(()) => fields.form.reset(),
            Err(errors) => {
                let text: Vec<&str> = errors.iter().map(|e| e.message()).collect();
                fields.status.set_text_content(Some(&text.join(" ")));
            }
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}
