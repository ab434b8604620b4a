// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM construction.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::content::{DECORATIONS, Decoration, SECTIONS, Section};

/// Height of the fixed nav bar; matches the navigation offset of
/// `ContextConfig::web()`.
const NAV_HEIGHT_PX: f64 = 72.0;

/// Stagger between cards of one grid.
const CARD_STAGGER_MS: f64 = 90.0;

const STYLE: &str = "
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: #0b0d17; color: #e5e7eb; }
nav.site-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 10; display: flex; gap: 20px;
  align-items: center; padding: 0 32px; backdrop-filter: blur(8px); background: rgba(11, 13, 23, 0.7); }
nav.site-nav a { color: #9ca3af; text-decoration: none; font-size: 14px; }
nav.site-nav a[aria-current] { color: #fff; border-bottom: 2px solid #6366f1; }
section.page-section { position: relative; overflow: hidden; min-height: 80vh; padding: 120px 10vw 96px; }
section#hero { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; }
.decoration { position: absolute; pointer-events: none; will-change: transform; }
.decoration .blob { width: 100%; height: 100%; border-radius: 50%; filter: blur(48px); }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; margin-top: 32px; }
.card { position: relative; padding: 24px; border-radius: 16px; background: rgba(255, 255, 255, 0.04);
  border: 1px solid rgba(255, 255, 255, 0.08); }
.card .meta { color: #818cf8; font-size: 13px; }
.cta { display: inline-block; margin: 24px 16px 0 0; padding: 12px 20px; border-radius: 999px;
  background: #6366f1; color: #fff; text-decoration: none; }
form.contact { display: grid; gap: 12px; max-width: 520px; margin-top: 32px; }
form.contact input, form.contact textarea { padding: 12px; border-radius: 8px; border: 1px solid #374151;
  background: #111827; color: inherit; font: inherit; }
.status { min-height: 1.5em; color: #fbbf24; }
";

/// An element with an entrance animation.
#[derive(Debug)]
pub(crate) struct Reveal {
    pub(crate) id: String,
    pub(crate) element: HtmlElement,
    pub(crate) delay_ms: f64,
}

/// Contact form controls.
#[derive(Clone, Debug)]
pub(crate) struct ContactFields {
    pub(crate) form: HtmlFormElement,
    pub(crate) name: HtmlInputElement,
    pub(crate) email: HtmlInputElement,
    pub(crate) message: HtmlTextAreaElement,
    pub(crate) status: HtmlElement,
}

/// Elements the page wires up after mounting.
#[derive(Debug)]
pub(crate) struct Mounted {
    /// Nav bar links by target section.
    pub(crate) nav_links: Vec<(String, HtmlElement)>,
    /// Other in-page links by target section.
    pub(crate) jump_links: Vec<(String, HtmlElement)>,
    /// Parallax wrappers by layer id.
    pub(crate) decorations: Vec<(String, HtmlElement)>,
    /// Looping blobs inside the parallax wrappers.
    pub(crate) floaters: Vec<(String, HtmlElement)>,
    pub(crate) reveals: Vec<Reveal>,
    pub(crate) contact: ContactFields,
}

fn element(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element(tag)?.unchecked_into();
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn text(doc: &Document, tag: &str, class: &str, content: &str) -> Result<HtmlElement, JsValue> {
    let el = element(doc, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

fn link(doc: &Document, class: &str, target: &str, label: &str) -> Result<HtmlElement, JsValue> {
    let a = text(doc, "a", class, label)?;
    a.set_attribute("href", &format!("#{target}"))?;
    Ok(a)
}

/// Builds the whole page into `body`.
pub(crate) fn mount(doc: &Document, body: &HtmlElement) -> Result<Mounted, JsValue> {
    let style = element(doc, "style", "")?;
    style.set_text_content(Some(STYLE));
    body.append_child(&style)?;

    let nav = element(doc, "nav", "site-nav")?;
    nav.style().set_property("height", &format!("{NAV_HEIGHT_PX}px"))?;
    let mut nav_links = Vec::with_capacity(SECTIONS.len());
    for section in &SECTIONS {
        let a = link(doc, "", section.id, section.label)?;
        nav.append_child(&a)?;
        nav_links.push((String::from(section.id), a));
    }
    body.append_child(&nav)?;

    let main = element(doc, "main", "")?;
    let mut mounted = Mounted {
        nav_links,
        jump_links: Vec::new(),
        decorations: Vec::new(),
        floaters: Vec::new(),
        reveals: Vec::new(),
        contact: contact_form(doc)?,
    };
    for section in &SECTIONS {
        let el = section_element(doc, section, &mut mounted)?;
        main.append_child(&el)?;
    }
    body.append_child(&main)?;
    Ok(mounted)
}

fn section_element(doc: &Document, section: &Section, mounted: &mut Mounted) -> Result<HtmlElement, JsValue> {
    let el = element(doc, "section", "page-section")?;
    el.set_id(section.id);

    for deco in DECORATIONS.iter().filter(|d| d.section == section.id) {
        let deco_el = decoration(doc, deco, mounted)?;
        el.append_child(&deco_el)?;
    }

    let (tag, heading_id) = if section.id == "hero" {
        ("h1", String::from("hero-heading"))
    } else {
        ("h2", format!("{}-heading", section.id))
    };
    let heading = text(doc, tag, "", section.heading)?;
    heading.set_id(&heading_id);
    el.append_child(&heading)?;
    mounted.reveals.push(Reveal {
        id: heading_id,
        element: heading,
        delay_ms: 0.0,
    });
    let intro = text(doc, "p", "intro", section.intro)?;
    el.append_child(&intro)?;

    match section.id {
        "hero" => {
            for (target, label) in [("projects", "View projects"), ("contact", "Get in touch")] {
                let a = link(doc, "cta", target, label)?;
                el.append_child(&a)?;
                mounted.jump_links.push((String::from(target), a));
            }
        }
        "contact" => {
            el.append_child(&mounted.contact.form)?;
        }
        _ => {}
    }

    if !section.cards.is_empty() {
        let grid = element(doc, "div", "cards")?;
        let mut delay_ms = 0.0;
        for (i, card) in section.cards.iter().enumerate() {
            let article = element(doc, "article", "card")?;
            let id = format!("{}-card-{i}", section.id);
            article.set_id(&id);
            let title = text(doc, "h3", "", card.title)?;
            article.append_child(&title)?;
            let meta = text(doc, "p", "meta", card.meta)?;
            article.append_child(&meta)?;
            let body = text(doc, "p", "", card.body)?;
            article.append_child(&body)?;
            grid.append_child(&article)?;
            mounted.reveals.push(Reveal {
                id,
                element: article,
                delay_ms,
            });
            delay_ms += CARD_STAGGER_MS;
        }
        el.append_child(&grid)?;
    }
    Ok(el)
}

fn decoration(doc: &Document, deco: &Decoration, mounted: &mut Mounted) -> Result<HtmlElement, JsValue> {
    let wrapper = element(doc, "div", "decoration")?;
    wrapper.set_id(deco.id);
    let s = wrapper.style();
    s.set_property("width", &format!("{}px", deco.size))?;
    s.set_property("height", &format!("{}px", deco.size))?;
    s.set_property("left", &format!("{}%", deco.anchor.0))?;
    s.set_property("top", &format!("{}%", deco.anchor.1))?;

    let blob = element(doc, "div", "blob")?;
    let blob_id = format!("{}-float", deco.id);
    blob.set_id(&blob_id);
    blob.style().set_property("background", deco.color)?;
    wrapper.append_child(&blob)?;

    mounted.decorations.push((String::from(deco.id), wrapper.clone()));
    mounted.floaters.push((blob_id, blob));
    Ok(wrapper)
}

fn contact_form(doc: &Document) -> Result<ContactFields, JsValue> {
    let form: HtmlFormElement = element(doc, "form", "contact")?.unchecked_into();
    form.set_attribute("novalidate", "")?;

    let name: HtmlInputElement = element(doc, "input", "")?.unchecked_into();
    name.set_name("name");
    name.set_placeholder("Your name");

    let email: HtmlInputElement = element(doc, "input", "")?.unchecked_into();
    email.set_name("email");
    email.set_type("email");
    email.set_placeholder("you@example.com");

    let message: HtmlTextAreaElement = element(doc, "textarea", "")?.unchecked_into();
    message.set_name("message");
    message.set_rows(5);
    message.set_placeholder("What would you like to talk about?");

    let send = text(doc, "button", "cta", "Send")?;
    send.set_attribute("type", "submit")?;

    let status = element(doc, "p", "status")?;
    status.set_attribute("role", "status")?;

    form.append_child(&name)?;
    form.append_child(&email)?;
    form.append_child(&message)?;
    form.append_child(&send)?;
    form.append_child(&status)?;

    Ok(ContactFields {
        form,
        name,
        email,
        message,
        status,
    })
}
