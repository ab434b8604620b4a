// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page content and decoration layout.

use alloc::vec::Vec;

use scrollwork_core::parallax::{ParallaxLayer, ScrollBounds};
use scrollwork_core::section::SectionDescriptor;

/// One entry in a section's card grid.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Card {
    pub(crate) title: &'static str,
    pub(crate) meta: &'static str,
    pub(crate) body: &'static str,
}

/// A full-width page section.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Section {
    pub(crate) id: &'static str,
    /// Nav bar label.
    pub(crate) label: &'static str,
    pub(crate) heading: &'static str,
    pub(crate) intro: &'static str,
    pub(crate) cards: &'static [Card],
}

/// A blurred background shape that moves with the scroll position.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Decoration {
    pub(crate) id: &'static str,
    /// Section the shape is placed in.
    pub(crate) section: &'static str,
    pub(crate) speed: f64,
    pub(crate) horizontal: bool,
    /// Scroll window `(start, end)` in which the shape moves.
    pub(crate) window: Option<(f64, f64)>,
    /// Diameter in pixels.
    pub(crate) size: f64,
    pub(crate) color: &'static str,
    /// Offset from the section's top-left corner, in percent.
    pub(crate) anchor: (f64, f64),
}

pub(crate) const SECTIONS: [Section; 6] = [
    Section {
        id: "hero",
        label: "Home",
        heading: "Building fast, careful software for the web and beyond",
        intro: "Systems programmer and front-end engineer. I like small tools, \
                measurable performance and interfaces that get out of the way.",
        cards: &[],
    },
    Section {
        id: "education",
        label: "Education",
        heading: "Education",
        intro: "Formal training in computer science with a focus on graphics \
                and programming languages.",
        cards: &[
            Card {
                title: "M.Sc. Computer Science",
                meta: "2019 - 2021",
                body: "Thesis on incremental layout for retained-mode UI trees.",
            },
            Card {
                title: "B.Sc. Computer Science",
                meta: "2016 - 2019",
                body: "Compilers, operating systems and computer graphics.",
            },
        ],
    },
    Section {
        id: "experience",
        label: "Experience",
        heading: "Experience",
        intro: "Product teams and infrastructure groups, from prototypes to \
                services with millions of daily users.",
        cards: &[
            Card {
                title: "Senior Engineer, Rendering",
                meta: "2023 - present",
                body: "Owns the compositor integration and frame pacing of a \
                       cross-platform design tool.",
            },
            Card {
                title: "Software Engineer, Web Platform",
                meta: "2021 - 2023",
                body: "Cut time-to-interactive by 40% through code splitting and \
                       a WebAssembly text shaper.",
            },
            Card {
                title: "Engineering Intern",
                meta: "2020",
                body: "Built the internal tracing viewer used for frame-time \
                       regressions.",
            },
        ],
    },
    Section {
        id: "achievements",
        label: "Achievements",
        heading: "Achievements",
        intro: "A few things I am proud of.",
        cards: &[
            Card {
                title: "Open-source maintainer",
                meta: "Since 2020",
                body: "Co-maintains a 2D geometry library used by several GUI toolkits.",
            },
            Card {
                title: "Conference speaker",
                meta: "2024",
                body: "Talk on scroll-linked animation without layout thrashing.",
            },
        ],
    },
    Section {
        id: "projects",
        label: "Projects",
        heading: "Selected projects",
        intro: "Side projects that grew larger than planned.",
        cards: &[
            Card {
                title: "Tessera",
                meta: "Rust, wgpu",
                body: "A tile-based vector renderer with deterministic output \
                       across GPUs.",
            },
            Card {
                title: "Driftwood",
                meta: "Rust, WebAssembly",
                body: "A markdown editor that stays responsive on 100k-line documents.",
            },
            Card {
                title: "Lantern",
                meta: "TypeScript, Web Animations",
                body: "A motion design playground that exports reduced-motion \
                       fallbacks automatically.",
            },
        ],
    },
    Section {
        id: "contact",
        label: "Contact",
        heading: "Get in touch",
        intro: "Questions, collaborations or just a hello. I read everything.",
        cards: &[],
    },
];

pub(crate) const DECORATIONS: [Decoration; 5] = [
    Decoration {
        id: "orb-hero",
        section: "hero",
        speed: 0.4,
        horizontal: false,
        window: None,
        size: 420.0,
        color: "rgba(99, 102, 241, 0.45)",
        anchor: (62.0, 10.0),
    },
    Decoration {
        id: "orb-education",
        section: "education",
        speed: -0.25,
        horizontal: false,
        window: Some((0.0, 0.5)),
        size: 260.0,
        color: "rgba(236, 72, 153, 0.35)",
        anchor: (5.0, 30.0),
    },
    Decoration {
        id: "band-experience",
        section: "experience",
        speed: 0.6,
        horizontal: true,
        window: Some((0.2, 0.7)),
        size: 340.0,
        color: "rgba(45, 212, 191, 0.3)",
        anchor: (-10.0, 55.0),
    },
    Decoration {
        id: "orb-projects",
        section: "projects",
        speed: 0.3,
        horizontal: false,
        window: Some((0.5, 1.0)),
        size: 300.0,
        color: "rgba(251, 191, 36, 0.3)",
        anchor: (75.0, 40.0),
    },
    Decoration {
        id: "orb-contact",
        section: "contact",
        speed: -0.2,
        horizontal: false,
        window: Some((0.7, 1.0)),
        size: 360.0,
        color: "rgba(99, 102, 241, 0.35)",
        anchor: (20.0, 20.0),
    },
];

/// Section descriptors in layout order, for section detection.
pub(crate) fn section_descriptors() -> Vec<SectionDescriptor> {
    SECTIONS
        .iter()
        .map(|s| SectionDescriptor::new(s.id, s.label))
        .collect()
}

/// Parallax layers for every decoration.
pub(crate) fn parallax_layers() -> Vec<ParallaxLayer> {
    DECORATIONS
        .iter()
        .map(|d| {
            let layer = if d.horizontal {
                ParallaxLayer::horizontal(d.id, d.speed)
            } else {
                ParallaxLayer::vertical(d.id, d.speed)
            };
            match d.window.and_then(|(start, end)| ScrollBounds::new(start, end)) {
                Some(bounds) => layer.with_bounds(bounds),
                None => layer,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_in_page_order() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            ["hero", "education", "experience", "achievements", "projects", "contact"]
        );
        assert_eq!(section_descriptors()[5].label, "Contact");
    }

    #[test]
    fn decorations_belong_to_sections() {
        for d in &DECORATIONS {
            assert!(
                SECTIONS.iter().any(|s| s.id == d.section),
                "{} has no section",
                d.id
            );
        }
    }

    #[test]
    fn every_scroll_window_is_valid() {
        let layers = parallax_layers();
        assert_eq!(layers.len(), DECORATIONS.len());
        for (layer, d) in layers.iter().zip(&DECORATIONS) {
            assert_eq!(layer.bounds.is_some(), d.window.is_some(), "{}", d.id);
        }
    }

    #[test]
    fn element_ids_are_unique() {
        let mut ids: Vec<&str> = SECTIONS
            .iter()
            .map(|s| s.id)
            .chain(DECORATIONS.iter().map(|d| d.id))
            .collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
