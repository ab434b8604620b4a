// Copyright 2026 the Scrollwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Current-section detection.
//!
//! Each candidate section is scored by how much of it is on screen, minus a
//! penalty for how far its center sits from the viewport center:
//!
//! ```text
//! score = visible_height - 0.5 * |section_mid - viewport_mid|
//! ```
//!
//! The highest score wins. Candidates are scanned in page order and a later
//! candidate replaces the current best only if it beats it by more than
//! [`SCORE_TIE_TOLERANCE`], so exact and near-exact ties resolve to the
//! section that comes first.

use alloc::string::String;
use kurbo::Rect;

use crate::backend::SectionLayout;

/// Weight of the center-distance penalty.
pub const CENTER_PENALTY: f64 = 0.5;

/// Score differences at or below this many pixels count as a tie.
pub const SCORE_TIE_TOLERANCE: f64 = 1e-6;

/// A navigable page section.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionDescriptor {
    /// Element id of the section.
    pub id: String,
    /// Human-readable label, e.g. for the navigation bar.
    pub label: String,
}

impl SectionDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl AsRef<str> for SectionDescriptor {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

/// Vertical overlap between `section` and `viewport`, never negative.
#[must_use]
pub fn visible_height(section: Rect, viewport: Rect) -> f64 {
    let top = section.y0.max(viewport.y0);
    let bottom = section.y1.min(viewport.y1);
    (bottom - top).max(0.0)
}

/// Scores one section against the viewport.
#[must_use]
pub fn section_score(section: Rect, viewport: Rect) -> f64 {
    let distance = (section.center().y - viewport.center().y).abs();
    visible_height(section, viewport) - CENTER_PENALTY * distance
}

/// Picks the section that best occupies the viewport.
///
/// - Ids without a rendered element are skipped.
/// - An empty list yields `None`.
/// - If none of the ids are rendered, or there is no viewport, the first id
///   is returned.
#[must_use]
pub fn detect_current_section<'a, S, L>(ids: &'a [S], layout: &L) -> Option<&'a str>
where
    S: AsRef<str>,
    L: SectionLayout + ?Sized,
{
    let first = ids.first()?.as_ref();
    let Some(viewport) = layout.viewport() else {
        return Some(first);
    };

    let mut best: Option<(&'a str, f64)> = None;
    for id in ids {
        let id = id.as_ref();
        let Some(bounds) = layout.bounds(id) else {
            continue;
        };
        let score = section_score(bounds, viewport);
        match best {
            Some((_, best_score)) if score <= best_score + SCORE_TIE_TOLERANCE => {}
            _ => best = Some((id, score)),
        }
    }
    Some(best.map_or(first, |(id, _)| id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    struct Page {
        viewport: Option<Rect>,
        sections: Vec<(&'static str, Rect)>,
    }

    impl SectionLayout for Page {
        fn viewport(&self) -> Option<Rect> {
            self.viewport
        }
        fn bounds(&self, id: &str) -> Option<Rect> {
            self.sections.iter().find(|(s, _)| *s == id).map(|(_, r)| *r)
        }
    }

    fn section(top: f64, height: f64) -> Rect {
        Rect::new(0.0, top, 1200.0, top + height)
    }

    fn page(sections: Vec<(&'static str, Rect)>) -> Page {
        Page {
            viewport: Some(Rect::new(0.0, 0.0, 1200.0, 800.0)),
            sections,
        }
    }

    #[test]
    fn larger_overlap_closer_to_center_wins() {
        let p = page(Vec::from([
            ("hero", section(-600.0, 800.0)),
            ("education", section(200.0, 800.0)),
        ]));
        // hero: 200 - 0.5 * 600 = -100; education: 600 - 0.5 * 200 = 500.
        assert_eq!(section_score(section(-600.0, 800.0), p.viewport.unwrap()), -100.0);
        assert_eq!(section_score(section(200.0, 800.0), p.viewport.unwrap()), 500.0);
        assert_eq!(detect_current_section(&["hero", "education"], &p), Some("education"));
    }

    #[test]
    fn empty_list_is_none() {
        let p = page(Vec::new());
        let ids: [&str; 0] = [];
        assert_eq!(detect_current_section(&ids, &p), None);
    }

    #[test]
    fn all_missing_falls_back_to_first() {
        let p = page(Vec::new());
        assert_eq!(detect_current_section(&["hero", "contact"], &p), Some("hero"));
    }

    #[test]
    fn missing_ids_are_skipped_not_scored_zero() {
        // The only rendered section scores negative; a missing id scored as 0
        // would wrongly beat it.
        let p = page(Vec::from([("contact", section(900.0, 400.0))]));
        assert!(section_score(section(900.0, 400.0), p.viewport.unwrap()) < 0.0);
        assert_eq!(detect_current_section(&["hero", "contact"], &p), Some("contact"));
    }

    #[test]
    fn ties_resolve_to_earliest() {
        // Mirror-image sections around the viewport center score the same.
        let p = page(Vec::from([
            ("a", section(-200.0, 600.0)),
            ("b", section(400.0, 600.0)),
        ]));
        assert_eq!(detect_current_section(&["a", "b"], &p), Some("a"));
        assert_eq!(detect_current_section(&["b", "a"], &p), Some("b"));
    }

    #[test]
    fn no_viewport_falls_back_to_first() {
        let p = Page {
            viewport: None,
            sections: Vec::from([("b", section(0.0, 800.0))]),
        };
        assert_eq!(detect_current_section(&["a", "b"], &p), Some("a"));
    }

    #[test]
    fn accepts_owned_ids() {
        let p = page(Vec::from([("projects", section(0.0, 800.0))]));
        let ids = [String::from("projects")];
        assert_eq!(detect_current_section(&ids, &p), Some("projects"));
    }

    #[test]
    fn visible_height_is_clamped() {
        let vp = Rect::new(0.0, 0.0, 100.0, 800.0);
        assert_eq!(visible_height(section(900.0, 100.0), vp), 0.0);
        assert_eq!(visible_height(section(-50.0, 100.0), vp), 50.0);
        assert_eq!(visible_height(section(-100.0, 2000.0), vp), 800.0);
    }
}
