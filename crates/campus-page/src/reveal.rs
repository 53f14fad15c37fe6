//! Scroll-triggered fade-in.
//!
//! Elements start hidden and slide up into view once enough of them is
//! inside the viewport. The viewport's bottom edge is pulled in by the root
//! margin so elements reveal slightly after they appear. Reveal is one-way.

use std::collections::BTreeMap;

use campus_core::{RenderOp, Target};
use campus_model::SiteConfig;
use serde::{Deserialize, Serialize};

/// Element position relative to the top of the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

impl ElementBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Where an observed element currently sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollEntry {
    pub id: String,
    #[serde(flatten)]
    pub bounds: ElementBounds,
}

impl ScrollEntry {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            bounds: ElementBounds::new(top, height),
        }
    }
}

/// Share of `bounds` visible in a viewport of `viewport_height` whose
/// bottom edge is shrunk by `root_margin`.
pub fn visible_ratio(bounds: ElementBounds, viewport_height: f64, root_margin: f64) -> f64 {
    let bottom_edge = (viewport_height - root_margin).max(0.0);
    let top = bounds.top.max(0.0);
    let bottom = (bounds.top + bounds.height).min(bottom_edge);
    if bounds.height <= 0.0 {
        return if (0.0..bottom_edge).contains(&bounds.top) { 1.0 } else { 0.0 };
    }
    ((bottom - top).max(0.0) / bounds.height).min(1.0)
}

#[derive(Debug, Clone)]
pub struct ScrollReveal {
    threshold: f64,
    root_margin: f64,
    revealed: BTreeMap<String, bool>,
}

impl ScrollReveal {
    pub fn new(threshold: f64, root_margin: f64) -> Self {
        Self {
            threshold,
            root_margin,
            revealed: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.reveal_threshold, config.reveal_root_margin)
    }

    /// Start observing `ids`; they are hidden until revealed.
    pub fn observe<I, S>(&mut self, ids: I) -> Vec<RenderOp>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ops = Vec::new();
        for id in ids {
            let id = id.into();
            if self.revealed.contains_key(&id) {
                continue;
            }
            let target = Target::Reveal(id.clone());
            ops.push(RenderOp::style(target.clone(), "opacity", "0"));
            ops.push(RenderOp::style(target.clone(), "transform", "translateY(20px)"));
            ops.push(RenderOp::style(target, "transition", "all 0.6s ease"));
            self.revealed.insert(id, false);
        }
        ops
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.get(id).copied().unwrap_or(false)
    }

    /// Reveal every observed element that crossed the threshold.
    pub fn on_scroll(&mut self, viewport_height: f64, elements: &[ScrollEntry]) -> Vec<RenderOp> {
        let mut ops = Vec::new();
        for ScrollEntry { id, bounds } in elements {
            let Some(revealed) = self.revealed.get_mut(id) else {
                continue;
            };
            if *revealed {
                continue;
            }
            let ratio = visible_ratio(*bounds, viewport_height, self.root_margin);
            if ratio > 0.0 && ratio >= self.threshold {
                *revealed = true;
                tracing::trace!(element = %id, ratio, "element revealed");
                let target = Target::Reveal(id.clone());
                ops.push(RenderOp::style(target.clone(), "opacity", "1"));
                ops.push(RenderOp::style(target.clone(), "transform", "translateY(0)"));
                ops.push(RenderOp::AddClass {
                    target,
                    class: "visible",
                });
            }
        }
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_respects_root_margin() {
        // Viewport 800, margin 50: effective bottom edge 750.
        assert_eq!(visible_ratio(ElementBounds::new(700.0, 100.0), 800.0, 50.0), 0.5);
        assert_eq!(visible_ratio(ElementBounds::new(760.0, 100.0), 800.0, 50.0), 0.0);
        assert_eq!(visible_ratio(ElementBounds::new(-50.0, 100.0), 800.0, 50.0), 0.5);
        assert_eq!(visible_ratio(ElementBounds::new(100.0, 100.0), 800.0, 50.0), 1.0);
    }

    #[test]
    fn reveal_needs_threshold() {
        let mut reveal = ScrollReveal::new(0.1, 50.0);
        reveal.observe(["stats", "careers"]);

        let ops = reveal.on_scroll(
            800.0,
            &[
                ScrollEntry::new("stats", 745.0, 100.0),
                ScrollEntry::new("careers", 600.0, 100.0),
            ],
        );
        assert!(!reveal.is_revealed("stats"));
        assert!(reveal.is_revealed("careers"));
        assert_eq!(ops.len(), 3);
    }

    #[test]
    fn reveal_is_one_way() {
        let mut reveal = ScrollReveal::new(0.1, 50.0);
        reveal.observe(["stats"]);
        let visible = [ScrollEntry::new("stats", 100.0, 100.0)];
        assert_eq!(reveal.on_scroll(800.0, &visible).len(), 3);
        assert!(reveal.on_scroll(800.0, &visible).is_empty());
        let hidden = [ScrollEntry::new("stats", 2_000.0, 100.0)];
        assert!(reveal.on_scroll(800.0, &hidden).is_empty());
        assert!(reveal.is_revealed("stats"));
    }

    #[test]
    fn unobserved_elements_are_ignored() {
        let mut reveal = ScrollReveal::new(0.1, 50.0);
        let ops = reveal.on_scroll(800.0, &[ScrollEntry::new("other", 0.0, 10.0)]);
        assert!(ops.is_empty());
    }
}
