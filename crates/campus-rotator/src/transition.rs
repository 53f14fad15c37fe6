//! Render operations for the hero fade and the dot indicators.

use campus_core::{RenderOp, Target};
use campus_model::Slide;

pub const HERO_FADE_TRANSITION: &str = "opacity 0.3s ease";

/// First phase of a swap: hide the current content.
pub fn fade_out() -> Vec<RenderOp> {
    vec![
        RenderOp::style(Target::HeroContent, "opacity", "0"),
        RenderOp::style(Target::HeroContent, "transition", HERO_FADE_TRANSITION),
    ]
}

/// Second phase of a swap: replace the content and show it again.
pub fn swap_in(slide: &Slide) -> Vec<RenderOp> {
    vec![
        RenderOp::text(Target::HeroTitle, slide.title.clone()),
        RenderOp::text(Target::HeroSubtitle, slide.subtitle.clone()),
        RenderOp::attribute(Target::HeroBackground, "src", slide.image.clone()),
        RenderOp::style(Target::HeroContent, "opacity", "1"),
    ]
}

/// Exactly one dot active.
pub fn indicators(current: usize, len: usize) -> Vec<RenderOp> {
    (0..len)
        .flat_map(|index| {
            let (opacity, scale) = if index == current {
                ("1", "scale(1.2)")
            } else {
                ("0.5", "scale(1)")
            };
            [
                RenderOp::style(Target::HeroDot(index), "opacity", opacity),
                RenderOp::style(Target::HeroDot(index), "transform", scale),
            ]
        })
        .collect()
}
