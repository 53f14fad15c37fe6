//! Staggered fade-in of the news articles.

use campus_core::{RenderOp, Target};

/// Delay before article `index` appears.
pub fn reveal_delay_ms(index: usize, stagger_ms: u64) -> u64 {
    stagger_ms.saturating_mul(index as u64)
}

pub fn reveal(index: usize) -> Vec<RenderOp> {
    vec![RenderOp::style(Target::Article(index), "opacity", "1")]
}
