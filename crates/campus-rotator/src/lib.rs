//! Hero carousel: a cyclic slide cursor plus the controller that animates
//! it on the page scheduler.

mod carousel;
mod rotator;
pub mod transition;

pub use carousel::{CarouselOptions, CarouselTask, HeroCarousel, required_targets};
pub use rotator::{ChangeCause, SlideChange, SlideRotator};
