//! Runtime pieces shared by the campus components: the cooperative timer
//! queue, the render vocabulary and the clock.

pub mod clock;
pub mod render;
pub mod scheduler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use render::{
    CostFigure, RecordingSurface, RenderEntry, RenderOp, RenderSurface, Target, apply_all,
};
pub use scheduler::{Fired, Scheduler, TimerId};
