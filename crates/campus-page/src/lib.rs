//! Page-level behavior of the campus site.
//!
//! [`Page`] owns the hero carousel, the admission form, the cost
//! calculator, the countdown, the department tabs, the scroll reveal and the
//! off-canvas menu. Hosts feed it [`InputEvent`]s and advance its virtual
//! clock; it answers with render operations on the surface it was given.

pub mod articles;
pub mod calculator;
pub mod confirm;
pub mod countdown;
pub mod date;
mod event;
pub mod menu;
mod page;
pub mod reveal;
pub mod tabs;

pub use calculator::{CostCalculator, calculate, format_amount};
pub use confirm::{FixedAnswer, Prompt};
pub use countdown::{Countdown, days_remaining};
pub use event::{EventOutcome, InputEvent, PageTask, ScheduledEvent};
pub use menu::OffcanvasMenu;
pub use page::{Page, PageLayout};
pub use reveal::{ElementBounds, ScrollEntry, ScrollReveal, visible_ratio};
pub use tabs::TabSet;
