//! Shared data model for the campus site engine.

pub mod config;
pub mod cost;
pub mod error;
pub mod form;
pub mod slide;

pub use config::{ManualNavigation, STATIC_BASE_ENV, SiteConfig, parse_instant};
pub use cost::{CostInputs, CostResult, parse_amount};
pub use error::{CampusError, ConfigError, Result};
pub use form::{
    Acknowledgement, ApplicationStatus, FieldId, FieldValue, FormSnapshot, ValidationResult,
};
pub use slide::{Slide, SlideSpec};
