//! Admission form validation.
//!
//! Rules are declared per field in a [`RuleSet`]; [`FormValidator`] applies
//! them to snapshots and [`FormSession`] wraps the validator with the live
//! edit, blur and submit behavior of the page.

mod rules;
mod session;
mod validator;

pub use rules::{FieldRule, RuleSet};
pub use session::{
    DRAFT_MESSAGE, FormSession, REJECTED_MESSAGE, SUBMITTED_MESSAGE, SubmitOutcome, SubmitState,
};
pub use validator::FormValidator;
