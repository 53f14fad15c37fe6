//! Live form state: edits, blur feedback, submit and draft save.
//!
//! Submission is local only. An accepted form is acknowledged and cleared;
//! a rejected form keeps its values and shows one message per failing field.

use std::collections::BTreeMap;

use campus_core::{RenderOp, Target};
use campus_model::{
    Acknowledgement, ApplicationStatus, FieldId, FieldValue, FormSnapshot, ValidationResult,
};
use serde::Serialize;

use crate::validator::FormValidator;

pub const SUBMITTED_MESSAGE: &str =
    "Your application was submitted successfully! You will receive a confirmation by email.";
pub const DRAFT_MESSAGE: &str = "Your draft was saved successfully.";
pub const REJECTED_MESSAGE: &str = "Please correct the errors in the form.";

const INVALID_CLASS: &str = "is-invalid";

/// Submit flow states. Between events the form is always `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitState {
    Idle,
    Validating,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Acknowledgement),
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

#[derive(Debug, Clone)]
pub struct FormSession {
    validator: FormValidator,
    values: FormSnapshot,
    displayed: BTreeMap<FieldId, String>,
    state: SubmitState,
    transitions: Vec<SubmitState>,
}

impl FormSession {
    pub fn new(validator: FormValidator) -> Self {
        Self {
            validator,
            values: FormSnapshot::new(),
            displayed: BTreeMap::new(),
            state: SubmitState::Idle,
            transitions: Vec::new(),
        }
    }

    pub fn values(&self) -> &FormSnapshot {
        &self.values
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// States entered during the most recent submit.
    pub fn last_transitions(&self) -> &[SubmitState] {
        &self.transitions
    }

    /// Error currently shown for `field`.
    pub fn displayed_error(&self, field: FieldId) -> Option<&str> {
        self.displayed.get(&field).map(String::as_str)
    }

    /// A value changed; any shown error for the field goes away.
    pub fn input(&mut self, field: FieldId, value: FieldValue) -> Vec<RenderOp> {
        self.values.set(field, value);
        self.clear_field_error(field)
    }

    /// Live feedback for one field.
    pub fn blur(&mut self, field: FieldId) -> Vec<RenderOp> {
        let value = self.values.value(field);
        match self.validator.validate_field(field, &value) {
            Some(message) => self.show_error(field, message),
            None => self.clear_field_error(field),
        }
    }

    pub fn clear_field_error(&mut self, field: FieldId) -> Vec<RenderOp> {
        if self.displayed.remove(&field).is_none() {
            return Vec::new();
        }
        vec![
            RenderOp::text(Target::FieldError(field), ""),
            RenderOp::SetVisible {
                target: Target::FieldError(field),
                visible: false,
            },
            RenderOp::RemoveClass {
                target: Target::FieldInput(field),
                class: INVALID_CLASS,
            },
        ]
    }

    pub fn submit(&mut self) -> (SubmitOutcome, Vec<RenderOp>) {
        self.transitions.clear();
        self.enter(SubmitState::Validating);
        let result = self.validator.validate(&self.values);

        let mut ops = Vec::new();
        let outcome = if result.pass {
            self.enter(SubmitState::Accepted);
            let acknowledgement = Acknowledgement {
                status: ApplicationStatus::Submitted,
                message: SUBMITTED_MESSAGE.to_string(),
                snapshot: self.values.clone(),
            };
            for field in FieldId::ALL {
                ops.extend(self.clear_field_error(field));
                ops.push(RenderOp::SetValue {
                    target: Target::FieldInput(field),
                    value: FieldValue::empty_for(field),
                });
            }
            self.values.clear();
            ops.extend(status_banner(SUBMITTED_MESSAGE, true));
            tracing::info!("application submitted");
            SubmitOutcome::Accepted(acknowledgement)
        } else {
            self.enter(SubmitState::Rejected);
            for (field, message) in &result.errors {
                match message {
                    Some(message) => ops.extend(self.show_error(*field, message.clone())),
                    None => ops.extend(self.clear_field_error(*field)),
                }
            }
            ops.extend(status_banner(REJECTED_MESSAGE, false));
            tracing::warn!(
                failing = ?result.failing_fields(),
                "application rejected by validation"
            );
            SubmitOutcome::Rejected(result)
        };

        self.enter(SubmitState::Idle);
        (outcome, ops)
    }

    /// Snapshot without validation.
    pub fn save_draft(&mut self) -> (Acknowledgement, Vec<RenderOp>) {
        let acknowledgement = Acknowledgement {
            status: ApplicationStatus::Draft,
            message: DRAFT_MESSAGE.to_string(),
            snapshot: self.values.clone(),
        };
        tracing::info!("draft saved");
        (acknowledgement, status_banner(DRAFT_MESSAGE, true))
    }

    fn show_error(&mut self, field: FieldId, message: String) -> Vec<RenderOp> {
        let ops = vec![
            RenderOp::text(Target::FieldError(field), message.clone()),
            RenderOp::SetVisible {
                target: Target::FieldError(field),
                visible: true,
            },
            RenderOp::AddClass {
                target: Target::FieldInput(field),
                class: INVALID_CLASS,
            },
        ];
        self.displayed.insert(field, message);
        ops
    }

    fn enter(&mut self, next: SubmitState) {
        tracing::debug!(from = ?self.state, to = ?next, "submit state");
        self.state = next;
        self.transitions.push(next);
    }
}

fn status_banner(message: &str, success: bool) -> Vec<RenderOp> {
    let (add, remove) = if success {
        ("alert-success", "alert-error")
    } else {
        ("alert-error", "alert-success")
    };
    vec![
        RenderOp::text(Target::FormStatus, message),
        RenderOp::RemoveClass {
            target: Target::FormStatus,
            class: remove,
        },
        RenderOp::AddClass {
            target: Target::FormStatus,
            class: add,
        },
        RenderOp::SetVisible {
            target: Target::FormStatus,
            visible: true,
        },
    ]
}
