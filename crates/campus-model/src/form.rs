//! Admission form data: field identifiers, snapshots and validation results.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fields of the admission form. Serialized as their element ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "phone")]
    Phone,
    #[serde(rename = "program")]
    Program,
    #[serde(rename = "motivation")]
    Motivation,
    #[serde(rename = "terms")]
    Terms,
}

impl FieldId {
    /// Every field, in form order.
    pub const ALL: [FieldId; 7] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Program,
        FieldId::Motivation,
        FieldId::Terms,
    ];

    /// Element id of the input.
    #[must_use]
    pub const fn dom_id(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Program => "program",
            Self::Motivation => "motivation",
            Self::Terms => "terms",
        }
    }

    /// Human-readable label used in messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Program => "Program",
            Self::Motivation => "Motivation letter",
            Self::Terms => "Admission conditions",
        }
    }

    /// Whether the field is a checkbox rather than a text input.
    #[must_use]
    pub const fn is_checkbox(&self) -> bool {
        matches!(self, Self::Terms)
    }

    /// Look a field up by element id.
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.dom_id() == id)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Raw value of a field: text for inputs, a flag for checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Empty value appropriate for `field`.
    pub fn empty_for(field: FieldId) -> Self {
        if field.is_checkbox() {
            Self::Checked(false)
        } else {
            Self::Text(String::new())
        }
    }

    /// Text content; checkboxes read as an empty string.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Checked(_) => "",
        }
    }

    /// Checked state; text reads as checked when it is a truthy literal.
    pub fn is_checked(&self) -> bool {
        match self {
            Self::Checked(checked) => *checked,
            Self::Text(text) => matches!(text.trim(), "true" | "on" | "1"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Checked(value)
    }
}

/// Current values of the form. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    values: BTreeMap<FieldId, FieldValue>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: FieldId, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<FieldValue>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: FieldId) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    /// Value of `field`, or the field's empty value.
    pub fn value(&self, field: FieldId) -> FieldValue {
        self.values
            .get(&field)
            .cloned()
            .unwrap_or_else(|| FieldValue::empty_for(field))
    }

    /// Number of fields that have been set, blank or not.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Reset every field to its empty value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|value| match value {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Checked(checked) => !checked,
        })
    }
}

/// Outcome of one validation pass.
///
/// Every field appears in `errors`; `None` means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub pass: bool,
    pub errors: BTreeMap<FieldId, Option<String>>,
}

impl ValidationResult {
    /// Build a result from per-field messages; `pass` is derived.
    pub fn from_errors(errors: BTreeMap<FieldId, Option<String>>) -> Self {
        let pass = errors.values().all(Option::is_none);
        Self { pass, errors }
    }

    pub fn error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).and_then(|message| message.as_deref())
    }

    /// Fields with a message, in form order.
    pub fn failing_fields(&self) -> Vec<FieldId> {
        self.errors
            .iter()
            .filter(|(_, message)| message.is_some())
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().filter(|message| message.is_some()).count()
    }
}

/// Lifecycle status of an application as acknowledged by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
}

impl ApplicationStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
        }
    }
}

/// Local acknowledgement of a draft save or an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub status: ApplicationStatus,
    pub message: String,
    pub snapshot: FormSnapshot,
}
