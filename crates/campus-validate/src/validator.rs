//! Full-form and single-field validation.

use std::collections::BTreeMap;

use campus_model::{ConfigError, FieldId, FieldValue, FormSnapshot, SiteConfig, ValidationResult};

use crate::rules::RuleSet;

/// Evaluates a [`RuleSet`] against form values.
#[derive(Debug, Clone)]
pub struct FormValidator {
    rules: RuleSet,
}

impl FormValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validator for the admission form.
    pub fn admission(config: &SiteConfig) -> Result<Self, ConfigError> {
        RuleSet::admission(config).map(Self::new)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Check every field. A field reports the message of its first failing
    /// rule; all fields are checked regardless of earlier failures.
    pub fn validate(&self, snapshot: &FormSnapshot) -> ValidationResult {
        let errors: BTreeMap<FieldId, Option<String>> = self
            .rules
            .fields()
            .map(|field| (field, self.validate_field(field, &snapshot.value(field))))
            .collect();
        let result = ValidationResult::from_errors(errors);
        tracing::debug!(
            pass = result.pass,
            errors = result.error_count(),
            "form validated"
        );
        result
    }

    /// Check one field only.
    pub fn validate_field(&self, field: FieldId, value: &FieldValue) -> Option<String> {
        self.rules
            .rules_for(field)
            .iter()
            .find_map(|rule| rule.check(field, value))
    }
}
