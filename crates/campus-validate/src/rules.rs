//! Field rules and the per-field rule table.
//!
//! | Field | Rules |
//! |-------|-------|
//! | firstName, lastName, program | Required |
//! | email | Required, email pattern |
//! | phone | Required, phone pattern |
//! | motivation | Required, minimum length |
//! | terms | Must be checked |

use std::collections::BTreeMap;

use campus_model::{ConfigError, FieldId, FieldValue, SiteConfig};
use regex::Regex;

/// A single validation predicate attached to a field.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Non-empty after trimming whitespace.
    Required,
    /// Trimmed value matches `regex`.
    Pattern { regex: Regex, message: String },
    /// Trimmed value has at least `min` characters.
    MinLength { min: usize },
    /// Checkbox is checked.
    MustBeChecked,
}

impl FieldRule {
    /// Apply the rule; `Some(message)` on failure.
    pub fn check(&self, field: FieldId, value: &FieldValue) -> Option<String> {
        match self {
            Self::Required => {
                let empty = match value {
                    FieldValue::Text(text) => text.trim().is_empty(),
                    FieldValue::Checked(checked) => !checked,
                };
                empty.then(|| format!("{} is required.", field.label()))
            }
            Self::Pattern { regex, message } => {
                (!regex.is_match(value.as_text().trim())).then(|| message.clone())
            }
            Self::MinLength { min } => {
                let length = value.as_text().trim().chars().count();
                (length < *min).then(|| {
                    format!(
                        "{} must be at least {min} characters ({length} entered).",
                        field.label()
                    )
                })
            }
            Self::MustBeChecked => (!value.is_checked())
                .then(|| "You must accept the admission conditions.".to_string()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Pattern { .. } => "pattern",
            Self::MinLength { .. } => "min_length",
            Self::MustBeChecked => "must_be_checked",
        }
    }
}

/// Ordered rules for every field.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<FieldId, Vec<FieldRule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to `field`.
    #[must_use]
    pub fn with_rule(mut self, field: FieldId, rule: FieldRule) -> Self {
        self.rules.entry(field).or_default().push(rule);
        self
    }

    /// The admission form rule table built from configuration.
    pub fn admission(config: &SiteConfig) -> Result<Self, ConfigError> {
        let email = compile(FieldId::Email, &config.email_pattern)?;
        let phone = compile(FieldId::Phone, &config.phone_pattern)?;

        let mut set = Self::new();
        for field in [
            FieldId::FirstName,
            FieldId::LastName,
            FieldId::Email,
            FieldId::Phone,
            FieldId::Program,
            FieldId::Motivation,
        ] {
            set = set.with_rule(field, FieldRule::Required);
        }
        Ok(set
            .with_rule(
                FieldId::Email,
                FieldRule::Pattern {
                    regex: email,
                    message: "Please enter a valid email address.".to_string(),
                },
            )
            .with_rule(
                FieldId::Phone,
                FieldRule::Pattern {
                    regex: phone,
                    message: "Invalid phone number. Format: +509XXXXXXXX".to_string(),
                },
            )
            .with_rule(
                FieldId::Motivation,
                FieldRule::MinLength {
                    min: config.min_motivation_length,
                },
            )
            .with_rule(FieldId::Terms, FieldRule::MustBeChecked))
    }

    pub fn rules_for(&self, field: FieldId) -> &[FieldRule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fields that carry at least one rule.
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.rules.keys().copied()
    }
}

fn compile(field: FieldId, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|error| ConfigError::InvalidPattern {
        field: field.dom_id().to_string(),
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_whitespace() {
        let rule = FieldRule::Required;
        assert!(rule.check(FieldId::FirstName, &"   ".into()).is_some());
        assert!(rule.check(FieldId::FirstName, &" Jean ".into()).is_none());
    }

    #[test]
    fn min_length_counts_characters() {
        let rule = FieldRule::MinLength { min: 3 };
        assert!(rule.check(FieldId::Motivation, &"été".into()).is_none());
        assert_eq!(
            rule.check(FieldId::Motivation, &"ab".into()).as_deref(),
            Some("Motivation letter must be at least 3 characters (2 entered).")
        );
    }

    #[test]
    fn must_be_checked() {
        let rule = FieldRule::MustBeChecked;
        assert!(rule.check(FieldId::Terms, &true.into()).is_none());
        assert!(rule.check(FieldId::Terms, &false.into()).is_some());
    }

    #[test]
    fn invalid_pattern_is_config_error() {
        let config = SiteConfig {
            phone_pattern: "^(509".to_string(),
            ..SiteConfig::default()
        };
        let err = RuleSet::admission(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref field, .. } if field == "phone"));
    }

    #[test]
    fn admission_table_shape() {
        let set = RuleSet::admission(&SiteConfig::default()).unwrap();
        let names = |field| {
            set.rules_for(field)
                .iter()
                .map(FieldRule::name)
                .collect::<Vec<_>>()
        };
        assert_eq!(names(FieldId::Email), vec!["required", "pattern"]);
        assert_eq!(names(FieldId::Motivation), vec!["required", "min_length"]);
        assert_eq!(names(FieldId::Terms), vec!["must_be_checked"]);
        assert_eq!(set.fields().count(), 7);
    }
}
