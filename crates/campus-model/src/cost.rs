//! Tuition calculator inputs and derived figures.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Program cost per term.
    pub base_cost: f64,
    /// Scholarship coverage, 0 to 100.
    pub scholarship_percent: f64,
}

impl CostInputs {
    pub fn new(base_cost: f64, scholarship_percent: f64) -> Self {
        Self {
            base_cost,
            scholarship_percent,
        }
    }

    /// Parse raw input text. Anything that is not a finite number reads as zero.
    pub fn from_raw(base_cost: &str, scholarship_percent: &str) -> Self {
        Self::new(parse_amount(base_cost), parse_amount(scholarship_percent))
    }
}

/// Lenient numeric parse: surrounding whitespace, thousands separators
/// and a decimal comma are accepted; anything else is zero.
///
/// Without a decimal point, commas are read as thousands separators when
/// they split the digits into groups of three (`1,234,567`), and as a
/// decimal comma otherwise (`12,5`).
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();
    let normalized = if cleaned.contains('.') || is_grouped(&cleaned) {
        cleaned.replace(',', "")
    } else {
        cleaned.replace(',', ".")
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

fn is_grouped(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mut groups = digits.split(',');
    let Some(lead) = groups.next() else {
        return false;
    };
    let all_digits = |group: &str| group.chars().all(|c| c.is_ascii_digit());
    let mut rest = groups.peekable();
    rest.peek().is_some()
        && (1..=3).contains(&lead.len())
        && all_digits(lead)
        && rest.all(|group| group.len() == 3 && all_digits(group))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostResult {
    pub annual_tuition: f64,
    pub scholarship_reduction: f64,
    pub registration_fee: f64,
    pub materials_fee: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_input_is_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn separators_are_tolerated() {
        assert_eq!(parse_amount(" 10000 "), 10_000.0);
        assert_eq!(parse_amount("10 000"), 10_000.0);
        assert_eq!(parse_amount("12,5"), 12.5);
        assert_eq!(parse_amount("10,000.50"), 10_000.5);
        assert_eq!(parse_amount("10,000"), 10_000.0);
        assert_eq!(parse_amount("1,234,567"), 1_234_567.0);
        assert_eq!(parse_amount("-2,500"), -2_500.0);
    }

    #[test]
    fn misplaced_commas_are_not_grouping() {
        assert_eq!(parse_amount("1,23"), 1.23);
        assert_eq!(parse_amount("1234,567"), 1234.567);
        assert_eq!(parse_amount("1,234,56"), 0.0);
    }
}
