//! Tuition cost calculator.

use campus_core::{CostFigure, RenderOp, Target};
use campus_model::{CostInputs, CostResult, SiteConfig};

/// Compute the yearly cost figures.
///
/// Two terms per year; the scholarship applies to tuition only, and the
/// registration and materials fees are always added in full. Scholarship
/// percent is clamped to `[0, 100]` and negative base costs count as zero.
pub fn calculate(inputs: CostInputs, registration_fee: f64, materials_fee: f64) -> CostResult {
    let base = inputs.base_cost.max(0.0);
    let percent = inputs.scholarship_percent.clamp(0.0, 100.0);
    let annual_tuition = base * 2.0;
    let scholarship_reduction = annual_tuition * percent / 100.0;
    CostResult {
        annual_tuition,
        scholarship_reduction,
        registration_fee,
        materials_fee,
        total: annual_tuition - scholarship_reduction + registration_fee + materials_fee,
    }
}

/// Render an amount with comma thousands separators; cents only when present.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction:02}")
    }
}

#[derive(Debug, Clone)]
pub struct CostCalculator {
    registration_fee: f64,
    materials_fee: f64,
    inputs: CostInputs,
}

impl CostCalculator {
    pub fn new(registration_fee: f64, materials_fee: f64) -> Self {
        Self {
            registration_fee,
            materials_fee,
            inputs: CostInputs::default(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.registration_fee, config.materials_fee)
    }

    pub fn inputs(&self) -> CostInputs {
        self.inputs
    }

    pub fn result(&self) -> CostResult {
        calculate(self.inputs, self.registration_fee, self.materials_fee)
    }

    /// Take raw input text and re-render every figure.
    pub fn update(
        &mut self,
        base_cost: &str,
        scholarship_percent: &str,
    ) -> (CostResult, Vec<RenderOp>) {
        self.inputs = CostInputs::from_raw(base_cost, scholarship_percent);
        let result = self.result();
        tracing::debug!(
            base_cost = self.inputs.base_cost,
            scholarship_percent = self.inputs.scholarship_percent,
            total = result.total,
            "cost recomputed"
        );
        (result, render(&result))
    }
}

/// Operations writing all five figures.
pub fn render(result: &CostResult) -> Vec<RenderOp> {
    CostFigure::ALL
        .into_iter()
        .map(|figure| {
            let amount = match figure {
                CostFigure::AnnualTuition => result.annual_tuition,
                CostFigure::ScholarshipReduction => result.scholarship_reduction,
                CostFigure::RegistrationFee => result.registration_fee,
                CostFigure::MaterialsFee => result.materials_fee,
                CostFigure::Total => result.total,
            };
            RenderOp::text(Target::Cost(figure), format_amount(amount))
        })
        .collect()
}
