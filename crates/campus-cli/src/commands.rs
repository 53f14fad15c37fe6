use std::path::Path;

use anyhow::{Context, Result};
use campus_core::{Clock, FixedClock, RecordingSurface, RenderEntry, SystemClock};
use campus_model::{CostInputs, CostResult, FormSnapshot, SiteConfig, Slide, ValidationResult};
use campus_page::{Page, PageLayout, ScheduledEvent, calculate, days_remaining};
use campus_validate::FormValidator;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::cli::{CostArgs, CountdownArgs, SimulateArgs, ValidateArgs};

/// Load and check the site configuration.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let config = SiteConfig::load_or_default(path).with_context(|| match path {
        Some(path) => format!("load configuration {}", path.display()),
        None => "load default configuration".to_string(),
    })?;
    config.validate().context("invalid site configuration")?;
    Ok(config)
}

/// The fixed instant when given, the local clock otherwise.
pub fn clock_for(now: Option<NaiveDateTime>) -> Box<dyn Clock> {
    match now {
        Some(now) => Box::new(FixedClock(now)),
        None => Box::new(SystemClock),
    }
}

#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub snapshot: FormSnapshot,
    pub result: ValidationResult,
}

pub fn run_validate(config: &SiteConfig, args: &ValidateArgs) -> Result<ValidateReport> {
    let span = info_span!("validate", form = %args.form.display());
    let _guard = span.enter();
    let contents = std::fs::read_to_string(&args.form)
        .with_context(|| format!("read form snapshot {}", args.form.display()))?;
    let snapshot: FormSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("parse form snapshot {}", args.form.display()))?;
    let validator = FormValidator::admission(config).context("compile field rules")?;
    let result = validator.validate(&snapshot);
    info!(
        pass = result.pass,
        errors = result.error_count(),
        "form validated"
    );
    Ok(ValidateReport { snapshot, result })
}

pub fn run_cost(config: &SiteConfig, args: &CostArgs) -> CostResult {
    let inputs = CostInputs::from_raw(&args.base, &args.scholarship);
    debug!(
        base_cost = inputs.base_cost,
        scholarship_percent = inputs.scholarship_percent,
        "cost inputs"
    );
    calculate(inputs, config.registration_fee, config.materials_fee)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownReport {
    pub deadline: NaiveDateTime,
    pub now: NaiveDateTime,
    pub days: u64,
}

pub fn run_countdown(
    config: &SiteConfig,
    args: &CountdownArgs,
    clock: &dyn Clock,
) -> CountdownReport {
    let deadline = args.deadline.unwrap_or(config.countdown_deadline);
    let now = args.now.unwrap_or_else(|| clock.now());
    CountdownReport {
        deadline,
        now,
        days: days_remaining(deadline, now),
    }
}

pub fn run_slides(config: &SiteConfig) -> Vec<Slide> {
    config.resolved_slides()
}

/// A scripted event the page refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEvent {
    pub at_ms: u64,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub duration_ms: u64,
    pub final_slide: usize,
    pub rejected: Vec<RejectedEvent>,
    pub log: Vec<RenderEntry>,
}

pub fn run_simulate(
    config: &SiteConfig,
    args: &SimulateArgs,
    clock: &dyn Clock,
) -> Result<SimulationReport> {
    let span = info_span!("simulate", duration_ms = args.duration_ms);
    let _guard = span.enter();

    let script = match &args.script {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };
    let layout = PageLayout {
        articles: args.articles,
        reveal_ids: args.reveal.clone(),
    };

    let mut page =
        Page::new(config.clone(), RecordingSurface::new(), clock).context("build page")?;
    page.mount(&layout);
    let results = page.play(&script, args.duration_ms);

    let rejected = results
        .into_iter()
        .filter_map(|(at_ms, result)| {
            result.err().map(|error| RejectedEvent {
                at_ms,
                error: error.to_string(),
            })
        })
        .collect();
    let final_slide = page.carousel().rotator().current_index();
    info!(events = script.len(), final_slide, "simulation finished");
    Ok(SimulationReport {
        duration_ms: args.duration_ms,
        final_slide,
        rejected,
        log: page.into_surface().drain_log(),
    })
}

fn load_script(path: &Path) -> Result<Vec<ScheduledEvent>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read event script {}", path.display()))?;
    let script: Vec<ScheduledEvent> = serde_json::from_str(&contents)
        .with_context(|| format!("parse event script {}", path.display()))?;
    debug!(events = script.len(), "event script loaded");
    Ok(script)
}
