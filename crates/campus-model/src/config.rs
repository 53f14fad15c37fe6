//! Site configuration.
//!
//! Every key is optional in the JSON file; missing keys fall back to the
//! defaults below. The static asset base can be overridden from the
//! environment with [`STATIC_BASE_ENV`].

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::slide::{Slide, SlideSpec};

/// Environment variable holding the static asset base.
pub const STATIC_BASE_ENV: &str = "CAMPUS_STATIC_BASE";

pub const DEFAULT_STATIC_BASE: &str = "/static/";
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;
pub const DEFAULT_TRANSITION_MS: u64 = 300;
pub const DEFAULT_COUNTDOWN_DEADLINE: &str = "2026-03-15T23:59:59";
pub const DEFAULT_COUNTDOWN_REFRESH_MS: u64 = 3_600_000;
pub const DEFAULT_MIN_MOTIVATION_LENGTH: usize = 100;
pub const DEFAULT_PHONE_PATTERN: &str = r"^\+?509[0-9]{8}$";
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const DEFAULT_REGISTRATION_FEE: f64 = 2_500.0;
pub const DEFAULT_MATERIALS_FEE: f64 = 3_000.0;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: f64 = 50.0;
pub const DEFAULT_DESKTOP_BREAKPOINT: u32 = 992;
pub const DEFAULT_ARTICLE_STAGGER_MS: u64 = 200;

/// What a manual slide change does to the autoplay timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualNavigation {
    /// Autoplay keeps firing on its original schedule.
    #[default]
    KeepCadence,
    /// Autoplay is re-armed so the next automatic advance comes one full
    /// interval after the manual change.
    RestartCadence,
}

impl fmt::Display for ManualNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepCadence => f.write_str("keep_cadence"),
            Self::RestartCadence => f.write_str("restart_cadence"),
        }
    }
}

/// Configuration of every page component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub static_base: String,
    pub slides: Vec<SlideSpec>,
    pub autoplay_interval_ms: u64,
    pub transition_ms: u64,
    pub manual_navigation: ManualNavigation,
    #[serde(deserialize_with = "deserialize_instant")]
    pub countdown_deadline: NaiveDateTime,
    pub countdown_refresh_ms: u64,
    pub min_motivation_length: usize,
    pub phone_pattern: String,
    pub email_pattern: String,
    pub registration_fee: f64,
    pub materials_fee: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: f64,
    pub desktop_breakpoint: u32,
    pub article_stagger_ms: u64,
    pub tabs: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_base: DEFAULT_STATIC_BASE.to_string(),
            slides: default_slides(),
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            transition_ms: DEFAULT_TRANSITION_MS,
            manual_navigation: ManualNavigation::default(),
            countdown_deadline: default_deadline(),
            countdown_refresh_ms: DEFAULT_COUNTDOWN_REFRESH_MS,
            min_motivation_length: DEFAULT_MIN_MOTIVATION_LENGTH,
            phone_pattern: DEFAULT_PHONE_PATTERN.to_string(),
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            registration_fee: DEFAULT_REGISTRATION_FEE,
            materials_fee: DEFAULT_MATERIALS_FEE,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN,
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
            article_stagger_ms: DEFAULT_ARTICLE_STAGGER_MS,
            tabs: default_tabs(),
        }
    }
}

impl SiteConfig {
    /// Load a configuration file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded site configuration");
        Ok(config.with_env_overrides())
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default().with_env_overrides()),
        }
    }

    /// Apply [`STATIC_BASE_ENV`] when set and non-empty.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_static_base(std::env::var(STATIC_BASE_ENV).ok())
    }

    /// Replace the static base unless `base` is missing or blank.
    #[must_use]
    pub fn with_static_base(mut self, base: Option<String>) -> Self {
        if let Some(base) = base
            && !base.trim().is_empty()
        {
            tracing::debug!(static_base = %base, "static base overridden");
            self.static_base = base;
        }
        self
    }

    /// Slides with image references resolved against the static base.
    pub fn resolved_slides(&self) -> Vec<Slide> {
        self.slides
            .iter()
            .map(|spec| spec.resolve(&self.static_base))
            .collect()
    }

    /// Check every setting that can make startup fail.
    ///
    /// Pattern syntax is checked by the validator when it compiles its rules.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.slides.is_empty() {
            return Err(ConfigError::EmptySlides);
        }
        let intervals = [
            ("autoplay_interval_ms", self.autoplay_interval_ms),
            ("transition_ms", self.transition_ms),
            ("countdown_refresh_ms", self.countdown_refresh_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigError::NonPositiveInterval { name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.reveal_threshold));
        }
        if self.tabs.is_empty() {
            return Err(ConfigError::EmptyTabs);
        }
        let mut seen = BTreeSet::new();
        for tab in &self.tabs {
            if !seen.insert(tab.as_str()) {
                return Err(ConfigError::DuplicateTab(tab.clone()));
            }
        }
        Ok(())
    }
}

/// Parse `YYYY-MM-DDTHH:MM:SS`, or a bare `YYYY-MM-DD` meaning midnight.
pub fn parse_instant(text: &str) -> std::result::Result<NaiveDateTime, ConfigError> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d").map(|date| date.and_time(NaiveTime::MIN))
        })
        .map_err(|error| ConfigError::InvalidDeadline {
            value: text.to_string(),
            message: error.to_string(),
        })
}

fn deserialize_instant<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_instant(&text).map_err(serde::de::Error::custom)
}

fn default_deadline() -> NaiveDateTime {
    parse_instant(DEFAULT_COUNTDOWN_DEADLINE).unwrap_or_default()
}

fn default_tabs() -> Vec<String> {
    ["psychologie", "sociologie", "travail-social", "communication"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_slides() -> Vec<SlideSpec> {
    let slide = |image: &str, title: &str, subtitle: &str| SlideSpec {
        image: image.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    };
    vec![
        slide(
            "images/faculte.png",
            "50 Ans d'Excellence en Sciences Humaines",
            "Formant les leaders de demain en psychologie, sociologie, travail social et \
             communication depuis 1975",
        ),
        slide(
            "images/fasch1.jpg",
            "Étude approfondie des processus cognitifs et de leurs applications cliniques",
            "Rejoignez FASCH et façonnez l'avenir des sciences humaines en Haïti. Découvrez nos \
             programmes d'excellence et commencez votre candidature dès aujourd'hui.",
        ),
        slide(
            "images/fasch2.jpg",
            "Recherche de Pointe en Sciences Sociales",
            "Nos professeurs et étudiants contribuent activement à la compréhension de la \
             société haïtienne contemporaine",
        ),
        slide(
            "images/fasch3.jpg",
            "Innovation Pédagogique et Impact Social",
            "Des programmes adaptés aux défis modernes d'Haïti avec une approche pratique et \
             communautaire",
        ),
    ]
}
