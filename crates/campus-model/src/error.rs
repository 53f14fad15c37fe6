//! Error types shared across the campus crates.

use thiserror::Error;

/// Startup configuration problems. These are fatal: no timer is armed for a
/// component whose configuration fails to validate.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The slide list is empty.
    #[error("slide list must not be empty")]
    EmptySlides,

    /// A duration setting is zero.
    #[error("{name} must be a positive number of milliseconds, got {value}")]
    NonPositiveInterval {
        /// Setting name as it appears in the configuration file.
        name: &'static str,
        /// Offending value.
        value: u64,
    },

    /// A field pattern does not compile.
    #[error("invalid {field} pattern: {message}")]
    InvalidPattern {
        /// Field the pattern belongs to.
        field: String,
        /// Compiler message.
        message: String,
    },

    /// A deadline or instant is not `YYYY-MM-DDTHH:MM:SS` (or a bare date).
    #[error("invalid date-time {value:?}: {message}")]
    InvalidDeadline {
        /// Text as given.
        value: String,
        /// Parser message.
        message: String,
    },

    /// The reveal threshold is outside `[0, 1]`.
    #[error("reveal threshold must be within 0..=1, got {0}")]
    ThresholdOutOfRange(f64),

    /// No department tab is configured.
    #[error("tab list must not be empty")]
    EmptyTabs,

    /// Two department tabs share an id.
    #[error("duplicate tab id: {0}")]
    DuplicateTab(String),
}

/// Errors returned by campus operations.
#[derive(Debug, Error)]
pub enum CampusError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("slide index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown tab: {0}")]
    UnknownTab(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CampusError>;
