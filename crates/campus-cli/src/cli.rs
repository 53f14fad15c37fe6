//! CLI argument definitions for the campus tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use campus_model::parse_instant;
use chrono::NaiveDateTime;
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "campus",
    version,
    about = "Campus site engine - validate applications, compute costs, simulate pages",
    long_about = "Run the campus site components outside a browser.\n\n\
                  Validates admission form snapshots, computes tuition costs and\n\
                  deadline countdowns, and simulates the home page on a virtual clock."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Site configuration file (JSON). Defaults apply when omitted.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an admission form snapshot (JSON object keyed by field id).
    Validate(ValidateArgs),

    /// Compute yearly tuition cost.
    Cost(CostArgs),

    /// Days left before the admission deadline.
    Countdown(CountdownArgs),

    /// List the hero slides with resolved image paths.
    Slides,

    /// Mount the page on a virtual clock and print the render log.
    Simulate(SimulateArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Form snapshot file.
    #[arg(value_name = "FORM_JSON")]
    pub form: PathBuf,

    /// Print the validation result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CostArgs {
    /// Cost per term. Non-numeric input counts as zero.
    #[arg(long = "base", value_name = "AMOUNT", default_value = "0")]
    pub base: String,

    /// Scholarship percent, clamped to 0-100.
    #[arg(long = "scholarship", value_name = "PERCENT", default_value = "0")]
    pub scholarship: String,
}

#[derive(Parser)]
pub struct CountdownArgs {
    /// Deadline overriding the configured one (YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD).
    #[arg(long = "deadline", value_name = "INSTANT", value_parser = parse_instant)]
    pub deadline: Option<NaiveDateTime>,

    /// Reference instant instead of the local clock.
    #[arg(long = "now", value_name = "INSTANT", value_parser = parse_instant)]
    pub now: Option<NaiveDateTime>,
}

#[derive(Parser)]
pub struct SimulateArgs {
    /// Virtual milliseconds to run.
    #[arg(long = "duration-ms", value_name = "MS", default_value_t = 20_000)]
    pub duration_ms: u64,

    /// Scripted input events (JSON array of `{"at_ms", "event"}`).
    #[arg(long = "script", value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Number of news articles on the page.
    #[arg(long = "articles", value_name = "N", default_value_t = 0)]
    pub articles: usize,

    /// Id of a scroll-revealed element (repeatable).
    #[arg(long = "reveal", value_name = "ID")]
    pub reveal: Vec<String>,

    /// Page start instant instead of the local clock.
    #[arg(long = "now", value_name = "INSTANT", value_parser = parse_instant)]
    pub now: Option<NaiveDateTime>,

    /// Print the render log as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    /// Logging configuration from the flags. An explicit `--log-level` wins
    /// over `-v`/`-q`; with neither, `RUST_LOG` is honored.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            ..LogConfig::default()
        };
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file = self.log_file.clone();
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}
