//! Argument parsing and command behavior of the campus CLI.

use std::path::PathBuf;

use campus_cli::cli::{Cli, Command, CostArgs, CountdownArgs, SimulateArgs, ValidateArgs};
use campus_cli::commands::{run_cost, run_countdown, run_simulate, run_slides, run_validate};
use campus_cli::logging::LogFormat;
use campus_cli::summary::{cost_table, render_log_lines, validation_table};
use campus_core::{FixedClock, SystemClock};
use campus_model::{FieldId, SiteConfig, parse_instant};
use clap::Parser;
use tracing::level_filters::LevelFilter;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("campus-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn instant(text: &str) -> chrono::NaiveDateTime {
    parse_instant(text).unwrap()
}

fn simulate_args(duration_ms: u64) -> SimulateArgs {
    SimulateArgs {
        duration_ms,
        script: None,
        articles: 0,
        reveal: Vec::new(),
        now: Some(instant("2026-03-05T12:00:00")),
        json: false,
    }
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "campus",
        "cost",
        "--base",
        "10000",
        "--scholarship",
        "20",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--config",
        "site.json",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("site.json")));
    let Command::Cost(args) = &cli.command else {
        panic!("expected cost command");
    };
    assert_eq!(args.base, "10000");
    assert_eq!(args.scholarship, "20");

    let log = cli.log_config();
    assert_eq!(log.level_filter, LevelFilter::DEBUG);
    assert_eq!(log.format, LogFormat::Json);
    assert!(!log.use_env_filter);
}

#[test]
fn default_logging_defers_to_env() {
    let cli = Cli::try_parse_from(["campus", "slides"]).unwrap();
    let log = cli.log_config();
    assert_eq!(log.level_filter, LevelFilter::WARN);
    assert!(log.use_env_filter);
    assert_eq!(log.format, LogFormat::Pretty);

    let cli = Cli::try_parse_from(["campus", "-vv", "slides"]).unwrap();
    assert_eq!(cli.log_config().level_filter, LevelFilter::DEBUG);
    assert!(!cli.log_config().use_env_filter);
}

#[test]
fn countdown_instants_are_parsed_by_clap() {
    let cli = Cli::try_parse_from([
        "campus",
        "countdown",
        "--deadline",
        "2026-03-15",
        "--now",
        "2026-03-01T08:30:00",
    ])
    .unwrap();
    let Command::Countdown(args) = &cli.command else {
        panic!("expected countdown command");
    };
    assert_eq!(args.deadline, Some(instant("2026-03-15T00:00:00")));

    assert!(Cli::try_parse_from(["campus", "countdown", "--now", "yesterday"]).is_err());
}

#[test]
fn simulate_flags() {
    let cli = Cli::try_parse_from([
        "campus",
        "simulate",
        "--duration-ms",
        "12000",
        "--articles",
        "3",
        "--reveal",
        "about",
        "--reveal",
        "programs",
    ])
    .unwrap();
    let Command::Simulate(args) = &cli.command else {
        panic!("expected simulate command");
    };
    assert_eq!(args.duration_ms, 12_000);
    assert_eq!(args.articles, 3);
    assert_eq!(args.reveal, vec!["about", "programs"]);
    assert!(args.script.is_none());
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["campus", "deploy"]).is_err());
}

#[test]
fn validate_reports_failing_fields() {
    let motivation = "x".repeat(50);
    let path = scratch_file(
        "partial.json",
        &format!(
            r#"{{"firstName": "Marie", "lastName": "Joseph", "phone": "50912345678",
                "program": "sociologie", "motivation": "{motivation}", "terms": true}}"#
        ),
    );
    let config = SiteConfig::default();
    let report = run_validate(
        &config,
        &ValidateArgs {
            form: path,
            json: false,
        },
    )
    .unwrap();
    assert!(!report.result.pass);
    assert_eq!(
        report.result.failing_fields(),
        vec![FieldId::Email, FieldId::Motivation]
    );

    let table = validation_table(&report.result).to_string();
    assert!(table.contains("Email is required."));
    assert!(table.contains("Motivation letter must be at least 100 characters (50 entered)."));
}

#[test]
fn validate_surfaces_unreadable_snapshot() {
    let config = SiteConfig::default();
    let error = run_validate(
        &config,
        &ValidateArgs {
            form: PathBuf::from("/definitely/not/here.json"),
            json: false,
        },
    )
    .unwrap_err();
    assert!(format!("{error:#}").contains("read form snapshot"));
}

#[test]
fn cost_uses_configured_fees() {
    let config = SiteConfig::default();
    let result = run_cost(
        &config,
        &CostArgs {
            base: "10000".to_string(),
            scholarship: "20".to_string(),
        },
    );
    assert_eq!(result.annual_tuition, 20_000.0);
    assert_eq!(result.scholarship_reduction, 4_000.0);
    assert_eq!(result.total, 21_500.0);

    let table = cost_table(&result).to_string();
    assert!(table.contains("21,500"));
    assert!(table.contains("Scholarship reduction"));
}

#[test]
fn countdown_uses_given_instants() {
    let config = SiteConfig::default();
    let args = CountdownArgs {
        deadline: None,
        now: Some(instant("2026-03-05T12:00:00")),
    };
    let report = run_countdown(&config, &args, &SystemClock);
    assert_eq!(report.days, 10);

    let args = CountdownArgs {
        deadline: Some(instant("2026-01-01")),
        now: None,
    };
    let clock = FixedClock(instant("2026-02-01T00:00:00"));
    assert_eq!(run_countdown(&config, &args, &clock).days, 0);
}

#[test]
fn slides_are_resolved_against_static_base() {
    let config = SiteConfig {
        static_base: "https://cdn.example.ht/static".to_string(),
        ..SiteConfig::default()
    };
    let slides = run_slides(&config);
    assert_eq!(slides.len(), 4);
    assert_eq!(
        slides[2].image,
        "https://cdn.example.ht/static/images/fasch2.jpg"
    );
}

#[test]
fn simulation_logs_first_autoplay_swap() {
    let config = SiteConfig::default();
    let clock = FixedClock(instant("2026-03-05T12:00:00"));
    let report = run_simulate(&config, &simulate_args(5_300), &clock).unwrap();
    assert_eq!(report.final_slide, 1);
    assert!(report.rejected.is_empty());

    let window: Vec<_> = report
        .log
        .iter()
        .filter(|entry| entry.at_ms >= 5_000)
        .cloned()
        .collect();
    insta::assert_snapshot!(render_log_lines(&window).join("\n"), @r#"
    5000 ms #hero-content style.opacity = 0
    5000 ms #hero-content style.transition = opacity 0.3s ease
    5000 ms .hero-dot[0] style.opacity = 0.5
    5000 ms .hero-dot[0] style.transform = scale(1)
    5000 ms .hero-dot[1] style.opacity = 1
    5000 ms .hero-dot[1] style.transform = scale(1.2)
    5000 ms .hero-dot[2] style.opacity = 0.5
    5000 ms .hero-dot[2] style.transform = scale(1)
    5000 ms .hero-dot[3] style.opacity = 0.5
    5000 ms .hero-dot[3] style.transform = scale(1)
    5300 ms #hero-content h1 text = "Étude approfondie des processus cognitifs et de leurs applications cliniques"
    5300 ms #hero-content p text = "Rejoignez FASCH et façonnez l'avenir des sciences humaines en Haïti. Découvrez nos programmes d'excellence et commencez votre candidature dès aujourd'hui."
    5300 ms #hero-bg [src] = "/static/images/fasch1.jpg"
    5300 ms #hero-content style.opacity = 1
    "#);
}

#[test]
fn simulation_reports_rejected_script_events() {
    let script = scratch_file(
        "script.json",
        r#"[
            {"at_ms": 500, "event": {"type": "tab_clicked", "tab": "medecine"}},
            {"at_ms": 800, "event": {"type": "next_slide"}}
        ]"#,
    );
    let config = SiteConfig::default();
    let clock = FixedClock(instant("2026-03-05T12:00:00"));
    let args = SimulateArgs {
        script: Some(script),
        ..simulate_args(2_000)
    };
    let report = run_simulate(&config, &args, &clock).unwrap();
    assert_eq!(report.final_slide, 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].at_ms, 500);
    assert_eq!(report.rejected[0].error, "unknown tab: medecine");
}
