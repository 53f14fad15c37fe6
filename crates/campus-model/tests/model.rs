//! Tests for campus-model types.

use campus_model::{
    CampusError, ConfigError, FieldId, FieldValue, FormSnapshot, STATIC_BASE_ENV, SiteConfig,
    ValidationResult,
};

#[test]
fn config_file_round_trip_through_disk() {
    let dir = std::env::temp_dir().join(format!("campus-model-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("site.json");
    std::fs::write(
        &path,
        r#"{
            "static_base": "/assets/",
            "slides": [{"image": "images/a.jpg", "title": "A", "subtitle": "a"}],
            "min_motivation_length": 20
        }"#,
    )
    .unwrap();

    let config = SiteConfig::load(&path).expect("load config");
    assert_eq!(config.slides.len(), 1);
    assert_eq!(config.min_motivation_length, 20);
    assert_eq!(config.autoplay_interval_ms, 5_000);
    assert!(config.validate().is_ok());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_config_file_is_io_error() {
    let err = SiteConfig::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, CampusError::Io(_)));
}

#[test]
fn malformed_config_is_json_error() {
    let dir = std::env::temp_dir().join(format!("campus-model-bad-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("site.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = SiteConfig::load(&path).unwrap_err();
    assert!(matches!(err, CampusError::Json(_)));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn config_error_messages() {
    assert_eq!(
        ConfigError::EmptySlides.to_string(),
        "slide list must not be empty"
    );
    let err: CampusError = ConfigError::NonPositiveInterval {
        name: "autoplay_interval_ms",
        value: 0,
    }
    .into();
    assert_eq!(
        err.to_string(),
        "configuration error: autoplay_interval_ms must be a positive number of milliseconds, got 0"
    );
}

#[test]
fn snapshot_len_counts_blank_fields() {
    let snapshot = FormSnapshot::new()
        .with(FieldId::FirstName, "")
        .with(FieldId::Terms, false);
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.len(), 2);
}

#[test]
#[allow(unsafe_code)]
fn static_base_comes_from_environment() {
    // Every case shares one process-wide variable, so they run in sequence.
    unsafe { std::env::set_var(STATIC_BASE_ENV, "https://cdn.example.ht/static/") };
    let config = SiteConfig::load_or_default(None).expect("default config");
    assert_eq!(config.static_base, "https://cdn.example.ht/static/");
    assert!(
        config.resolved_slides()[0]
            .image
            .starts_with("https://cdn.example.ht/static/images/")
    );

    unsafe { std::env::set_var(STATIC_BASE_ENV, "   ") };
    let config = SiteConfig::load_or_default(None).expect("default config");
    assert_eq!(config.static_base, "/static/");
    assert_eq!(config.resolved_slides()[0].image, "/static/images/faculte.png");

    unsafe { std::env::remove_var(STATIC_BASE_ENV) };
    let config = SiteConfig::default().with_env_overrides();
    assert_eq!(config.static_base, "/static/");
}

#[test]
fn snapshot_clear_empties_every_field() {
    let mut snapshot = FormSnapshot::new()
        .with(FieldId::FirstName, "Jean")
        .with(FieldId::Terms, true);
    assert!(!snapshot.is_empty());
    assert_eq!(snapshot.len(), 2);
    snapshot.clear();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.len(), 0);
    assert_eq!(snapshot.value(FieldId::Terms), FieldValue::Checked(false));
}

#[test]
fn validation_result_serializes_with_field_ids() {
    let result = ValidationResult::from_errors(
        [
            (FieldId::Email, Some("Email is required.".to_string())),
            (FieldId::Phone, None),
        ]
        .into_iter()
        .collect(),
    );
    let json = serde_json::to_string(&result).expect("serialize result");
    assert_eq!(
        json,
        r#"{"pass":false,"errors":{"email":"Email is required.","phone":null}}"#
    );
}
