use guard_rail::{GuardConfig, DEFAULT_COMPACTION_RATIO};

#[test]
fn default_is_first_error_and_unsynchronized() {
    let config = GuardConfig::default();
    assert_eq!(config.max_errors, 1);
    assert!(!config.thread_safe);
    assert_eq!(config.compaction_ratio, DEFAULT_COMPACTION_RATIO);
    assert_eq!(GuardConfig::new(), config);
    assert_eq!(GuardConfig::first_error(), config);
}

#[test]
fn presets_set_the_cap() {
    assert_eq!(GuardConfig::collect_all().max_errors, 0);
    assert_eq!(GuardConfig::keep(5).max_errors, 5);
    assert_eq!(GuardConfig::keep(0), GuardConfig::collect_all());
}

#[test]
fn builder_setters_chain() {
    let config = GuardConfig::new().max_errors(3).thread_safe(true).compaction_ratio(4);
    assert_eq!(config.max_errors, 3);
    assert!(config.thread_safe);
    assert_eq!(config.compaction_ratio, 4);
}

#[cfg(feature = "serde")]
#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: GuardConfig = serde_json::from_str(r#"{"max_errors": 10}"#).unwrap();
    assert_eq!(config, GuardConfig::keep(10));

    let json = serde_json::to_value(GuardConfig::collect_all().thread_safe(true)).unwrap();
    assert_eq!(json["max_errors"], 0);
    assert_eq!(json["thread_safe"], true);
}
