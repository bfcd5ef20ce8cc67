use guard_rail::report::ReportFormat;
use guard_rail::validators::{in_range_num, non_empty, non_zero};
use guard_rail::{Collector, FieldError, GuardConfig};

fn sample(config: GuardConfig) -> Collector<FieldError> {
    let mut guard = Collector::new(config);
    guard.check(non_empty("env", ""));
    guard.check(non_zero("port", 0u16));
    guard.check(in_range_num("workers", 0, 1, 8));
    guard
}

#[test]
fn default_report_lists_every_member() {
    let guard = sample(GuardConfig::keep(2));
    let err = guard.err().unwrap();

    assert_eq!(
        err.report(&ReportFormat::default()),
        "env: must be non-empty; port: must be non-zero; \
         validation: 1 additional errors omitted (kept 2)"
    );
}

#[test]
fn pretty_report_tags_categories() {
    let guard = sample(GuardConfig::keep(2));
    let err = guard.err().unwrap();

    assert_eq!(
        err.report(&ReportFormat::pretty()),
        "- [non_empty] env: must be non-empty\n\
         - [non_zero] port: must be non-zero\n\
         - [errors_clamped] validation: 1 additional errors omitted (kept 2)"
    );
}

#[test]
fn single_failure_report_matches_its_display() {
    let guard = sample(GuardConfig::collect_all());
    let single = {
        let mut only = Collector::new(GuardConfig::collect_all());
        only.check(non_empty("env", ""));
        only.into_err().unwrap()
    };
    assert_eq!(single.report(&ReportFormat::compact()), single.to_string());

    let err = guard.err().unwrap();
    let report = err.report(&ReportFormat::compact());
    assert_eq!(report.matches(" | ").count(), 2);
    assert!(report.starts_with("env: must be non-empty | "));
}

#[test]
fn custom_format() {
    let guard = sample(GuardConfig::collect_all());
    let err = guard.err().unwrap();
    let format = ReportFormat { separator: ", ".into(), prefix: "> ".into(), show_category: false };

    let expected = format!(
        "> env: must be non-empty, > port: must be non-zero, > {}",
        FieldError::out_of_range("workers", 1, 8, 0)
    );
    assert_eq!(err.report(&format), expected);
}

#[cfg(feature = "tracing")]
#[test]
fn tracing_members_without_a_subscriber_is_silent() {
    let guard = sample(GuardConfig::keep(1));
    let err = guard.err().unwrap();
    guard_rail::report::trace_members(&err);
}
