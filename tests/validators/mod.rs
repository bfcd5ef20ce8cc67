use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use guard_rail::validators::*;
use guard_rail::{extract_from, Bound, Category, Failure, FieldError, RangeDetails};

#[test]
fn presence_and_zero_checks() {
    assert!(not_nil("db", Some(&1)).is_ok());
    assert_eq!(not_nil::<u8>("db", None), Err(FieldError::not_nil("db")));

    assert!(non_zero("port", 8080u16).is_ok());
    assert_eq!(non_zero("port", 0u16), Err(FieldError::non_zero("port")));
    assert_eq!(non_zero("ratio", 0.0f64), Err(FieldError::non_zero("ratio")));
    assert!(non_zero("timeout", Duration::from_secs(1)).is_ok());
    assert!(non_zero("timeout", Duration::ZERO).is_err());
}

#[test]
fn empty_and_blank_strings() {
    assert!(non_empty("env", "prod").is_ok());
    assert!(non_empty("env", "  ").is_ok());
    assert!(non_empty("env", "").is_err());

    let err = non_blank("env", " \t\n").unwrap_err();
    assert_eq!(err.category(), Category::NonEmpty);
    assert!(non_blank("env", " x ").is_ok());
}

#[test]
fn length_checks_report_want_and_got() {
    assert!(str_len_at_least("name", "abc", 3).is_ok());
    assert_eq!(str_len_at_least("name", "ab", 3), Err(FieldError::len_at_least("name", 3, 2)));
    assert_eq!(slice_len_at_least("hosts", &[1], 2), Err(FieldError::len_at_least("hosts", 2, 1)));
    assert!(len_at_least("items", 0, 0).is_ok());
}

#[test]
fn membership_over_several_collections() {
    assert!(in_set("mode", &"fast", &["fast", "safe"]).is_ok());
    assert_eq!(in_set("mode", &"slow", &["fast", "safe"]), Err(FieldError::not_in_set("mode")));

    let slice: &[u8] = &[1, 2, 3];
    assert!(in_set("level", &2, slice).is_ok());

    let tree: BTreeSet<_> = ["a", "b"].into_iter().collect();
    assert!(in_set("key", &"b", &tree).is_ok());
    assert!(in_set("key", &"c", &tree).is_err());

    let hashed: HashSet<_> = [10, 20].into_iter().collect();
    assert!(in_set("code", &20, &hashed).is_ok());
    assert!(in_set("code", &30, &hashed).is_err());
}

#[test]
fn numeric_ranges_are_inclusive() {
    assert!(in_range_num("workers", 1, 1, 8).is_ok());
    assert!(in_range_num("workers", 8, 1, 8).is_ok());
    assert!(in_range_num("workers", 0, 1, 8).is_err());
    assert!(in_range_num("workers", 9, 1, 8).is_err());
}

#[test]
fn range_failure_carries_bounds_and_value() {
    let err = in_range_num("workers", 12u32, 8, 1).unwrap_err();
    let range: RangeDetails<'_> = extract_from(&err).unwrap();
    assert_eq!(range.field, "workers");
    assert_eq!(range.min, &Bound::UInt(1));
    assert_eq!(range.max, &Bound::UInt(8));
    assert_eq!(range.got, &Bound::UInt(12));
}

#[test]
fn string_and_duration_ranges() {
    assert!(in_range_str("code", "b", "a", "c").is_ok());
    assert!(in_range_str("code", "d", "a", "c").is_err());

    let one = Duration::from_secs(1);
    let ten = Duration::from_secs(10);
    assert!(in_range_duration("timeout", Duration::from_secs(5), one, ten).is_ok());
    let err = in_range_duration("timeout", Duration::from_millis(10), one, ten).unwrap_err();
    assert_eq!(err.category(), Category::OutOfRange);
}

#[test]
fn float_ranges_reject_non_finite_values() {
    assert!(in_range_f64("ratio", 1.0, 0.0, 1.0).is_ok());
    assert!(in_range_f64("ratio", f64::NAN, f64::NEG_INFINITY, f64::INFINITY).is_err());
    assert!(in_range_f64("ratio", f64::INFINITY, 0.0, f64::INFINITY).is_err());
    assert!(finite_f64("ratio", f64::NAN).is_err());
    assert!(finite_f64("ratio", -0.0).is_ok());
}
