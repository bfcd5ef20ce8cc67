use core::time::Duration;

use guard_rail::{Bound, Category, ClampedNotice, Details, Failure, FieldError, RenderMode};

#[test]
fn categories_have_stable_names() {
    let names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(
        names,
        [
            "not_nil",
            "non_zero",
            "non_empty",
            "len_at_least",
            "out_of_range",
            "not_in_set",
            "errors_clamped"
        ]
    );
    assert_eq!(Category::ALL.iter().filter(|c| c.is_validation()).count(), 6);
}

#[test]
fn every_field_error_maps_to_one_category() {
    let cases = [
        (FieldError::not_nil("a"), Category::NotNil),
        (FieldError::non_zero("a"), Category::NonZero),
        (FieldError::non_empty("a"), Category::NonEmpty),
        (FieldError::len_at_least("a", 2, 1), Category::LenAtLeast),
        (FieldError::out_of_range("a", 1, 2, 3), Category::OutOfRange),
        (FieldError::not_in_set("a"), Category::NotInSet),
    ];
    for (err, category) in cases {
        assert_eq!(err.category(), category);
        assert!(err.is(category));
        assert!(!err.is(Category::Clamped));
        assert_eq!(err.field(), Some("a"));
        assert_eq!(err.field_name(), "a");
    }
}

#[test]
fn verbose_rendering_includes_offending_values() {
    let mode = RenderMode::Verbose;
    assert_eq!(FieldError::not_nil("db").render(mode).to_string(), "db: must not be nil");
    assert_eq!(FieldError::non_zero("port").render(mode).to_string(), "port: must be non-zero");
    assert_eq!(FieldError::non_empty("env").render(mode).to_string(), "env: must be non-empty");
    assert_eq!(FieldError::not_in_set("mode").render(mode).to_string(), "mode: invalid value");
    assert_eq!(
        FieldError::len_at_least("name", 3, 1).render(mode).to_string(),
        "name: len must be >= 3 (got 1)"
    );
    assert_eq!(
        FieldError::out_of_range("workers", 1, 8, 20).render(mode).to_string(),
        "workers: must be in [1,8] (got 20)"
    );
}

#[test]
fn redacted_rendering_hides_offending_values() {
    let mode = RenderMode::Redacted;
    assert_eq!(
        FieldError::len_at_least("secret", 12, 4).render(mode).to_string(),
        "secret: len must be >= 12"
    );
    assert_eq!(
        FieldError::out_of_range("pin", 1000, 9999, 42).render(mode).to_string(),
        "pin: must be in [1000,9999]"
    );
    assert_eq!(FieldError::non_empty("env").render(mode).to_string(), "env: must be non-empty");
}

#[test]
fn render_mode_never_changes_the_payload() {
    let err = FieldError::out_of_range("pin", 1000, 9999, 42);
    match err.details() {
        Details::Range { got, .. } => assert_eq!(got, &Bound::Int(42)),
        other => panic!("unexpected details: {other:?}"),
    }
}

#[cfg(not(feature = "redact"))]
#[test]
fn display_is_verbose_by_default() {
    assert_eq!(RenderMode::default(), RenderMode::Verbose);
    assert_eq!(FieldError::len_at_least("name", 3, 1).to_string(), "name: len must be >= 3 (got 1)");
}

#[cfg(feature = "redact")]
#[test]
fn display_is_redacted_with_the_feature() {
    assert_eq!(RenderMode::default(), RenderMode::Redacted);
    assert_eq!(FieldError::len_at_least("name", 3, 1).to_string(), "name: len must be >= 3");
}

#[test]
fn bounds_keep_their_kind() {
    assert_eq!(Bound::from(-7i16), Bound::Int(-7));
    assert_eq!(Bound::from(7usize), Bound::UInt(7));
    assert_eq!(Bound::from(0.5f32), Bound::Float(0.5));
    assert_eq!(Bound::from(String::from("z")), Bound::Str("z".into()));
    assert_eq!(Bound::from(Duration::from_millis(1500)).to_string(), "1.5s");

    assert_eq!(Bound::UInt(3).as_i64(), Some(3));
    assert_eq!(Bound::UInt(u64::MAX).as_i64(), None);
    assert_eq!(Bound::Float(1.0).as_i64(), None);
    assert_eq!(Bound::Str("a".into()).as_f64(), None);
    assert_eq!(Bound::Duration(Duration::from_secs(2)).as_duration(), Some(Duration::from_secs(2)));
}

#[test]
fn clamped_notice_is_a_failure() {
    let notice = ClampedNotice::new(4, 9);
    assert_eq!(notice.category(), Category::Clamped);
    assert!(notice.field().is_none());
    assert_eq!(notice.details(), Details::Clamped(notice));
    assert_eq!(notice.to_string(), "validation: 9 additional errors omitted (kept 4)");
}

#[cfg(feature = "serde")]
#[test]
fn field_errors_serialize_with_a_kind_tag() {
    let json = serde_json::to_value(FieldError::len_at_least("name", 3, 1)).unwrap();
    assert_eq!(json["kind"], "len_at_least");
    assert_eq!(json["field"], "name");
    assert_eq!(json["want"], 3);

    let back: FieldError = serde_json::from_value(json).unwrap();
    assert_eq!(back, FieldError::len_at_least("name", 3, 1));

    assert_eq!(serde_json::to_value(Category::Clamped).unwrap(), "errors_clamped");
}
