use std::cell::Cell;

use guard_rail::validators::{in_range_num, non_empty, non_zero};
use guard_rail::{checks, Collector, FieldError, Guard, GuardConfig, Recorder};

#[test]
fn expressions_after_the_cap_are_not_evaluated() {
    let evaluated = Cell::new(0);
    let tick = |result: Result<(), FieldError>| {
        evaluated.set(evaluated.get() + 1);
        result
    };

    let mut guard = Collector::new(GuardConfig::first_error());
    checks!(guard;
        tick(non_empty("env", "")),
        tick(non_zero("port", 0)),
        tick(in_range_num("workers", 0, 1, 8)),
    );

    assert_eq!(evaluated.get(), 1);
    assert_eq!(guard.stats().checks, 1);
}

#[test]
fn all_expressions_run_without_a_cap() {
    let mut guard = Collector::new(GuardConfig::collect_all());
    checks!(guard; non_empty("env", ""), non_zero("port", 80), non_zero("retries", 0));

    let stats = guard.stats();
    assert_eq!((stats.checks, stats.kept), (3, 2));
}

#[test]
fn works_through_a_recorder() {
    fn validate<R: Recorder<FieldError>>(guard: &mut R, env: &str) {
        checks!(guard; non_empty("env", env), non_zero("port", 0));
    }

    let mut guard = Guard::new(GuardConfig::collect_all());
    validate(&mut guard, "");
    assert_eq!(guard.stats().kept, 2);
}

#[cfg(feature = "std")]
#[test]
fn works_with_a_shared_collector() {
    let guard = guard_rail::SyncCollector::new(GuardConfig::keep(1));
    let shared = &guard;
    checks!(shared; non_empty("env", ""), non_zero("port", 0));
    assert_eq!(guard.stats().checks, 1);
}
