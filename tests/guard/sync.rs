use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, OnceLock};
use std::thread;
use std::time::Duration;

use guard_rail::validators::{non_empty, non_zero};
use guard_rail::{Category, Collector, Failure, FieldError, GuardConfig, Stats, SyncCollector};

/// Failure whose destructor reads the collector it was recorded into.
#[derive(Debug, Clone)]
struct Reentrant;

static REENTRANT_GUARD: OnceLock<SyncCollector<Reentrant>> = OnceLock::new();

impl fmt::Display for Reentrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("reentrant")
    }
}

impl Failure for Reentrant {
    fn category(&self) -> Category {
        Category::NonEmpty
    }
}

impl Drop for Reentrant {
    fn drop(&mut self) {
        if let Some(guard) = REENTRANT_GUARD.get() {
            let _ = guard.stats();
        }
    }
}

#[test]
fn concurrent_adds_keep_every_failure_without_a_cap() {
    let guard = SyncCollector::new(GuardConfig::collect_all());
    thread::scope(|scope| {
        for worker in 0..8 {
            let guard = &guard;
            scope.spawn(move || {
                for i in 0..25 {
                    guard.add(FieldError::non_empty(format!("w{worker}-{i}")));
                }
            });
        }
    });

    let stats = guard.stats();
    assert_eq!(stats, Stats { checks: 0, failures: 200, kept: 200, dropped: 0 });
}

#[test]
fn cap_holds_under_contention() {
    let guard = SyncCollector::new(GuardConfig::keep(5));
    thread::scope(|scope| {
        for _ in 0..8 {
            let guard = &guard;
            scope.spawn(move || {
                for _ in 0..50 {
                    guard.check(non_empty("env", ""));
                }
            });
        }
    });

    let stats = guard.stats();
    assert_eq!(stats.kept, 5);
    assert_eq!(stats.dropped, 395);
    assert_eq!(stats.kept + stats.dropped, stats.failures);

    let err = guard.err().unwrap();
    assert_eq!(err.failures().len(), 5);
    assert_eq!(err.clamped().map(|notice| notice.dropped), Some(395));
}

#[test]
fn lazy_checks_never_evaluate_after_the_cap() {
    let guard = SyncCollector::<FieldError>::new(GuardConfig::first_error());
    let evaluated = AtomicUsize::new(0);
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    guard.check_lazy(|| {
                        evaluated.fetch_add(1, Ordering::Relaxed);
                        non_zero("port", 0u16)
                    });
                }
            });
        }
    });

    let stats = guard.stats();
    assert_eq!(stats.kept, 1);
    // Checks admitted before the first failure landed may still have run.
    assert_eq!(stats.checks, evaluated.load(Ordering::Relaxed));
    assert!(stats.checks <= 4);
    assert_eq!(stats.kept + stats.dropped, stats.failures);
}

#[test]
fn snapshot_is_independent_of_later_mutation() {
    let guard = SyncCollector::new(GuardConfig::collect_all());
    guard.add(FieldError::non_empty("a"));
    let snapshot = guard.err().unwrap();

    guard.add(FieldError::non_empty("b"));
    guard.reset();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.as_single(), Some(&FieldError::non_empty("a")));
    assert!(guard.err().is_none());
}

#[test]
fn lock_is_not_held_while_a_check_runs() {
    let guard = SyncCollector::new(GuardConfig::collect_all());
    guard.check_lazy(|| {
        let before = guard.stats();
        guard.add(FieldError::non_empty("nested"));
        assert_eq!(before.checks, 1);
        non_zero("port", 0u16)
    });

    let err = guard.err().unwrap();
    assert_eq!(err.failures(), &[FieldError::non_empty("nested"), FieldError::non_zero("port")]);
}

#[test]
fn panicking_check_leaves_the_collector_usable() {
    let guard = SyncCollector::new(GuardConfig::collect_all());
    guard.add(FieldError::non_empty("before"));

    let _ = thread::scope(|scope| {
        scope
            .spawn(|| {
                guard.check_lazy(|| -> Result<(), FieldError> { panic!("validator panicked") });
            })
            .join()
    });

    guard.add(FieldError::non_empty("after"));
    assert_eq!(guard.stats().kept, 2);
}

#[test]
fn run_and_optional_checks() {
    let guard = SyncCollector::<FieldError>::new(GuardConfig::keep(2));
    guard.check_lazy_opt(None::<fn() -> Result<(), FieldError>>);
    guard.run(["a", "b", "c"].map(|name| move || non_empty(name, "")));

    assert!(guard.is_capped());
    assert_eq!(guard.stats(), Stats { checks: 2, failures: 2, kept: 2, dropped: 0 });
}

#[test]
fn converts_to_and_from_the_unsynchronized_collector() {
    let mut local = Collector::new(GuardConfig::keep(3));
    local.add(FieldError::non_empty("env"));

    let shared = SyncCollector::from(local);
    shared.add(FieldError::non_zero("port"));
    assert_eq!(shared.config().max_errors, 3);

    let local = shared.into_inner();
    assert_eq!(local.failures().len(), 2);
    assert!(local.err().is_some());
}

#[test]
fn discarded_failures_are_dropped_outside_the_lock() {
    let guard = REENTRANT_GUARD.get_or_init(|| SyncCollector::new(GuardConfig::first_error()));
    let (done, finished) = mpsc::channel();

    thread::spawn(move || {
        guard.add(Reentrant);
        // Rejected at the cap.
        guard.add(Reentrant);
        drop(guard.err());
        guard.reset();
        let _ = done.send(guard.stats());
    });

    let stats = finished
        .recv_timeout(Duration::from_secs(5))
        .expect("collector deadlocked while dropping a failure");
    assert_eq!(stats, Stats::default());
}
