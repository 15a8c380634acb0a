use ob_bool::diag::report;
use ob_bool::{BoolRef, initialize, initialize_with, py_false, py_true};
use ob_core::{IMMORTAL_FLOOR, RuntimeConfig, UnderflowPolicy};

// Exact counts: this file holds a single test so no other thread touches the
// singletons.
#[test]
fn reinitialization_keeps_counts_and_identity() {
    initialize_with(RuntimeConfig::default());
    let held_true = BoolRef::py_true();
    let held_false = [BoolRef::py_false(), BoolRef::py_false()];
    let (t, f) = (py_true(), py_false());
    assert_eq!(t.refcnt(), IMMORTAL_FLOOR + 1);
    assert_eq!(f.refcnt(), IMMORTAL_FLOOR + 2);

    initialize();
    initialize_with(RuntimeConfig::default());
    initialize_with(RuntimeConfig {
        underflow: UnderflowPolicy::Warn,
    });

    assert_eq!(py_true(), t);
    assert_eq!(py_false(), f);
    assert_eq!(t.refcnt(), IMMORTAL_FLOOR + 1);
    assert_eq!(f.refcnt(), IMMORTAL_FLOOR + 2);
    assert_eq!(report().outstanding(), 3);
    // The late config was ignored.
    assert_eq!(ob_core::config::current().underflow, UnderflowPolicy::Ignore);

    drop(held_true);
    drop(held_false);
    assert!(report().is_balanced());
}
