//! Native code may read `Py_True` / `Py_False` before anything initializes
//! the runtime. This file holds a single test so nothing runs first.

use ob_bool::capi::{_Py_FalseStructReference, _Py_TrueStructReference, PyBool_Check};
use ob_bool::registry::setup_count;
use ob_bool::{FALSE, TRUE, py_false, py_true};
use ob_core::{IMMORTAL_FLOOR, ObjectHeader};
use std::ptr;
use std::sync::atomic::Ordering;

#[test]
fn exported_singletons_are_live_before_init() {
    let t = _Py_TrueStructReference.load(Ordering::Acquire);
    let f = _Py_FalseStructReference.load(Ordering::Acquire);
    assert_eq!(setup_count(), 0);

    assert!(!t.is_null() && !f.is_null());
    assert_ne!(t, f);
    assert!(ptr::eq(t, &TRUE));
    assert!(ptr::eq(f, &FALSE));
    unsafe {
        assert!((*t).value());
        assert!(!(*f).value());
        assert_eq!((*t).ob_base.refcnt(), IMMORTAL_FLOOR);
        assert_eq!(PyBool_Check(t.cast::<ObjectHeader>()), 1);
        assert_eq!(PyBool_Check(f.cast::<ObjectHeader>()), 1);
    }
    assert_eq!(setup_count(), 0);

    // First accessor use initializes; the addresses do not move.
    assert_eq!(py_true().as_ptr(), t.cast::<ObjectHeader>());
    assert_eq!(py_false().as_ptr(), f.cast::<ObjectHeader>());
    assert_eq!(setup_count(), 1);
    assert_eq!(_Py_TrueStructReference.load(Ordering::Acquire), t);
}
