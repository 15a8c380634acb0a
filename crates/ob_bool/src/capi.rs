//! Native entry points.
//!
//! Every pointer returned as a "new reference" carries a claim the caller
//! must give back through `Py_DecRef`. Borrowed pointers carry none.

#![allow(non_snake_case, non_upper_case_globals)]

use crate::handle::{BoolRef, from_truth, is_bool};
use crate::registry::{self, BoolObject, FALSE, TRUE};
use libc::{c_int, c_long, c_uint};
use ob_core::refcount;
use ob_core::{ObjectHeader, ObjectRef};
use std::ptr::{self, null_mut};
use std::sync::atomic::AtomicPtr;

/// The kind native code compares `Py_TYPE(x)` against. The symbol itself is
/// emitted unmangled by `ob_core`.
pub use ob_core::BOOL_TYPE as PyBool_Type;

pub const Py_CONSTANT_FALSE: c_uint = 2;
pub const Py_CONSTANT_TRUE: c_uint = 3;

/// Address of `True`, fixed at link time. Read as `Py_True`.
#[unsafe(no_mangle)]
pub static _Py_TrueStructReference: AtomicPtr<BoolObject> =
    AtomicPtr::new(ptr::addr_of!(TRUE).cast_mut());

/// Address of `False`, fixed at link time. Read as `Py_False`.
#[unsafe(no_mangle)]
pub static _Py_FalseStructReference: AtomicPtr<BoolObject> =
    AtomicPtr::new(ptr::addr_of!(FALSE).cast_mut());

#[unsafe(no_mangle)]
pub extern "C" fn PyBool_Init() -> c_int {
    registry::initialize();
    0
}

/// New reference to `True` if `v` is non-zero, else `False`.
#[unsafe(no_mangle)]
pub extern "C" fn PyBool_FromLong(v: c_long) -> *mut ObjectHeader {
    from_truth(v).into_raw()
}

/// 1 if `op` is a boolean, 0 otherwise (including null).
///
/// # Safety
/// A non-null `op` must point at a live object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn PyBool_Check(op: *mut ObjectHeader) -> c_int {
    match unsafe { ObjectRef::from_ptr(op) } {
        Some(obj) => c_int::from(is_bool(obj)),
        None => 0,
    }
}

/// New reference to the constant `id`, or null for an unknown id.
#[unsafe(no_mangle)]
pub extern "C" fn Py_GetConstant(id: c_uint) -> *mut ObjectHeader {
    match id {
        Py_CONSTANT_TRUE => BoolRef::py_true().into_raw(),
        Py_CONSTANT_FALSE => BoolRef::py_false().into_raw(),
        _ => null_mut(),
    }
}

/// Borrowed pointer to the constant `id`, or null for an unknown id.
#[unsafe(no_mangle)]
pub extern "C" fn Py_GetConstantBorrowed(id: c_uint) -> *mut ObjectHeader {
    match id {
        Py_CONSTANT_TRUE => registry::py_true().as_ptr(),
        Py_CONSTANT_FALSE => registry::py_false().as_ptr(),
        _ => null_mut(),
    }
}

/// # Safety
/// A non-null `op` must point at a live object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Py_IncRef(op: *mut ObjectHeader) {
    if let Some(obj) = unsafe { ObjectRef::from_ptr(op) } {
        refcount::incref(obj);
    }
}

/// # Safety
/// A non-null `op` must point at a live object on which the caller holds a
/// claim.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Py_DecRef(op: *mut ObjectHeader) {
    if let Some(obj) = unsafe { ObjectRef::from_ptr(op) } {
        unsafe { refcount::decref(obj) };
    }
}

/// # Safety
/// A non-null `op` must point at a live object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn Py_RefCnt(op: *mut ObjectHeader) -> isize {
    match unsafe { ObjectRef::from_ptr(op) } {
        Some(obj) => obj.refcnt(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn from_long_matches_singletons() {
        let t = PyBool_FromLong(5);
        let f = PyBool_FromLong(0);
        assert_eq!(t, registry::py_true().as_ptr());
        assert_eq!(f, registry::py_false().as_ptr());
        unsafe {
            Py_DecRef(t);
            Py_DecRef(f);
        }
    }

    #[test]
    fn check_is_null_safe() {
        assert_eq!(unsafe { PyBool_Check(null_mut()) }, 0);
        assert_eq!(unsafe { PyBool_Check(Py_GetConstantBorrowed(Py_CONSTANT_TRUE)) }, 1);
    }

    #[test]
    fn unknown_constant_is_null() {
        assert!(Py_GetConstant(0).is_null());
        assert!(Py_GetConstantBorrowed(42).is_null());
    }

    #[test]
    fn statics_point_at_the_singletons() {
        let t = _Py_TrueStructReference.load(Ordering::Acquire);
        let f = _Py_FalseStructReference.load(Ordering::Acquire);
        assert_eq!(PyBool_Init(), 0);
        assert_eq!(t.cast::<ObjectHeader>(), registry::py_true().as_ptr());
        assert_eq!(f.cast::<ObjectHeader>(), registry::py_false().as_ptr());
    }

    #[test]
    fn null_refcount_ops_are_ignored() {
        unsafe {
            Py_IncRef(null_mut());
            Py_DecRef(null_mut());
            assert_eq!(Py_RefCnt(null_mut()), 0);
        }
    }
}
