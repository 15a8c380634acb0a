//! Acquiring, classifying and releasing boolean handles.

use crate::registry;
use ob_core::refcount;
use ob_core::{BOOL_TYPE, Integral, ObjectError, ObjectHeader, ObjectRef, ObjectResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::ManuallyDrop;

/// Adds a claim on a boolean singleton.
#[inline]
pub fn acquire(obj: ObjectRef) {
    debug_assert!(is_bool(obj));
    refcount::incref(obj);
}

/// Gives up a claim on a boolean singleton. The count never drops below the
/// floor; extra releases are clamped.
///
/// # Safety
/// `obj` must be a boolean singleton. The protocol does not re-check the
/// kind in release builds, and releasing an object of another kind may free
/// it.
#[inline]
pub unsafe fn release(obj: ObjectRef) {
    debug_assert!(is_bool(obj));
    unsafe { refcount::decref(obj) };
}

#[inline]
pub fn is_bool(obj: ObjectRef) -> bool {
    obj.is_type(&BOOL_TYPE)
}

/// `True` for any non-zero value, `False` for zero.
#[inline]
pub fn from_truth<I: Integral>(value: I) -> BoolRef {
    from_bool(value.is_truthy())
}

#[inline]
pub fn from_bool(value: bool) -> BoolRef {
    if value {
        BoolRef::py_true()
    } else {
        BoolRef::py_false()
    }
}

/// A counted claim on `True` or `False`, released when dropped.
#[repr(transparent)]
pub struct BoolRef {
    obj: ObjectRef,
}

impl BoolRef {
    #[inline]
    fn acquired(obj: ObjectRef) -> Self {
        acquire(obj);
        Self { obj }
    }

    #[inline]
    pub fn py_true() -> Self {
        Self::acquired(registry::py_true())
    }

    #[inline]
    pub fn py_false() -> Self {
        Self::acquired(registry::py_false())
    }

    /// Takes a new claim on `obj` if it is a boolean.
    pub fn try_from_object(obj: ObjectRef) -> ObjectResult<Self> {
        if is_bool(obj) {
            Ok(Self::acquired(obj))
        } else {
            Err(ObjectError::TypeMismatch {
                expected: BOOL_TYPE.name,
                found: obj.ob_type().name,
            })
        }
    }

    /// Checked form of [`BoolRef::try_from_object`] for a borrowed raw pointer.
    ///
    /// # Safety
    /// A non-null `ptr` must point at a live object.
    pub unsafe fn try_from_ptr(ptr: *mut ObjectHeader) -> ObjectResult<Self> {
        match unsafe { ObjectRef::from_ptr(ptr) } {
            Some(obj) => Self::try_from_object(obj),
            None => Err(ObjectError::NullHandle),
        }
    }

    /// Takes over a claim previously handed out by [`BoolRef::into_raw`] or
    /// by a foreign owner.
    ///
    /// # Safety
    /// `ptr` must be a non-null pointer to a boolean singleton and the caller
    /// must own the claim being transferred.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut ObjectHeader) -> Self {
        let obj = unsafe { ObjectRef::from_ptr_unchecked(ptr) };
        debug_assert!(is_bool(obj));
        Self { obj }
    }

    /// Hands the claim to the caller without releasing it.
    #[inline]
    pub fn into_raw(self) -> *mut ObjectHeader {
        ManuallyDrop::new(self).obj.as_ptr()
    }

    #[inline]
    pub fn value(&self) -> bool {
        self.obj == registry::py_true()
    }

    #[inline]
    pub fn as_object(&self) -> ObjectRef {
        self.obj
    }

    #[inline]
    pub fn as_ptr(&self) -> *mut ObjectHeader {
        self.obj.as_ptr()
    }
}

impl Clone for BoolRef {
    #[inline]
    fn clone(&self) -> Self {
        Self::acquired(self.obj)
    }
}

impl Drop for BoolRef {
    #[inline]
    fn drop(&mut self) {
        unsafe { release(self.obj) };
    }
}

impl PartialEq for BoolRef {
    fn eq(&self, other: &Self) -> bool {
        self.obj == other.obj
    }
}

impl Eq for BoolRef {}

impl PartialEq<bool> for BoolRef {
    fn eq(&self, other: &bool) -> bool {
        self.value() == *other
    }
}

impl Hash for BoolRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.obj.hash(state);
    }
}

impl From<bool> for BoolRef {
    fn from(value: bool) -> Self {
        from_bool(value)
    }
}

impl From<&BoolRef> for bool {
    fn from(value: &BoolRef) -> Self {
        value.value()
    }
}

impl fmt::Display for BoolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.value() { "True" } else { "False" })
    }
}

impl fmt::Debug for BoolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoolRef({self})")
    }
}
