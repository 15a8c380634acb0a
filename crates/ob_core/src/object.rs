//! Object header and raw object handles.

use crate::types::TypeDescriptor;
use std::fmt;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicIsize, Ordering};

/// Common prefix of every object: reference count, then kind.
///
/// The layout matches what native callers expect at the start of an object,
/// so a pointer to any object can be read as a pointer to its header.
#[repr(C)]
pub struct ObjectHeader {
    pub ob_refcnt: AtomicIsize,
    pub ob_type: &'static TypeDescriptor,
}

impl ObjectHeader {
    pub const fn new(ty: &'static TypeDescriptor, refcnt: isize) -> Self {
        Self {
            ob_refcnt: AtomicIsize::new(refcnt),
            ob_type: ty,
        }
    }

    #[inline]
    pub fn refcnt(&self) -> isize {
        self.ob_refcnt.load(Ordering::Relaxed)
    }
}

impl fmt::Debug for ObjectHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectHeader")
            .field("ob_refcnt", &self.refcnt())
            .field("ob_type", &self.ob_type.name)
            .finish()
    }
}

/// Uncounted handle to a live object.
///
/// Holding an `ObjectRef` does not by itself keep the object alive; whoever
/// creates one vouches that the object outlives every use of the handle.
/// Equality is identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ObjectRef {
    ptr: NonNull<ObjectHeader>,
}

unsafe impl Send for ObjectRef {}
unsafe impl Sync for ObjectRef {}

impl ObjectRef {
    /// Returns `None` for null.
    ///
    /// # Safety
    /// A non-null `ptr` must point at a live object that stays live for as
    /// long as the returned handle is used.
    #[inline]
    pub unsafe fn from_ptr(ptr: *mut ObjectHeader) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    /// # Safety
    /// `ptr` must be non-null and point at a live object.
    #[inline]
    pub unsafe fn from_ptr_unchecked(ptr: *mut ObjectHeader) -> Self {
        debug_assert!(!ptr.is_null());
        Self {
            ptr: unsafe { NonNull::new_unchecked(ptr) },
        }
    }

    #[inline]
    pub fn from_static(header: &'static ObjectHeader) -> Self {
        Self {
            ptr: NonNull::from(header),
        }
    }

    #[inline]
    pub const fn as_ptr(self) -> *mut ObjectHeader {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn header(&self) -> &ObjectHeader {
        unsafe { self.ptr.as_ref() }
    }

    #[inline]
    pub fn ob_type(self) -> &'static TypeDescriptor {
        self.header().ob_type
    }

    #[inline]
    pub fn is_type(self, ty: &TypeDescriptor) -> bool {
        self.ob_type().is(ty)
    }

    #[inline]
    pub fn refcnt(self) -> isize {
        self.header().refcnt()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({} @ {:p})", self.ob_type().name, self.ptr)
    }
}
