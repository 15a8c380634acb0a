//! Reference counting primitive.
//!
//! Counts are atomic: native threads may acquire and release concurrently.
//! Immortal kinds never drop below [`IMMORTAL_FLOOR`]; a release that would
//! is clamped and handled per the configured [`UnderflowPolicy`].

use crate::config::{self, UnderflowPolicy};
use crate::object::ObjectRef;
use std::sync::atomic::{AtomicUsize, Ordering, fence};

/// Count an immortal object is created with and never goes below: the claim
/// held by its owner for the life of the process.
pub const IMMORTAL_FLOOR: isize = 1;

static CLAMPED_RELEASES: AtomicUsize = AtomicUsize::new(0);

#[inline]
pub fn incref(obj: ObjectRef) {
    obj.header().ob_refcnt.fetch_add(1, Ordering::Relaxed);
}

/// Gives up one counted claim on `obj`.
///
/// # Safety
/// The caller must hold the claim being released. For mortal kinds the
/// object may be deallocated before this returns, so `obj` (and every copy
/// of it) must not be used afterwards unless another claim is held.
#[inline]
pub unsafe fn decref(obj: ObjectRef) {
    let ty = obj.ob_type();
    if ty.is_immortal() {
        release_immortal(obj);
        return;
    }
    if obj.header().ob_refcnt.fetch_sub(1, Ordering::Release) != 1 {
        return;
    }
    fence(Ordering::Acquire);
    if let Some(dealloc) = ty.dealloc {
        unsafe { dealloc(obj) };
    }
}

/// Release path for immortal kinds. Never deallocates, so it is safe even for
/// a caller that over-releases.
#[inline]
pub fn release_immortal(obj: ObjectRef) {
    debug_assert!(obj.ob_type().is_immortal());
    let result = obj.header().ob_refcnt.fetch_update(
        Ordering::Release,
        Ordering::Relaxed,
        |n| if n > IMMORTAL_FLOOR { Some(n - 1) } else { None },
    );
    if let Err(observed) = result {
        clamped(obj, observed);
    }
}

#[cold]
#[inline(never)]
fn clamped(obj: ObjectRef, observed: isize) {
    let total = CLAMPED_RELEASES.fetch_add(1, Ordering::Relaxed) + 1;
    let kind = obj.ob_type().name;
    match config::current().underflow {
        UnderflowPolicy::Ignore => {}
        UnderflowPolicy::Warn => {
            tracing::warn!(kind, refcnt = observed, total, "clamped release of immortal object");
        }
        UnderflowPolicy::Assert => {
            tracing::warn!(kind, refcnt = observed, total, "clamped release of immortal object");
            debug_assert!(false, "release below the immortal floor of a `{kind}` object");
        }
    }
}

#[inline]
pub fn refcnt(obj: ObjectRef) -> isize {
    obj.refcnt()
}

/// Releases clamped at the immortal floor since process start, across all
/// immortal objects.
pub fn clamped_releases() -> usize {
    CLAMPED_RELEASES.load(Ordering::Relaxed)
}
