//! Owner of the two boolean singletons.
//!
//! `TRUE` and `FALSE` are built at compile time, so their addresses are fixed
//! before any code runs. Initialization only installs the runtime config and
//! registers the `bool` kind.

use ob_core::config::{self, RuntimeConfig};
use ob_core::{BOOL_TYPE, IMMORTAL_FLOOR, ObjectHeader, ObjectRef, TypeRegistry};
use once_cell::sync::OnceCell;
use std::fmt;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A boolean object: the common header followed by its fixed truth value.
#[repr(C)]
pub struct BoolObject {
    pub ob_base: ObjectHeader,
    value: bool,
}

impl BoolObject {
    const fn new(value: bool) -> Self {
        Self {
            ob_base: ObjectHeader::new(&BOOL_TYPE, IMMORTAL_FLOOR),
            value,
        }
    }

    #[inline]
    pub fn value(&self) -> bool {
        self.value
    }

    #[inline]
    pub fn as_object(&'static self) -> ObjectRef {
        let header = ptr::from_ref(self).cast_mut().cast::<ObjectHeader>();
        unsafe { ObjectRef::from_ptr_unchecked(header) }
    }
}

impl fmt::Debug for BoolObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolObject")
            .field("value", &self.value)
            .field("ob_refcnt", &self.ob_base.refcnt())
            .finish()
    }
}

pub static TRUE: BoolObject = BoolObject::new(true);
pub static FALSE: BoolObject = BoolObject::new(false);

static SETUP: OnceCell<()> = OnceCell::new();
static SETUP_RUNS: AtomicUsize = AtomicUsize::new(0);

/// Initializes with configuration read from the environment.
///
/// An unreadable configuration falls back to the defaults.
pub fn initialize() {
    if SETUP.get().is_some() {
        return;
    }
    let config = RuntimeConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default runtime config");
        RuntimeConfig::default()
    });
    initialize_with(config);
}

/// Idempotent: only the first call installs `config`; concurrent callers wait
/// for it to finish. Reference counts are never touched.
pub fn initialize_with(config: RuntimeConfig) {
    let mut fresh = false;
    SETUP.get_or_init(|| {
        fresh = true;
        setup(config);
    });
    if !fresh && config != config::current() {
        tracing::debug!(?config, "boolean registry already initialized, config ignored");
    }
}

#[cold]
fn setup(config: RuntimeConfig) {
    if !config::install(config) {
        tracing::debug!(active = ?config::current(), "runtime config was installed earlier");
    }
    if let Err(err) = TypeRegistry::global().register(&BOOL_TYPE) {
        tracing::warn!(%err, "bool kind not registered");
    }
    SETUP_RUNS.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(underflow = ?config::current().underflow, "boolean registry initialized");
}

/// Identity of `True`. Does not acquire.
#[inline]
pub fn py_true() -> ObjectRef {
    initialize();
    TRUE.as_object()
}

/// Identity of `False`. Does not acquire.
#[inline]
pub fn py_false() -> ObjectRef {
    initialize();
    FALSE.as_object()
}

/// How many times initialization took effect in this process: 0 before first
/// use, 1 after.
pub fn setup_count() -> usize {
    SETUP_RUNS.load(Ordering::SeqCst)
}
