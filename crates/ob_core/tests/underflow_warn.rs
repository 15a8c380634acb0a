use ob_core::config;
use ob_core::refcount;
use ob_core::{
    IMMORTAL_FLOOR, ObjectHeader, ObjectRef, RuntimeConfig, TypeDescriptor, TypeFlags,
    UnderflowPolicy,
};
use tracing_test::traced_test;

static SENTINEL_TYPE: TypeDescriptor = TypeDescriptor::new("sentinel", TypeFlags::IMMORTAL, None);
static SENTINEL: ObjectHeader = ObjectHeader::new(&SENTINEL_TYPE, IMMORTAL_FLOOR);

#[test]
#[traced_test]
fn warn_policy_logs_and_clamps() {
    let warn = RuntimeConfig {
        underflow: UnderflowPolicy::Warn,
    };
    assert!(config::install(warn));
    // Later installs lose.
    assert!(!config::install(RuntimeConfig::default()));
    assert_eq!(config::current(), warn);

    let obj = ObjectRef::from_static(&SENTINEL);
    refcount::incref(obj);
    unsafe { refcount::decref(obj) };
    assert!(!logs_contain("clamped release"));

    unsafe { refcount::decref(obj) };
    assert_eq!(refcount::refcnt(obj), IMMORTAL_FLOOR);
    assert_eq!(refcount::clamped_releases(), 1);
    assert!(logs_contain("clamped release of immortal object"));
    assert!(logs_contain("sentinel"));
}
