use ob_bool::registry::setup_count;
use ob_bool::{initialize, py_false, py_true};
use ob_core::TypeRegistry;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 32;

#[test]
fn racing_initializers_set_up_once() {
    assert_eq!(setup_count(), 0);

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                initialize();
                // Setup is visible to every caller once `initialize` returns.
                assert!(TypeRegistry::global().lookup("bool").is_some());
                (py_true().as_ptr() as usize, py_false().as_ptr() as usize)
            })
        })
        .collect();

    let seen: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(setup_count(), 1);
    assert!(seen.iter().all(|s| *s == seen[0]));
    assert_ne!(seen[0].0, seen[0].1);
    assert_eq!(seen[0].0, py_true().as_ptr() as usize);
}
