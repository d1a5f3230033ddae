//! Per-thread display names shown in front of the message.

use std::cell::RefCell;

thread_local! {
    static THREAD_NAME: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Sets the name written for lines logged from the current thread.
/// An empty name is the same as no name.
pub fn set_thread_name(name: &str) {
    THREAD_NAME.with(|current| {
        let mut current = current.borrow_mut();
        current.clear();
        current.push_str(name);
    });
}

pub fn clear_thread_name() {
    set_thread_name("");
}

/// Name registered for the current thread, empty if none.
pub fn thread_name() -> String {
    THREAD_NAME
        .try_with(|current| current.borrow().clone())
        .unwrap_or_default()
}

/// Runs `f` on the current thread's name without copying it.
/// During thread teardown the name reads as empty.
pub(crate) fn with_thread_name<F: FnOnce(&str)>(f: F) {
    let mut f = Some(f);
    let _ = THREAD_NAME.try_with(|current| {
        if let Ok(name) = current.try_borrow() {
            if let Some(f) = f.take() {
                f(&name);
            }
        }
    });
    if let Some(f) = f {
        f("");
    }
}

#[test]
fn test_thread_name_is_per_thread() {
    set_thread_name("main");
    std::thread::spawn(|| {
        assert_eq!(thread_name(), "");
        set_thread_name("worker-1");
        assert_eq!(thread_name(), "worker-1");
    })
    .join()
    .unwrap();
    assert_eq!(thread_name(), "main");
    clear_thread_name();
    assert_eq!(thread_name(), "");
}

#[test]
fn test_with_thread_name() {
    set_thread_name("worker-2");
    let mut seen = String::new();
    with_thread_name(|name| seen.push_str(name));
    assert_eq!(seen, "worker-2");
    clear_thread_name();
}
