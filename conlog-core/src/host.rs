use chrono::{Local, NaiveDateTime};

/// Where the logger gets the wall-clock time and the process id from.
pub trait Host: Send + Sync {
    /// Current local time. Called at most once per line.
    fn local_time(&self) -> NaiveDateTime;
    fn process_id(&self) -> u32;
}

/// The running process and the system clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl Host for SystemHost {
    fn local_time(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn process_id(&self) -> u32 {
        std::process::id()
    }
}

#[test]
fn test_system_host() {
    let before = Local::now().naive_local();
    let now = SystemHost.local_time();
    assert!(now >= before);
    assert_eq!(SystemHost.process_id(), std::process::id());
}
