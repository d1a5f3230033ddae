//! Runs in its own binary: installs a `log` backend before conlog does.

use std::sync::{Arc, Mutex};

use conlog::{ConsoleLogger, logger_config};

struct Collect(Mutex<Vec<String>>);

impl log::Log for Collect {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.0.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static COLLECT: Collect = Collect(Mutex::new(Vec::new()));

#[test]
fn test_init_global_keeps_existing_backend() {
    log::set_logger(&COLLECT).unwrap();
    log::set_max_level(log::LevelFilter::Info);

    let out = Arc::new(Mutex::new(Vec::<u8>::new()));
    let logger = logger_config()
        .with_date(false)
        .with_time(false)
        .with_color(false)
        .with_out_sink(out.clone())
        .init_global();
    assert!(std::ptr::eq(logger, ConsoleLogger::instance()));
    assert_eq!(log::max_level(), log::LevelFilter::Info);

    log::info!("to the first backend");
    assert_eq!(*COLLECT.0.lock().unwrap(), ["to the first backend"]);
    assert!(out.lock().unwrap().is_empty());

    // the shared instance is still configured and usable directly
    logger.log(conlog::Level::Info, "direct");
    assert_eq!(
        String::from_utf8(out.lock().unwrap().clone()).unwrap(),
        format!("I default[{}]: direct\n", std::process::id())
    );
}
