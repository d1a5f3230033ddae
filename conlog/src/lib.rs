//! # conlog
//! Thread-safe console logger with per-level colors and stdout/stderr routing.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! conlog = "0.1.0"
//! ```
//!
//! ```rust
//! use conlog::{ConsoleLogger, Level};
//!
//! let logger = ConsoleLogger::new("render");
//! logger.log(Level::Info, "frame 1 done");   // stdout
//! logger.log(Level::Error, "disk full");     // stderr
//! ```
//!
//! ## Through the `log` macros
//! The process-wide instance is named `default`. `init_global` makes it the
//! backend of the `log` crate.
//! ```rust
//! use conlog::logger_config;
//!
//! logger_config()
//!     .with_date(false)
//!     .init_global();
//! log::info!("Hello, world!");
//! log::warn!("this one goes to stderr");
//! ```
//!
//! ## Thread names and custom sinks
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use conlog::{logger_config, set_thread_name, Level};
//!
//! let out = Arc::new(Mutex::new(Vec::<u8>::new()));
//! let logger = logger_config()
//!     .with_date(false)
//!     .with_time(false)
//!     .with_color(false)
//!     .with_out_sink(out.clone())
//!     .build("render");
//! std::thread::scope(|s| {
//!     s.spawn(|| {
//!         set_thread_name("worker-1");
//!         logger.log(Level::Info, "tile 3 done");
//!     });
//! });
//! let text = String::from_utf8(out.lock().unwrap().clone()).unwrap();
//! assert_eq!(text, format!("I render[{}]: worker-1: tile 3 done\n", std::process::id()));
//! ```
//!
//! ## Environment
//! `CONLOG_DATE`, `CONLOG_TIME` (`true`/`false`, `1`/`0`, `yes`/`no`) and
//! `CONLOG_COLOR` (`auto`/`always`/`never`) set the defaults of the shared
//! instance and of [`logger_config`]. A value that does not parse keeps its
//! default.

use std::sync::Arc;

use log::LevelFilter;

pub use conlog_core::{
    CONLOG_CONFIG, ConlogConfig, ConsoleLogger, DEFAULT_PROCESS_NAME, Host, Level, Sink,
    SystemHost, clear_thread_name, set_thread_name, thread_name,
};

/// Builder for configuring a [`ConsoleLogger`].
pub struct ConfigBuilder {
    date: bool,
    time: bool,
    color: Option<bool>,
    out_sink: Option<Arc<dyn Sink>>,
    err_sink: Option<Arc<dyn Sink>>,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            date: CONLOG_CONFIG.date(),
            time: CONLOG_CONFIG.time(),
            color: CONLOG_CONFIG.color(),
            out_sink: None,
            err_sink: None,
        }
    }
}

impl ConfigBuilder {
    fn configure(self, logger: &ConsoleLogger) {
        let Self {
            date,
            time,
            color,
            out_sink,
            err_sink,
        } = self;
        logger.enable_date_logging(date);
        logger.enable_time_logging(time);
        if let Some(color) = color {
            logger.enable_color(color);
        }
        if let Some(sink) = out_sink {
            logger.set_out_sink(sink);
        }
        if let Some(sink) = err_sink {
            logger.set_err_sink(sink);
        }
    }

    /// Show the date.
    pub fn with_date(self, yes: bool) -> Self {
        Self { date: yes, ..self }
    }
    /// Show the time of day, with milliseconds.
    pub fn with_time(self, yes: bool) -> Self {
        Self { time: yes, ..self }
    }
    /// Force color on or off instead of the platform default.
    pub fn with_color(self, yes: bool) -> Self {
        Self {
            color: Some(yes),
            ..self
        }
    }
    /// Sets the sink for info, debug and trace lines.
    pub fn with_out_sink(self, sink: Arc<dyn Sink>) -> Self {
        Self {
            out_sink: Some(sink),
            ..self
        }
    }
    /// Sets the sink for fatal, error and warning lines.
    pub fn with_err_sink(self, sink: Arc<dyn Sink>) -> Self {
        Self {
            err_sink: Some(sink),
            ..self
        }
    }
    /// Builds an independent logger.
    pub fn build(self, process_name: &str) -> ConsoleLogger {
        let logger = ConsoleLogger::new(process_name);
        self.configure(&logger);
        logger
    }
    /// Configures the shared instance and routes the `log` macros to it.
    /// If another `log` backend is already installed it is left in place.
    pub fn init_global(self) -> &'static ConsoleLogger {
        let logger = ConsoleLogger::instance();
        self.configure(logger);
        if log::set_logger(logger).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
        logger
    }
}

/// Returns a default ConfigBuilder for configuring the logger.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}
