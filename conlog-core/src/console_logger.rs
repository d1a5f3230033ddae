use std::{
    fmt::Write as _,
    io,
    sync::{
        Arc, LazyLock, PoisonError, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use chrono::{Datelike, Timelike};

use crate::{
    config::CONLOG_CONFIG,
    host::{Host, SystemHost},
    level::Level,
    sink::Sink,
    thread_name::with_thread_name,
};

/// Process name of the shared instance.
pub const DEFAULT_PROCESS_NAME: &str = "default";

const RESET_COLOR: &str = "\x1B[0m";

/// Terminals on Windows do not always understand ANSI escapes.
const DEFAULT_USE_COLOR: bool = !cfg!(windows);

static INSTANCE: LazyLock<ConsoleLogger> = LazyLock::new(|| {
    let logger = ConsoleLogger::new(DEFAULT_PROCESS_NAME);
    CONLOG_CONFIG.apply(&logger);
    logger
});

/// Writes leveled messages as single lines to stdout (info and below) or
/// stderr (warnings and above).
///
/// A line looks like
/// `2024-03-05 07:08:09,045 I render[4242]: worker-1: message`, wrapped in the
/// level's color when color is enabled. Every line is rendered into its own
/// buffer first and handed to the sink in one write, so lines from different
/// threads never interleave.
pub struct ConsoleLogger {
    process_name: String,
    time_logging: AtomicBool,
    date_logging: AtomicBool,
    use_color: AtomicBool,
    out_sink: RwLock<Arc<dyn Sink>>,
    err_sink: RwLock<Arc<dyn Sink>>,
    host: Arc<dyn Host>,
}

impl ConsoleLogger {
    /// Creates a logger with date, time and (except on Windows) color enabled,
    /// writing to the process's stdout and stderr.
    ///
    /// An empty `process_name` turns off the whole prefix: lines are just the
    /// message.
    pub fn new(process_name: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
            time_logging: AtomicBool::new(true),
            date_logging: AtomicBool::new(true),
            use_color: AtomicBool::new(DEFAULT_USE_COLOR),
            out_sink: RwLock::new(Arc::new(io::stdout())),
            err_sink: RwLock::new(Arc::new(io::stderr())),
            host: Arc::new(SystemHost),
        }
    }

    /// Replaces the clock and process id source.
    pub fn with_host(self, host: impl Host + 'static) -> Self {
        Self {
            host: Arc::new(host),
            ..self
        }
    }

    /// The logger shared by the whole process, named [`DEFAULT_PROCESS_NAME`].
    ///
    /// Built on first use with the `CONLOG_*` environment settings applied.
    pub fn instance() -> &'static ConsoleLogger {
        &INSTANCE
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    pub fn enable_time_logging(&self, enable: bool) {
        self.time_logging.store(enable, Ordering::Relaxed);
    }

    pub fn enable_date_logging(&self, enable: bool) {
        self.date_logging.store(enable, Ordering::Relaxed);
    }

    pub fn enable_color(&self, enable: bool) {
        self.use_color.store(enable, Ordering::Relaxed);
    }

    pub fn time_logging_enabled(&self) -> bool {
        self.time_logging.load(Ordering::Relaxed)
    }

    pub fn date_logging_enabled(&self) -> bool {
        self.date_logging.load(Ordering::Relaxed)
    }

    pub fn color_enabled(&self) -> bool {
        self.use_color.load(Ordering::Relaxed)
    }

    /// Sink for `Info`, `Debug` and `Trace`. The previous sink is neither
    /// flushed nor closed.
    pub fn set_out_sink(&self, sink: Arc<dyn Sink>) {
        *self.out_sink.write().unwrap_or_else(PoisonError::into_inner) = sink;
    }

    /// Sink for `Fatal`, `Error` and `Warning`. The previous sink is neither
    /// flushed nor closed.
    pub fn set_err_sink(&self, sink: Arc<dyn Sink>) {
        *self.err_sink.write().unwrap_or_else(PoisonError::into_inner) = sink;
    }

    /// Logs `message` at `level`.
    ///
    /// Write errors are ignored: logging never fails the caller.
    pub fn log(&self, level: Level, message: &str) {
        let line = self.format_line(level, message);
        let sink = if level.is_error_stream() {
            &self.err_sink
        } else {
            &self.out_sink
        };
        let sink = Arc::clone(&sink.read().unwrap_or_else(PoisonError::into_inner));
        let _ = sink.write_flush(line.as_bytes());
    }

    fn format_line(&self, level: Level, message: &str) -> String {
        let mut line = String::with_capacity(message.len() + 80);
        if self.process_name.is_empty() {
            line.push_str(message);
            line.push('\n');
            return line;
        }

        let use_color = self.color_enabled();
        if use_color {
            let _ = write!(line, "\x1B[{}m", level.color().to_fg_str());
        }

        let date_logging = self.date_logging_enabled();
        let time_logging = self.time_logging_enabled();
        if date_logging || time_logging {
            // one reading for both, so date and time agree across midnight
            let now = self.host.local_time();
            if date_logging {
                let _ = write!(
                    line,
                    "{:04}-{:02}-{:02} ",
                    now.year(),
                    now.month(),
                    now.day()
                );
            }
            if time_logging {
                // nanosecond() exceeds 999_999_999 during a leap second
                let millis = (now.nanosecond() / 1_000_000).min(999);
                let _ = write!(
                    line,
                    "{:02}:{:02}:{:02},{:03} ",
                    now.hour(),
                    now.minute(),
                    now.second(),
                    millis
                );
            }
        }

        let _ = write!(
            line,
            "{}{}[{}]: ",
            level.tag(),
            self.process_name,
            self.host.process_id()
        );

        with_thread_name(|name| {
            if !name.is_empty() {
                line.push_str(name);
                line.push_str(": ");
            }
        });

        line.push_str(message);
        if use_color {
            line.push_str(RESET_COLOR);
        }
        line.push('\n');
        line
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        match record.args().as_str() {
            Some(message) => ConsoleLogger::log(self, level, message),
            None => ConsoleLogger::log(self, level, &record.args().to_string()),
        }
    }

    // every line is flushed when written
    fn flush(&self) {}
}
