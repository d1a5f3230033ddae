use std::fmt;

use colored::Color;

/// Severity of a log line, from most severe (`Fatal`) to least severe (`Trace`).
///
/// The ordering follows severity: `Level::Fatal < Level::Error < ... < Level::Trace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
    /// Very verbose output, sometimes called "spam".
    Trace,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Fatal,
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Two-character tag written in front of the process name.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Fatal => "F ",
            Level::Error => "E ",
            Level::Warning => "W ",
            Level::Info => "I ",
            Level::Debug => "D ",
            Level::Trace => "T ",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Level::Fatal => Color::Red,
            Level::Error => Color::Yellow,
            Level::Warning => Color::Magenta,
            Level::Info => Color::Cyan,
            Level::Debug => Color::Green,
            Level::Trace => Color::Blue,
        }
    }

    /// Whether lines of this level go to the error sink.
    ///
    /// Anything more severe than [`Level::Info`] does, so a level inserted
    /// between `Warning` and `Info` would be routed by its position.
    pub fn is_error_stream(self) -> bool {
        self < Level::Info
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        };
        f.write_str(name)
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

#[test]
fn test_level_routing() {
    let err: Vec<_> = Level::ALL.into_iter().filter(|l| l.is_error_stream()).collect();
    assert_eq!(err, [Level::Fatal, Level::Error, Level::Warning]);
}

#[test]
fn test_level_tags_and_colors() {
    let tags: Vec<_> = Level::ALL.into_iter().map(Level::tag).collect();
    assert_eq!(tags, ["F ", "E ", "W ", "I ", "D ", "T "]);
    let codes: Vec<_> = Level::ALL
        .into_iter()
        .map(|l| l.color().to_fg_str().into_owned())
        .collect();
    assert_eq!(codes, ["31", "33", "35", "36", "32", "34"]);
}

#[test]
fn test_from_log_level() {
    assert_eq!(Level::from(log::Level::Warn), Level::Warning);
    assert_eq!(Level::from(log::Level::Trace), Level::Trace);
    assert!(Level::from(log::Level::Error).is_error_stream());
    assert!(!Level::from(log::Level::Info).is_error_stream());
}
