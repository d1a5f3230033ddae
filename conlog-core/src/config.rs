use std::sync::LazyLock;

use derive_from_env::FromEnv;

use crate::console_logger::ConsoleLogger;

/// Settings read from `CONLOG_*` environment variables.
///
/// Values are kept as text and parsed one by one, so a malformed variable
/// only falls back to its own default.
#[derive(FromEnv, Debug, Clone)]
#[from_env(prefix = "CONLOG")]
#[allow(non_snake_case)]
pub struct ConlogConfig {
    #[from_env(default = "true")]
    pub DATE: String,
    #[from_env(default = "true")]
    pub TIME: String,
    /// `auto`, `always` or `never`.
    #[from_env(default = "auto")]
    pub COLOR: String,
}

impl Default for ConlogConfig {
    fn default() -> Self {
        Self {
            DATE: "true".into(),
            TIME: "true".into(),
            COLOR: "auto".into(),
        }
    }
}

impl ConlogConfig {
    /// Reads the `CONLOG_*` variables, defaults when unreadable.
    pub fn load() -> Self {
        Self::from_env().unwrap_or_default()
    }

    pub fn date(&self) -> bool {
        parse_flag(&self.DATE).unwrap_or(true)
    }

    pub fn time(&self) -> bool {
        parse_flag(&self.TIME).unwrap_or(true)
    }

    /// `None` keeps the platform default.
    pub fn color(&self) -> Option<bool> {
        parse_color(&self.COLOR)
    }

    pub fn apply(&self, logger: &ConsoleLogger) {
        logger.enable_date_logging(self.date());
        logger.enable_time_logging(self.time());
        if let Some(color) = self.color() {
            logger.enable_color(color);
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_color(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "always" => Some(true),
        "never" => Some(false),
        other => parse_flag(other),
    }
}

pub static CONLOG_CONFIG: LazyLock<ConlogConfig> = LazyLock::new(ConlogConfig::load);

#[test]
fn test_parse_flag() {
    assert_eq!(parse_flag("0"), Some(false));
    assert_eq!(parse_flag(" Yes "), Some(true));
    assert_eq!(parse_flag("off"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn test_parse_color() {
    assert_eq!(parse_color("always"), Some(true));
    assert_eq!(parse_color(" Never "), Some(false));
    assert_eq!(parse_color("no"), Some(false));
    assert_eq!(parse_color("auto"), None);
    assert_eq!(parse_color("rainbow"), None);
}

#[test]
fn test_malformed_value_keeps_the_others() {
    let config = ConlogConfig {
        DATE: "maybe".into(),
        TIME: "0".into(),
        COLOR: "never".into(),
    };
    assert!(config.date());
    assert!(!config.time());
    assert_eq!(config.color(), Some(false));

    let logger = ConsoleLogger::new("cfg");
    config.apply(&logger);
    assert!(logger.date_logging_enabled());
    assert!(!logger.time_logging_enabled());
    assert!(!logger.color_enabled());
}

#[test]
fn test_apply_config() {
    let logger = ConsoleLogger::new("cfg");
    ConlogConfig {
        DATE: "false".into(),
        TIME: "true".into(),
        COLOR: "never".into(),
    }
    .apply(&logger);
    assert!(!logger.date_logging_enabled());
    assert!(logger.time_logging_enabled());
    assert!(!logger.color_enabled());

    // "auto" leaves the color setting alone
    ConlogConfig::default().apply(&logger);
    assert!(logger.date_logging_enabled());
    assert!(!logger.color_enabled());
}
