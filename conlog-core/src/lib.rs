//! # conlog-core
//! Core of conlog - leveled console logger writing whole lines to stdout/stderr.

mod config;
mod console_logger;
mod host;
mod level;
mod sink;
pub mod thread_name;

pub use config::{CONLOG_CONFIG, ConlogConfig};
pub use console_logger::{ConsoleLogger, DEFAULT_PROCESS_NAME};
pub use host::{Host, SystemHost};
pub use level::Level;
pub use sink::Sink;
pub use thread_name::{clear_thread_name, set_thread_name, thread_name};
