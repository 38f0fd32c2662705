//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty console output
//! - Rolling JSON log files

pub mod logger;

pub use logger::{LoggerImpl, LOG_FILE_NAME};
