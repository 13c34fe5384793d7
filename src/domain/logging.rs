use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Log levels with automatic Display implementation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

/// Where a log line comes from
#[derive(Debug, Clone, Display)]
pub enum LogComponent {
    #[display(fmt = "ANI:{}", _0)]
    Animator(&'static str),
    #[display(fmt = "SCH:{}", _0)]
    Scheduler(&'static str),
    #[display(fmt = "CFG:{}", _0)]
    Config(&'static str),
    #[display(fmt = "VIE:{}", _0)]
    View(&'static str),
}

/// Structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
}

/// Source of wall-clock timestamps for log lines
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Structured logging sink
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn trace(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Trace, component, message));
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message));
    }
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
        }
    }
}

use std::sync::OnceLock;
static GLOBAL_LOGGER: OnceLock<Box<dyn Logger + Sync + Send>> = OnceLock::new();
static GLOBAL_TIME_PROVIDER: OnceLock<Box<dyn TimeProvider + Sync + Send>> = OnceLock::new();

/// Install the global logger. Later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger + Sync + Send>) {
    let _ = GLOBAL_LOGGER.set(logger);
}

/// Install the global time provider. Later calls are ignored.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider + Sync + Send>) {
    let _ = GLOBAL_TIME_PROVIDER.set(time_provider);
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER.get().map(|provider| provider.as_ref()).unwrap_or(&SequenceTimeProvider)
}

struct NoOpLogger;
impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Monotonic counter used until a real clock is installed
struct SequenceTimeProvider;
impl TimeProvider for SequenceTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("#{:06}", timestamp)
    }
}

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::Logger::trace(
            $crate::domain::logging::get_logger(),
            $component,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::Logger::debug(
            $crate::domain::logging::get_logger(),
            $component,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::Logger::info(
            $crate::domain::logging::get_logger(),
            $component,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::Logger::warn(
            $crate::domain::logging::get_logger(),
            $component,
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::Logger::error(
            $crate::domain::logging::get_logger(),
            $component,
            &format!($($arg)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn level_parses_from_config_names() {
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn component_display_is_prefixed() {
        assert_eq!(LogComponent::Animator("Typing").to_string(), "ANI:Typing");
        assert_eq!(LogComponent::Config("Loader").to_string(), "CFG:Loader");
    }
}
