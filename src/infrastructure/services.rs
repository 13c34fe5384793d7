//! Browser-backed implementations of the domain services.

use crate::application::config::SiteConfig;
use crate::domain::errors::{AppError, ConfigResult};
use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Id of the optional `<script type="application/json">` holding config overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Writes log lines to the browser devtools console.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    fn format_entry(entry: &LogEntry) -> String {
        format!(
            "[{}] {} {} | {}",
            get_time_provider().format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let line = Self::format_entry(&entry);
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}

/// Wall clock from `Date.now()`.
#[derive(Default)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

/// Reads config overrides embedded in the page. No element means defaults.
pub fn load_embedded_config() -> ConfigResult<SiteConfig> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::EnvironmentError("document not available".to_string()))?;

    match document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|element| element.text_content()) {
        Some(json) if !json.trim().is_empty() => SiteConfig::from_json(&json),
        _ => Ok(SiteConfig::default()),
    }
}
