use wasm_bindgen::prelude::*;

use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod domain;
pub mod format_utils;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

/// Installs logging, loads the page config and mounts the site.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match infrastructure::services::load_embedded_config() {
        Ok(config) => (config, None),
        Err(e) => (application::SiteConfig::default(), Some(e)),
    };

    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));
    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new(config.log_level)));

    match config_error {
        Some(e @ AppError::EnvironmentError(_)) => {
            log_error!(LogComponent::Config("Loader"), "{}, using defaults", e)
        }
        Some(e) => log_warn!(LogComponent::Config("Loader"), "{}, using defaults", e),
        None => {}
    }
    log_info!(
        LogComponent::View("Initialize"),
        "mounting site: {} ticker entries, {} stat cards",
        config.ticker.seed.len(),
        config.stats.len()
    );

    global_state::install_site_config(config);
    leptos::mount_to_body(app::App);
}
