use crate::application::config::SiteConfig;
use once_cell::sync::OnceCell;

static SITE_CONFIG: OnceCell<SiteConfig> = OnceCell::new();

/// Installs the config for the page. Returns `false` if one was already installed.
pub fn install_site_config(config: SiteConfig) -> bool {
    SITE_CONFIG.set(config).is_ok()
}

/// Installed config, or the defaults if nothing was installed.
pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(SiteConfig::default)
}
