use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Before `init_config()` runs, in-memory
/// defaults are returned without being stored.
pub fn get_config() -> Arc<StaticConfig> {
    match CONFIG.get() {
        Some(config) => config.load_full(),
        None => Arc::new(StaticConfig::default()),
    }
}

/// Initialize the global configuration
///
/// Loads configuration from "config.toml" in the current directory,
/// then applies `PS__*` environment overrides.
///
/// # Examples
/// ```no_run
/// use page_stats::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load()));
}
