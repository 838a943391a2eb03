use std::sync::{Arc, OnceLock};

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to [`StaticConfig::load`] with the default path when
/// [`init_config`] was never called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| Arc::new(StaticConfig::load(None)))
        .clone()
}

/// Initialize the global configuration
///
/// `path` overrides the default `compactor.toml` and must point at a
/// readable, valid file; errors are returned instead of falling back to
/// defaults. Without `path` the default file is optional. Only the first
/// successful call has any effect.
///
/// # Examples
/// ```no_run
/// use url_compactor::config::init_config;
/// let config = init_config(Some("compactor.toml")).unwrap();
/// ```
pub fn init_config(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    if let Some(config) = CONFIG.get() {
        return Ok(config.clone());
    }

    let config = match path {
        Some(path) => StaticConfig::try_load(Some(path))?,
        None => StaticConfig::load(None),
    };
    Ok(CONFIG.get_or_init(|| Arc::new(config)).clone())
}
