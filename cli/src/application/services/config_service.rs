//! Application service: configuration use-cases.

use crate::application::ports::ConfigStore;
use crate::domain::config::HostkeysConfig;
use anyhow::Result;

/// Load configuration.
pub fn load_config(store: &impl ConfigStore) -> Result<HostkeysConfig> {
    store.load()
}

/// Save configuration.
pub fn save_config(store: &impl ConfigStore, config: &HostkeysConfig) -> Result<()> {
    store.save(config)
}

/// Validate and apply `key = value`, then persist. Nothing is written when
/// validation fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<HostkeysConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
