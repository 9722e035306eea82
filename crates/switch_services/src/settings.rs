use std::sync::Arc;

use switch_domain::{Settings, SwitchConfig};
use tracing::debug;

use crate::document;

/// Loads and saves the live settings document (JSON).
pub struct SettingsStore {
    config: Arc<SwitchConfig>,
}

impl SettingsStore {
    pub fn new(config: Arc<SwitchConfig>) -> Self {
        Self { config }
    }

    pub fn load(&self) -> anyhow::Result<Settings> {
        let path = &self.config.settings_path;
        let content = document::read(path)?;
        let settings =
            serde_json::from_str(&content).map_err(|err| document::malformed(path, err))?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        let path = &self.config.settings_path;
        let mut content = serde_json::to_string_pretty(settings)?;
        content.push('\n');
        document::write_atomic(path, &content)?;
        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }
}
