use std::sync::Arc;

use switch_domain::{Profile, ProfileCatalog, Settings, SwitchConfig};
use tracing::{debug, info};

use crate::document;

/// Name of the profile seeded by `init`.
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

/// Loads and saves the profile catalog (TOML).
pub struct ProfileStore {
    config: Arc<SwitchConfig>,
}

impl ProfileStore {
    pub fn new(config: Arc<SwitchConfig>) -> Self {
        Self { config }
    }

    pub fn exists(&self) -> bool {
        self.config.profiles_path.exists()
    }

    pub fn load(&self) -> anyhow::Result<ProfileCatalog> {
        let path = &self.config.profiles_path;
        let content = document::read(path)?;
        let catalog: ProfileCatalog =
            toml::from_str(&content).map_err(|err| document::malformed(path, err))?;
        debug!(path = %path.display(), profiles = catalog.len(), "Loaded profiles");
        Ok(catalog)
    }

    pub fn save(&self, catalog: &ProfileCatalog) -> anyhow::Result<()> {
        let path = &self.config.profiles_path;
        let content = toml::to_string_pretty(catalog)?;
        document::write_atomic(path, &content)?;
        debug!(path = %path.display(), profiles = catalog.len(), "Saved profiles");
        Ok(())
    }

    /// Seeds a catalog holding a single `default` profile copied from the
    /// live settings. An existing catalog is left alone and the settings are
    /// not read.
    pub fn init(
        &self,
        load_settings: impl FnOnce() -> anyhow::Result<Settings>,
    ) -> anyhow::Result<InitOutcome> {
        if self.exists() {
            return Ok(InitOutcome::AlreadyExists);
        }

        let settings = load_settings()?;
        let mut catalog = ProfileCatalog::new();
        catalog.insert(DEFAULT_PROFILE, Profile::from_settings(&settings))?;
        self.save(&catalog)?;
        info!(path = %self.config.profiles_path.display(), "Created profile catalog");
        Ok(InitOutcome::Created)
    }
}
