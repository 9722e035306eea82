use std::sync::Arc;

use switch_domain::{AddProfile, Error, ProfileCatalog, Settings, SwitchConfig};
use tracing::info;

use crate::{Confirm, InitOutcome, ProfileStore, SettingsStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Applies profile commands to the catalog and the live settings.
///
/// Each operation validates fully before the first write, so a failed
/// command leaves both documents as they were.
pub struct ProfileSwitcher<C> {
    settings: SettingsStore,
    profiles: ProfileStore,
    confirm: C,
}

impl<C: Confirm> ProfileSwitcher<C> {
    pub fn new(config: Arc<SwitchConfig>, confirm: C) -> Self {
        Self {
            settings: SettingsStore::new(config.clone()),
            profiles: ProfileStore::new(config),
            confirm,
        }
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    /// Live settings together with the catalog, for status and listing.
    pub fn snapshot(&self) -> anyhow::Result<(Settings, ProfileCatalog)> {
        Ok((self.settings.load()?, self.profiles.load()?))
    }

    pub fn init(&self) -> anyhow::Result<InitOutcome> {
        self.profiles.init(|| self.settings.load())
    }

    /// Writes the named profile into the live settings.
    pub fn use_profile(&self, name: &str) -> anyhow::Result<()> {
        let catalog = self.profiles.load()?;
        let profile = catalog.get(name)?;

        let mut settings = self.settings.load()?;
        settings.apply(profile);
        self.settings.save(&settings)?;

        info!(profile = name, "Switched profile");
        Ok(())
    }

    /// Adds a new profile and optionally activates it right away.
    pub fn add(&self, name: &str, request: &AddProfile, activate: bool) -> anyhow::Result<()> {
        let profile = request.build()?;

        let mut catalog = self.profiles.load()?;
        catalog.insert(name, profile)?;

        // Settings are read before the catalog is written so a broken settings
        // file cannot leave a half-applied `add --use` behind.
        let settings = if activate {
            let mut settings = self.settings.load()?;
            settings.apply(catalog.get(name)?);
            Some(settings)
        } else {
            None
        };

        self.profiles.save(&catalog)?;
        info!(profile = name, "Added profile");

        if let Some(settings) = settings {
            self.settings.save(&settings)?;
            info!(profile = name, "Switched profile");
        }
        Ok(())
    }

    /// Removes a profile. Without `force` the user has to confirm; declining
    /// is not an error.
    pub fn delete(&self, name: &str, force: bool) -> anyhow::Result<DeleteOutcome> {
        let mut catalog = self.profiles.load()?;
        if !catalog.contains(name) {
            return Err(Error::UnknownProfile { name: name.to_string(), available: catalog.names() }
                .into());
        }

        if !force && !self.confirm.confirm(&format!("Delete profile '{name}'?"))? {
            info!(profile = name, "Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        catalog.remove(name)?;
        self.profiles.save(&catalog)?;
        info!(profile = name, "Deleted profile");
        Ok(DeleteOutcome::Deleted)
    }
}
