use std::path::{Path, PathBuf};

use derive_setters::Setters;

/// Locations of the two documents managed by the tool.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
#[setters(into)]
pub struct SwitchConfig {
    /// Live settings document read by the API client
    pub settings_path: PathBuf,
    /// Profile catalog document
    pub profiles_path: PathBuf,
}

impl SwitchConfig {
    pub fn new(settings_path: impl Into<PathBuf>, profiles_path: impl Into<PathBuf>) -> Self {
        Self { settings_path: settings_path.into(), profiles_path: profiles_path.into() }
    }

    /// Default layout under the given home directory:
    /// `~/.claude/settings.json` and `~/.claude-switch/profiles.toml`.
    pub fn from_home(home: &Path) -> Self {
        Self::new(
            home.join(".claude").join("settings.json"),
            home.join(".claude-switch").join("profiles.toml"),
        )
    }
}
