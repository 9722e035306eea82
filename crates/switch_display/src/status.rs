use std::fmt;

use console::style;
use switch_domain::{BASE_URL_KEY, ProfileCatalog, Settings, redact};

use crate::UNSET;

/// Summary of the live settings: which profile is active, the effective
/// model and the redacted credential.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub current: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    /// Credential label and its redacted value
    pub credential: Option<(String, String)>,
}

impl StatusView {
    pub fn new(settings: &Settings, catalog: &ProfileCatalog) -> Self {
        Self {
            current: catalog.find_current(settings).map(str::to_string),
            base_url: settings.env.get(BASE_URL_KEY).cloned(),
            model: settings.effective_model().map(str::to_string),
            credential: settings
                .credential()
                .map(|(kind, secret)| (kind.to_string(), redact(secret))),
        }
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.current {
            Some(name) => writeln!(f, "Current profile: {}", style(name).green().bold())?,
            None => writeln!(
                f,
                "Current profile: {}",
                style("none (settings do not match any profile)").yellow()
            )?,
        }
        writeln!(f, "Base URL: {}", self.base_url.as_deref().unwrap_or(UNSET))?;
        writeln!(f, "Model: {}", self.model.as_deref().unwrap_or(UNSET))?;
        match &self.credential {
            Some((label, value)) => writeln!(f, "{label}: {value}"),
            None => writeln!(f, "Credential: {UNSET}"),
        }
    }
}
