use std::fmt;

use console::style;
use switch_domain::{ProfileCatalog, Settings};

use crate::UNSET;

const CURRENT_MARKER: &str = "*";

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub name: String,
    pub model: Option<String>,
    pub is_current: bool,
}

/// Catalog listing in stored order, marking the profile that matches the
/// live settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileList {
    pub rows: Vec<ProfileRow>,
}

impl ProfileList {
    pub fn new(settings: &Settings, catalog: &ProfileCatalog) -> Self {
        let current = catalog.find_current(settings);
        let rows = catalog
            .iter()
            .map(|(name, profile)| ProfileRow {
                name: name.to_string(),
                model: profile.effective_model().map(str::to_string),
                is_current: current == Some(name),
            })
            .collect();
        Self { rows }
    }
}

impl fmt::Display for ProfileList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No profiles configured");
        }

        let width = self.rows.iter().map(|row| row.name.chars().count()).max().unwrap_or(0);
        for row in &self.rows {
            let model = row.model.as_deref().unwrap_or(UNSET);
            if row.is_current {
                let name = format!("{:width$}", row.name);
                writeln!(f, "{CURRENT_MARKER} {}  {}", style(name).green().bold(), model)?;
            } else {
                writeln!(f, "  {:width$}  {}", row.name, style(model).dim())?;
            }
        }
        Ok(())
    }
}
