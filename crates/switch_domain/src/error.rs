use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Invalid file format in {}: {reason}", path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    #[error("Profile '{name}' does not exist. Available profiles: {}", format_names(available))]
    UnknownProfile { name: String, available: Vec<String> },

    #[error("Profile '{0}' already exists")]
    DuplicateName(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid env pair '{0}', expected KEY=VALUE")]
    InvalidEnvPair(String),
}

fn format_names(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

pub type Result<T> = std::result::Result<T, Error>;
