use std::io::Write;
use std::path::Path;
use std::{fs, io};

use anyhow::Context;
use switch_domain::Error;
use tempfile::NamedTempFile;

/// Reads a document that must already exist.
pub(crate) fn read(path: &Path) -> anyhow::Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(Error::MissingFile { path: path.to_path_buf() }.into())
        }
        Err(err) => Err(err).with_context(|| format!("Failed to read {}", path.display())),
    }
}

pub(crate) fn malformed(path: &Path, reason: impl ToString) -> anyhow::Error {
    Error::MalformedDocument { path: path.to_path_buf(), reason: reason.to_string() }.into()
}

/// Replaces `path` with `content` through a sibling temp file, so an
/// interrupted write never leaves a truncated document behind. Missing
/// parent directories are created.
pub(crate) fn write_atomic(path: &Path, content: &str) -> anyhow::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;

    let mut file = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.as_file()
        .sync_all()
        .with_context(|| format!("Failed to sync {}", path.display()))?;
    file.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}
