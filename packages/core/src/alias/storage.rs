//! Alias file storage
//!
//! Reads the alias file into an [`AliasStore`] and writes a store back in
//! record-line form.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::error::AliasError;
use super::record::{format_line, parse_line};
use super::store::AliasStore;
use crate::config::paths::backup_path_for;
use crate::hostname::is_valid_hostname;

/// Build a store from alias file contents
///
/// Lines that aren't records are skipped. Records with an invalid host, and
/// invalid aliases within a record, are skipped with a warning. Repeated hosts accumulate their aliases.
pub fn parse_store(contents: &str) -> AliasStore {
    let mut store = AliasStore::new();

    for (number, line) in contents.lines().enumerate() {
        let Some(record) = parse_line(line) else {
            continue;
        };

        if !is_valid_hostname(&record.host) {
            tracing::warn!(
                "Skipping line {}: invalid hostname {}",
                number + 1,
                record.host
            );
            continue;
        }

        let report = store.merge(&record.host, &record.aliases);
        for alias in &report.invalid {
            tracing::warn!("Line {}: ignoring invalid alias {}", number + 1, alias);
        }
    }

    store
}

/// Render a store as alias file contents
///
/// Entries without aliases are left out. Entry order is kept as is; callers
/// canonicalize first.
pub fn render_store(store: &AliasStore) -> String {
    store
        .entries()
        .iter()
        .filter_map(format_line)
        .map(|line| line + "\n")
        .collect()
}

/// Load the alias file
///
/// Returns an empty store if the file doesn't exist. Bytes that aren't valid
/// UTF-8 are replaced, so such lines fail the record match and are skipped.
pub fn read_store(path: &Path) -> Result<AliasStore, AliasError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Alias file not found, starting empty: {}", path.display());
            return Ok(AliasStore::new());
        }
        Err(e) => return Err(AliasError::read(path, "read", e)),
    };

    let store = parse_store(&String::from_utf8_lossy(&bytes));
    tracing::debug!("Loaded {} hosts from {}", store.len(), path.display());
    Ok(store)
}

/// Replace the alias file with the rendered store
///
/// The new contents go to a temporary file next to the target which is then
/// renamed over it, so a failed write leaves the previous file intact. With
/// `backup` set, the previous file is first copied to its hidden `.bak`
/// sibling. A symlinked alias file is written through to its target, and an
/// existing file keeps its mode and ownership.
pub fn write_store(path: &Path, store: &AliasStore, backup: bool) -> Result<(), AliasError> {
    let path = resolve_target(path)?;
    let path = path.as_path();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| AliasError::write(dir, "create directory", e))?;
    }

    let existing = match fs::metadata(path) {
        Ok(metadata) => Some(metadata),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(AliasError::write(path, "inspect", e)),
    };

    if backup && existing.is_some() {
        let backup_path = backup_path_for(path);
        fs::copy(path, &backup_path)
            .map_err(|e| AliasError::write(&backup_path, "create backup", e))?;
        tracing::debug!("Created alias file backup: {}", backup_path.display());
    }

    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| AliasError::write(dir, "create temporary file in", e))?;

    if let Err(e) = write_contents(&mut temp, &render_store(store)) {
        return Err(AliasError::write(temp.path(), "write", e));
    }

    let permissions = match &existing {
        Some(metadata) => metadata.permissions(),
        None => default_permissions(&temp)?,
    };
    fs::set_permissions(temp.path(), permissions)
        .map_err(|e| AliasError::write(temp.path(), "set permissions on", e))?;

    if let Some(metadata) = &existing {
        copy_ownership(&temp, metadata);
    }

    temp.persist(path)
        .map_err(|e| AliasError::write(path, "replace", e.error))?;

    tracing::debug!("Saved {} hosts to {}", store.len(), path.display());
    Ok(())
}

/// The file a write should replace: the symlink target when `path` is a
/// link, otherwise `path` itself
fn resolve_target(path: &Path) -> Result<PathBuf, AliasError> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => {
            let target = fs::canonicalize(path).map_err(|e| AliasError::write(path, "resolve", e))?;
            tracing::debug!("Writing through symlink {} to {}", path.display(), target.display());
            Ok(target)
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn write_contents(temp: &mut NamedTempFile, contents: &str) -> io::Result<()> {
    temp.write_all(contents.as_bytes())?;
    temp.flush()?;
    temp.as_file().sync_all()
}

/// Give the replacement file the owner and group of the file it replaces
#[cfg(unix)]
fn copy_ownership(temp: &NamedTempFile, existing: &fs::Metadata) {
    use std::os::unix::fs::{MetadataExt, chown};

    let current = match temp.as_file().metadata() {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::warn!("Failed to inspect {}: {}", temp.path().display(), e);
            return;
        }
    };
    if current.uid() == existing.uid() && current.gid() == existing.gid() {
        return;
    }
    if let Err(e) = chown(temp.path(), Some(existing.uid()), Some(existing.gid())) {
        tracing::warn!(
            "Failed to keep owner {}:{} on alias file: {}",
            existing.uid(),
            existing.gid(),
            e
        );
    }
}

#[cfg(not(unix))]
fn copy_ownership(_temp: &NamedTempFile, _existing: &fs::Metadata) {}

/// World-readable permissions for a freshly created alias file
#[cfg(unix)]
fn default_permissions(_temp: &NamedTempFile) -> Result<fs::Permissions, AliasError> {
    use std::os::unix::fs::PermissionsExt;
    Ok(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(temp: &NamedTempFile) -> Result<fs::Permissions, AliasError> {
    temp.as_file()
        .metadata()
        .map(|m| m.permissions())
        .map_err(|e| AliasError::write(temp.path(), "inspect", e))
}
