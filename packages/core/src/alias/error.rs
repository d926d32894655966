//! Alias engine error types
//!
//! Errors that abort an add or remove command. Invalid aliases and
//! requests that change nothing are not errors; they show up in the
//! command's report instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::lock::LockError;

/// Errors that can occur while applying an alias command
#[derive(Error, Debug)]
pub enum AliasError {
    /// Action is not one of `add` or `remove`
    #[error("Unsupported action: {0} (expected 'add' or 'remove')")]
    Usage(String),

    /// Target host fails hostname validation
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    /// Alias file exists but could not be read
    #[error("Failed to {operation} {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// Alias file could not be written; the change was not persisted
    #[error("Failed to {operation} {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// Another process holds the alias file lock
    #[error(transparent)]
    Lock(#[from] LockError),
}

impl AliasError {
    pub(crate) fn read(
        path: impl Into<PathBuf>,
        operation: &'static str,
        source: io::Error,
    ) -> Self {
        Self::ConfigRead {
            path: path.into(),
            operation,
            source,
        }
    }

    pub(crate) fn write(
        path: impl Into<PathBuf>,
        operation: &'static str,
        source: io::Error,
    ) -> Self {
        Self::ConfigWrite {
            path: path.into(),
            operation,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_path_and_operation() {
        let err = AliasError::read(
            "/etc/dnsmasq.d/05-pihole-cname.conf",
            "open",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to open /etc/dnsmasq.d/05-pihole-cname.conf"));
    }

    #[test]
    fn write_error_keeps_source() {
        let err = AliasError::write("/tmp/x.conf", "replace", io::Error::other("disk full"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("disk full"));
    }
}
