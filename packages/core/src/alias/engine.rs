//! Alias command orchestration
//!
//! Ties validation, locking, reading, mutation, ordering and writing together
//! for a single add or remove command. Each call starts from a fresh read of
//! the alias file; nothing is cached between calls.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::error::AliasError;
use super::report::ChangeReport;
use super::storage::{read_store, write_store};
use super::store::{AliasStore, HostAliasEntry, RemovalPolicy};
use crate::config::Settings;
use crate::hostname::{is_valid_hostname, normalize};
use crate::lock::ConfigLock;

/// A mutating alias command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
}

/// Parses an action name for library callers that take the action as text.
///
/// The CLI dispatches through clap subcommands instead; anything other than
/// `add` or `remove` (ASCII case-insensitive) is [`AliasError::Usage`].
impl FromStr for Action {
    type Err = AliasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            _ => Err(AliasError::Usage(s.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// How a successful command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The store changed and the alias file was rewritten
    Written,
    /// Nothing needed changing; the alias file was not touched
    NoChanges,
    /// Removal target has no entry; the alias file was not touched
    HostNotFound,
}

/// Result of a successful add or remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Normalized target host
    pub host: String,
    pub status: Status,
    pub report: ChangeReport,
}

impl Outcome {
    /// Whether the alias file was rewritten
    pub fn changed(&self) -> bool {
        self.status == Status::Written
    }
}

/// Applies alias commands to one alias file
#[derive(Debug, Clone)]
pub struct Engine {
    path: PathBuf,
    backup: bool,
    removal_policy: RemovalPolicy,
}

impl Engine {
    /// Engine for the alias file at `path` with default behaviour
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: true,
            removal_policy: RemovalPolicy::default(),
        }
    }

    /// Engine configured from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.cname_file_path())
            .with_backup(settings.backup)
            .with_removal_policy(settings.removal_policy)
    }

    /// Builder pattern: set alias file path
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Builder pattern: set whether to keep a backup of the previous file
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    /// Builder pattern: set removal policy
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup(&self) -> bool {
        self.backup
    }

    pub fn removal_policy(&self) -> RemovalPolicy {
        self.removal_policy
    }

    /// Add a comma-separated alias list to `host`
    pub fn add(&self, host: &str, aliases: &str) -> Result<Outcome, AliasError> {
        self.apply(Action::Add, host, aliases)
    }

    /// Remove a comma-separated alias list from `host`
    pub fn remove(&self, host: &str, aliases: &str) -> Result<Outcome, AliasError> {
        self.apply(Action::Remove, host, aliases)
    }

    /// Run one command against the alias file
    ///
    /// The target host is validated before the file is touched. The file lock
    /// is held from the read until the write finishes (or the command ends
    /// without writing).
    pub fn apply(&self, action: Action, host: &str, aliases: &str) -> Result<Outcome, AliasError> {
        let host = normalize(host);
        if !is_valid_hostname(&host) {
            return Err(AliasError::InvalidHostname(host));
        }

        let _lock = ConfigLock::for_file(&self.path)?;
        let mut store = read_store(&self.path)?;

        let report = match action {
            Action::Add => store.merge(&host, aliases),
            Action::Remove => {
                match store.remove_aliases(&host, aliases, self.removal_policy) {
                    Some(report) => report,
                    None => {
                        tracing::info!("No CNAME for {} found", host);
                        return Ok(Outcome {
                            host,
                            status: Status::HostNotFound,
                            report: ChangeReport::default(),
                        });
                    }
                }
            }
        };

        if !report.changed() {
            tracing::info!("No changes made to {}", self.path.display());
            return Ok(Outcome {
                host,
                status: Status::NoChanges,
                report,
            });
        }

        self.persist(&mut store)?;
        for alias in &report.added {
            tracing::info!("Added {} to {}", alias, host);
        }
        for alias in &report.removed {
            tracing::info!("Removed {} from {}", alias, host);
        }

        Ok(Outcome {
            host,
            status: Status::Written,
            report,
        })
    }

    /// Current entries in canonical order
    ///
    /// Reads without taking the lock; the alias file is replaced atomically
    /// so a reader never sees a partial write.
    pub fn list(&self) -> Result<Vec<HostAliasEntry>, AliasError> {
        let mut store = read_store(&self.path)?;
        store.canonicalize();
        Ok(store
            .into_entries()
            .into_iter()
            .filter(|entry| !entry.aliases.is_empty())
            .collect())
    }

    fn persist(&self, store: &mut AliasStore) -> Result<(), AliasError> {
        tracing::debug!("Writing {}", self.path.display());
        store.canonicalize();
        write_store(&self.path, store, self.backup)
    }
}
