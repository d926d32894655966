//! Exclusive lock around alias file updates
//!
//! Ensures only one cnamectl process rewrites a given alias file at a time.
//! The guard holds an OS advisory lock on a hidden file next to the alias
//! file. The kernel drops the lock when the holder exits, crashed or not, so
//! there is no stale state to clean up. The file itself stays behind and
//! records the PID of the last holder for diagnostics.

use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::{Read, Seek, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::paths::lock_path_for;

/// Errors that can occur during lock operations
#[derive(Error, Debug)]
pub enum LockError {
    /// Another process is updating the alias file
    #[error("Alias file is locked by another process{}", holder(.0))]
    Held(Option<u32>),

    /// Failed to create the lock directory
    #[error("Failed to create lock directory: {0}")]
    CreateDirFailed(String),

    /// Failed to create or manage the lock file
    #[error("Failed to create lock file: {0}")]
    LockFailed(String),
}

fn holder(pid: &Option<u32>) -> String {
    match pid {
        Some(pid) => format!(" (PID: {pid})"),
        None => String::new(),
    }
}

/// A guard that holds the alias file lock
///
/// The lock is released when this struct is dropped.
#[derive(Debug)]
pub struct ConfigLock {
    lock_path: PathBuf,
    file: File,
}

impl ConfigLock {
    /// Lock the alias file at `file`
    ///
    /// The lock file is the hidden sibling `.{name}.lock`.
    pub fn for_file(file: &Path) -> Result<Self, LockError> {
        Self::acquire(lock_path_for(file))
    }

    /// Attempt to acquire the lock at `lock_path` without blocking
    ///
    /// # Returns
    /// - `Ok(ConfigLock)` if the lock was acquired
    /// - `Err(LockError::Held(pid))` if another open handle holds it; `pid`
    ///   is whatever the holder recorded, if readable
    /// - `Err(LockError::*)` for other errors
    pub fn acquire(lock_path: PathBuf) -> Result<Self, LockError> {
        if let Some(parent) = lock_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| LockError::CreateDirFailed(e.to_string()))?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| LockError::LockFailed(format!("{}: {}", lock_path.display(), e)))?;

        match file.try_lock() {
            Ok(()) => {}
            Err(TryLockError::WouldBlock) => return Err(LockError::Held(recorded_pid(&mut file))),
            Err(TryLockError::Error(e)) => {
                return Err(LockError::LockFailed(format!(
                    "{}: {}",
                    lock_path.display(),
                    e
                )));
            }
        }

        record_pid(&mut file).map_err(|e| LockError::LockFailed(e.to_string()))?;
        tracing::debug!("Acquired alias file lock at: {}", lock_path.display());
        Ok(Self { lock_path, file })
    }

    /// Explicitly release the lock
    ///
    /// This is called automatically on drop.
    pub fn release(self) {}

    /// Get the path to the lock file
    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }
}

impl Drop for ConfigLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            tracing::warn!("Failed to release lock on drop: {}", e);
        } else {
            tracing::debug!("Released alias file lock: {}", self.lock_path.display());
        }
    }
}

/// Replace the lock file contents with our PID
fn record_pid(file: &mut File) -> std::io::Result<()> {
    file.set_len(0)?;
    file.rewind()?;
    write!(file, "{}", std::process::id())?;
    file.flush()
}

/// PID left in the lock file by its current holder
fn recorded_pid(file: &mut File) -> Option<u32> {
    let mut contents = String::new();
    file.read_to_string(&mut contents).ok()?;
    contents.trim().parse().ok()
}
