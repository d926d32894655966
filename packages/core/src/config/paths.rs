//! Path resolution for cnamectl
//!
//! Settings follow the XDG-style layout used on Linux and macOS:
//! `~/.config/cnamectl/config.json`. The alias file itself lives wherever
//! dnsmasq reads it from.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Alias file read by the Pi-hole dnsmasq instance
pub const DEFAULT_CNAME_FILE: &str = "/etc/dnsmasq.d/05-pihole-cname.conf";

/// Get the settings directory path
///
/// - Linux: `~/.config/cnamectl/`
/// - macOS: `~/.config/cnamectl/` (XDG-style, not ~/Library)
/// - Windows: `%APPDATA%\cnamectl\`
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join("cnamectl"))
    }
    #[cfg(target_os = "windows")]
    {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().to_path_buf())
            .map(|d| d.join("cnamectl"))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// Get the full path to the settings file
///
/// Returns: `{config_dir}/config.json`
pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join("config.json"))
}

/// Hidden sibling of `file` with the given suffix
///
/// dnsmasq skips dotfiles in `conf-dir`, so lock and backup files placed
/// next to the alias file are never parsed as configuration.
fn hidden_sibling(file: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(file.file_name().unwrap_or(file.as_os_str()));
    name.push(suffix);
    file.with_file_name(name)
}

/// Get the lock file path guarding `file`
///
/// Returns: `{dir}/.{name}.lock`
pub fn lock_path_for(file: &Path) -> PathBuf {
    hidden_sibling(file, ".lock")
}

/// Get the backup path for `file`
///
/// Returns: `{dir}/.{name}.bak`
pub fn backup_path_for(file: &Path) -> PathBuf {
    hidden_sibling(file, ".bak")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_app_name() {
        let dir = get_config_dir();
        assert!(dir.is_some());
        assert!(dir.unwrap().ends_with("cnamectl"));
    }

    #[test]
    fn test_settings_path_ends_with_config_json() {
        let path = get_settings_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("config.json"));
    }

    #[test]
    fn test_lock_path_is_hidden_sibling() {
        let lock = lock_path_for(Path::new(DEFAULT_CNAME_FILE));
        assert_eq!(
            lock,
            PathBuf::from("/etc/dnsmasq.d/.05-pihole-cname.conf.lock")
        );
    }

    #[test]
    fn test_backup_path_is_hidden_sibling() {
        let backup = backup_path_for(Path::new("cname.conf"));
        assert_eq!(backup, PathBuf::from(".cname.conf.bak"));
    }
}
