//! Settings management for cnamectl
//!
//! Loads the optional JSONC settings file. A missing file means defaults;
//! nothing is created on disk.

pub mod paths;
pub mod schema;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use jsonc_parser::parse_to_serde_value;

pub use paths::{DEFAULT_CNAME_FILE, get_config_dir, get_settings_path};
pub use schema::Settings;

/// Load settings from the default settings path
///
/// Falls back to defaults when the path can't be determined or the file
/// doesn't exist.
pub fn load_settings() -> Result<Settings> {
    match get_settings_path() {
        Some(path) => load_settings_from(&path),
        None => {
            tracing::debug!("Could not determine settings path, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Load settings from a specific file
///
/// Supports JSONC (JSON with comments).
/// Rejects unknown fields for strict validation.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!("Settings file not found, using defaults: {}", path.display());
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let Some(parsed_value) = parse_to_serde_value(&contents, &Default::default())
        .map_err(|e| anyhow::anyhow!("Invalid JSONC in settings file: {}", e))?
    else {
        tracing::debug!("Settings file is empty, using defaults: {}", path.display());
        return Ok(Settings::default());
    };

    let settings: Settings = serde_json::from_value(parsed_value).with_context(|| {
        format!(
            "Invalid settings in {}. Check for unknown fields or invalid values.",
            path.display()
        )
    })?;

    tracing::debug!("Loaded settings from: {}", path.display());
    Ok(settings)
}
