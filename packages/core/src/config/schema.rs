//! Settings schema for cnamectl
//!
//! Defines the structure and defaults for the optional config.json file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::DEFAULT_CNAME_FILE;
use crate::alias::RemovalPolicy;

/// Tool settings
///
/// Serialized to/from `~/.config/cnamectl/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Settings file version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Alias file to manage (default: /etc/dnsmasq.d/05-pihole-cname.conf)
    #[serde(default)]
    pub cname_file: Option<String>,

    /// Keep a copy of the previous alias file before rewriting (default: true)
    #[serde(default = "default_backup")]
    pub backup: bool,

    /// What remove does after an alias that isn't present
    /// (default: "stop_at_first_miss")
    #[serde(default)]
    pub removal_policy: RemovalPolicy,
}

fn default_version() -> u32 {
    1
}

fn default_backup() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            cname_file: None,
            backup: default_backup(),
            removal_policy: RemovalPolicy::default(),
        }
    }
}

impl Settings {
    /// Resolved alias file path
    pub fn cname_file_path(&self) -> PathBuf {
        self.cname_file
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CNAME_FILE))
    }
}
