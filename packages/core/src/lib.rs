//! cnamectl-core - Core library for cnamectl
//!
//! Maintains the dnsmasq CNAME alias file: parsing, validating and merging
//! alias records, natural ordering, and locked rewrites of the file.

pub mod alias;
pub mod config;
pub mod hostname;
pub mod lock;
pub mod version;

pub use alias::{
    Action, AliasError, AliasStore, ChangeReport, Engine, HostAliasEntry, Outcome, RemovalPolicy,
    Status,
};
pub use config::{Settings, load_settings, load_settings_from};
pub use hostname::is_valid_hostname;
pub use lock::{ConfigLock, LockError};
pub use version::{get_version, get_version_long};
