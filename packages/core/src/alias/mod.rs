//! CNAME alias management
//!
//! Provides the alias record engine:
//! - Line grammar and in-memory store with merge/remove
//! - Natural ordering for stable file output
//! - Locked read-mutate-write of the alias file

mod engine;
mod error;
mod natural;
mod record;
mod report;
mod storage;
mod store;

// Public exports
pub use engine::{Action, Engine, Outcome, Status};
pub use error::AliasError;
pub use natural::natural_cmp;
pub use record::{RecordLine, format_line, parse_line};
pub use report::ChangeReport;
pub use storage::{parse_store, read_store, render_store, write_store};
pub use store::{AliasStore, HostAliasEntry, RemovalPolicy};
