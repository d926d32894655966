//! CLI command implementations
//!
//! Each command runs once against the alias file resolved from settings and
//! the global `--file` flag.

mod add;
mod list;
mod remove;

pub use add::{AddArgs, cmd_add};
pub use list::{ListArgs, cmd_list};
pub use remove::{RemoveArgs, cmd_remove};
