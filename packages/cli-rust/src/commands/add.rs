//! cnamectl add - Add aliases to a host

use anyhow::Result;
use clap::Args;
use cnamectl_core::Engine;
use console::style;

use crate::output::{invalid_lines, report_lines, status_line};

/// Arguments for add command
#[derive(Args)]
pub struct AddArgs {
    /// Canonical host the aliases resolve to (e.g., "nas.lan")
    pub host: String,

    /// Comma-separated aliases (e.g., "files.lan,media.lan")
    pub aliases: String,

    /// Don't keep a backup of the previous alias file
    #[arg(long)]
    pub no_backup: bool,
}

pub fn cmd_add(engine: &Engine, args: &AddArgs, quiet: bool) -> Result<()> {
    let engine = engine
        .clone()
        .with_backup(engine.backup() && !args.no_backup);

    if !quiet {
        println!("Trying to add CNAMEs to {}", style(&args.host).cyan());
    }

    let outcome = engine.add(&args.host, &args.aliases)?;

    for line in invalid_lines(&outcome.report) {
        eprintln!("{line}");
    }

    if !quiet {
        for line in report_lines(&outcome.report) {
            println!("{line}");
        }
        println!("{}", status_line(&outcome, engine.path()));
    }

    Ok(())
}
