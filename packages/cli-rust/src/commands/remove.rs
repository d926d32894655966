//! cnamectl remove - Remove aliases from a host

use anyhow::Result;
use clap::Args;
use cnamectl_core::{Engine, RemovalPolicy};
use console::style;

use crate::output::{report_lines, status_line};

/// Arguments for remove command
#[derive(Args)]
pub struct RemoveArgs {
    /// Canonical host to remove aliases from
    pub host: String,

    /// Comma-separated aliases to remove
    pub aliases: String,

    /// What to do after an alias that isn't present (default: from settings)
    #[arg(long, value_enum)]
    pub policy: Option<RemovalPolicy>,

    /// Don't keep a backup of the previous alias file
    #[arg(long)]
    pub no_backup: bool,
}

pub fn cmd_remove(engine: &Engine, args: &RemoveArgs, quiet: bool) -> Result<()> {
    let mut engine = engine
        .clone()
        .with_backup(engine.backup() && !args.no_backup);
    if let Some(policy) = args.policy {
        engine = engine.with_removal_policy(policy);
    }

    if !quiet {
        println!(
            "Removing {} from {}",
            style(&args.aliases).cyan(),
            style(&args.host).cyan()
        );
    }

    let outcome = engine.remove(&args.host, &args.aliases)?;

    if !quiet {
        for line in report_lines(&outcome.report) {
            println!("{line}");
        }
        println!("{}", status_line(&outcome, engine.path()));
    }

    Ok(())
}
