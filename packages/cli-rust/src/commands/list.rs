//! cnamectl list - Show configured aliases

use anyhow::{Context, Result};
use clap::Args;
use cnamectl_core::Engine;
use comfy_table::{Cell, Color, Table, presets::UTF8_FULL_CONDENSED};
use console::style;

/// Arguments for list command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON instead of table format
    #[arg(long, conflicts_with = "hosts_only")]
    pub json: bool,

    /// Show only host names (for scripting)
    #[arg(long)]
    pub hosts_only: bool,
}

pub fn cmd_list(engine: &Engine, args: &ListArgs, quiet: bool) -> Result<()> {
    let entries = engine.list()?;

    if args.json {
        let json = serde_json::to_string_pretty(&entries).context("Failed to serialize aliases")?;
        println!("{json}");
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet && !args.hosts_only {
            println!("No CNAMEs configured.");
            println!();
            println!(
                "  {} {}",
                style("Add one with:").dim(),
                style("cnamectl add <host> <alias1,alias2>").yellow()
            );
        }
        return Ok(());
    }

    // Hosts only mode (for scripting)
    if args.hosts_only || quiet {
        for entry in &entries {
            println!("{}", entry.host);
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Host", "Aliases"]);

    for entry in &entries {
        table.add_row(vec![
            Cell::new(&entry.host).fg(Color::Cyan),
            Cell::new(entry.aliases.join(", ")),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} {}",
        style("Alias file:").dim(),
        style(engine.path().display()).dim()
    );

    Ok(())
}
