//! cnamectl CLI - Manage the dnsmasq CNAME alias file
//!
//! This module contains the CLI implementation used by the binary.

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cnamectl_core::{Engine, get_version_long, load_settings, load_settings_from};
use tracing_subscriber::EnvFilter;

pub use output::show_error;

/// Manage CNAME aliases in the dnsmasq alias file
#[derive(Parser)]
#[command(name = "cnamectl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage CNAME aliases in the dnsmasq alias file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Alias file to manage (overrides settings)
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Settings file (default: ~/.config/cnamectl/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add aliases to a host
    Add(commands::AddArgs),
    /// Remove aliases from a host
    Remove(commands::RemoveArgs),
    /// List hosts and their aliases
    List(commands::ListArgs),
}

/// Map `-v` count to a default log filter; `RUST_LOG` takes precedence
fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    tracing::debug!("cnamectl {}", get_version_long());

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let settings = match &cli.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings()?,
    };

    let mut engine = Engine::from_settings(&settings);
    if let Some(file) = &cli.file {
        engine = engine.with_path(file);
    }
    tracing::debug!("Alias file: {}", engine.path().display());

    match &cli.command {
        Commands::Add(args) => commands::cmd_add(&engine, args, cli.quiet),
        Commands::Remove(args) => commands::cmd_remove(&engine, args, cli.quiet),
        Commands::List(args) => commands::cmd_list(&engine, args, cli.quiet),
    }
}
