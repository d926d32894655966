//! Result lines for add and remove commands

use std::path::Path;

use cnamectl_core::{ChangeReport, Outcome, Status};
use console::style;

/// One line per alias the command touched or looked at
///
/// Invalid aliases are reported separately by [`invalid_lines`].
pub fn report_lines(report: &ChangeReport) -> Vec<String> {
    let mut lines = Vec::new();

    for alias in &report.added {
        lines.push(format!("Added {}", style(alias).green()));
    }
    for alias in &report.already_present {
        lines.push(format!("{} already exists", style(alias).yellow()));
    }
    for alias in &report.removed {
        lines.push(format!("Removed {}", style(alias).green()));
    }
    for alias in &report.missing {
        lines.push(format!("{} not found", style(alias).yellow()));
    }
    if !report.skipped.is_empty() {
        lines.push(format!(
            "{} {}",
            style("Skipped after first missing alias:").dim(),
            report.skipped.join(",")
        ));
    }

    lines
}

/// One diagnostic per alias that failed validation and was dropped
pub fn invalid_lines(report: &ChangeReport) -> Vec<String> {
    report
        .invalid
        .iter()
        .map(|alias| format!("{} {}", style("Invalid alias:").red(), alias))
        .collect()
}

/// Final line describing what happened to the alias file
pub fn status_line(outcome: &Outcome, path: &Path) -> String {
    match outcome.status {
        Status::Written => format!("Wrote {}", style(path.display()).cyan()),
        Status::NoChanges => "No changes made.".to_string(),
        Status::HostNotFound => format!("No CNAME for {} found.", style(&outcome.host).cyan()),
    }
}
