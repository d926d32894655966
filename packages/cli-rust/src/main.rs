//! cnamectl - Manage the dnsmasq CNAME alias file
//!
//! This is the main entry point for the Rust CLI binary.

use std::process::ExitCode;

fn main() -> ExitCode {
    match cnamectl::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cnamectl::show_error(&err);
            ExitCode::FAILURE
        }
    }
}
