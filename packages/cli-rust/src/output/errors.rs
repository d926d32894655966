//! Centralized error display
//!
//! Prints a single error line plus an actionable tip for the failures an
//! operator can fix.

use std::io::ErrorKind;

use cnamectl_core::{AliasError, LockError};
use console::style;

/// Print an error and any known remediation to stderr
pub fn show_error(err: &anyhow::Error) {
    eprintln!("{} {}", style("Error:").red().bold(), err);

    // Alias errors already carry their io cause in the message
    let Some(alias_err) = err.downcast_ref::<AliasError>() else {
        for cause in err.chain().skip(1) {
            eprintln!("  {} {}", style("Caused by:").dim(), cause);
        }
        return;
    };

    if let Some(tip) = tip_for(alias_err) {
        eprintln!();
        eprintln!("  {} {}", style("Tip:").cyan(), tip);
    }
}

/// Suggested fix for an alias error, if there is one
fn tip_for(err: &AliasError) -> Option<String> {
    match err {
        AliasError::Usage(_) => Some("Supported actions are add and remove.".to_string()),
        AliasError::InvalidHostname(_) => Some(
            "Hostnames are dot-separated labels of letters, digits and inner hyphens \
             (max 63 chars per label, 253 total)."
                .to_string(),
        ),
        AliasError::ConfigRead { source, .. } | AliasError::ConfigWrite { source, .. }
            if source.kind() == ErrorKind::PermissionDenied =>
        {
            Some("The alias file is usually root-owned. Re-run with sudo.".to_string())
        }
        AliasError::Lock(LockError::Held(Some(pid))) => Some(format!(
            "Wait for the other process to finish, or if it is stuck: kill {pid}"
        )),
        AliasError::Lock(LockError::Held(None)) => {
            Some("Wait for the other process to finish, then retry.".to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn tip_for_held_lock_names_pid() {
        let tip = tip_for(&AliasError::Lock(LockError::Held(Some(4242)))).unwrap();
        assert!(tip.contains("4242"));
    }

    #[test]
    fn tip_for_held_lock_without_pid() {
        let tip = tip_for(&AliasError::Lock(LockError::Held(None))).unwrap();
        assert!(!tip.contains("kill"));
    }

    #[test]
    fn tip_for_permission_denied() {
        let err = AliasError::ConfigWrite {
            path: "/etc/dnsmasq.d/05-pihole-cname.conf".into(),
            operation: "replace",
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(tip_for(&err).unwrap().contains("sudo"));
    }

    #[test]
    fn no_tip_for_other_io_errors() {
        let err = AliasError::ConfigRead {
            path: "/etc/dnsmasq.d/05-pihole-cname.conf".into(),
            operation: "read",
            source: io::Error::other("bad sector"),
        };
        assert!(tip_for(&err).is_none());
    }
}
