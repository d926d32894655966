//! Alias file line grammar
//!
//! One record per line: `cname=<alias1>,<alias2>,...,<host>`. Whitespace is
//! tolerated around `=` and commas. Anything else is not a record line.

use std::sync::OnceLock;

use regex::Regex;

use super::store::HostAliasEntry;

/// A record line split into its host and raw alias list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    /// Final comma-delimited token, trimmed and lowercased
    pub host: String,
    /// Everything before the final comma, unvalidated
    pub aliases: String,
}

fn record_regex() -> &'static Regex {
    static RECORD_REGEX: OnceLock<Regex> = OnceLock::new();
    RECORD_REGEX
        .get_or_init(|| Regex::new(r"^\s*cname\s*=\s*(?P<aliases>.+),(?P<host>.+)$").unwrap())
}

/// Parse one line of the alias file
///
/// Returns `None` for blank lines, comments and anything that doesn't have
/// the `cname=aliases,host` shape.
pub fn parse_line(line: &str) -> Option<RecordLine> {
    let line = line.trim().to_ascii_lowercase();
    if line.is_empty() {
        return None;
    }

    let captures = record_regex().captures(&line)?;
    let host = captures["host"].trim();
    if host.is_empty() {
        return None;
    }

    Some(RecordLine {
        host: host.to_string(),
        aliases: captures["aliases"].to_string(),
    })
}

/// Render an entry as a record line (without trailing newline)
///
/// Entries without aliases have no line.
pub fn format_line(entry: &HostAliasEntry) -> Option<String> {
    if entry.aliases.is_empty() {
        return None;
    }
    Some(format!("cname={},{}", entry.aliases.join(","), entry.host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_alias() {
        let record = parse_line("cname=alias.lan,host.lan").unwrap();
        assert_eq!(record.host, "host.lan");
        assert_eq!(record.aliases, "alias.lan");
    }

    #[test]
    fn last_token_is_host() {
        let record = parse_line("cname=a,b,c,example.com\n").unwrap();
        assert_eq!(record.host, "example.com");
        assert_eq!(record.aliases, "a,b,c");
    }

    #[test]
    fn tolerates_whitespace_and_case() {
        let record = parse_line("  CNAME = A.lan , B.lan ,  Host.LAN  ").unwrap();
        assert_eq!(record.host, "host.lan");
        assert_eq!(record.aliases, "a.lan , b.lan ");
    }

    #[test]
    fn keeps_non_ascii_letters_as_written() {
        let record = parse_line("cname=\u{212A}.com,Example.com").unwrap();
        assert_eq!(record.host, "example.com");
        assert_eq!(record.aliases, "\u{212A}.com");
    }

    #[test]
    fn skips_non_record_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("# cname=a,b").is_none());
        assert!(parse_line("#cname=a,b").is_none());
        assert!(parse_line("address=/ads.example/0.0.0.0").is_none());
        assert!(parse_line("cname=onlyhost").is_none());
        assert!(parse_line("cname=a,   ").is_none());
    }

    #[test]
    fn format_skips_empty_entries() {
        let entry = HostAliasEntry {
            host: "example.com".to_string(),
            aliases: Vec::new(),
        };
        assert!(format_line(&entry).is_none());
    }

    #[test]
    fn format_writes_aliases_then_host() {
        let entry = HostAliasEntry {
            host: "example.com".to_string(),
            aliases: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(format_line(&entry).unwrap(), "cname=a,b,example.com");
    }
}
