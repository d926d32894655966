//! In-memory alias model
//!
//! An ordered list of host entries, each holding an ordered list of distinct
//! aliases. Hosts and aliases are stored lowercase; lookups are by linear scan.

use serde::{Deserialize, Serialize};

use super::natural::natural_cmp;
use super::report::ChangeReport;
use crate::hostname::{is_valid_hostname, normalize};

/// One host and the aliases pointing at it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostAliasEntry {
    /// Canonical host, validated and lowercase
    pub host: String,
    /// Distinct aliases, never equal to `host`
    pub aliases: Vec<String>,
}

impl HostAliasEntry {
    fn alias_position(&self, alias: &str) -> Option<usize> {
        self.aliases.iter().position(|a| a.eq_ignore_ascii_case(alias))
    }

    /// Whether the entry already carries `alias`
    pub fn has_alias(&self, alias: &str) -> bool {
        self.alias_position(alias).is_some()
    }
}

/// How a removal request handles an alias the entry doesn't have
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Stop at the first requested alias that isn't present and leave the
    /// remaining tokens untouched
    #[default]
    StopAtFirstMiss,
    /// Try every requested alias regardless of misses
    Independent,
}

/// The full set of host entries read from one alias file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasStore {
    entries: Vec<HostAliasEntry>,
}

impl AliasStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HostAliasEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HostAliasEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, host: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.host.eq_ignore_ascii_case(host))
    }

    /// Look up the entry for `host`
    pub fn find(&self, host: &str) -> Option<&HostAliasEntry> {
        self.position(host).map(|i| &self.entries[i])
    }

    /// Merge a comma-separated alias list into the entry for `host`
    ///
    /// `host` must already be a valid hostname. Each token is lowercased and
    /// trimmed; tokens equal to the host are dropped, tokens that fail
    /// validation are dropped with a warning. Surviving aliases the entry
    /// doesn't have yet are appended in request order. A new entry is only
    /// created when at least one alias survives.
    pub fn merge(&mut self, host: &str, raw_aliases: &str) -> ChangeReport {
        let host = normalize(host);
        let mut report = ChangeReport::default();
        let mut candidates: Vec<String> = Vec::new();

        for alias in split_aliases(raw_aliases) {
            if alias == host {
                tracing::debug!("Ignoring alias {} pointing at itself", alias);
                continue;
            }
            if !is_valid_hostname(&alias) {
                tracing::debug!("Invalid alias: {}", alias);
                report.invalid.push(alias);
                continue;
            }
            if !candidates.contains(&alias) {
                candidates.push(alias);
            }
        }

        match self.position(&host) {
            Some(index) => {
                let entry = &mut self.entries[index];
                for alias in candidates {
                    if entry.has_alias(&alias) {
                        tracing::debug!("{} already exists for {}", alias, host);
                        report.already_present.push(alias);
                    } else {
                        tracing::debug!("Added {} to {}", alias, host);
                        entry.aliases.push(alias.clone());
                        report.added.push(alias);
                    }
                }
            }
            None if candidates.is_empty() => {
                tracing::debug!("No usable aliases for new host {}", host);
            }
            None => {
                tracing::debug!("New host {} with {} aliases", host, candidates.len());
                report.added = candidates.clone();
                self.entries.push(HostAliasEntry {
                    host,
                    aliases: candidates,
                });
            }
        }

        report
    }

    /// Remove a comma-separated alias list from the entry for `host`
    ///
    /// Returns `None` when there is no entry for `host`. Tokens are processed
    /// in order; what happens after a token that isn't present depends on
    /// `policy`. The entry stays in the store even if it ends up empty; the
    /// writer omits it.
    pub fn remove_aliases(
        &mut self,
        host: &str,
        raw_aliases: &str,
        policy: RemovalPolicy,
    ) -> Option<ChangeReport> {
        let index = self.position(&normalize(host))?;
        let entry = &mut self.entries[index];
        let mut report = ChangeReport::default();

        let mut tokens = split_aliases(raw_aliases).into_iter();
        while let Some(alias) = tokens.next() {
            match entry.alias_position(&alias) {
                Some(position) => {
                    entry.aliases.remove(position);
                    tracing::debug!("Removed {} from {}", alias, entry.host);
                    report.removed.push(alias);
                }
                None => {
                    tracing::debug!("{} is not an alias of {}", alias, entry.host);
                    report.missing.push(alias);
                    if policy == RemovalPolicy::StopAtFirstMiss {
                        report.skipped.extend(tokens.by_ref());
                        break;
                    }
                }
            }
        }

        Some(report)
    }

    /// Put entries and their aliases into natural order
    pub fn canonicalize(&mut self) {
        self.entries.sort_by(|a, b| natural_cmp(&a.host, &b.host));
        for entry in &mut self.entries {
            entry.aliases.sort_by(|a, b| natural_cmp(a, b));
        }
    }
}

/// Split a raw alias list into lowercase, trimmed, non-empty tokens
fn split_aliases(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize)
        .filter(|alias| !alias.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(host: &str, aliases: &str) -> AliasStore {
        let mut store = AliasStore::new();
        store.merge(host, aliases);
        store
    }

    fn aliases_of<'a>(store: &'a AliasStore, host: &str) -> Vec<&'a str> {
        store
            .find(host)
            .map(|e| e.aliases.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn merge_creates_new_entry() {
        let mut store = AliasStore::new();
        let report = store.merge("example.com", "a,b");
        assert!(report.changed());
        assert_eq!(report.added, vec!["a", "b"]);
        assert_eq!(aliases_of(&store, "example.com"), vec!["a", "b"]);
    }

    #[test]
    fn merge_appends_only_new_aliases() {
        let mut store = store_with("example.com", "a,b");
        let report = store.merge("example.com", "c,a");
        assert!(report.changed());
        assert_eq!(report.added, vec!["c"]);
        assert_eq!(report.already_present, vec!["a"]);
        assert_eq!(aliases_of(&store, "example.com"), vec!["a", "b", "c"]);
    }

    #[test]
    fn merge_existing_alias_is_no_change() {
        let mut store = store_with("example.com", "a,b");
        let before = store.clone();
        let report = store.merge("example.com", "b");
        assert!(!report.changed());
        assert_eq!(store, before);
    }

    #[test]
    fn merge_drops_self_reference() {
        let mut store = AliasStore::new();
        let report = store.merge("example.com", "example.com,www.example.com");
        assert_eq!(report.added, vec!["www.example.com"]);
        assert!(!store.find("example.com").unwrap().has_alias("example.com"));
    }

    #[test]
    fn merge_only_self_reference_creates_nothing() {
        let mut store = AliasStore::new();
        let report = store.merge("example.com", "Example.com");
        assert!(!report.changed());
        assert!(store.is_empty());
    }

    #[test]
    fn merge_drops_invalid_aliases_but_keeps_the_rest() {
        let mut store = AliasStore::new();
        let report = store.merge("example.com", "good-host,bad_host!,another.good");
        assert!(report.changed());
        assert_eq!(report.invalid, vec!["bad_host!"]);
        assert_eq!(
            aliases_of(&store, "example.com"),
            vec!["good-host", "another.good"]
        );
    }

    #[test]
    fn merge_all_invalid_for_new_host_is_no_change() {
        let mut store = AliasStore::new();
        let report = store.merge("example.com", "bad_host!,-nope");
        assert!(!report.changed());
        assert_eq!(report.invalid.len(), 2);
        assert!(store.find("example.com").is_none());
    }

    #[test]
    fn merge_normalizes_and_dedups_candidates() {
        let mut store = AliasStore::new();
        let report = store.merge("Example.com", " WWW.example.com , www.example.com,,");
        assert_eq!(report.added, vec!["www.example.com"]);
        assert_eq!(aliases_of(&store, "example.com"), vec!["www.example.com"]);
    }

    #[test]
    fn merge_host_lookup_is_case_insensitive() {
        let mut store = store_with("example.com", "a");
        store.merge("EXAMPLE.COM", "b");
        assert_eq!(store.len(), 1);
        assert_eq!(aliases_of(&store, "example.com"), vec!["a", "b"]);
    }

    #[test]
    fn remove_from_unknown_host_is_none() {
        let mut store = store_with("example.com", "a");
        assert!(
            store
                .remove_aliases("other.com", "a", RemovalPolicy::StopAtFirstMiss)
                .is_none()
        );
        assert_eq!(aliases_of(&store, "example.com"), vec!["a"]);
    }

    #[test]
    fn remove_stops_at_first_miss() {
        let mut store = store_with("example.com", "a,b,c");
        let report = store
            .remove_aliases("example.com", "a,z,c", RemovalPolicy::StopAtFirstMiss)
            .unwrap();
        assert!(report.changed());
        assert_eq!(report.removed, vec!["a"]);
        assert_eq!(report.missing, vec!["z"]);
        assert_eq!(report.skipped, vec!["c"]);
        assert_eq!(aliases_of(&store, "example.com"), vec!["b", "c"]);
    }

    #[test]
    fn remove_independent_processes_every_token() {
        let mut store = store_with("example.com", "a,b,c");
        let report = store
            .remove_aliases("example.com", "a,z,c", RemovalPolicy::Independent)
            .unwrap();
        assert_eq!(report.removed, vec!["a", "c"]);
        assert_eq!(report.missing, vec!["z"]);
        assert!(report.skipped.is_empty());
        assert_eq!(aliases_of(&store, "example.com"), vec!["b"]);
    }

    #[test]
    fn remove_absent_first_token_is_no_change() {
        let mut store = store_with("example.com", "a,b");
        let before = store.clone();
        let report = store
            .remove_aliases("example.com", "z,a", RemovalPolicy::StopAtFirstMiss)
            .unwrap();
        assert!(!report.changed());
        assert_eq!(report.skipped, vec!["a"]);
        assert_eq!(store, before);
    }

    #[test]
    fn remove_can_empty_an_entry() {
        let mut store = store_with("example.com", "a");
        let report = store
            .remove_aliases("example.com", "A", RemovalPolicy::StopAtFirstMiss)
            .unwrap();
        assert!(report.changed());
        assert!(store.find("example.com").unwrap().aliases.is_empty());
    }

    #[test]
    fn canonicalize_uses_natural_order() {
        let mut store = AliasStore::new();
        store.merge("host2", "x");
        store.merge("host10", "y");
        store.merge("host1", "web10,web9,web1");
        store.canonicalize();

        let hosts: Vec<&str> = store.entries().iter().map(|e| e.host.as_str()).collect();
        assert_eq!(hosts, vec!["host1", "host2", "host10"]);
        assert_eq!(aliases_of(&store, "host1"), vec!["web1", "web9", "web10"]);
    }

    #[test]
    fn canonicalize_is_order_independent() {
        let mut first = AliasStore::new();
        first.merge("b.lan", "y,x");
        first.merge("a.lan", "z");

        let mut second = AliasStore::new();
        second.merge("a.lan", "z");
        second.merge("b.lan", "x,y");

        first.canonicalize();
        second.canonicalize();
        assert_eq!(first, second);
    }
}
