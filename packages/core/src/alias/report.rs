//! Per-alias results of a single mutation

/// What a merge or removal did to each requested alias
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeReport {
    /// Aliases appended to the entry
    pub added: Vec<String>,
    /// Aliases requested for addition that the entry already had
    pub already_present: Vec<String>,
    /// Tokens dropped because they are not valid hostnames
    pub invalid: Vec<String>,
    /// Aliases removed from the entry
    pub removed: Vec<String>,
    /// Aliases requested for removal that the entry didn't have
    pub missing: Vec<String>,
    /// Removal tokens left unprocessed after the first miss
    pub skipped: Vec<String>,
}

impl ChangeReport {
    /// Whether the store was modified
    pub fn changed(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_unchanged() {
        assert!(!ChangeReport::default().changed());
    }

    #[test]
    fn only_additions_and_removals_count_as_changes() {
        let report = ChangeReport {
            already_present: vec!["a".into()],
            invalid: vec!["bad_host!".into()],
            missing: vec!["z".into()],
            ..Default::default()
        };
        assert!(!report.changed());

        let report = ChangeReport {
            removed: vec!["a".into()],
            ..Default::default()
        };
        assert!(report.changed());
    }
}
