use serde::Serialize;

/// Per-run outcome log: the source user identifiers that migrated cleanly and
/// the ones that failed, in source order.
///
/// Append-only; populated exclusively by the orchestrator, one append per
/// entity. Returned as the run's final artifact so an operator can re-drive
/// the failed set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub ok: Vec<String>,
    pub failed: Vec<String>,
}

impl MigrationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_ok(&mut self, source_user_id: String) {
        self.ok.push(source_user_id);
    }

    pub fn record_failed(&mut self, source_user_id: String) {
        self.failed.push(source_user_id);
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_outcomes_in_order() {
        let mut report = MigrationReport::new();
        report.record_ok("a".to_string());
        report.record_failed("b".to_string());
        report.record_ok("c".to_string());

        assert_eq!(report.ok, vec!["a", "c"]);
        assert_eq!(report.failed, vec!["b"]);
        assert!(report.has_failures());
    }

    #[test]
    fn empty_report_has_no_failures() {
        assert!(!MigrationReport::new().has_failures());
    }
}
