use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{Dialect, HealthRecord, StatusLevel};

/// The renderer-facing triple: (category, status, remarks).
pub type ReportRow<'a> = (&'a str, String, &'a str);

/// Ordered findings of one pipeline run.
///
/// Records appear in section discovery order. Renderers must not reorder
/// or rewrite them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub dialect: Dialect,
    pub evaluated_at: NaiveDateTime,
    pub records: Vec<HealthRecord>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HealthRecord> {
        self.records.iter()
    }

    pub fn count(&self, level: StatusLevel) -> usize {
        self.records.iter().filter(|r| r.status == level).count()
    }

    /// Most severe level in the report, `None` when it has no records.
    pub fn worst_status(&self) -> Option<StatusLevel> {
        self.records
            .iter()
            .map(|r| r.status)
            .max_by_key(|level| level.severity())
    }

    pub fn rows(&self) -> Vec<ReportRow<'_>> {
        self.records
            .iter()
            .map(|r| (r.category.as_str(), r.status_text(), r.remarks.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a HealthRecord;
    type IntoIter = std::slice::Iter<'a, HealthRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_report() -> Report {
        Report {
            dialect: Dialect::Banner,
            evaluated_at: NaiveDate::from_ymd_opt(2025, 11, 25)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            records: vec![
                HealthRecord::ok("DB Stats", "OK", "3/3 nodes responding, 4 record sets found"),
                HealthRecord::info("misc", "Parsed", "0 UP, 0 DOWN"),
                HealthRecord::warning("Cron Jobs", "Suspended Jobs", "Total: 2, Suspended: 1"),
            ],
        }
    }

    #[test]
    fn test_worst_status() {
        let report = sample_report();
        assert_eq!(report.worst_status(), Some(StatusLevel::Warning));
        assert_eq!(report.count(StatusLevel::Ok), 1);
    }

    #[test]
    fn test_worst_status_empty() {
        let mut report = sample_report();
        report.records.clear();
        assert!(report.is_empty());
        assert_eq!(report.worst_status(), None);
    }

    #[test]
    fn test_rows_preserve_order() {
        let report = sample_report();
        let rows = report.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0, "DB Stats");
        assert_eq!(rows[1].1, "ℹ️ Parsed");
        assert_eq!(rows[2].2, "Total: 2, Suspended: 1");
    }
}
