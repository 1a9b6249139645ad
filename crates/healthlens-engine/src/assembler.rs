use chrono::NaiveDateTime;
use healthlens_types::{Dialect, HealthRecord, Report};

/// Accumulates records in emission order and seals them into a [`Report`].
///
/// No reordering, deduplication or cross-record correlation happens here.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    dialect: Dialect,
    evaluated_at: NaiveDateTime,
    records: Vec<HealthRecord>,
}

impl ReportBuilder {
    pub fn new(dialect: Dialect, evaluated_at: NaiveDateTime) -> Self {
        Self {
            dialect,
            evaluated_at,
            records: Vec::new(),
        }
    }

    pub fn with_capacity(dialect: Dialect, evaluated_at: NaiveDateTime, capacity: usize) -> Self {
        Self {
            dialect,
            evaluated_at,
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: HealthRecord) -> &mut Self {
        self.records.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finish(self) -> Report {
        Report {
            dialect: self.dialect,
            evaluated_at: self.evaluated_at,
            records: self.records,
        }
    }
}
