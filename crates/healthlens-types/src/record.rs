use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed outcome classification of a health record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusLevel {
    #[serde(rename = "OK")]
    Ok,
    Warning,
    Info,
    Unknown,
}

impl StatusLevel {
    pub const ALL: [StatusLevel; 4] = [
        StatusLevel::Ok,
        StatusLevel::Warning,
        StatusLevel::Info,
        StatusLevel::Unknown,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            StatusLevel::Ok => "✅",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Unknown => "❔",
        }
    }

    /// Ordering used to pick the worst outcome of a report.
    /// Ok < Info < Unknown < Warning
    pub fn severity(self) -> u8 {
        match self {
            StatusLevel::Ok => 0,
            StatusLevel::Info => 1,
            StatusLevel::Unknown => 2,
            StatusLevel::Warning => 3,
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLevel::Ok => write!(f, "OK"),
            StatusLevel::Warning => write!(f, "Warning"),
            StatusLevel::Info => write!(f, "Info"),
            StatusLevel::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One row of the findings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Subsystem name, e.g. "XDR Status"
    pub category: String,
    pub status: StatusLevel,
    /// Short outcome label, e.g. "3 Found" or "All Ready"
    pub verdict: String,
    /// Evidence summary
    pub remarks: String,
}

impl HealthRecord {
    pub fn new(
        category: impl AsRef<str>,
        status: StatusLevel,
        verdict: impl AsRef<str>,
        remarks: impl AsRef<str>,
    ) -> Self {
        Self {
            category: category.as_ref().trim().to_string(),
            status,
            verdict: verdict.as_ref().trim().to_string(),
            remarks: remarks.as_ref().trim().to_string(),
        }
    }

    pub fn ok(
        category: impl AsRef<str>,
        verdict: impl AsRef<str>,
        remarks: impl AsRef<str>,
    ) -> Self {
        Self::new(category, StatusLevel::Ok, verdict, remarks)
    }

    pub fn warning(
        category: impl AsRef<str>,
        verdict: impl AsRef<str>,
        remarks: impl AsRef<str>,
    ) -> Self {
        Self::new(category, StatusLevel::Warning, verdict, remarks)
    }

    pub fn info(
        category: impl AsRef<str>,
        verdict: impl AsRef<str>,
        remarks: impl AsRef<str>,
    ) -> Self {
        Self::new(category, StatusLevel::Info, verdict, remarks)
    }

    pub fn unknown(
        category: impl AsRef<str>,
        verdict: impl AsRef<str>,
        remarks: impl AsRef<str>,
    ) -> Self {
        Self::new(category, StatusLevel::Unknown, verdict, remarks)
    }

    /// Status cell as shown to readers: symbol followed by the verdict.
    pub fn status_text(&self) -> String {
        format!("{} {}", self.status.symbol(), self.verdict)
    }
}
