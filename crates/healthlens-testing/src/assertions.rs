//! Custom assertions for healthlens reports.
//!
//! Works on both an in-memory [`Report`] and the JSON emitted by
//! `healthlens check --format json`.

use anyhow::{Context, Result};
use healthlens_types::{HealthRecord, Report, StatusLevel};
use serde_json::Value;

/// Assert that the report lists exactly these categories, in order.
pub fn assert_categories(report: &Report, expected: &[&str]) -> Result<()> {
    let actual: Vec<&str> = report.iter().map(|r| r.category.as_str()).collect();
    if actual != expected {
        anyhow::bail!("Expected categories {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

/// Find the first record with the given category.
pub fn record<'a>(report: &'a Report, category: &str) -> Result<&'a HealthRecord> {
    report
        .iter()
        .find(|r| r.category == category)
        .with_context(|| format!("No record with category '{}'", category))
}

/// Assert the status and verdict of a category.
pub fn assert_status(
    report: &Report,
    category: &str,
    status: StatusLevel,
    verdict: &str,
) -> Result<()> {
    let found = record(report, category)?;
    if found.status != status || found.verdict != verdict {
        anyhow::bail!(
            "Expected {} to be {} '{}', got {} '{}'",
            category,
            status,
            verdict,
            found.status,
            found.verdict
        );
    }
    Ok(())
}

/// Assert that JSON output contains the expected number of records.
pub fn assert_json_record_count(json: &Value, expected: usize) -> Result<()> {
    let records = json["records"]
        .as_array()
        .context("Expected 'records' array in JSON")?;

    if records.len() != expected {
        anyhow::bail!("Expected {} records, got {}", expected, records.len());
    }
    Ok(())
}

/// Assert the serialized status of a category in JSON output.
pub fn assert_json_status(json: &Value, category: &str, status: &str) -> Result<()> {
    let records = json["records"]
        .as_array()
        .context("Expected 'records' array in JSON")?;

    let found = records
        .iter()
        .find(|r| r["category"].as_str() == Some(category))
        .with_context(|| format!("No record with category '{}' in JSON", category))?;

    let actual = found["status"].as_str().unwrap_or_default();
    if actual != status {
        anyhow::bail!("Expected {} status {}, got {}", category, status, actual);
    }
    Ok(())
}
