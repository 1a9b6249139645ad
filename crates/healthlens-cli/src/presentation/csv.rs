use anyhow::{Context, Result};
use healthlens_types::Report;

pub const HEADER: [&str; 4] = ["category", "level", "status", "remarks"];

pub fn render(report: &Report) -> Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for record in report {
        let level = record.status.to_string();
        let status = record.status_text();
        writer.write_record([
            record.category.as_str(),
            level.as_str(),
            status.as_str(),
            record.remarks.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}
