//! Renderers for a finished [`Report`]. Each one is a pure function to a
//! `String`; writing it out is the caller's job. Renderers never reorder or
//! rewrite records.

pub mod catalog;
pub mod csv;
pub mod html;
pub mod json;
pub mod sections;
pub mod table;

use crate::types::OutputFormat;
use anyhow::Result;
use healthlens_types::Report;

pub use table::TableOptions;

pub fn render(report: &Report, format: OutputFormat, options: &TableOptions) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table::render(report, options)),
        OutputFormat::Html => Ok(html::render(report)),
        OutputFormat::Json => json::render(report),
        OutputFormat::Csv => csv::render(report),
    }
}
