// Engine - splits a health-check dump into sections, routes each section to
// its extraction rule and assembles the findings report.
// Pure and synchronous; reading the dump and rendering the report live in the CLI.

pub mod assembler;
pub mod classifier;
pub mod context;
mod patterns;
pub mod pipeline;
pub mod rules;
pub mod splitter;

pub use assembler::ReportBuilder;
pub use classifier::{
    BANNER_CATALOG, CLUSTER_CATALOG, CategoryName, DocumentCheck, DumpView, ExtractionRule,
    classify,
};
pub use context::RuleContext;
pub use pipeline::{Pipeline, SectionRoute};
pub use splitter::{BannerSplitter, NodeBoundarySplitter, Splitter, detect_dialect, splitter_for};

use healthlens_types::{Dialect, Report};

// Façade API - stable entry points for the CLI

/// Run the full pipeline with a declared dialect.
pub fn analyze(text: &str, dialect: Dialect, context: RuleContext) -> Report {
    Pipeline::new(context).with_dialect(dialect).run(text)
}

/// Run the full pipeline, probing the text for its dialect.
pub fn analyze_auto(text: &str, context: RuleContext) -> Report {
    Pipeline::new(context).run(text)
}
