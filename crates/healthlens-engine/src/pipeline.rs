use healthlens_types::{Dialect, RawSection, Report};

use crate::assembler::ReportBuilder;
use crate::classifier::{self, CLUSTER_CATALOG, DumpView};
use crate::context::RuleContext;
use crate::splitter::{detect_dialect, splitter_for};

/// Splitter -> classifier -> rules -> assembler, as one pure function of
/// the input text.
///
/// The dialect is fixed at construction; when none is declared the text
/// is probed once with [`detect_dialect`].
///
/// Banner dumps yield exactly one record per section. Node-boundary dumps
/// always yield one record per [`CLUSTER_CATALOG`] entry however many
/// blocks the splitter produces; every block feeds the single Storage
/// record.
#[derive(Debug, Clone)]
pub struct Pipeline {
    dialect: Option<Dialect>,
    context: RuleContext,
}

/// A split section and the category it is routed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRoute {
    pub section: RawSection,
    pub category: String,
}

impl Pipeline {
    pub fn new(context: RuleContext) -> Self {
        Self {
            dialect: None,
            context,
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn dialect_for(&self, text: &str) -> Dialect {
        self.dialect.unwrap_or_else(|| detect_dialect(text))
    }

    pub fn sections(&self, text: &str) -> (Dialect, Vec<RawSection>) {
        let dialect = self.dialect_for(text);
        let sections = splitter_for(dialect).split(text);
        tracing::info!(%dialect, sections = sections.len(), "split dump");
        (dialect, sections)
    }

    /// Sections with the category each one feeds.
    pub fn routes(&self, text: &str) -> (Dialect, Vec<SectionRoute>) {
        let (dialect, sections) = self.sections(text);
        let routes = sections
            .into_iter()
            .map(|section| {
                let category = match dialect {
                    Dialect::Banner => {
                        classifier::classify(&section.identifier).category_for(&section.identifier)
                    }
                    Dialect::NodeBoundary => "Storage".to_string(),
                };
                SectionRoute { section, category }
            })
            .collect();
        (dialect, routes)
    }

    pub fn run(&self, text: &str) -> Report {
        let (dialect, sections) = self.sections(text);
        let report = match dialect {
            Dialect::Banner => self.run_banner(&sections),
            Dialect::NodeBoundary => self.run_cluster(text, &sections),
        };
        tracing::debug!(records = report.len(), "assembled report");
        report
    }

    fn run_banner(&self, sections: &[RawSection]) -> Report {
        let mut builder =
            ReportBuilder::with_capacity(Dialect::Banner, self.context.now, sections.len());
        for section in sections {
            let rule = classifier::classify(&section.identifier);
            builder.push(rule.apply(section, &self.context));
        }
        builder.finish()
    }

    fn run_cluster(&self, text: &str, blocks: &[RawSection]) -> Report {
        let view = DumpView { text, blocks };
        let mut builder = ReportBuilder::with_capacity(
            Dialect::NodeBoundary,
            self.context.now,
            CLUSTER_CATALOG.len(),
        );
        for check in CLUSTER_CATALOG {
            builder.push((check.run)(&view, &self.context));
        }
        builder.finish()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(RuleContext::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthlens_types::StatusLevel;

    #[test]
    fn test_banner_run_one_record_per_section() {
        let text = "####\n# sps-status #\n####\nsps1 UP\n####\n# misc #\n####\nfoo\n";
        let report = Pipeline::default().run(text);
        assert_eq!(report.dialect, Dialect::Banner);
        assert_eq!(report.len(), 2);
        assert_eq!(report.records[0].category, "SPS Status");
        assert_eq!(report.records[1].category, "misc");
        assert_eq!(report.records[1].status, StatusLevel::Info);
    }

    #[test]
    fn test_declared_dialect_skips_probe() {
        let text = "####\n# sps-status #\n####\nnode1 /dev/sda1 10G 9G 1G 90% /\n";
        let report = Pipeline::default()
            .with_dialect(Dialect::NodeBoundary)
            .run(text);
        assert_eq!(report.dialect, Dialect::NodeBoundary);
        assert_eq!(report.len(), CLUSTER_CATALOG.len());
        assert_eq!(report.records[3].category, "Storage");
        assert_eq!(report.records[3].status, StatusLevel::Warning);
    }

    #[test]
    fn test_cluster_record_count_ignores_block_count() {
        let text: String = (1..=8)
            .map(|n| format!("node{n} /dev/sda1 10G 1G 9G 10% /\n"))
            .collect();
        let pipeline = Pipeline::default().with_dialect(Dialect::NodeBoundary);
        let (_, sections) = pipeline.sections(&text);
        assert_eq!(sections.len(), 8);
        assert_eq!(pipeline.run(&text).len(), CLUSTER_CATALOG.len());
    }

    #[test]
    fn test_routes_match_reported_categories() {
        let text = "####\n# edr_status #\n####\nfoo.edr 1K\n####\n# cdr_status #\n####\n";
        let pipeline = Pipeline::default();
        let (_, routes) = pipeline.routes(text);
        let routed: Vec<&str> = routes.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(routed, vec!["EDR Generation", "CDR Generation"]);

        let report = pipeline.run(text);
        let reported: Vec<&str> = report.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(routed, reported);
    }

    #[test]
    fn test_routes_name_categories() {
        let text = "####\n# diskspace_mdc1 #\n####\n####\n# pod xdr status #\n####\n";
        let (_, routes) = Pipeline::default().routes(text);
        let categories: Vec<&str> = routes.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["diskspace_mdc1", "Pod XDR Status"]);
    }
}
