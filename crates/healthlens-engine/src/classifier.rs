//! Closed rule catalogs and section routing.
//!
//! The banner catalog is an ordered decision table of (predicate, rule)
//! pairs: the first predicate that accepts a section identifier selects
//! the rule. More specific predicates sit before their generic supersets
//! ("aerospike restart" before "restart", the pod-guarded XDR predicate
//! before "pod xdr"), and the last entry accepts everything.

use healthlens_types::{HealthRecord, RawSection};
use regex::Regex;
use std::sync::LazyLock;

use crate::context::RuleContext;
use crate::rules::{
    RuleFn, artifacts, cluster, database, resources, restarts, services, storage, xdr,
};

static XDR_STATUS_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bxdr status\b").unwrap());

/// How a banner rule names the category it reports under.
#[derive(Clone, Copy)]
pub enum CategoryName {
    Fixed(&'static str),
    /// The section identifier itself
    Identifier,
    /// Picked from the identifier; `label` stands for the whole family
    Derived {
        label: &'static str,
        name: fn(&str) -> &'static str,
    },
}

/// One entry of the banner catalog.
#[derive(Clone, Copy)]
pub struct ExtractionRule {
    pub category: CategoryName,
    /// Human description of the predicate, shown by `healthlens catalog`
    pub matches_when: &'static str,
    pub matches: fn(&str) -> bool,
    pub extract: RuleFn,
}

impl ExtractionRule {
    pub fn label(&self) -> &'static str {
        match self.category {
            CategoryName::Fixed(name) => name,
            CategoryName::Identifier => "<section name>",
            CategoryName::Derived { label, .. } => label,
        }
    }

    /// Category a record extracted from `identifier` is reported under.
    pub fn category_for(&self, identifier: &str) -> String {
        match self.category {
            CategoryName::Fixed(name) => name.to_string(),
            CategoryName::Identifier => identifier.to_string(),
            CategoryName::Derived { name, .. } => name(identifier).to_string(),
        }
    }

    pub fn apply(&self, section: &RawSection, ctx: &RuleContext) -> HealthRecord {
        (self.extract)(section, ctx)
    }
}

impl std::fmt::Debug for ExtractionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionRule")
            .field("category", &self.label())
            .field("matches_when", &self.matches_when)
            .finish()
    }
}

fn is_sps_status(id: &str) -> bool {
    id.contains("sps-status")
}

fn is_db_stats(id: &str) -> bool {
    id.contains("db-stats")
}

fn is_xdr_status(id: &str) -> bool {
    XDR_STATUS_WORDS.is_match(id) && !id.contains("pod")
}

fn is_pod_xdr_status(id: &str) -> bool {
    id.contains("pod xdr") || (id.contains("xdr status") && id.contains("pod"))
}

fn is_aerospike_restart(id: &str) -> bool {
    id.contains("restart") && id.contains("aerospike")
}

fn is_diameter(id: &str) -> bool {
    id.contains("diameter")
}

fn is_replication(id: &str) -> bool {
    id.contains("replication")
}

fn is_restart(id: &str) -> bool {
    id.contains("restart")
}

fn is_node_status(id: &str) -> bool {
    id.contains("node status")
}

fn is_pod_cpu_status(id: &str) -> bool {
    id.contains("pod cpu status")
}

fn is_flush_max_ms(id: &str) -> bool {
    id.contains("flush-max-ms")
}

fn is_clock_skew(id: &str) -> bool {
    id.contains("clock_skew_as")
}

fn is_backup_status(id: &str) -> bool {
    id.contains("check_backup_status") || id.contains("check_btel_backup_status")
}

fn is_diskspace(id: &str) -> bool {
    id.contains("diskspace")
}

fn is_device_dump(id: &str) -> bool {
    id.contains("check_a/c_device_dump_status")
}

fn is_record_generation(id: &str) -> bool {
    id.contains("edr_status") || id.contains("cdr_status")
}

fn is_cronjob(id: &str) -> bool {
    id.contains("cronjob")
}

fn matches_anything(_id: &str) -> bool {
    true
}

/// Banner catalog in precedence order. The final entry is the fallback.
pub static BANNER_CATALOG: &[ExtractionRule] = &[
    ExtractionRule {
        category: CategoryName::Fixed("SPS Status"),
        matches_when: "contains 'sps-status'",
        matches: is_sps_status,
        extract: services::sps_status,
    },
    ExtractionRule {
        category: CategoryName::Fixed("DB Stats"),
        matches_when: "contains 'db-stats'",
        matches: is_db_stats,
        extract: database::db_stats,
    },
    ExtractionRule {
        category: CategoryName::Fixed("XDR Status"),
        matches_when: "word 'xdr status', without 'pod'",
        matches: is_xdr_status,
        extract: xdr::xdr_status,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Pod XDR Status"),
        matches_when: "'pod xdr', or 'xdr status' with 'pod'",
        matches: is_pod_xdr_status,
        extract: xdr::pod_xdr_status,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Aerospike Restart Status"),
        matches_when: "'restart' and 'aerospike'",
        matches: is_aerospike_restart,
        extract: restarts::aerospike_restarts,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Diameter Peers"),
        matches_when: "contains 'diameter'",
        matches: is_diameter,
        extract: services::diameter_peers,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Replication Status"),
        matches_when: "contains 'replication'",
        matches: is_replication,
        extract: database::replication_status,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Pod Restarts (24h)"),
        matches_when: "contains 'restart'",
        matches: is_restart,
        extract: restarts::pod_restarts,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Node Status"),
        matches_when: "contains 'node status'",
        matches: is_node_status,
        extract: services::node_status,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Pod CPU/Memory Usage"),
        matches_when: "contains 'pod cpu status'",
        matches: is_pod_cpu_status,
        extract: resources::pod_usage,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Flush-Max-MS"),
        matches_when: "contains 'flush-max-ms'",
        matches: is_flush_max_ms,
        extract: resources::flush_max_ms,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Clock Skew (AS)"),
        matches_when: "contains 'clock_skew_as'",
        matches: is_clock_skew,
        extract: resources::clock_skew,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Backup Status"),
        matches_when: "'check_backup_status' or 'check_btel_backup_status'",
        matches: is_backup_status,
        extract: artifacts::backup_status,
    },
    ExtractionRule {
        category: CategoryName::Identifier,
        matches_when: "contains 'diskspace'",
        matches: is_diskspace,
        extract: storage::disk_space,
    },
    ExtractionRule {
        category: CategoryName::Fixed("A/C Device Dump Status"),
        matches_when: "contains 'check_a/c_device_dump_status'",
        matches: is_device_dump,
        extract: artifacts::device_dump_status,
    },
    ExtractionRule {
        category: CategoryName::Derived {
            label: "EDR Generation / CDR Generation",
            name: artifacts::record_generation_category,
        },
        matches_when: "'edr_status' or 'cdr_status'",
        matches: is_record_generation,
        extract: artifacts::record_generation,
    },
    ExtractionRule {
        category: CategoryName::Fixed("Cron Jobs"),
        matches_when: "contains 'cronjob'",
        matches: is_cronjob,
        extract: artifacts::cron_jobs,
    },
    ExtractionRule {
        category: CategoryName::Identifier,
        matches_when: "anything (fallback)",
        matches: matches_anything,
        extract: services::fallback,
    },
];

/// Select the rule for a section identifier. Total: the fallback accepts
/// every identifier, so a rule is always returned.
pub fn classify(identifier: &str) -> &'static ExtractionRule {
    let rule = BANNER_CATALOG
        .iter()
        .find(|rule| (rule.matches)(identifier))
        .unwrap_or(&BANNER_CATALOG[BANNER_CATALOG.len() - 1]);
    tracing::debug!(identifier, rule = rule.label(), "classified section");
    rule
}

/// What a cluster-dialect check gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct DumpView<'a> {
    pub text: &'a str,
    pub blocks: &'a [RawSection],
}

/// One entry of the cluster (node-boundary) catalog.
#[derive(Clone, Copy)]
pub struct DocumentCheck {
    pub category: &'static str,
    pub evidence: &'static str,
    pub run: fn(&DumpView<'_>, &RuleContext) -> HealthRecord,
}

impl std::fmt::Debug for DocumentCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentCheck")
            .field("category", &self.category)
            .field("evidence", &self.evidence)
            .finish()
    }
}

/// Cluster catalog, reported in this order.
pub static CLUSTER_CATALOG: &[DocumentCheck] = &[
    DocumentCheck {
        category: "Cluster Stack",
        evidence: "pacemaker / corosync mentioned",
        run: |view, ctx| cluster::cluster_stack(view.text, ctx),
    },
    DocumentCheck {
        category: "Node Health",
        evidence: "unique nodeN / IPv4 tokens",
        run: |view, ctx| cluster::node_health(view.text, ctx),
    },
    DocumentCheck {
        category: "Resources",
        evidence: "'Started' / 'running' present",
        run: |view, ctx| cluster::resources(view.text, ctx),
    },
    DocumentCheck {
        category: "Storage",
        evidence: "/dev mounts above 85% in each node block",
        run: |view, _ctx| storage::cluster_storage(view.blocks),
    },
    DocumentCheck {
        category: "Historical Issues",
        evidence: "'reboot of <host> failed' lines",
        run: |view, ctx| cluster::historical_issues(view.text, ctx),
    },
    DocumentCheck {
        category: "Missing Package",
        evidence: "'missing <pkg>' for required packages",
        run: |view, ctx| cluster::missing_package(view.text, ctx),
    },
];
