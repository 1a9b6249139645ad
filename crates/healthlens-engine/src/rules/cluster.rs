//! Whole-dump checks of the cluster (node-boundary) dialect.
//!
//! These look at the full text rather than a single section: a pacemaker
//! status dump mixes `pcs status`, `df` and journal excerpts from every
//! node without any section markers.

use healthlens_types::HealthRecord;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::context::RuleContext;
use crate::patterns::NODE_TOKEN_REGEX;

static STACK_SERVICE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pacemaker|corosync").unwrap());
static RESOURCE_STARTED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Started|running").unwrap());
static FENCE_FAILURE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"reboot of (\S+) failed").unwrap());

pub fn cluster_stack(text: &str, _ctx: &RuleContext) -> HealthRecord {
    if STACK_SERVICE_REGEX.is_match(text) {
        HealthRecord::ok("Cluster Stack", "Active", "Pacemaker & Corosync running fine")
    } else {
        HealthRecord::warning("Cluster Stack", "Inactive", "Cluster services not running")
    }
}

pub fn node_health(text: &str, _ctx: &RuleContext) -> HealthRecord {
    let nodes: BTreeSet<&str> = NODE_TOKEN_REGEX.find_iter(text).map(|m| m.as_str()).collect();
    if nodes.is_empty() {
        return HealthRecord::unknown("Node Health", "Unknown", "No node info found");
    }

    HealthRecord::ok(
        "Node Health",
        format!("{} node(s) online", nodes.len()),
        nodes.into_iter().collect::<Vec<_>>().join(", "),
    )
}

pub fn resources(text: &str, _ctx: &RuleContext) -> HealthRecord {
    if RESOURCE_STARTED_REGEX.is_match(text) {
        HealthRecord::ok("Resources", "All started", "Including VIPs and LVs")
    } else {
        HealthRecord::warning("Resources", "Some stopped", "Check resource list")
    }
}

/// Failed fence reboots per host, in first-seen order.
pub fn fence_failures(text: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for line in text.lines() {
        let Some(host) = FENCE_FAILURE_REGEX
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            continue;
        };

        match counts.iter_mut().find(|(h, _)| h == host) {
            Some((_, count)) => *count += 1,
            None => counts.push((host.to_string(), 1)),
        }
    }
    counts
}

pub fn historical_issues(text: &str, _ctx: &RuleContext) -> HealthRecord {
    let failures = fence_failures(text);
    if failures.is_empty() {
        return HealthRecord::ok("Historical Issues", "Clean", "No recent failures");
    }

    let total: usize = failures.iter().map(|(_, count)| count).sum();
    let summary = failures
        .iter()
        .map(|(host, count)| format!("{} ({})", host, count))
        .collect::<Vec<_>>()
        .join(", ");
    HealthRecord::warning(
        "Historical Issues",
        format!("{} failure(s)", total),
        summary,
    )
}

fn is_reported_missing(text: &str, package: &str) -> bool {
    let pattern = format!(r"(?i)missing\s+{}", regex::escape(package));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(err) => {
            tracing::warn!(package, error = %err, "cannot build missing-package pattern");
            false
        }
    }
}

pub fn missing_package(text: &str, ctx: &RuleContext) -> HealthRecord {
    let missing: Vec<&str> = ctx
        .required_packages
        .iter()
        .map(String::as_str)
        .filter(|pkg| !pkg.is_empty() && is_reported_missing(text, pkg))
        .collect();

    if missing.is_empty() {
        return HealthRecord::ok(
            "Missing Package",
            "Installed",
            "All required packages present",
        );
    }

    let names = missing.join(", ");
    HealthRecord::warning(
        "Missing Package",
        format!("{} missing", names),
        format!("Reinstall {} if needed", names),
    )
}
