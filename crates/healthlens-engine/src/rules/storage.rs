//! Filesystem usage rules over `df -h` style output.
//!
//! Fleet dumps carry one `diskspace` section per host and are judged per
//! mount. Cluster dumps mix every node's `df` output, so usage rows are
//! attributed to the node block they appear in and folded into a single
//! Storage record.

use healthlens_types::{HealthRecord, RawSection};

use super::parse_number;
use crate::context::RuleContext;
use crate::patterns::{DISK_USAGE_REGEX, MOUNT_USAGE_REGEX};

/// Usage strictly above this percentage is reported
pub const DISK_USAGE_THRESHOLD: u32 = 85;

const DEVICE_PREFIX: &str = "/dev";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountUsage {
    pub mount: String,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageFinding {
    pub node: String,
    pub mount: String,
    pub percent: u32,
}

fn usage_rows(re: &regex::Regex, body: &str) -> Vec<MountUsage> {
    re.captures_iter(body)
        .filter_map(|caps| {
            Some(MountUsage {
                mount: caps.get(1)?.as_str().to_string(),
                percent: parse_number(caps.get(2)?.as_str())?,
            })
        })
        .collect()
}

fn is_device_mount(mount: &str) -> bool {
    mount.starts_with(DEVICE_PREFIX) && !mount.contains("tmpfs")
}

/// Mounts above the threshold in one `diskspace` section.
pub fn disk_space(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let rows = usage_rows(&MOUNT_USAGE_REGEX, &section.body);
    if rows.is_empty() {
        return HealthRecord::info(&section.identifier, "No Data", "No mount info found");
    }

    let high: Vec<&MountUsage> = rows
        .iter()
        .filter(|row| row.percent > DISK_USAGE_THRESHOLD)
        .collect();
    if high.is_empty() {
        return HealthRecord::ok(&section.identifier, "OK", "All mounts below 85%");
    }

    let listed = high
        .iter()
        .map(|row| format!("{}: {}%", row.mount, row.percent))
        .collect::<Vec<_>>()
        .join(", ");
    HealthRecord::warning(
        &section.identifier,
        format!("{} Mounts >85%", high.len()),
        listed,
    )
}

/// Device mounts above the threshold inside one node block.
pub fn node_storage_findings(block: &RawSection) -> Vec<StorageFinding> {
    usage_rows(&DISK_USAGE_REGEX, &block.body)
        .into_iter()
        .filter(|row| is_device_mount(&row.mount) && row.percent > DISK_USAGE_THRESHOLD)
        .map(|row| StorageFinding {
            node: block.identifier.clone(),
            mount: row.mount,
            percent: row.percent,
        })
        .collect()
}

/// Fold the per-block findings of a cluster dump into one record.
pub fn cluster_storage(blocks: &[RawSection]) -> HealthRecord {
    let findings: Vec<StorageFinding> = blocks.iter().flat_map(node_storage_findings).collect();
    if findings.is_empty() {
        return HealthRecord::ok("Storage", "OK", "All mounts below 85% usage");
    }

    let mut nodes: Vec<&str> = findings.iter().map(|f| f.node.as_str()).collect();
    nodes.sort_unstable();
    nodes.dedup();

    let listed = findings
        .iter()
        .map(|f| format!("{} {}% on {}", f.mount, f.percent, f.node))
        .collect::<Vec<_>>()
        .join(", ");
    HealthRecord::warning(
        "Storage",
        format!("{} node(s) above 85%", nodes.len()),
        listed,
    )
}
