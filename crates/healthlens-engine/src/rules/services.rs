//! Service availability rules: SPS, Diameter peers, fleet node readiness and
//! the catch-all fallback.

use healthlens_types::{HealthRecord, RawSection};
use regex::Regex;
use std::sync::LazyLock;

use super::{dedup_in_order, join_or_none};
use crate::context::RuleContext;
use crate::patterns::{DOWN_ITEM_REGEX, UP_ITEM_REGEX};

static DIAMETER_PEER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(SS7|PGW|DRA).*?(UP|DOWN)").unwrap());

/// Number of `UP` items and the tokens of every `DOWN`/`FAIL`/`ERROR` item.
pub(crate) fn up_down_items(body: &str) -> (usize, Vec<String>) {
    let up = UP_ITEM_REGEX.find_iter(body).count();
    let down = DOWN_ITEM_REGEX
        .captures_iter(body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect();
    (up, down)
}

pub fn sps_status(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let (up, down) = up_down_items(&section.body);
    let down_count = down.len();
    let down_list = join_or_none(&dedup_in_order(down));
    let remarks = format!("{} UP, {} DOWN ({})", up, down_count, down_list);

    if down_count > 0 {
        HealthRecord::warning("SPS Status", "Issues", remarks)
    } else {
        HealthRecord::ok("SPS Status", "Stable", remarks)
    }
}

pub fn diameter_peers(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let peers: Vec<(&str, &str)> = DIAMETER_PEER_REGEX
        .captures_iter(&section.body)
        .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .collect();
    let down: Vec<&str> = peers
        .iter()
        .filter(|(_, state)| state.eq_ignore_ascii_case("down"))
        .map(|(name, _)| *name)
        .collect();

    let remarks = format!(
        "Total: {}, Down: {} ({})",
        peers.len(),
        down.len(),
        join_or_none(&down)
    );

    if down.is_empty() {
        HealthRecord::ok("Diameter Peers", "All UP", remarks)
    } else {
        HealthRecord::warning("Diameter Peers", "Some Down", remarks)
    }
}

/// Readiness of fleet hosts from `kubectl get nodes` style output.
///
/// Only names starting with the configured host prefix are considered.
pub fn node_status(section: &RawSection, ctx: &RuleContext) -> HealthRecord {
    let pattern = format!(
        r"({}\S+).*?(NotReady|Ready)",
        regex::escape(&ctx.fleet_host_prefix)
    );
    let nodes: Vec<(String, bool)> = match Regex::new(&pattern) {
        Ok(re) => re
            .captures_iter(&section.body)
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str().to_string();
                let ready = caps.get(2)?.as_str() == "Ready";
                Some((name, ready))
            })
            .collect(),
        Err(err) => {
            tracing::warn!(error = %err, "invalid fleet host pattern, node status has no evidence");
            Vec::new()
        }
    };

    let not_ready: Vec<&str> = nodes
        .iter()
        .filter(|(_, ready)| !ready)
        .map(|(name, _)| name.as_str())
        .collect();
    let ready = nodes.len() - not_ready.len();

    let remarks = format!(
        "Total: {}, Ready: {}, NotReady: {} ({})",
        nodes.len(),
        ready,
        not_ready.len(),
        join_or_none(&not_ready)
    );

    if not_ready.is_empty() {
        HealthRecord::ok("Node Status", "All Ready", remarks)
    } else {
        HealthRecord::warning("Node Status", "Not Ready", remarks)
    }
}

/// Catch-all for identifiers no specific rule claims.
pub fn fallback(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let (up, down) = up_down_items(&section.body);
    HealthRecord::info(
        &section.identifier,
        "Parsed",
        format!("{} UP, {} DOWN", up, down.len()),
    )
}
