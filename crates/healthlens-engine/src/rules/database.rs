use healthlens_types::{HealthRecord, RawSection};
use regex::Regex;
use std::sync::LazyLock;

use super::first_number_or_zero;
use crate::context::RuleContext;

static TOTAL_NODES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Total DB nodes:\s+(\d+)").unwrap());
static RESPONDING_NODES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DB nodes responding:\s+(\d+)").unwrap());
/// `<set name> <count> ...` rows of the record-set listing
static RECORD_SET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[A-Za-z0-9_]+\s+\d").unwrap());

static REPLICATION_RUNNING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Running.*Yes").unwrap());
/// Substring match: `Last_Error`/`Last_Errno` fields count too
static REPLICATION_FAILED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)No|Error").unwrap());

pub fn db_stats(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let total = first_number_or_zero(&TOTAL_NODES_REGEX, &section.body);
    let responding = first_number_or_zero(&RESPONDING_NODES_REGEX, &section.body);
    let record_sets = RECORD_SET_REGEX.find_iter(&section.body).count();

    let remarks = format!(
        "{}/{} nodes responding, {} record sets found",
        responding, total, record_sets
    );

    if total == responding {
        HealthRecord::ok("DB Stats", "OK", remarks)
    } else {
        HealthRecord::warning("DB Stats", "Issue", remarks)
    }
}

pub fn replication_status(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let running = REPLICATION_RUNNING_REGEX.find_iter(&section.body).count();
    let failed = REPLICATION_FAILED_REGEX.find_iter(&section.body).count();
    let remarks = format!("Running: {}, Failed: {}", running, failed);

    if failed > 0 {
        HealthRecord::warning("Replication Status", "Issue", remarks)
    } else {
        HealthRecord::ok("Replication Status", "OK", remarks)
    }
}
