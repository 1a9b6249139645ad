//! Informational rules over directory listings and job tables: backups,
//! device dumps, EDR/CDR output and cron jobs.

use healthlens_types::{HealthRecord, RawSection};
use regex::Regex;
use std::sync::LazyLock;

use crate::context::RuleContext;
use crate::patterns::{DIR_ENTRY_REGEX, TOTAL_SIZE_REGEX};

static RECORD_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.EDR\.gz|\.CDR\.gz").unwrap());
/// `kubectl get cronjobs` row; group 1 is the SUSPEND column
static CRON_JOB_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\S+\s+\S+\s+\S+\s+(True|False)").unwrap());

fn total_size(body: &str) -> &str {
    TOTAL_SIZE_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map_or("Unknown", |m| m.as_str())
}

pub fn backup_status(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let dirs = DIR_ENTRY_REGEX.find_iter(&section.body).count();
    HealthRecord::ok(
        "Backup Status",
        "OK",
        format!("Dirs: {}, Size: {}", dirs, total_size(&section.body)),
    )
}

pub fn device_dump_status(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let folders = DIR_ENTRY_REGEX.find_iter(&section.body).count();
    HealthRecord::ok(
        "A/C Device Dump Status",
        "OK",
        format!(
            "Folders: {}, Total Size: {}",
            folders,
            total_size(&section.body)
        ),
    )
}

pub fn record_generation_category(identifier: &str) -> &'static str {
    if identifier.contains("edr") {
        "EDR Generation"
    } else {
        "CDR Generation"
    }
}

/// EDR or CDR file generation, named after whichever the section covers.
pub fn record_generation(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let category = record_generation_category(&section.identifier);
    let files = RECORD_FILE_REGEX.find_iter(&section.body).count();
    let remarks = format!("Files: {}, Size: {}", files, total_size(&section.body));

    if files > 0 {
        HealthRecord::ok(category, "OK", remarks)
    } else {
        HealthRecord::warning(category, "None Found", remarks)
    }
}

pub fn cron_jobs(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let flags: Vec<&str> = CRON_JOB_REGEX
        .captures_iter(&section.body)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();
    let suspended = flags.iter().filter(|f| f.eq_ignore_ascii_case("true")).count();
    let remarks = format!("Total: {}, Suspended: {}", flags.len(), suspended);

    if suspended > 0 {
        HealthRecord::warning("Cron Jobs", "Suspended Jobs", remarks)
    } else {
        HealthRecord::ok("Cron Jobs", "OK", remarks)
    }
}
