//! Pod restarts inside the last 24 hours.

use chrono::{NaiveDateTime, TimeDelta};
use healthlens_types::{HealthRecord, RawSection};

use crate::context::RuleContext;
use crate::patterns::RESTART_STAMP_REGEX;

const RESTART_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const RESTART_WINDOW_HOURS: i64 = 24;
pub const AEROSPIKE_RESTART_LIST_LIMIT: usize = 5;
pub const POD_RESTART_LIST_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restart {
    pub pod: String,
    pub stamp: String,
}

/// Restarts stamped no more than 24h before `now`.
///
/// Stamps that fail to parse are ignored. Stamps after `now` count as recent.
pub fn recent_restarts(body: &str, now: NaiveDateTime) -> Vec<Restart> {
    let window = TimeDelta::hours(RESTART_WINDOW_HOURS);

    RESTART_STAMP_REGEX
        .captures_iter(body)
        .filter_map(|caps| {
            let pod = caps.get(1)?.as_str();
            let stamp = caps.get(2)?.as_str();
            let restarted_at = match NaiveDateTime::parse_from_str(stamp, RESTART_TIMESTAMP_FORMAT)
            {
                Ok(ts) => ts,
                Err(err) => {
                    tracing::trace!(stamp, error = %err, "skipping unparsable restart stamp");
                    return None;
                }
            };

            (now - restarted_at <= window).then(|| Restart {
                pod: pod.to_string(),
                stamp: stamp.to_string(),
            })
        })
        .collect()
}

fn restart_record(category: &str, restarts: &[Restart], limit: usize) -> HealthRecord {
    if restarts.is_empty() {
        return HealthRecord::ok(category, "None", "No recent restarts");
    }

    let mut listed = restarts
        .iter()
        .take(limit)
        .map(|r| format!("{} @ {}", r.pod, r.stamp))
        .collect::<Vec<_>>()
        .join(", ");
    if restarts.len() > limit {
        listed.push_str(" ...");
    }

    HealthRecord::warning(category, format!("{} Found", restarts.len()), listed)
}

pub fn aerospike_restarts(section: &RawSection, ctx: &RuleContext) -> HealthRecord {
    let restarts = recent_restarts(&section.body, ctx.now);
    restart_record(
        "Aerospike Restart Status",
        &restarts,
        AEROSPIKE_RESTART_LIST_LIMIT,
    )
}

pub fn pod_restarts(section: &RawSection, ctx: &RuleContext) -> HealthRecord {
    let restarts = recent_restarts(&section.body, ctx.now);
    restart_record("Pod Restarts (24h)", &restarts, POD_RESTART_LIST_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use healthlens_types::StatusLevel;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 25)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn ctx() -> RuleContext {
        RuleContext::new(now())
    }

    #[test]
    fn test_window_edges() {
        let body = "pod-a 2025-11-24T11:59:59\n\
            pod-b 2025-11-24T12:01:00\n\
            pod-c 2025-11-24T12:00:00\n";
        let restarts = recent_restarts(body, now());
        let pods: Vec<&str> = restarts.iter().map(|r| r.pod.as_str()).collect();
        assert_eq!(pods, vec!["pod-b", "pod-c"]);
    }

    #[test]
    fn test_invalid_stamp_is_ignored() {
        let body = "pod-a 2025-13-45T99:00:00\npod-b 2025-11-25T11:00:00\n";
        let restarts = recent_restarts(body, now());
        assert_eq!(restarts.len(), 1);
        assert_eq!(restarts[0].pod, "pod-b");
    }

    #[test]
    fn test_aerospike_list_truncated_at_five() {
        let body: String = (0..7)
            .map(|i| format!("aerospike-{} 2025-11-25T0{}:00:00\n", i, i))
            .collect();
        let record = aerospike_restarts(&RawSection::new("aerospike restart", body, 0), &ctx());
        assert_eq!(record.status, StatusLevel::Warning);
        assert_eq!(record.verdict, "7 Found");
        assert!(record.remarks.starts_with("aerospike-0 @ 2025-11-25T00:00:00, "));
        assert!(record.remarks.ends_with("aerospike-4 @ 2025-11-25T04:00:00 ..."));
    }

    #[test]
    fn test_pod_restarts_not_truncated_below_limit() {
        let body = "web-1 2025-11-25T10:00:00\nweb-2 2025-11-25T11:00:00\n";
        let record = pod_restarts(&RawSection::new("pod restart", body, 0), &ctx());
        assert_eq!(
            record.remarks,
            "web-1 @ 2025-11-25T10:00:00, web-2 @ 2025-11-25T11:00:00"
        );
    }

    #[test]
    fn test_no_recent_restarts() {
        let body = "web-1 2025-10-01T10:00:00\n";
        let record = pod_restarts(&RawSection::new("pod restart", body, 0), &ctx());
        assert_eq!(record.status, StatusLevel::Ok);
        assert_eq!(record.verdict, "None");
        assert_eq!(record.remarks, "No recent restarts");
    }
}
