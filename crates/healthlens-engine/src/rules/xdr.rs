//! Cross-datacenter replication (XDR) lag rules.

use healthlens_types::{HealthRecord, RawSection};
use regex::Regex;
use std::sync::LazyLock;

use super::{captured_numbers, mean, parse_number};
use crate::context::RuleContext;

/// Average lag at or above this value (ms) marks XDR as lagging
pub const XDR_LAG_LIMIT_MS: f64 = 500.0;
/// Per-pod lag or latency above this value (ms) marks the pod as high
pub const POD_XDR_LIMIT_MS: u64 = 1000;

static LAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"lag[:\s]+(\d+)").unwrap());
static LATENCY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"latency_ms[:\s]+(\d+)").unwrap());
static SERVICE_STATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Service State:\s*(\w+)").unwrap());
static POD_LAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S+)\s+lag[:=]\s*(\d+).*?latency[:=]\s*(\d+)").unwrap()
});

#[derive(Debug, Clone, PartialEq)]
pub struct XdrSummary {
    pub state: String,
    pub avg_lag_ms: f64,
    pub avg_latency_ms: f64,
}

/// Aggregate lag/latency samples; absent samples average to 0.
pub fn summarize_xdr(body: &str) -> XdrSummary {
    let lags: Vec<u64> = captured_numbers(&LAG_REGEX, body);
    let latencies: Vec<u64> = captured_numbers(&LATENCY_REGEX, body);
    let state = SERVICE_STATE_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| "UNKNOWN".to_string(), |m| m.as_str().to_string());

    XdrSummary {
        state,
        avg_lag_ms: mean(&lags),
        avg_latency_ms: mean(&latencies),
    }
}

pub fn xdr_status(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let summary = summarize_xdr(&section.body);
    let remarks = format!(
        "State: {}, Avg lag {:.1} ms, Avg latency {:.1} ms",
        summary.state, summary.avg_lag_ms, summary.avg_latency_ms
    );

    if summary.state.eq_ignore_ascii_case("UP") && summary.avg_lag_ms < XDR_LAG_LIMIT_MS {
        HealthRecord::ok("XDR Status", "OK", remarks)
    } else {
        HealthRecord::warning("XDR Status", "High Lag/Down", remarks)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PodLag {
    pod: String,
    lag: u64,
    latency: u64,
}

impl PodLag {
    fn is_high(&self) -> bool {
        self.lag > POD_XDR_LIMIT_MS || self.latency > POD_XDR_LIMIT_MS
    }
}

pub fn pod_xdr_status(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let pods: Vec<PodLag> = POD_LAG_REGEX
        .captures_iter(&section.body)
        .filter_map(|caps| {
            Some(PodLag {
                pod: caps.get(1)?.as_str().to_string(),
                lag: parse_number(caps.get(2)?.as_str())?,
                latency: parse_number(caps.get(3)?.as_str())?,
            })
        })
        .collect();

    if pods.is_empty() {
        return HealthRecord::info("Pod XDR Status", "No Data", "No pod lag/latency entries");
    }

    let lags: Vec<u64> = pods.iter().map(|p| p.lag).collect();
    let high: Vec<&PodLag> = pods.iter().filter(|p| p.is_high()).collect();

    let detail = if high.is_empty() {
        "All normal".to_string()
    } else {
        high.iter()
            .take(3)
            .map(|p| format!("{}(lag {}, lat {})", p.pod, p.lag, p.latency))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let remarks = format!("Pods: {}, Avg lag: {:.1}, {}", pods.len(), mean(&lags), detail);

    if high.is_empty() {
        HealthRecord::ok("Pod XDR Status", "Normal", remarks)
    } else {
        HealthRecord::warning("Pod XDR Status", "High Lag", remarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthlens_types::StatusLevel;

    fn run(rule: crate::rules::RuleFn, body: &str) -> HealthRecord {
        rule(&RawSection::new("xdr status", body, 0), &RuleContext::default())
    }

    #[test]
    fn test_summarize_means() {
        let summary = summarize_xdr("dc2 lag: 100\ndc3 lag: 900\nlatency_ms: 50\n");
        assert_eq!(summary.avg_lag_ms, 500.0);
        assert_eq!(summary.avg_latency_ms, 50.0);
        assert_eq!(summary.state, "UNKNOWN");
    }

    #[test]
    fn test_xdr_up_and_low_lag_is_ok() {
        let record = run(xdr_status, "Service State: up\nlag: 120\nlatency_ms: 8\n");
        assert_eq!(record.status, StatusLevel::Ok);
        assert_eq!(record.remarks, "State: up, Avg lag 120.0 ms, Avg latency 8.0 ms");
    }

    #[test]
    fn test_xdr_lag_at_limit_warns() {
        let record = run(xdr_status, "Service State: UP\nlag: 100\nlag: 900\nlatency_ms: 50\n");
        assert_eq!(record.status, StatusLevel::Warning);
        assert_eq!(record.verdict, "High Lag/Down");
        assert_eq!(record.remarks, "State: UP, Avg lag 500.0 ms, Avg latency 50.0 ms");
    }

    #[test]
    fn test_xdr_without_lag_samples_reads_as_ok_when_up() {
        let record = run(xdr_status, "Service State: UP\n");
        assert_eq!(record.status, StatusLevel::Ok);
        assert_eq!(record.remarks, "State: UP, Avg lag 0.0 ms, Avg latency 0.0 ms");
    }

    #[test]
    fn test_pod_xdr_no_data() {
        let record = run(pod_xdr_status, "no pods reported\n");
        assert_eq!(record.status, StatusLevel::Info);
        assert_eq!(record.verdict, "No Data");
    }

    #[test]
    fn test_pod_xdr_high_lists_first_three() {
        let body = "as-0 lag=1500 latency=10\n\
            as-1 lag=10 latency=2000\n\
            as-2 lag: 5 latency: 5\n\
            as-3 lag=3000 latency=3000\n\
            as-4 lag=1001 latency=0\n";
        let record = run(pod_xdr_status, body);
        assert_eq!(record.status, StatusLevel::Warning);
        assert_eq!(
            record.remarks,
            "Pods: 5, Avg lag: 1103.2, as-0(lag 1500, lat 10), as-1(lag 10, lat 2000), as-3(lag 3000, lat 3000)"
        );
    }

    #[test]
    fn test_pod_xdr_normal() {
        let record = run(pod_xdr_status, "as-0 lag=10 latency=10\nas-1 lag=30 latency=10\n");
        assert_eq!(record.status, StatusLevel::Ok);
        assert_eq!(record.remarks, "Pods: 2, Avg lag: 20.0, All normal");
    }
}
