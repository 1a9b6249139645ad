use healthlens_types::{HealthRecord, RawSection};
use regex::Regex;
use std::sync::LazyLock;

use super::{captured_numbers, mean, parse_number};
use crate::context::RuleContext;

pub const FLUSH_LIMIT_MS: u64 = 1000;
pub const CLOCK_SKEW_LIMIT_MS: u64 = 100;

/// `kubectl top pods -A` row: namespace, name, ..., `<cpu>m <mem>`
static POD_USAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\d+)m\s+(\d+)").unwrap()
});
static BARE_INTEGER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)").unwrap());
static SKEW_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"skew-ms\s+(\d+)").unwrap());

pub fn pod_usage(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let rows: Vec<(String, u64, u64)> = POD_USAGE_REGEX
        .captures_iter(&section.body)
        .filter_map(|caps| {
            Some((
                caps.get(2)?.as_str().to_string(),
                parse_number(caps.get(5)?.as_str())?,
                parse_number(caps.get(6)?.as_str())?,
            ))
        })
        .collect();

    let cpu: Vec<u64> = rows.iter().map(|(_, cpu, _)| *cpu).collect();
    let mem: Vec<u64> = rows.iter().map(|(_, _, mem)| *mem).collect();
    let (avg_cpu, avg_mem) = (mean(&cpu), mean(&mem));

    let above_cpu = cpu.iter().filter(|&&v| v as f64 > avg_cpu).count();
    let above_mem = mem.iter().filter(|&&v| v as f64 > avg_mem).count();

    let remarks = format!(
        "Pods: {}, Above Avg CPU: {}, Above Avg MEM: {}",
        rows.len(),
        above_cpu,
        above_mem
    );

    if above_cpu == 0 && above_mem == 0 {
        HealthRecord::ok("Pod CPU/Memory Usage", "Normal", remarks)
    } else {
        HealthRecord::warning("Pod CPU/Memory Usage", "High Usage", remarks)
    }
}

pub fn flush_max_ms(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let samples: Vec<u64> = captured_numbers(&BARE_INTEGER_REGEX, &section.body);
    let high = samples.iter().filter(|&&v| v > FLUSH_LIMIT_MS).count();
    let max = samples.iter().copied().max().unwrap_or(0);
    let remarks = format!("Count >1000ms: {}, Max: {}ms", high, max);

    if high > 0 {
        HealthRecord::warning("Flush-Max-MS", "High Latency", remarks)
    } else {
        HealthRecord::ok("Flush-Max-MS", "Normal", remarks)
    }
}

pub fn clock_skew(section: &RawSection, _ctx: &RuleContext) -> HealthRecord {
    let skews: Vec<u64> = captured_numbers(&SKEW_REGEX, &section.body);
    let max = skews.iter().copied().max().unwrap_or(0);
    let remarks = format!(
        "Avg: {:.1} ms, Max: {} ms, Samples: {}",
        mean(&skews),
        max,
        skews.len()
    );

    if max > CLOCK_SKEW_LIMIT_MS {
        HealthRecord::warning("Clock Skew (AS)", "High Skew", remarks)
    } else {
        HealthRecord::ok("Clock Skew (AS)", "Normal", remarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthlens_types::StatusLevel;

    fn section(body: &str) -> RawSection {
        RawSection::new("test", body, 0)
    }

    #[test]
    fn test_pod_usage_flags_above_average() {
        let body = "ns web-1 x y 100m 200\nns web-2 x y 300m 200\n";
        let record = pod_usage(&section(body), &RuleContext::default());
        assert_eq!(record.status, StatusLevel::Warning);
        assert_eq!(record.remarks, "Pods: 2, Above Avg CPU: 1, Above Avg MEM: 0");
    }

    #[test]
    fn test_pod_usage_uniform_is_normal() {
        let body = "ns web-1 x y 100m 200\nns web-2 x y 100m 200\n";
        let record = pod_usage(&section(body), &RuleContext::default());
        assert_eq!(record.status, StatusLevel::Ok);
        assert_eq!(record.verdict, "Normal");
    }

    #[test]
    fn test_pod_usage_without_rows() {
        let record = pod_usage(&section("NAME CPU MEMORY\n"), &RuleContext::default());
        assert_eq!(record.status, StatusLevel::Ok);
        assert_eq!(record.remarks, "Pods: 0, Above Avg CPU: 0, Above Avg MEM: 0");
    }

    #[test]
    fn test_flush_without_numbers_degrades_to_zero() {
        let record = flush_max_ms(&section("no samples collected"), &RuleContext::default());
        assert_eq!(record.status, StatusLevel::Ok);
        assert_eq!(record.remarks, "Count >1000ms: 0, Max: 0ms");
    }

    #[test]
    fn test_flush_high_latency() {
        let record = flush_max_ms(
            &section("ns1 120\nns2 1500\nns3 2400\n"),
            &RuleContext::default(),
        );
        assert_eq!(record.status, StatusLevel::Warning);
        assert_eq!(record.remarks, "Count >1000ms: 2, Max: 2400ms");
    }

    #[test]
    fn test_clock_skew() {
        let body = "node a skew-ms 10\nnode b skew-ms 250\n";
        let record = clock_skew(&section(body), &RuleContext::default());
        assert_eq!(record.status, StatusLevel::Warning);
        assert_eq!(record.remarks, "Avg: 130.0 ms, Max: 250 ms, Samples: 2");
    }

    #[test]
    fn test_clock_skew_at_limit_is_normal() {
        let record = clock_skew(&section("skew-ms 100\n"), &RuleContext::default());
        assert_eq!(record.status, StatusLevel::Ok);
    }
}
