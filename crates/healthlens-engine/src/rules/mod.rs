//! Extraction rules: one function per recognized section category.
//!
//! Every rule is total. Missing evidence degrades the verdict instead of
//! failing, and captures that do not parse as numbers are skipped.

pub mod artifacts;
pub mod cluster;
pub mod database;
pub mod resources;
pub mod restarts;
pub mod services;
pub mod storage;
pub mod xdr;

use healthlens_types::{HealthRecord, RawSection};
use regex::Regex;
use std::str::FromStr;

use crate::context::RuleContext;

/// Signature shared by all section rules.
pub type RuleFn = fn(&RawSection, &RuleContext) -> HealthRecord;

/// Parse every capture of group 1, skipping values that do not parse.
pub(crate) fn captured_numbers<T: FromStr>(re: &Regex, text: &str) -> Vec<T> {
    re.captures_iter(text)
        .filter_map(|caps| parse_number(caps.get(1)?.as_str()))
        .collect()
}

pub(crate) fn parse_number<T: FromStr>(raw: &str) -> Option<T> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::trace!(value = raw, "skipping unparsable number");
            None
        }
    }
}

/// First capture of group 1 parsed as a number, 0 when absent or malformed.
pub(crate) fn first_number_or_zero(re: &Regex, text: &str) -> u64 {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_number(m.as_str()))
        .unwrap_or(0)
}

pub(crate) fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Comma-joined list, or `None` for an empty list.
pub(crate) fn join_or_none<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Drop repeated entries, keeping first-seen order.
pub(crate) fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
