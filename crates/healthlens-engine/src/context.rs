use chrono::{Local, NaiveDateTime};

pub const DEFAULT_FLEET_HOST_PREFIX: &str = "mdc";
pub const DEFAULT_REQUIRED_PACKAGES: &[&str] = &["pcs"];

/// Inputs a rule may consult besides the section body.
///
/// Rules never read the clock themselves; the evaluation time is fixed
/// once per run so identical input always produces an identical report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContext {
    /// Reference time for the 24h restart window (naive local time)
    pub now: NaiveDateTime,
    /// Host name prefix of fleet nodes in `kubectl get nodes` output
    pub fleet_host_prefix: String,
    /// Packages whose "missing <pkg>" message flags the cluster dump
    pub required_packages: Vec<String>,
}

impl RuleContext {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            fleet_host_prefix: DEFAULT_FLEET_HOST_PREFIX.to_string(),
            required_packages: DEFAULT_REQUIRED_PACKAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    pub fn with_fleet_host_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fleet_host_prefix = prefix.into();
        self
    }

    pub fn with_required_packages(mut self, packages: Vec<String>) -> Self {
        self.required_packages = packages;
        self
    }
}

impl Default for RuleContext {
    fn default() -> Self {
        Self::new(Local::now().naive_local())
    }
}
