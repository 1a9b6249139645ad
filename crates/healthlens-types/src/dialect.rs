use serde::{Deserialize, Serialize};
use std::fmt;

/// Input format of a health-check dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Sections introduced by `####\n# TITLE #\n####` banners (fleet dumps).
    Banner,
    /// Per-node blocks anchored at `nodeN` / IPv4 tokens (cluster dumps).
    NodeBoundary,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Banner, Dialect::NodeBoundary];
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Banner => write!(f, "banner"),
            Dialect::NodeBoundary => write!(f, "node"),
        }
    }
}
