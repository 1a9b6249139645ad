use serde::{Deserialize, Serialize};

/// A contiguous span of the dump attributed to one named check.
///
/// Produced by a splitter and never mutated afterwards. `order` is the
/// 0-based position at which the section was discovered in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    pub identifier: String,
    pub body: String,
    pub order: usize,
}

impl RawSection {
    pub fn new(identifier: impl Into<String>, body: impl Into<String>, order: usize) -> Self {
        Self {
            identifier: identifier.into(),
            body: body.into(),
            order,
        }
    }

    pub fn line_count(&self) -> usize {
        self.body.lines().count()
    }
}
