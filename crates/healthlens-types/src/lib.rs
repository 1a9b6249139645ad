//! Core data model for healthlens.
//!
//! Everything here is plain data: the sections a dump is split into, the
//! records the rules emit and the report handed to renderers.

pub mod dialect;
pub mod error;
pub mod record;
pub mod report;
pub mod section;

pub use dialect::Dialect;
pub use error::{Error, Result};
pub use record::{HealthRecord, StatusLevel};
pub use report::{Report, ReportRow};
pub use section::RawSection;
