//! Fixtures for dump generation and placement.
//!
//! Provides utilities to:
//! - Load the bundled sample dumps under `samples/`
//! - Build synthetic banner and node-boundary dumps in tests

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

/// Evaluation time the bundled samples are written against.
pub const SAMPLE_NOW: &str = "2025-11-25T12:00:00";

pub const FLEET_SAMPLE: &str = "fleet_dump.txt";
pub const CLUSTER_SAMPLE: &str = "cluster_dump.txt";

pub fn sample_now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(SAMPLE_NOW, "%Y-%m-%dT%H:%M:%S")
        .expect("SAMPLE_NOW is a valid timestamp")
}

/// Sample dump manager for test data.
pub struct SampleDumps {
    samples_dir: PathBuf,
}

impl Default for SampleDumps {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleDumps {
    /// Samples live next to this crate's manifest.
    pub fn new() -> Self {
        let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<String> {
        let path = self.path(sample_name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sample {}", path.display()))
    }

    pub fn fleet(&self) -> Result<String> {
        self.read(FLEET_SAMPLE)
    }

    pub fn cluster(&self) -> Result<String> {
        self.read(CLUSTER_SAMPLE)
    }

    /// Copy a sample file to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        fs::copy(self.path(sample_name), dest)?;
        Ok(())
    }
}

/// Builds a dump text section by section.
///
/// # Example
/// ```
/// use healthlens_testing::DumpBuilder;
///
/// let dump = DumpBuilder::new()
///     .banner("SPS-STATUS", "sps1 UP\n")
///     .build();
/// assert!(dump.contains("# SPS-STATUS #"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct DumpBuilder {
    text: String,
}

impl DumpBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free text before the first section.
    pub fn preamble(mut self, text: &str) -> Self {
        self.push_line(text);
        self
    }

    /// A `#`-bordered banner section.
    pub fn banner(mut self, title: &str, body: &str) -> Self {
        let border = "#".repeat(title.len() + 4);
        self.push_line(&border);
        self.push_line(&format!("# {} #", title));
        self.push_line(&border);
        self.push_line(body);
        self
    }

    /// A `df -h` listing attributed to a node.
    pub fn node_df(mut self, node: &str, rows: &[(&str, u32)]) -> Self {
        self.push_line(node);
        self.push_line("Filesystem      Size  Used Avail Use% Mounted on");
        for (device, percent) in rows {
            self.push_line(&format!(
                "{}  100G  {}G  {}G  {}% /mnt",
                device,
                percent,
                100 - percent,
                percent
            ));
        }
        self
    }

    /// Raw lines, appended as-is.
    pub fn raw(mut self, text: &str) -> Self {
        self.push_line(text);
        self
    }

    pub fn build(self) -> String {
        self.text
    }

    fn push_line(&mut self, text: &str) {
        self.text.push_str(text);
        if !text.ends_with('\n') {
            self.text.push('\n');
        }
    }
}
