//! Testing infrastructure for healthlens integration tests.
//!
//! This crate provides utilities for writing integration tests:
//! - `TestWorld`: isolated temp directory with dumps and config files, plus CLI execution
//! - `assertions`: report and JSON output checks
//! - `fixtures`: bundled sample dumps and a builder for synthetic ones

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{DumpBuilder, SAMPLE_NOW, SampleDumps, sample_now};
pub use world::{CliResult, TestWorld};
