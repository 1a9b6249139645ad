// healthlens CLI
//
// Reading the dump, resolving config and rendering live here. The engine
// never touches the filesystem or the terminal: it receives the whole dump
// as one string and returns an ordered report.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::{Outcome, run};
