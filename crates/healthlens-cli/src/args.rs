use crate::types::{DialectChoice, LogLevel, OutputFormat};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Parser)]
#[command(name = "healthlens")]
#[command(about = "Turn concatenated health-check dumps into a findings table", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/healthlens/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity; RUST_LOG takes precedence when set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a dump and render its findings
    Check {
        /// Dump file, or `-` for stdin
        input: String,

        #[arg(long)]
        dialect: Option<DialectChoice>,

        #[arg(long)]
        format: Option<OutputFormat>,

        /// Evaluation time for restart windows (YYYY-MM-DDTHH:MM:SS, local)
        #[arg(long, value_parser = parse_now)]
        now: Option<NaiveDateTime>,

        /// Write the rendered report here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Exit with status 2 when any finding is a warning
        #[arg(long)]
        fail_on_warning: bool,

        #[arg(long)]
        no_color: bool,
    },

    /// Show how a dump is split and where each section is routed
    Inspect {
        /// Dump file, or `-` for stdin
        input: String,

        #[arg(long)]
        dialect: Option<DialectChoice>,
    },

    /// List the recognized section rules in precedence order
    Catalog {
        #[arg(long)]
        dialect: Option<DialectChoice>,
    },
}

fn parse_now(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw.trim(), NOW_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM:SS: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_now() {
        let now = parse_now("2025-11-25T12:00:00").unwrap();
        assert_eq!(now.to_string(), "2025-11-25 12:00:00");
        assert!(parse_now("25/11/2025").is_err());
    }

    #[test]
    fn test_check_flags() {
        let cli = Cli::try_parse_from([
            "healthlens",
            "check",
            "dump.txt",
            "--dialect",
            "node",
            "--format",
            "csv",
            "--fail-on-warning",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Check {
                input,
                dialect,
                format,
                fail_on_warning,
                ..
            }) => {
                assert_eq!(input, "dump.txt");
                assert_eq!(dialect, Some(DialectChoice::Node));
                assert_eq!(format, Some(OutputFormat::Csv));
                assert!(fail_on_warning);
            }
            _ => panic!("expected check"),
        }
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "healthlens",
            "catalog",
            "--log-level",
            "debug",
            "--config",
            "/tmp/hl.toml",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/hl.toml")));
    }
}
