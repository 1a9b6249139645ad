use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::check::CheckOptions;
use crate::config::Config;
use crate::logging;
use anyhow::Result;

/// How a successful run should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    /// `--fail-on-warning` was given and the report has warnings
    WarningsFound,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => 0,
            Outcome::WarningsFound => 2,
        }
    }
}

pub fn run(cli: Cli) -> Result<Outcome> {
    logging::init(cli.log_level);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(Outcome::Clean);
    };

    match command {
        Commands::Check {
            input,
            dialect,
            format,
            now,
            output,
            fail_on_warning,
            no_color,
        } => {
            let config = Config::resolve(cli.config.as_deref())?;
            handlers::check::handle(
                CheckOptions {
                    input,
                    dialect,
                    format,
                    now,
                    output,
                    fail_on_warning,
                    no_color,
                },
                &config,
            )
        }

        Commands::Inspect { input, dialect } => {
            let config = Config::resolve(cli.config.as_deref())?;
            handlers::inspect::handle(&input, dialect, &config)?;
            Ok(Outcome::Clean)
        }

        Commands::Catalog { dialect } => {
            handlers::catalog::handle(dialect)?;
            Ok(Outcome::Clean)
        }
    }
}

fn show_guidance() {
    println!("healthlens - health-check dump analyzer\n");
    println!("Quick commands:");
    println!("  healthlens check dump.txt                # Findings table");
    println!("  healthlens check dump.txt --format html  # HTML table");
    println!("  healthlens inspect dump.txt              # How the dump was split");
    println!("  healthlens catalog                       # Recognized section rules\n");
    println!("Read from stdin with '-':");
    println!("  cat dump.txt | healthlens check -\n");
    println!("For more commands:");
    println!("  healthlens --help");
}
