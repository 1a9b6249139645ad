use crate::commands::Outcome;
use crate::config::Config;
use crate::input;
use crate::presentation::{self, TableOptions};
use crate::types::{DialectChoice, OutputFormat};
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use healthlens_engine::Pipeline;
use healthlens_types::StatusLevel;
use is_terminal::IsTerminal;
use std::path::PathBuf;

pub struct CheckOptions {
    pub input: String,
    pub dialect: Option<DialectChoice>,
    pub format: Option<OutputFormat>,
    pub now: Option<NaiveDateTime>,
    pub output: Option<PathBuf>,
    pub fail_on_warning: bool,
    pub no_color: bool,
}

fn color_enabled(options: &CheckOptions, format: OutputFormat, to_terminal: bool) -> bool {
    format == OutputFormat::Table
        && to_terminal
        && !options.no_color
        && std::env::var_os("NO_COLOR").is_none()
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
}

pub fn handle(options: CheckOptions, config: &Config) -> Result<Outcome> {
    let text = input::read_dump(&options.input)?;

    let now = options
        .now
        .unwrap_or_else(|| chrono::Local::now().naive_local());
    let mut pipeline = Pipeline::new(config.rule_context(now));
    let choice = options.dialect.unwrap_or(config.defaults.dialect);
    if let Some(dialect) = choice.dialect() {
        pipeline = pipeline.with_dialect(dialect);
    }

    let report = pipeline.run(&text);
    tracing::info!(
        dialect = %report.dialect,
        records = report.len(),
        warnings = report.count(StatusLevel::Warning),
        "analyzed dump"
    );

    let format = options.format.unwrap_or(config.defaults.format);
    let to_terminal = options.output.is_none() && std::io::stdout().is_terminal();
    let table_options = TableOptions {
        color: color_enabled(&options, format, to_terminal),
        width: if to_terminal { terminal_width() } else { None },
    };
    let rendered = presentation::render(&report, format, &table_options)?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote report");
        }
        None => print!("{}", rendered),
    }

    if options.fail_on_warning && report.count(StatusLevel::Warning) > 0 {
        Ok(Outcome::WarningsFound)
    } else {
        Ok(Outcome::Clean)
    }
}
