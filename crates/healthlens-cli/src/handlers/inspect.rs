use crate::config::Config;
use crate::input;
use crate::presentation::sections;
use crate::types::DialectChoice;
use anyhow::Result;
use healthlens_engine::Pipeline;

pub fn handle(input_path: &str, dialect: Option<DialectChoice>, config: &Config) -> Result<()> {
    let text = input::read_dump(input_path)?;

    let now = chrono::Local::now().naive_local();
    let mut pipeline = Pipeline::new(config.rule_context(now));
    if let Some(dialect) = dialect.unwrap_or(config.defaults.dialect).dialect() {
        pipeline = pipeline.with_dialect(dialect);
    }

    let (dialect, routes) = pipeline.routes(&text);
    print!("{}", sections::render(dialect, &routes));
    Ok(())
}
