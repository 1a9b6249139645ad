use crate::presentation::catalog;
use crate::types::DialectChoice;
use anyhow::Result;

pub fn handle(dialect: Option<DialectChoice>) -> Result<()> {
    let dialect = dialect.and_then(DialectChoice::dialect);
    print!("{}", catalog::render(dialect));
    Ok(())
}
