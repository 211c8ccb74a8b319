use crate::error::Result;
use crate::meta::MetaCommand;
use crate::row::Row;
use crate::statement::{ExecuteResult, Statement};
use crate::table::Table;

/// The single result of processing one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Exit,
    Inserted,
    Rows(Vec<Row>),
}

impl From<ExecuteResult> for Outcome {
    fn from(result: ExecuteResult) -> Self {
        match result {
            ExecuteResult::Inserted => Outcome::Inserted,
            ExecuteResult::Rows(rows) => Outcome::Rows(rows),
        }
    }
}

/// Runs one line through meta-command dispatch, then statement preparation,
/// then execution. The table is only touched once preparation succeeded.
pub fn process_line(table: &mut Table, input: &str) -> Result<Outcome> {
    if let Some(meta) = MetaCommand::parse(input) {
        return match meta? {
            MetaCommand::Exit => Ok(Outcome::Exit),
        };
    }

    let statement = Statement::prepare(input)?;
    Ok(statement.execute(table)?.into())
}
