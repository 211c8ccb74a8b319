use std::str::FromStr;

use log::debug;

use crate::error::{ExecuteError, PrepareError, TextError};
use crate::row::{Email, Row, Username};
use crate::table::Table;

/// A parsed and validated data statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Insert(Row),
    Select,
}

/// What a statement produced when run against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecuteResult {
    Inserted,
    Rows(Vec<Row>),
}

impl Statement {
    pub fn prepare(input: &str) -> Result<Self, PrepareError> {
        let statement = if input.starts_with("insert") {
            prepare_insert(input)?
        } else if input == "select" {
            Statement::Select
        } else {
            return Err(PrepareError::UnrecognizedStatement(input.to_string()));
        };
        debug!("prepared {statement:?}");
        Ok(statement)
    }

    pub fn execute(self, table: &mut Table) -> Result<ExecuteResult, ExecuteError> {
        match self {
            Statement::Insert(row) => {
                table.append(&row)?;
                Ok(ExecuteResult::Inserted)
            }
            Statement::Select => Ok(ExecuteResult::Rows(table.scan_all().collect())),
        }
    }
}

impl FromStr for Statement {
    type Err = PrepareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::prepare(s)
    }
}

// Checks run in a fixed order: token count, id, username, email.
fn prepare_insert(input: &str) -> Result<Statement, PrepareError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [_keyword, id, username, email] = tokens[..] else {
        return Err(PrepareError::SyntaxError);
    };

    let id: i64 = id.parse().map_err(|_| id_parse_error(id))?;
    if id < 0 {
        return Err(PrepareError::NegativeId);
    }
    let id = u32::try_from(id).map_err(|_| PrepareError::SyntaxError)?;

    let username = Username::new(username).map_err(text_error)?;
    let email = Email::new(email).map_err(text_error)?;

    Ok(Statement::Insert(Row {
        id,
        username,
        email,
    }))
}

// A negative number too large for i64 is still negative.
fn id_parse_error(id: &str) -> PrepareError {
    match id.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            PrepareError::NegativeId
        }
        _ => PrepareError::SyntaxError,
    }
}

fn text_error(err: TextError) -> PrepareError {
    match err {
        TextError::TooLong { .. } => PrepareError::StringTooLong,
        TextError::EmbeddedNul => PrepareError::SyntaxError,
    }
}
