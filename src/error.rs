use std::path::PathBuf;

use thiserror::Error;

/// A line starting with `.` that names no known meta-command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaCommandError {
    #[error("Unrecognized command '{0}'")]
    Unrecognized(String),
}

/// Failures while turning a line into a [`crate::Statement`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepareError {
    #[error("Unrecognized keyword at start of '{0}'.")]
    UnrecognizedStatement(String),

    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    #[error("ID must be positive.")]
    NegativeId,

    #[error("String is too long.")]
    StringTooLong,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecuteError {
    #[error("Error: Table full.")]
    TableFull,
}

/// Every non-fatal outcome of processing one line. The table is left
/// untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    MetaCommand(#[from] MetaCommandError),

    #[error(transparent)]
    Prepare(#[from] PrepareError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

/// Rejected construction of a bounded text column.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text is {len} bytes, column holds at most {max}")]
    TooLong { max: usize, len: usize },

    #[error("text contains a NUL byte")]
    EmbeddedNul,
}

/// Fatal: no further input can be acquired.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("end of input")]
    Eof,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot open script {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
