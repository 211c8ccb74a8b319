use crate::error::MetaCommandError;

/// Marks a line as a meta-command rather than a statement.
pub const META_COMMAND_PREFIX: char = '.';

/// Control lines handled outside the statement pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
}

impl MetaCommand {
    /// `None` when the line is not a meta-command at all.
    pub fn parse(input: &str) -> Option<Result<MetaCommand, MetaCommandError>> {
        if !input.starts_with(META_COMMAND_PREFIX) {
            return None;
        }
        match input {
            ".exit" => Some(Ok(MetaCommand::Exit)),
            _ => Some(Err(MetaCommandError::Unrecognized(input.to_string()))),
        }
    }
}
