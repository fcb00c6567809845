use thiserror::Error;

use crate::core::activity::ActivityId;

/// Every failure a command can hit. The `Display` text is what the user sees.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid ID '{0}'. Please provide a valid integer ID.")]
    InvalidId(String),

    #[error("Activity with ID {0} not found.")]
    NotFound(ActivityId),

    #[error("Invalid status '{0}'. Expected one of: todo, in-progress, done")]
    InvalidStatus(String),

    #[error("Unknown command. Available commands: add, list, update, delete, quit")]
    Unknown(String),
}

impl CommandError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
