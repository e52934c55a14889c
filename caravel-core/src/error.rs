//! Error types for caravel

use std::fmt;
use thiserror::Error;

/// Result type alias
pub type CaravelResult<T> = Result<T, CaravelError>;

/// Main error type
#[derive(Error, Debug)]
pub enum CaravelError {
    #[error("missing argument")]
    MissingArgument,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("path not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The two notices a command can surface to the user. Everything that
/// is wrong with the command line itself is `InvalidInput`; everything
/// that went wrong underneath it is `OperationFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidInput,
    OperationFailed,
}

impl CaravelError {
    pub fn notice(&self) -> Notice {
        match self {
            CaravelError::MissingArgument
            | CaravelError::UnknownCommand(_)
            | CaravelError::UnknownFlag(_)
            | CaravelError::NotADirectory(_) => Notice::InvalidInput,
            _ => Notice::OperationFailed,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::InvalidInput => write!(f, "Invalid input"),
            Notice::OperationFailed => write!(f, "Operation failed"),
        }
    }
}
