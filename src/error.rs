use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{program} not found on PATH")]
    ToolMissing { program: String },

    #[error("{program} exited with {status}: {stderr}")]
    ToolFailure {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("{program} could not be launched (not found)")]
    InvocationMissing { program: String },

    #[error("{0}")]
    Unexpected(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl Error {
    pub fn error_code(&self) -> &str {
        match self {
            Error::ToolMissing { .. } => "ToolMissing",
            Error::ToolFailure { .. } => "ToolFailure",
            Error::InvocationMissing { .. } => "InvocationMissing",
            Error::Unexpected(_) => "Unexpected",
        }
    }

    /// Only a failed preflight stops the process with a non-zero status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ToolMissing { .. } => 1,
            _ => 0,
        }
    }
}
