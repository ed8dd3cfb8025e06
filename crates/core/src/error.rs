//! Error types for the core library

use thiserror::Error;

/// Storage errors. Only two kinds exist: the detail string is kept for
/// tracing and never surfaced past the HTTP boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read task list: {0}")]
    Read(String),

    #[error("failed to write task list: {0}")]
    Write(String),
}

impl Error {
    pub fn read(err: impl std::fmt::Display) -> Self {
        Self::Read(err.to_string())
    }

    pub fn write(err: impl std::fmt::Display) -> Self {
        Self::Write(err.to_string())
    }
}
