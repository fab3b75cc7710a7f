//! Error types for tsk
//!
//! Exit codes:
//! - 0: Success (including no-op complete/delete on an unknown id)
//! - 2: User error (bad args, unresolvable store path)
//! - 4: Operation failed (I/O error, serialization error)

use thiserror::Error;

/// Exit codes for the tsk CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for tsk operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => exit_codes::USER_ERROR,
            Error::Io(_) | Error::Json(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for tsk operations
pub type Result<T> = std::result::Result<T, Error>;
