//! Error types for the ambient surfaces of the engine
//!
//! The resize path itself never fails: malformed input is dropped and the
//! height floor is corrected in place. Errors only come from loading
//! configuration and replay scripts.

use thiserror::Error;

/// Errors that can occur while configuring or replaying the engine
#[derive(Error, Debug)]
pub enum ResizeError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration values that cannot drive the engine
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Replay script that references something the mounted page lacks
    #[error("Replay step {step}: {reason}")]
    Replay { step: usize, reason: String },
}

/// Result type alias for engine operations
pub type ResizeResult<T> = Result<T, ResizeError>;
