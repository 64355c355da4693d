// src/core/error.rs

use config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the toolkit. Every variant is fatal at the call site:
/// nothing in the crate retries or recovers internally.
#[derive(Debug, Error)]
pub enum EulerError {
    /// The caller broke a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input lies outside the range a bounded algorithm was configured for.
    #[error("value {value} is out of range, must be below {limit}")]
    OutOfRange { value: u64, limit: u64 },

    #[error("node {0} already exists in graph")]
    DuplicateNode(String),

    #[error("node {0} is not in graph")]
    UnknownNode(String),

    /// Shortest path search exhausted the open set.
    #[error("node {goal} not reachable from {start}")]
    Unreachable { start: String, goal: String },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EulerError>;

impl EulerError {
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        EulerError::InvalidArgument(message.into())
    }
}
