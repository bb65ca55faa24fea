//! Error types for frame operations.
//!
//! A failed frame is a skipped frame: the pipeline reports the error to
//! the caller and produces no output for that unit of work. Nothing here
//! is fatal to the stream.

use thiserror::Error;

/// Error type for frame operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// The input frame buffer was malformed.
    #[error(transparent)]
    Frame(#[from] chroma_core::Error),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for frame operations.
pub type OpsResult<T> = Result<T, OpsError>;
