//! Error types for core frame and color operations.
//!
//! Failures here are never fatal to a caller's stream of work: a frame
//! that cannot be constructed or read is simply skipped by the pipeline,
//! and color-value inputs are normalized at the boundary instead of
//! erroring.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or accessing frames.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame dimensions are unusable (zero width or height).
    #[error("invalid frame dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Pixel buffer length does not match width * height * 4.
    #[error("buffer size mismatch: expected {expected} values, got {actual}")]
    BufferSizeMismatch {
        /// Expected number of f32 values
        expected: usize,
        /// Actual number of f32 values supplied
        actual: usize,
    },

    /// Pixel coordinates are outside frame bounds.
    #[error("pixel ({x}, {y}) out of bounds for frame {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Frame width
        width: u32,
        /// Frame height
        height: u32,
    },
}
