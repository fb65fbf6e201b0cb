//! Error types for tilepress operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for tilepress operations
pub type TilepressResult<T> = Result<T, TilepressError>;

/// Errors that can occur while compressing, loading or benchmarking images
#[derive(Error, Debug)]
pub enum TilepressError {
    #[error("Unsupported pixel format: {channels} channel(s), expected 3")]
    UnsupportedPixelFormat { channels: usize },

    #[error("Invalid worker count: {0}")]
    InvalidWorkerCount(usize),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Pixel ({x}, {y}) is out of bounds")]
    OutOfBounds { x: u32, y: u32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Failed to load image {}: {reason}", path.display())]
    ImageLoad { path: PathBuf, reason: String },

    #[error("Failed to save image {}: {reason}", path.display())]
    ImageSave { path: PathBuf, reason: String },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
