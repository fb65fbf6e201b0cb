//! Core types and utilities for tilepress
//!
//! This crate provides the fundamental data structures shared by the tile
//! partitioner, the compression engine and the benchmark harness: image
//! buffers, dimensions, compression rates and the common error type.

pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use error::{TilepressError, TilepressResult};
pub use image::*;
pub use types::*;
