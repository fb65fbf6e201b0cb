//! Tile operations for tilepress
//!
//! This crate derives the square tiles an image is divided into and computes
//! the average color of a tile.

pub mod average;
pub mod partition;

pub use average::*;
pub use partition::*;
