//! Tile partitioning
//!
//! An image is divided into square tiles whose edge length is the compression
//! rate. Origins are produced column by column: the outer stride walks `x`, the
//! inner stride walks `y`, so tile index `k` lives in tile column
//! `k / tiles_down` and tile row `k % tiles_down`.
//!
//! Tiles on the right and bottom edges of an image whose dimensions are not a
//! multiple of the rate are clipped to the image bounds.

use tilepress_core::{CompressionRate, Dimensions};

/// Top-left corner of a tile, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileOrigin {
    pub x: u32,
    pub y: u32,
}

impl TileOrigin {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Number of tiles needed to cover `size` pixels
pub fn num_tiles(size: u32, rate: CompressionRate) -> usize {
    size.div_ceil(rate.edge()) as usize
}

/// Number of tile columns
pub fn tiles_across(dims: Dimensions, rate: CompressionRate) -> usize {
    num_tiles(dims.width, rate)
}

/// Number of tile rows
pub fn tiles_down(dims: Dimensions, rate: CompressionRate) -> usize {
    num_tiles(dims.height, rate)
}

/// Total number of tiles, equal to `derive_tile_origins(dims, rate).len()`
pub fn tile_count(dims: Dimensions, rate: CompressionRate) -> usize {
    tiles_across(dims, rate) * tiles_down(dims, rate)
}

/// Derive every tile origin in traversal order
pub fn derive_tile_origins(dims: Dimensions, rate: CompressionRate) -> Vec<TileOrigin> {
    let edge = rate.edge() as usize;
    let mut origins = Vec::with_capacity(tile_count(dims, rate));

    for x in (0..dims.width).step_by(edge) {
        for y in (0..dims.height).step_by(edge) {
            origins.push(TileOrigin::new(x, y));
        }
    }

    origins
}

/// Origin of the tile at position `index` in traversal order
pub fn origin_at(index: usize, dims: Dimensions, rate: CompressionRate) -> Option<TileOrigin> {
    if index >= tile_count(dims, rate) {
        return None;
    }
    let down = tiles_down(dims, rate);
    let edge = rate.edge();
    Some(TileOrigin::new(
        (index / down) as u32 * edge,
        (index % down) as u32 * edge,
    ))
}

/// Expand an origin into all `rate * rate` coordinates of its tile, row-major
pub fn expand_tile(origin: TileOrigin, rate: CompressionRate) -> Vec<(u32, u32)> {
    let edge = rate.edge();
    let mut coords = Vec::with_capacity((edge * edge) as usize);

    for j in 0..edge {
        for i in 0..edge {
            coords.push((origin.x + i, origin.y + j));
        }
    }

    coords
}

/// Width and height of a tile after clipping to the image bounds
pub fn tile_extent(origin: TileOrigin, rate: CompressionRate, dims: Dimensions) -> (u32, u32) {
    let edge = rate.edge();
    let width = edge.min(dims.width.saturating_sub(origin.x));
    let height = edge.min(dims.height.saturating_sub(origin.y));
    (width, height)
}

/// Expand an origin into the coordinates of its tile that lie inside `dims`
pub fn expand_tile_clipped(
    origin: TileOrigin,
    rate: CompressionRate,
    dims: Dimensions,
) -> Vec<(u32, u32)> {
    let (width, height) = tile_extent(origin, rate, dims);
    let mut coords = Vec::with_capacity((width * height) as usize);

    for j in 0..height {
        for i in 0..width {
            coords.push((origin.x + i, origin.y + j));
        }
    }

    coords
}
