//! Mutable per-tile views into an image buffer
//!
//! The buffer is cut into row segments, one per tile row, and each segment is
//! handed to exactly one tile. Views never alias, so shards of the view list can
//! be processed on different threads without locking.

use tilepress_core::{consts, CompressionRate, Dimensions, TilepressError, TilepressResult};
use tilepress_tiles::{derive_tile_origins, tile_extent, tiles_down, ChannelSums, TileColor, TileOrigin};

/// Exclusive view of the pixels of one (possibly clipped) tile
#[derive(Debug)]
pub struct TileView<'a> {
    origin: TileOrigin,
    rows: Vec<&'a mut [u8]>,
}

impl<'a> TileView<'a> {
    pub fn origin(&self) -> TileOrigin {
        self.origin
    }

    /// Number of pixels covered by the view
    pub fn pixel_count(&self) -> usize {
        self.rows.iter().map(|row| row.len() / consts::RGB_CHANNELS).sum()
    }

    /// Truncated mean color of the tile
    pub fn average(&self) -> Option<TileColor> {
        let mut sums = ChannelSums::new();
        for row in &self.rows {
            sums.push_row(row);
        }
        sums.mean()
    }

    /// Overwrite every pixel of the tile
    pub fn fill(&mut self, color: TileColor) {
        for row in self.rows.iter_mut() {
            for pixel in row.chunks_exact_mut(consts::RGB_CHANNELS) {
                pixel.copy_from_slice(&color.0);
            }
        }
    }

    /// Average the tile and write the average back
    pub fn flatten(&mut self) -> Option<TileColor> {
        let color = self.average()?;
        self.fill(color);
        Some(color)
    }
}

/// Cut an interleaved RGB buffer into tile views, in tile-derivation order
pub fn split_into_tiles<'a>(
    buffer: &'a mut [u8],
    dims: Dimensions,
    rate: CompressionRate,
) -> TilepressResult<Vec<TileView<'a>>> {
    let expected = dims.pixel_count() * consts::RGB_CHANNELS;
    if buffer.len() != expected {
        return Err(TilepressError::BufferSizeMismatch {
            expected,
            actual: buffer.len(),
        });
    }
    if dims.is_empty() {
        return Ok(Vec::new());
    }

    let mut tiles: Vec<TileView<'a>> = derive_tile_origins(dims, rate)
        .into_iter()
        .map(|origin| {
            let (_, height) = tile_extent(origin, rate, dims);
            TileView {
                origin,
                rows: Vec::with_capacity(height as usize),
            }
        })
        .collect();

    let edge = rate.edge() as usize;
    let down = tiles_down(dims, rate);
    let stride = dims.width as usize * consts::RGB_CHANNELS;

    for (y, row) in buffer.chunks_mut(stride).enumerate() {
        let tile_row = y / edge;
        for (tile_col, segment) in row.chunks_mut(edge * consts::RGB_CHANNELS).enumerate() {
            tiles[tile_col * down + tile_row].rows.push(segment);
        }
    }

    Ok(tiles)
}
