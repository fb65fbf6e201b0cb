//! Tile averaging
//!
//! The tile color is the per-channel arithmetic mean truncated toward zero,
//! never rounded.

use tilepress_core::{consts, Image, TilepressError, TilepressResult};

/// Flat color written over every pixel of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileColor(pub [u8; 3]);

/// Running per-channel sums over a set of pixels
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelSums {
    sums: [u64; 3],
    count: u64,
}

impl ChannelSums {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pixel
    pub fn push(&mut self, pixel: [u8; 3]) {
        for (sum, &sample) in self.sums.iter_mut().zip(pixel.iter()) {
            *sum += u64::from(sample);
        }
        self.count += 1;
    }

    /// Add every pixel of an interleaved RGB row segment
    pub fn push_row(&mut self, row: &[u8]) {
        for pixel in row.chunks_exact(consts::RGB_CHANNELS) {
            self.push([pixel[0], pixel[1], pixel[2]]);
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Truncated mean, `None` when no pixel was added
    pub fn mean(&self) -> Option<TileColor> {
        if self.count == 0 {
            return None;
        }
        // A mean of u8 samples always fits in u8
        let [r, g, b] = self.sums.map(|sum| (sum / self.count) as u8);
        Some(TileColor([r, g, b]))
    }
}

/// Average the pixels of `image` at the given coordinates
///
/// Every coordinate must be inside the image. An empty coordinate list is
/// rejected since it has no mean.
pub fn average_color(image: &Image, coords: &[(u32, u32)]) -> TilepressResult<TileColor> {
    let mut sums = ChannelSums::new();
    for &(x, y) in coords {
        sums.push(image.pixel(x, y)?);
    }

    sums.mean().ok_or_else(|| {
        TilepressError::InvalidParameter("cannot average an empty tile".to_string())
    })
}
