//! Assignment of tile-index ranges to workers

use std::ops::Range;
use tilepress_core::{TilepressError, TilepressResult};

/// Contiguous, non-overlapping tile ranges, one per worker
///
/// Every worker but the last owns exactly `tiles_per_worker` tiles. The last
/// worker also takes the remainder of the division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    tile_count: usize,
    tiles_per_worker: usize,
    ranges: Vec<Range<usize>>,
}

impl PartitionPlan {
    /// Plan `tile_count` tiles over `requested_workers` workers
    ///
    /// When more workers are requested than there are tiles, the worker count
    /// is clamped to the tile count and each worker gets a single tile.
    pub fn new(tile_count: usize, requested_workers: usize) -> TilepressResult<Self> {
        if requested_workers == 0 {
            return Err(TilepressError::InvalidWorkerCount(requested_workers));
        }

        if tile_count == 0 {
            return Ok(Self {
                tile_count,
                tiles_per_worker: 0,
                ranges: Vec::new(),
            });
        }

        let (workers, tiles_per_worker) = match tile_count / requested_workers {
            0 => (tile_count, 1),
            per_worker => (requested_workers, per_worker),
        };

        let ranges = (0..workers)
            .map(|k| {
                let start = k * tiles_per_worker;
                let end = if k + 1 == workers {
                    tile_count
                } else {
                    start + tiles_per_worker
                };
                start..end
            })
            .collect();

        Ok(Self {
            tile_count,
            tiles_per_worker,
            ranges,
        })
    }

    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    pub fn tiles_per_worker(&self) -> usize {
        self.tiles_per_worker
    }

    /// Number of workers actually used
    pub fn workers(&self) -> usize {
        self.ranges.len()
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Tile range owned by `worker`
    pub fn range(&self, worker: usize) -> Option<Range<usize>> {
        self.ranges.get(worker).cloned()
    }

    /// Split `items` into one mutable shard per worker
    ///
    /// `items` must hold exactly one entry per tile.
    pub fn split<'s, T>(&self, items: &'s mut [T]) -> TilepressResult<Vec<&'s mut [T]>> {
        if items.len() != self.tile_count {
            return Err(TilepressError::BufferSizeMismatch {
                expected: self.tile_count,
                actual: items.len(),
            });
        }

        let mut rest = items;
        let mut shards = Vec::with_capacity(self.ranges.len());
        for range in &self.ranges {
            let (shard, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            shards.push(shard);
            rest = tail;
        }

        Ok(shards)
    }
}
