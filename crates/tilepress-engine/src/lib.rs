//! Block-averaging compression engine
//!
//! Every tile of the image is replaced, in place, by its average color. The
//! sequential path walks tiles one at a time through their coordinates. The
//! parallel path splits the pixel buffer into disjoint per-tile views and hands
//! contiguous ranges of those views to a fixed pool of worker threads.

pub mod plan;
pub mod view;

pub use plan::PartitionPlan;
pub use view::{split_into_tiles, TileView};

use log::debug;
use std::sync::Arc;
use tilepress_core::*;
use tilepress_tiles::{average_color, derive_tile_origins, expand_tile_clipped, tile_count};

/// Tile statistics of a parallel compression call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParallelOutcome {
    /// Number of tiles in the image
    pub tile_count: usize,
    /// Number of workers that received a tile range
    pub workers: usize,
    /// Tiles owned by every worker except possibly the last
    pub tiles_per_worker: usize,
}

/// Engine options
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Tile edge length
    pub rate: CompressionRate,
    /// Requested worker count, 1 runs the sequential path
    pub workers: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            rate: CompressionRate::Medium,
            workers: 1,
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rate(mut self, rate: CompressionRate) -> Self {
        self.rate = rate;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

/// Compression engine carrying its configuration
///
/// A multi-worker engine owns its thread pool, so repeated calls do not pay
/// for spawning threads.
#[derive(Debug, Clone)]
pub struct CompressionEngine {
    options: EngineOptions,
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CompressionEngine {
    pub fn new(options: EngineOptions) -> TilepressResult<Self> {
        let pool = match options.workers {
            0 => return Err(TilepressError::InvalidWorkerCount(0)),
            1 => None,
            workers => Some(Arc::new(build_pool(workers)?)),
        };
        Ok(Self { options, pool })
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Compress `image` in place with the configured rate and worker count
    pub fn compress(&self, image: &mut Image) -> TilepressResult<ParallelOutcome> {
        match &self.pool {
            Some(pool) => compress_parallel_on(pool, image, self.options.rate, self.options.workers),
            None => {
                let tiles = compress_sequential(image, self.options.rate)?;
                Ok(ParallelOutcome {
                    tile_count: tiles,
                    workers: usize::from(tiles > 0),
                    tiles_per_worker: tiles,
                })
            }
        }
    }
}

/// Build a worker pool with one thread per worker
///
/// The thread count is capped at [`consts::MAX_POOL_THREADS`]; workers beyond
/// the cap queue on the pool and still own their own tile range.
pub fn build_pool(workers: usize) -> TilepressResult<rayon::ThreadPool> {
    if workers == 0 {
        return Err(TilepressError::InvalidWorkerCount(workers));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers.min(consts::MAX_POOL_THREADS))
        .thread_name(|idx| format!("tilepress-worker-{}", idx))
        .build()
        .map_err(|e| TilepressError::ThreadPool(e.to_string()))
}

/// Compress `image` in place on the calling thread
///
/// Returns the number of tiles processed.
pub fn compress_sequential(image: &mut Image, rate: CompressionRate) -> TilepressResult<usize> {
    check_image(image)?;

    let dims = image.dimensions;
    let origins = derive_tile_origins(dims, rate);
    debug!(
        "compressing {} image sequentially: {} tiles of {}x{}",
        dims,
        origins.len(),
        rate.edge(),
        rate.edge()
    );

    for origin in &origins {
        let coords = expand_tile_clipped(*origin, rate, dims);
        let color = average_color(image, &coords)?;
        for &(x, y) in &coords {
            image.set_pixel(x, y, color.0)?;
        }
    }

    Ok(origins.len())
}

/// Compress `image` in place using up to `requested_workers` threads
///
/// Tiles are assigned to workers in contiguous index ranges as described by
/// [`PartitionPlan`]. A pool sized to the plan is built for this call; use
/// [`compress_parallel_on`] to reuse one. The call returns once every worker
/// has finished.
pub fn compress_parallel(
    image: &mut Image,
    rate: CompressionRate,
    requested_workers: usize,
) -> TilepressResult<ParallelOutcome> {
    let plan = plan_for(image, rate, requested_workers)?;
    if plan.tile_count() > 0 {
        let pool = build_pool(plan.workers())?;
        run_plan(&pool, image, rate, &plan)?;
    }
    Ok(outcome_of(&plan))
}

/// Same as [`compress_parallel`], running the workers on an existing pool
pub fn compress_parallel_on(
    pool: &rayon::ThreadPool,
    image: &mut Image,
    rate: CompressionRate,
    requested_workers: usize,
) -> TilepressResult<ParallelOutcome> {
    let plan = plan_for(image, rate, requested_workers)?;
    if plan.tile_count() > 0 {
        run_plan(pool, image, rate, &plan)?;
    }
    Ok(outcome_of(&plan))
}

fn plan_for(
    image: &Image,
    rate: CompressionRate,
    requested_workers: usize,
) -> TilepressResult<PartitionPlan> {
    if requested_workers == 0 {
        return Err(TilepressError::InvalidWorkerCount(requested_workers));
    }
    check_image(image)?;
    PartitionPlan::new(tile_count(image.dimensions, rate), requested_workers)
}

fn outcome_of(plan: &PartitionPlan) -> ParallelOutcome {
    ParallelOutcome {
        tile_count: plan.tile_count(),
        workers: plan.workers(),
        tiles_per_worker: plan.tiles_per_worker(),
    }
}

fn run_plan(
    pool: &rayon::ThreadPool,
    image: &mut Image,
    rate: CompressionRate,
    plan: &PartitionPlan,
) -> TilepressResult<()> {
    let dims = image.dimensions;
    debug!(
        "compressing {} image on {} workers ({} threads): {} tiles, {} per worker",
        dims,
        plan.workers(),
        pool.current_num_threads(),
        plan.tile_count(),
        plan.tiles_per_worker()
    );

    let mut tiles = split_into_tiles(&mut image.buffer, dims, rate)?;
    let shards = plan.split(&mut tiles)?;

    pool.scope(|scope| {
        for shard in shards {
            scope.spawn(move |_| {
                for tile in shard.iter_mut() {
                    tile.flatten();
                }
            });
        }
    });

    Ok(())
}

/// Preconditions shared by both paths, checked before any pixel is touched
fn check_image(image: &Image) -> TilepressResult<()> {
    image.ensure_rgb()?;

    let expected = image.pixel_count() * consts::RGB_CHANNELS;
    if image.buffer.len() != expected {
        return Err(TilepressError::BufferSizeMismatch {
            expected,
            actual: image.buffer.len(),
        });
    }
    Ok(())
}
