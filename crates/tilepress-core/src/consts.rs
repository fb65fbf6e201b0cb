//! Constants used throughout tilepress

/// Number of interleaved samples per pixel accepted by the engine
pub const RGB_CHANNELS: usize = 3;

/// Smallest tile edge length
pub const MIN_TILE_EDGE: u32 = 2;

/// Largest tile edge length
pub const MAX_TILE_EDGE: u32 = 16;

/// Maximum supported image dimension
pub const MAX_IMAGE_DIMENSION: u32 = 1 << 16;

/// Default worker counts swept by the benchmark harness
pub const DEFAULT_WORKER_COUNTS: [usize; 4] = [2, 4, 8, 16];

/// Most OS threads a worker pool will spawn, larger plans queue on the pool
pub const MAX_POOL_THREADS: usize = 1024;
