//! # tilepress
//!
//! Block-averaging lossy image compression. An image is divided into square
//! tiles and every tile is rewritten, in place, to its average color.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tilepress::{compress_parallel, load_image, save_image, CompressionRate};
//!
//! let mut image = load_image("input.png").unwrap();
//! let outcome = compress_parallel(&mut image, CompressionRate::High, 4).unwrap();
//! println!("{} tiles on {} workers", outcome.tile_count, outcome.workers);
//! save_image("output.png", &image).unwrap();
//! ```
//!
//! ## Benchmarking
//!
//! ```no_run
//! use tilepress::{BenchmarkHarness, BenchmarkOptions, CsvReport};
//!
//! let paths = tilepress::enumerate_images("images/*.tiff").unwrap();
//! let harness = BenchmarkHarness::new(BenchmarkOptions::default().worker_counts(vec![2, 4, 8]));
//! let mut report = CsvReport::create("report.csv").unwrap();
//! harness.run_paths(&paths, &mut report).unwrap();
//! ```

// Re-export core types
pub use tilepress_core::{
    consts, ColorChannels, CompressionRate, Dimensions, Image, TilepressError, TilepressResult,
};

// Re-export tile operations
pub use tilepress_tiles::{
    average_color, derive_tile_origins, expand_tile, expand_tile_clipped, tile_count, TileColor,
    TileOrigin,
};

// Re-export engine
pub use tilepress_engine::{
    build_pool, compress_parallel, compress_parallel_on, compress_sequential, CompressionEngine,
    EngineOptions, ParallelOutcome, PartitionPlan,
};

// Re-export file I/O
pub use tilepress_io::{enumerate_images, load_image, load_images, save_image};

// Re-export benchmark harness
pub use tilepress_bench::{
    BatchSummary, BenchmarkHarness, BenchmarkOptions, BenchmarkRecord, CsvReport, ReportSink,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
