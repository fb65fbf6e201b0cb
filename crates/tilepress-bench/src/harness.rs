//! Benchmark sweep over images, rates and worker counts

use crate::{BenchmarkOptions, BenchmarkRecord, ReportSink};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tilepress_core::{CompressionRate, Image, TilepressResult};
use tilepress_engine::{build_pool, compress_parallel_on, compress_sequential};

/// Outcome of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Images that were benchmarked
    pub processed: usize,
    /// Images that failed to load
    pub skipped: usize,
    /// Records forwarded to the sink
    pub records: usize,
}

/// Drives the compression engine and times every call
#[derive(Debug, Clone, Default)]
pub struct BenchmarkHarness {
    options: BenchmarkOptions,
}

impl BenchmarkHarness {
    pub fn new(options: BenchmarkOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BenchmarkOptions {
        &self.options
    }

    /// Benchmark one image at one rate
    ///
    /// Runs the sequential engine once, then the parallel engine once per
    /// configured worker count, each on a fresh copy of `image`. Worker pools
    /// are built before the clock starts, so only compression is timed.
    /// Returns the number of records written and the last compressed copy.
    pub fn sweep<S: ReportSink + ?Sized>(
        &self,
        image_id: &str,
        image: &Image,
        rate: CompressionRate,
        sink: &mut S,
    ) -> TilepressResult<(usize, Image)> {
        let mut compressed = image.clone();
        let start = Instant::now();
        let tile_count = compress_sequential(&mut compressed, rate)?;
        let elapsed = start.elapsed().as_secs_f64();

        sink.record(&self.record(image_id, image, rate, tile_count, tile_count, 1, elapsed))?;
        let mut written = 1;

        for &requested in &self.options.worker_counts {
            info!(
                "processing image {} with resolution {} and compression rate {} using {} thread(s)",
                image_id, image.dimensions, rate, requested
            );

            let pool = build_pool(requested.min(tile_count.max(1)))?;
            let mut copy = image.clone();
            let start = Instant::now();
            let outcome = compress_parallel_on(&pool, &mut copy, rate, requested)?;
            let elapsed = start.elapsed().as_secs_f64();

            if outcome.workers < requested {
                info!(
                    "image {} has only {} tiles at rate {}, using {} worker(s)",
                    image_id, outcome.tile_count, rate, outcome.workers
                );
            }

            sink.record(&self.record(
                image_id,
                image,
                rate,
                outcome.tile_count,
                outcome.tiles_per_worker,
                outcome.workers,
                elapsed,
            ))?;
            written += 1;
            compressed = copy;
        }

        Ok((written, compressed))
    }

    /// Benchmark every image at every configured rate
    pub fn run<S: ReportSink + ?Sized>(
        &self,
        images: &[(String, Image)],
        sink: &mut S,
    ) -> TilepressResult<BatchSummary> {
        let mut summary = BatchSummary::default();
        for (id, image) in images {
            summary.records += self.run_image(id, image, sink)?;
            summary.processed += 1;
        }
        sink.finish()?;
        Ok(summary)
    }

    /// Load and benchmark image files, skipping files that fail to load
    ///
    /// Images are identified in the report by their file stem.
    pub fn run_paths<S: ReportSink + ?Sized>(
        &self,
        paths: &[PathBuf],
        sink: &mut S,
    ) -> TilepressResult<BatchSummary> {
        let mut summary = BatchSummary::default();
        for path in paths {
            let image = match tilepress_io::load_image(path) {
                Ok(image) => image,
                Err(e) => {
                    warn!("skipping {}: {}", path.display(), e);
                    summary.skipped += 1;
                    continue;
                }
            };
            summary.records += self.run_image(&image_id(path), &image, sink)?;
            summary.processed += 1;
        }
        sink.finish()?;
        Ok(summary)
    }

    fn run_image<S: ReportSink + ?Sized>(
        &self,
        id: &str,
        image: &Image,
        sink: &mut S,
    ) -> TilepressResult<usize> {
        let mut written = 0;
        for &rate in &self.options.rates {
            info!(
                "processing image {} with resolution {} and compression rate {} using 1 thread(s)",
                id, image.dimensions, rate
            );
            let (records, compressed) = self.sweep(id, image, rate, sink)?;
            written += records;

            if let Some(dir) = &self.options.save_dir {
                let path = dir.join(format!("{}_{}.png", id, rate));
                if let Err(e) = tilepress_io::save_image(&path, &compressed) {
                    warn!("{}", e);
                }
            }
        }
        Ok(written)
    }

    #[allow(clippy::too_many_arguments)]
    fn record(
        &self,
        image_id: &str,
        image: &Image,
        rate: CompressionRate,
        tile_count: usize,
        tiles_per_worker: usize,
        worker_count: usize,
        elapsed_seconds: f64,
    ) -> BenchmarkRecord {
        BenchmarkRecord {
            image: image_id.to_string(),
            resolution: image.dimensions.to_string(),
            pixel_count: image.pixel_count(),
            compression_rate: rate.label().to_string(),
            tile_count,
            tiles_per_worker,
            worker_count,
            elapsed_seconds,
        }
    }
}

fn image_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
