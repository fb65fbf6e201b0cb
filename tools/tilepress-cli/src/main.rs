//! Command-line front end for tilepress
//!
//! Compress a single image:
//! ```bash
//! tilepress compress input.png output.png --rate high --workers 4
//! ```
//!
//! Benchmark a set of images:
//! ```bash
//! tilepress bench "images/*.tiff" --workers 2,4,8 --output single_core.csv
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use std::path::PathBuf;
use std::time::Instant;
use tilepress::{
    consts, enumerate_images, load_image, save_image, BenchmarkHarness, BenchmarkOptions,
    CompressionEngine, CompressionRate, CsvReport, EngineOptions,
};

#[derive(Parser)]
#[command(name = "tilepress", version)]
#[command(about = "Block-averaging image compression and benchmarking", long_about = None)]
struct Cli {
    /// Raise log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress one image file
    Compress {
        /// Image to read
        input: PathBuf,

        /// Where to write the compressed image
        output: PathBuf,

        /// Tile edge: low, medium, high, very_high (or 2, 4, 8, 16)
        #[arg(short, long, default_value = "medium")]
        rate: CompressionRate,

        /// Worker threads, 1 runs sequentially
        #[arg(short, long, default_value_t = 1)]
        workers: usize,
    },

    /// Benchmark every image matching a glob pattern
    Bench {
        /// Glob pattern, e.g. "images/*.tiff"
        pattern: String,

        /// Rates to sweep (defaults to all)
        #[arg(short, long, value_delimiter = ',')]
        rates: Vec<CompressionRate>,

        /// Worker counts for the parallel runs
        #[arg(short, long, value_delimiter = ',')]
        workers: Vec<usize>,

        /// CSV report path
        #[arg(short, long, default_value = "benchmark.csv")]
        output: PathBuf,

        /// Directory for the compressed images
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Compress {
            input,
            output,
            rate,
            workers,
        } => compress(input, output, rate, workers),
        Commands::Bench {
            pattern,
            rates,
            workers,
            output,
            save_dir,
        } => bench(&pattern, rates, workers, output, save_dir),
    }
}

fn setup_logging(verbosity: u8) -> Result<()> {
    let colors = ColoredLevelConfig::new().debug(Color::Magenta);
    fern::Dispatch::new()
        .chain(std::io::stderr())
        .level(match verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{:6}][{}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .apply()
        .context("failed to install logger")
}

fn compress(input: PathBuf, output: PathBuf, rate: CompressionRate, workers: usize) -> Result<()> {
    let mut image = load_image(&input)?;
    let engine = CompressionEngine::new(EngineOptions::new().rate(rate).workers(workers))?;

    let start = Instant::now();
    let outcome = engine.compress(&mut image)?;
    info!(
        "{} tiles on {} worker(s) in {:.6}s",
        outcome.tile_count,
        outcome.workers,
        start.elapsed().as_secs_f64()
    );

    save_image(&output, &image)?;
    println!(
        "{} -> {} ({}, rate {}, {} tiles)",
        input.display(),
        output.display(),
        image.dimensions,
        rate,
        outcome.tile_count
    );
    Ok(())
}

fn bench(
    pattern: &str,
    rates: Vec<CompressionRate>,
    workers: Vec<usize>,
    output: PathBuf,
    save_dir: Option<PathBuf>,
) -> Result<()> {
    let paths = enumerate_images(pattern)?;
    if paths.is_empty() {
        bail!("no files match {}", pattern);
    }

    let mut options = BenchmarkOptions::new();
    if !rates.is_empty() {
        options = options.rates(rates);
    }
    options = options.worker_counts(if workers.is_empty() {
        consts::DEFAULT_WORKER_COUNTS.to_vec()
    } else {
        workers
    });
    if let Some(dir) = save_dir {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;
        options = options.save_dir(dir);
    }

    let harness = BenchmarkHarness::new(options);
    let mut report = CsvReport::create(&output)?;
    let summary = harness.run_paths(&paths, &mut report)?;

    println!(
        "{} image(s) benchmarked, {} skipped, {} rows written to {}",
        summary.processed,
        summary.skipped,
        summary.records,
        output.display()
    );
    Ok(())
}
