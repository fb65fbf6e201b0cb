//! Benchmark configuration

use std::path::PathBuf;
use tilepress_core::{consts, CompressionRate};

/// Benchmark options
#[derive(Debug, Clone)]
pub struct BenchmarkOptions {
    /// Rates to sweep, finest first
    pub rates: Vec<CompressionRate>,
    /// Worker counts for the parallel runs, ascending
    pub worker_counts: Vec<usize>,
    /// Directory receiving one compressed image per (image, rate)
    pub save_dir: Option<PathBuf>,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            rates: CompressionRate::ALL.to_vec(),
            worker_counts: consts::DEFAULT_WORKER_COUNTS.to_vec(),
            save_dir: None,
        }
    }
}

impl BenchmarkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rates(mut self, mut rates: Vec<CompressionRate>) -> Self {
        rates.sort();
        rates.dedup();
        self.rates = rates;
        self
    }

    /// Worker counts are sorted and deduplicated, values are kept as given
    pub fn worker_counts(mut self, mut counts: Vec<usize>) -> Self {
        counts.sort_unstable();
        counts.dedup();
        self.worker_counts = counts;
        self
    }

    pub fn save_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.save_dir = Some(dir.into());
        self
    }
}
