//! Benchmark records and report sinks

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tilepress_core::{TilepressError, TilepressResult};

/// Header row of a CSV benchmark report
pub const REPORT_COLUMNS: [&str; 8] = [
    "image",
    "resolution",
    "pixel_count",
    "compression_rate",
    "tile_count",
    "tiles_per_worker",
    "worker_count",
    "elapsed_seconds",
];

/// One timed compression call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    pub image: String,
    /// `WxH`
    pub resolution: String,
    pub pixel_count: usize,
    pub compression_rate: String,
    pub tile_count: usize,
    pub tiles_per_worker: usize,
    pub worker_count: usize,
    pub elapsed_seconds: f64,
}

/// Receiver of benchmark records
pub trait ReportSink {
    fn record(&mut self, record: &BenchmarkRecord) -> TilepressResult<()>;

    /// Flush buffered output, called once after the last record
    fn finish(&mut self) -> TilepressResult<()> {
        Ok(())
    }
}

impl ReportSink for Vec<BenchmarkRecord> {
    fn record(&mut self, record: &BenchmarkRecord) -> TilepressResult<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// CSV report, header row first then one row per record
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvReport<File> {
    /// Create (or truncate) a report file
    pub fn create<P: AsRef<Path>>(path: P) -> TilepressResult<Self> {
        let file = File::create(path)?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvReport<W> {
    pub fn from_writer(inner: W) -> TilepressResult<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);
        writer
            .write_record(REPORT_COLUMNS)
            .map_err(|e| TilepressError::Report(e.to_string()))?;
        Ok(Self { writer })
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> TilepressResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| TilepressError::Report(e.to_string()))
    }
}

impl<W: Write> ReportSink for CsvReport<W> {
    fn record(&mut self, record: &BenchmarkRecord) -> TilepressResult<()> {
        self.writer
            .serialize(record)
            .map_err(|e| TilepressError::Report(e.to_string()))
    }

    fn finish(&mut self) -> TilepressResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
