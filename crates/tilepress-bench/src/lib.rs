//! Benchmark harness for the tilepress compression engine
//!
//! The harness runs the engine over a matrix of images, compression rates and
//! worker counts, times every call and forwards one record per call to a
//! [`ReportSink`]. [`CsvReport`] persists records as comma-separated rows.

pub mod harness;
pub mod options;
pub mod report;

pub use harness::{BatchSummary, BenchmarkHarness};
pub use options::BenchmarkOptions;
pub use report::{BenchmarkRecord, CsvReport, ReportSink, REPORT_COLUMNS};
