//! JSONL fixture files for log-shipping tests.
//!
//! Each fixture is a file of identical JSON lines, `{"a":"aaa..."}`, whose
//! line count and filler size come from a fixed preset table.
//!
//! # Example
//!
//! ```ignore
//! use fixture_jsonl::generate;
//!
//! let metrics = generate("1k500kb", "/tmp/out")?;
//! println!("Wrote {} lines in {:?}", metrics.lines_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod preset;

pub use args::{FixtureArgs, GenerateConfig, PresetChoice};
pub use error::FixtureError;
pub use generator::{generate, FixtureGenerator, GenerateMetrics};
pub use metrics::{emit_metrics, MetricsEntry};
pub use preset::{Preset, PRESETS};
