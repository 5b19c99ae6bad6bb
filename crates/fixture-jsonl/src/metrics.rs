//! Metrics emission for fixture generation runs

use crate::error::FixtureError;
use crate::generator::GenerateMetrics;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Single metrics entry (one JSON line)
#[derive(Debug, Serialize, Deserialize)]
pub struct MetricsEntry {
    pub timestamp: String,
    pub preset: String,
    pub output_path: String,
    pub lines_written: u64,
    pub file_size_bytes: u64,
    pub throughput_lines_per_sec: f64,
    pub throughput_mb_per_sec: f64,
    pub elapsed_secs: f64,
}

impl MetricsEntry {
    pub fn new(preset: &str, metrics: &GenerateMetrics) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            preset: preset.to_string(),
            output_path: metrics.output_path.display().to_string(),
            lines_written: metrics.lines_written,
            file_size_bytes: metrics.file_size_bytes,
            throughput_lines_per_sec: metrics.lines_per_second(),
            throughput_mb_per_sec: metrics.bytes_per_second() / 1_000_000.0,
            elapsed_secs: metrics.total_duration.as_secs_f64(),
        }
    }
}

/// Append one metrics entry to `metrics_path`, creating the file if needed.
pub fn emit_metrics(
    metrics_path: &Path,
    preset: &str,
    metrics: &GenerateMetrics,
) -> Result<(), FixtureError> {
    let entry = MetricsEntry::new(preset, metrics);

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(metrics_path)?;

    let json_line = serde_json::to_string(&entry)?;
    file.write_all(json_line.as_bytes())?;
    file.write_all(b"\n")?;
    file.flush()?;

    info!("Metrics written to {}", metrics_path.display());
    Ok(())
}
