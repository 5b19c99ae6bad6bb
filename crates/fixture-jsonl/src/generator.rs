//! JSONL fixture generator.

use crate::error::FixtureError;
use crate::preset::Preset;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for fixture writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Lines between progress log messages.
const PROGRESS_INTERVAL: u64 = 100_000;

/// Character the filler is made of.
pub const FILLER_CHAR: char = 'a';

/// Metrics from a generate operation.
#[derive(Debug, Clone, Default)]
pub struct GenerateMetrics {
    /// Path of the written fixture file.
    pub output_path: PathBuf,
    /// Number of lines written.
    pub lines_written: u64,
    /// Size of each line in bytes, newline included.
    pub line_bytes: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl GenerateMetrics {
    /// Calculate lines per second.
    pub fn lines_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.lines_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// The single record every fixture line holds.
#[derive(Serialize)]
struct FillerRecord<'a> {
    a: &'a str,
}

/// Writes the fixture file for one preset.
pub struct FixtureGenerator {
    preset: Preset,
}

impl FixtureGenerator {
    pub fn new(preset: Preset) -> Self {
        Self { preset }
    }

    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// Path of the fixture file inside `destination_dir`.
    pub fn output_path<P: AsRef<Path>>(&self, destination_dir: P) -> PathBuf {
        destination_dir.as_ref().join(self.preset.name)
    }

    /// Render one fixture line, trailing newline included.
    ///
    /// The line is rendered once and reused for every write, so memory stays
    /// at one line regardless of the line count.
    pub fn render_line(&self) -> Result<Vec<u8>, FixtureError> {
        let filler = FILLER_CHAR.to_string().repeat(self.preset.filler_size);
        let mut line = serde_json::to_vec(&FillerRecord { a: &filler })?;
        line.push(b'\n');
        Ok(line)
    }

    /// Create or truncate `destination_dir/<preset name>` and fill it.
    ///
    /// The destination directory must already exist; it is never created.
    pub fn generate_into<P: AsRef<Path>>(
        &self,
        destination_dir: P,
    ) -> Result<GenerateMetrics, FixtureError> {
        let start_time = Instant::now();
        let destination_dir = destination_dir.as_ref();

        if !destination_dir.is_dir() {
            return Err(FixtureError::DestinationNotFound(
                destination_dir.to_path_buf(),
            ));
        }

        let output_path = self.output_path(destination_dir);
        println!(
            "writing {} lines each is {} bytes dst {}",
            self.preset.line_count,
            self.preset.filler_size,
            output_path.display()
        );
        info!(
            "Generating fixture '{}' at '{}'",
            self.preset.name,
            output_path.display()
        );

        let line = self.render_line()?;
        let mut metrics = GenerateMetrics {
            line_bytes: line.len() as u64,
            ..Default::default()
        };

        let file = File::create(&output_path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);

        for _ in 0..self.preset.line_count {
            writer.write_all(&line)?;
            metrics.lines_written += 1;

            if metrics.lines_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} lines", metrics.lines_written);
            }
        }

        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = std::fs::metadata(&output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.output_path = output_path;

        info!(
            "Fixture generation complete: {} lines, {} bytes in {:?} ({:.2} lines/sec)",
            metrics.lines_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.lines_per_second()
        );

        Ok(metrics)
    }
}

/// Generate the fixture for `preset_name` inside `destination_dir`.
///
/// Fails with [`FixtureError::UnknownPreset`] before touching the filesystem
/// when the name has no preset table entry.
pub fn generate<P: AsRef<Path>>(
    preset_name: &str,
    destination_dir: P,
) -> Result<GenerateMetrics, FixtureError> {
    let preset = Preset::resolve(preset_name)?;
    FixtureGenerator::new(preset).generate_into(destination_dir)
}
