//! Error types for the fixture generator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a fixture file.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Preset name has no entry in the preset table.
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Required argument had no value.
    #[error("Missing value for {0}")]
    MissingArgument(&'static str),

    /// Destination directory is missing or is not a directory.
    #[error("Destination directory not found: {}", .0.display())]
    DestinationNotFound(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
