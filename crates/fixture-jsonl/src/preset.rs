//! Fixture presets.
//!
//! A preset names a fixture profile: how many lines to write and how many
//! filler bytes each line carries. The table is fixed at build time.

use crate::error::FixtureError;

/// A named `(line count, filler size)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Preset name, also used as the output file name.
    pub name: &'static str,
    /// Number of lines written to the fixture file.
    pub line_count: u64,
    /// Number of filler bytes in each line's `a` value.
    pub filler_size: usize,
}

impl Preset {
    pub const fn new(name: &'static str, line_count: u64, filler_size: usize) -> Self {
        Self {
            name,
            line_count,
            filler_size,
        }
    }

    /// Look up a preset by name.
    pub fn lookup(name: &str) -> Option<Preset> {
        PRESETS.iter().find(|preset| preset.name == name).copied()
    }

    /// Look up a preset by name, failing with [`FixtureError::UnknownPreset`].
    pub fn resolve(name: &str) -> Result<Preset, FixtureError> {
        Self::lookup(name).ok_or_else(|| FixtureError::UnknownPreset(name.to_string()))
    }
}

/// The preset table.
///
/// Note this is not the same set of names the CLI accepts: `10k10kb` has a
/// row here but is not a `--type` choice, and `10k100kb` is a choice with no
/// row.
pub const PRESETS: &[Preset] = &[
    Preset::new("1k800kb", 1_000, 800_000),
    Preset::new("1k500kb", 1_000, 500_000),
    Preset::new("10k10kb", 10_000, 10_000),
    Preset::new("1m1kb", 1_000_000, 1_000),
];
