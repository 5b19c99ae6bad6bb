//! CLI argument definitions for the fixture generator.

use crate::error::FixtureError;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Preset names accepted by `--type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetChoice {
    /// 1,000 lines of 800 KB
    #[value(name = "1k800kb")]
    OneK800Kb,
    /// 1,000 lines of 500 KB
    #[value(name = "1k500kb")]
    OneK500Kb,
    /// 10,000 lines of 100 KB
    #[value(name = "10k100kb")]
    TenK100Kb,
    /// 1,000,000 lines of 1 KB
    #[value(name = "1m1kb")]
    OneM1Kb,
}

impl PresetChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetChoice::OneK800Kb => "1k800kb",
            PresetChoice::OneK500Kb => "1k500kb",
            PresetChoice::TenK100Kb => "10k100kb",
            PresetChoice::OneM1Kb => "1m1kb",
        }
    }
}

/// Fixture generation arguments.
#[derive(Args, Clone, Debug)]
pub struct FixtureArgs {
    /// Test file type (only the first value is used)
    #[arg(long = "type", value_enum, num_args = 1.., required = true, value_name = "TYPE")]
    pub preset: Vec<PresetChoice>,

    /// File destination directory (only the first value is used)
    #[arg(long, num_args = 1.., required = true, env = "CREATE_TEST_FILE_DIR")]
    pub dir: Vec<PathBuf>,

    /// Append a JSON metrics record to this file after writing
    #[arg(long, value_name = "PATH")]
    pub emit_metrics: Option<PathBuf>,
}

/// Immutable configuration for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateConfig {
    pub preset_name: String,
    pub destination_dir: PathBuf,
    pub emit_metrics: Option<PathBuf>,
}

impl TryFrom<FixtureArgs> for GenerateConfig {
    type Error = FixtureError;

    fn try_from(args: FixtureArgs) -> Result<Self, Self::Error> {
        let preset = args
            .preset
            .first()
            .ok_or(FixtureError::MissingArgument("--type"))?;
        let destination_dir = args
            .dir
            .into_iter()
            .next()
            .ok_or(FixtureError::MissingArgument("--dir"))?;

        Ok(Self {
            preset_name: preset.as_str().to_string(),
            destination_dir,
            emit_metrics: args.emit_metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        args: FixtureArgs,
    }

    fn parse(argv: &[&str]) -> Result<FixtureArgs, clap::Error> {
        TestCli::try_parse_from(std::iter::once("create-test-file").chain(argv.iter().copied()))
            .map(|cli| cli.args)
    }

    #[test]
    fn test_parse_single_values() {
        let args = parse(&["--type", "1k500kb", "--dir", "/tmp/out"]).unwrap();
        let config = GenerateConfig::try_from(args).unwrap();

        assert_eq!(config.preset_name, "1k500kb");
        assert_eq!(config.destination_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.emit_metrics, None);
    }

    #[test]
    fn test_only_first_value_used() {
        let args = parse(&[
            "--type", "1m1kb", "1k800kb", "--dir", "/tmp/a", "/tmp/b",
        ])
        .unwrap();
        assert_eq!(args.preset, vec![PresetChoice::OneM1Kb, PresetChoice::OneK800Kb]);

        let config = GenerateConfig::try_from(args).unwrap();
        assert_eq!(config.preset_name, "1m1kb");
        assert_eq!(config.destination_dir, PathBuf::from("/tmp/a"));
    }

    #[test]
    fn test_unmapped_choice_is_accepted() {
        let args = parse(&["--type", "10k100kb", "--dir", "/tmp/out"]).unwrap();
        let config = GenerateConfig::try_from(args).unwrap();
        assert_eq!(config.preset_name, "10k100kb");
    }

    #[test]
    fn test_rejects_values_outside_choices() {
        // 10k10kb has a table row but is not a CLI choice
        let err = parse(&["--type", "10k10kb", "--dir", "/tmp/out"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_type_is_required() {
        let err = parse(&["--dir", "/tmp/out"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_emit_metrics_path() {
        let args = parse(&[
            "--type",
            "1k800kb",
            "--dir",
            "/tmp/out",
            "--emit-metrics",
            "/tmp/metrics.jsonl",
        ])
        .unwrap();
        let config = GenerateConfig::try_from(args).unwrap();
        assert_eq!(
            config.emit_metrics,
            Some(PathBuf::from("/tmp/metrics.jsonl"))
        );
    }

    #[test]
    fn test_choice_names_match_value_enum() {
        for choice in PresetChoice::value_variants() {
            let value = choice.to_possible_value().unwrap();
            assert_eq!(value.get_name(), choice.as_str());
        }
    }
}
