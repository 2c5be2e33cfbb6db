//! Command-line surface
//!
//! Commands return the text to print so they can be exercised without
//! spawning a process.

use std::cmp::Ordering;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

use crate::config::OutputFormat;
use crate::version::SemanticVersion;

#[derive(Debug, Parser)]
#[command(name = "semver-value")]
#[command(version, about = "Parse, render and compare semantic versions")]
pub struct Cli {
    /// Path to the config file (defaults to the XDG config location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the fields of a version
    Parse { version: String },
    /// Print the canonical form of a version
    Render { version: String },
    /// Compare two versions (prints less, equal or greater)
    Compare { left: String, right: String },
}

fn ordering_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

/// Execute a command and return its output.
pub fn execute(command: &Command, format: OutputFormat) -> anyhow::Result<String> {
    match command {
        Command::Parse { version } => {
            let version = SemanticVersion::parse(version)?;
            info!("Parsed version {}", version);

            Ok(match format {
                OutputFormat::Text => format!(
                    "major: {}\nminor: {}\npatch: {}\nprerelease: {}\nmetadata: {}",
                    version.major(),
                    version.minor(),
                    version.patch(),
                    version.prerelease().unwrap_or("-"),
                    version.metadata().unwrap_or("-"),
                ),
                OutputFormat::Json => json!({
                    "major": version.major(),
                    "minor": version.minor(),
                    "patch": version.patch(),
                    "prerelease": version.prerelease(),
                    "metadata": version.metadata(),
                    "canonical": version,
                })
                .to_string(),
            })
        }
        Command::Render { version } => {
            let version = SemanticVersion::parse(version)?;

            Ok(match format {
                OutputFormat::Text => version.to_string(),
                OutputFormat::Json => serde_json::to_string(&version)?,
            })
        }
        Command::Compare { left, right } => {
            let left = SemanticVersion::parse(left)?;
            let right = SemanticVersion::parse(right)?;
            let ordering = ordering_name(left.compare(&right));
            info!("Compared {} with {}: {}", left, right, ordering);

            Ok(match format {
                OutputFormat::Text => ordering.to_string(),
                OutputFormat::Json => json!({ "ordering": ordering }).to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.0.0", "2.0.0", "less")]
    #[case("2.1.0", "2.0.9", "greater")]
    #[case("1.2.3", "1.2.3+build", "equal")]
    #[case("1.2.3-alpha", "1.2.3", "less")]
    #[case("1.2.3", "1.2.3-alpha", "equal")]
    fn compare_prints_ordering(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
        let command = Command::Compare {
            left: left.to_string(),
            right: right.to_string(),
        };

        assert_eq!(execute(&command, OutputFormat::Text).unwrap(), expected);
    }

    #[test]
    fn parse_text_output_lists_fields() {
        let command = Command::Parse {
            version: "1.2.3-alpha".to_string(),
        };

        assert_eq!(
            execute(&command, OutputFormat::Text).unwrap(),
            "major: 1\nminor: 2\npatch: 3\nprerelease: alpha\nmetadata: -"
        );
    }

    #[test]
    fn parse_json_output_includes_canonical_form() {
        let command = Command::Parse {
            version: "01.2.3+build.5".to_string(),
        };

        let output = execute(&command, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            json!({
                "major": 1,
                "minor": 2,
                "patch": 3,
                "prerelease": null,
                "metadata": "build.5",
                "canonical": "1.2.3+build.5",
            })
        );
    }

    #[rstest]
    #[case(OutputFormat::Text, "1.2.3-rc.1")]
    #[case(OutputFormat::Json, "\"1.2.3-rc.1\"")]
    fn render_prints_canonical_form(#[case] format: OutputFormat, #[case] expected: &str) {
        let command = Command::Render {
            version: "1.2.3.4-rc.1".to_string(),
        };

        assert_eq!(execute(&command, format).unwrap(), expected);
    }

    #[test]
    fn invalid_version_is_reported() {
        let command = Command::Compare {
            left: "1.2.3".to_string(),
            right: "1.2".to_string(),
        };

        let err = execute(&command, OutputFormat::Text).unwrap_err();
        assert_eq!(err.to_string(), "Invalid version format: 1.2");
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "semver-value",
            "compare",
            "1.0.0",
            "2.0.0",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Command::Compare { .. }));
    }
}
