//! Configuration conversion utilities for CLI arguments

use crate::cli::main_impl::{Cli, CliBlendMode, CliReportFormat};
use crate::config::{BlendConfig, BlendMode, DecimalPolicy, ReportFormat};
use anyhow::{Context, Result};

/// Convert CLI arguments to a `BlendConfig`
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    /// Build `BlendConfig` from CLI arguments
    pub(crate) fn from_cli(cli: &Cli) -> Result<BlendConfig> {
        let mode = match cli.mode {
            CliBlendMode::Mix => BlendMode::Mix,
            CliBlendMode::Lowest => BlendMode::Lowest,
            CliBlendMode::Highest => BlendMode::Highest,
            CliBlendMode::MixSaturate => BlendMode::MixSaturate,
        };

        let report_format = match cli.format {
            CliReportFormat::Text => ReportFormat::Text,
            CliReportFormat::Json => ReportFormat::Json,
        };

        let decimal_policy = if cli.clamp_decimal {
            DecimalPolicy::Clamp
        } else {
            DecimalPolicy::Reject
        };

        let config = BlendConfig::builder()
            .mode(mode)
            .input(&cli.input)
            .colors(cli.colors.iter().cloned())
            .decimal_policy(decimal_policy)
            .report_format(report_format)
            .build()
            .context("Invalid configuration")?;

        Ok(config)
    }

    /// Validate CLI arguments for consistency
    pub(crate) fn validate_cli(cli: &Cli) -> Result<()> {
        if cli.input.trim().is_empty() {
            anyhow::bail!("Input path must not be empty (use '-' for stdin)");
        }

        if cli.input == "-" && cli.colors.iter().any(|c| c == "-") {
            anyhow::bail!("'-' is only valid as the input path, not as a color");
        }

        Ok(())
    }
}
