//! Configuration types for color blending operations

use crate::error::{ColorMixError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Input file read when no path is given
pub const DEFAULT_INPUT_FILE: &str = "colors.txt";

/// Strategy used to reduce a batch to one color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// Per-channel arithmetic mean
    #[default]
    Mix,
    /// Per-channel minimum
    Lowest,
    /// Per-channel maximum
    Highest,
    /// Last color, adjusted toward the batch's average saturation
    MixSaturate,
}

impl BlendMode {
    /// All modes, in the order they are documented
    pub const ALL: [Self; 4] = [Self::Mix, Self::Lowest, Self::Highest, Self::MixSaturate];

    /// Name used on the command line and in reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mix => "mix",
            Self::Lowest => "lowest",
            Self::Highest => "highest",
            Self::MixSaturate => "mix-saturate",
        }
    }
}

impl std::fmt::Display for BlendMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendMode {
    type Err = ColorMixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ColorMixError::invalid_config(format!(
                    "Unknown blend mode '{s}'. Expected one of: mix, lowest, highest, mix-saturate"
                ))
            })
    }
}

/// What to do with decimal channel values above 255
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecimalPolicy {
    /// Report the token as invalid
    #[default]
    Reject,
    /// Saturate the channel to 255
    Clamp,
}

/// How the final report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Labelled lines, one value per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Configuration for one blend run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendConfig {
    /// Reduction strategy
    pub mode: BlendMode,

    /// File of newline-separated color codes (`-` for stdin)
    pub input: PathBuf,

    /// Extra color tokens appended after the file's lines
    pub colors: Vec<String>,

    /// Handling of decimal channels above 255
    pub decimal_policy: DecimalPolicy,

    /// Output format for the report
    pub report_format: ReportFormat,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            mode: BlendMode::default(),
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            colors: Vec::new(),
            decimal_policy: DecimalPolicy::default(),
            report_format: ReportFormat::default(),
        }
    }
}

impl BlendConfig {
    /// Create a new configuration builder for fluent API construction
    ///
    /// # Examples
    ///
    /// ```rust
    /// use colormix::{BlendConfig, BlendMode};
    ///
    /// let config = BlendConfig::builder()
    ///     .mode(BlendMode::Highest)
    ///     .input("palette.txt")
    ///     .color("abc")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.colors, vec!["abc".to_string()]);
    /// ```
    #[must_use]
    pub fn builder() -> BlendConfigBuilder {
        BlendConfigBuilder::default()
    }

    /// True when the input should be read from standard input
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }

    /// Validate configuration parameters
    ///
    /// # Errors
    /// - Empty input path
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(ColorMixError::invalid_config(
                "Input path must not be empty (use '-' for stdin)",
            ));
        }

        Ok(())
    }
}

/// Builder for `BlendConfig`
#[derive(Debug, Default)]
pub struct BlendConfigBuilder {
    config: BlendConfig,
}

impl BlendConfigBuilder {
    /// Set blend mode
    #[must_use]
    pub fn mode(mut self, mode: BlendMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set input file path
    #[must_use]
    pub fn input<P: Into<PathBuf>>(mut self, input: P) -> Self {
        self.config.input = input.into();
        self
    }

    /// Append one command-line color token
    #[must_use]
    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.config.colors.push(color.into());
        self
    }

    /// Replace all command-line color tokens
    #[must_use]
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set decimal channel policy
    #[must_use]
    pub fn decimal_policy(mut self, policy: DecimalPolicy) -> Self {
        self.config.decimal_policy = policy;
        self
    }

    /// Set report output format
    #[must_use]
    pub fn report_format(mut self, format: ReportFormat) -> Self {
        self.config.report_format = format;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// - Any error from [`BlendConfig::validate`]
    pub fn build(self) -> Result<BlendConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlendConfig::default();
        assert_eq!(config.mode, BlendMode::Mix);
        assert_eq!(config.input, PathBuf::from("colors.txt"));
        assert!(config.colors.is_empty());
        assert_eq!(config.decimal_policy, DecimalPolicy::Reject);
        assert_eq!(config.report_format, ReportFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BlendConfig::builder()
            .mode(BlendMode::MixSaturate)
            .input("-")
            .colors(["fff", "000"])
            .color("10,20,30,40")
            .decimal_policy(DecimalPolicy::Clamp)
            .report_format(ReportFormat::Json)
            .build()
            .unwrap();

        assert_eq!(config.mode, BlendMode::MixSaturate);
        assert!(config.reads_stdin());
        assert_eq!(config.colors, vec!["fff", "000", "10,20,30,40"]);
        assert_eq!(config.decimal_policy, DecimalPolicy::Clamp);
        assert_eq!(config.report_format, ReportFormat::Json);
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = BlendConfig::builder().input("").build();
        assert!(matches!(result, Err(ColorMixError::InvalidConfig(_))));
    }

    #[test]
    fn test_mode_names() {
        for mode in BlendMode::ALL {
            assert_eq!(mode.as_str().parse::<BlendMode>().unwrap(), mode);
        }
        assert_eq!("MIX-SATURATE".parse::<BlendMode>().unwrap(), BlendMode::MixSaturate);
        assert!("average".parse::<BlendMode>().is_err());
    }

    #[test]
    fn test_mode_serde_uses_cli_names() {
        let json = serde_json::to_string(&BlendMode::MixSaturate).unwrap();
        assert_eq!(json, "\"mix-saturate\"");
        let mode: BlendMode = serde_json::from_str("\"lowest\"").unwrap();
        assert_eq!(mode, BlendMode::Lowest);
    }
}
