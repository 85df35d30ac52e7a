//! Report formatting service
//!
//! Turns configurations, rejected tokens and blend reports into the lines
//! printed by the CLI. Kept apart from the blending logic so output can be
//! tested without capturing stdout.

use crate::{
    config::{BlendConfig, ReportFormat},
    error::Result,
    types::{BlendReport, RejectedToken},
};
use std::fmt::Write as _;

/// Service for rendering blend output
pub struct ReportFormatter;

impl ReportFormatter {
    /// One-line summary of the selected configuration
    ///
    /// # Examples
    /// ```rust
    /// use colormix::{services::ReportFormatter, BlendConfig};
    ///
    /// let config = BlendConfig::builder().color("abc").build().unwrap();
    /// assert_eq!(
    ///     ReportFormatter::configuration_line(&config),
    ///     "Configuration: mode=mix, input=colors.txt, colors=[abc]"
    /// );
    /// ```
    pub fn configuration_line(config: &BlendConfig) -> String {
        format!(
            "Configuration: mode={}, input={}, colors=[{}]",
            config.mode,
            config.input.display(),
            config.colors.join(", ")
        )
    }

    /// Warning line for a token that was skipped
    pub fn rejected_line(rejected: &RejectedToken) -> String {
        format!(
            "Invalid color format: '{}' at {} ({})",
            rejected.token, rejected.source, rejected.reason
        )
    }

    /// Labelled result lines: channels, hex and rounded HSL values
    pub fn result_text(report: &BlendReport) -> String {
        let mut out = String::new();
        let color = report.color;
        // Writing to a String cannot fail
        let _ = writeln!(out, "New red value: {}", color.r);
        let _ = writeln!(out, "New green value: {}", color.g);
        let _ = writeln!(out, "New blue value: {}", color.b);
        let _ = writeln!(out, "New alpha value: {}", color.a);
        let _ = writeln!(out, "Color in hex: {}", report.hex);
        let _ = writeln!(out, "Hue: {:.2}", report.hue);
        let _ = writeln!(out, "Saturation: {:.2}", report.saturation);
        let _ = write!(out, "Lightness: {:.2}", report.lightness);
        out
    }

    /// Pretty-printed JSON document for the whole report
    ///
    /// # Errors
    /// - Serialization failure
    pub fn to_json(report: &BlendReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// Full rendering of a report in the requested format
    ///
    /// Text output contains the configuration line, rejected tokens and the
    /// result lines.
    ///
    /// # Errors
    /// - Serialization failure for JSON output
    pub fn render(report: &BlendReport, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Json => Self::to_json(report),
            ReportFormat::Text => {
                let mut lines = vec![Self::configuration_line(&report.config)];
                lines.extend(report.rejected.iter().map(Self::rejected_line));
                lines.push(Self::result_text(report));
                Ok(lines.join("\n"))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rgba, TokenSource};

    fn sample_report() -> BlendReport {
        BlendReport::new(
            BlendConfig::default(),
            Rgba::opaque(85, 85, 85),
            3,
            vec![RejectedToken {
                source: TokenSource::Line(4),
                token: "12345".to_string(),
                reason: "hex code must have 3, 6 or 8 digits".to_string(),
            }],
        )
    }

    #[test]
    fn test_result_text() {
        let text = ReportFormatter::result_text(&sample_report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "New red value: 85",
                "New green value: 85",
                "New blue value: 85",
                "New alpha value: 255",
                "Color in hex: #555555ff",
                "Hue: 0.00",
                "Saturation: 0.00",
                "Lightness: 0.33",
            ]
        );
    }

    #[test]
    fn test_rejected_line() {
        let report = sample_report();
        assert_eq!(
            ReportFormatter::rejected_line(&report.rejected[0]),
            "Invalid color format: '12345' at line 4 (hex code must have 3, 6 or 8 digits)"
        );
    }

    #[test]
    fn test_render_text_order() {
        let text = ReportFormatter::render(&sample_report(), ReportFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Configuration: mode=mix"));
        assert!(lines[1].starts_with("Invalid color format: '12345'"));
        assert_eq!(lines[2], "New red value: 85");
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_render_json() {
        let json = ReportFormatter::render(&sample_report(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["hex"], "#555555ff");
        assert_eq!(value["color"]["r"], 85);
        assert_eq!(value["config"]["mode"], "mix");
        assert_eq!(value["sample_count"], 3);
        assert_eq!(value["rejected"][0]["source"]["kind"], "line");
        assert_eq!(value["rejected"][0]["source"]["position"], 4);
    }
}
