//! colormix CLI
//!
//! Command-line interface that reads a color file, appends colors given as
//! arguments, blends them and prints the result.

use super::config::CliConfigBuilder;
use crate::{
    config::{BlendConfig, ReportFormat},
    processor::BlendProcessor,
    services::ReportFormatter,
    tracing_config::{events, init_cli_tracing, spans},
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

/// Blend colors from a file and the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "colormix")]
pub struct Cli {
    /// Extra colors (rgb, rrggbb, rrggbbaa or r,g,b,a) appended after the file's colors
    #[arg(value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Blend mode; a bare -m selects mix
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = CliBlendMode::Mix,
        num_args = 0..=1,
        default_missing_value = "mix"
    )]
    pub mode: CliBlendMode,

    /// File with one color per line ("-" for stdin)
    #[arg(short, long, value_name = "PATH", default_value = crate::config::DEFAULT_INPUT_FILE)]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = CliReportFormat::Text)]
    pub format: CliReportFormat,

    /// Clamp decimal channel values above 255 instead of rejecting the color
    #[arg(long)]
    pub clamp_decimal: bool,

    /// Enable verbose logging on stderr (-v: INFO, -vv: DEBUG, -vvv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum CliBlendMode {
    Mix,
    Lowest,
    Highest,
    MixSaturate,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum CliReportFormat {
    Text,
    Json,
}

pub fn main() -> Result<()> {
    let cli = Cli::parse();

    let session_id = uuid::Uuid::new_v4().to_string();
    init_cli_tracing(cli.verbose, &session_id).context("Failed to initialize tracing")?;

    CliConfigBuilder::validate_cli(&cli).context("Invalid CLI arguments")?;
    let config = CliConfigBuilder::from_cli(&cli).context("Failed to build configuration")?;

    let _session = spans::session(&session_id, &config).entered();
    debug!("Configuration: {:?}", config);

    run(&config).inspect_err(|e| events::error_with_context(&**e, "colormix run"))
}

/// Read, blend and print according to `config`
fn run(config: &BlendConfig) -> Result<()> {
    let processor = BlendProcessor::new(config.clone()).context("Invalid configuration")?;
    let text_output = config.report_format == ReportFormat::Text;

    if text_output {
        println!("{}", ReportFormatter::configuration_line(config));
    }

    let outcome = processor.read_input().context("Failed to read colors")?;
    for rejected in &outcome.rejected {
        events::rejected_token(rejected);
        if text_output {
            println!("{}", ReportFormatter::rejected_line(rejected));
        }
    }
    events::progress(&format!(
        "Blending {} colors with mode '{}'",
        outcome.batch.len(),
        config.mode
    ));

    let report = processor.process(outcome).context("Failed to blend colors")?;

    match config.report_format {
        ReportFormat::Text => println!("{}", ReportFormatter::result_text(&report)),
        ReportFormat::Json => println!("{}", ReportFormatter::to_json(&report)?),
    }

    Ok(())
}
