#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # colormix
//!
//! Blend a batch of colors into one and describe the result in hex and HSL.
//!
//! Colors are read from a text file (one per line) plus any extra tokens,
//! in four formats:
//!
//! - `rgb`: short hex, each digit doubled, opaque
//! - `rrggbb`: long hex, opaque
//! - `rrggbbaa`: long hex with alpha
//! - `r,g,b,a`: decimal channels of 1-3 digits
//!
//! The batch is reduced with one of four [`BlendMode`]s:
//!
//! - **mix**: per-channel mean, ties rounded to even
//! - **lowest** / **highest**: per-channel minimum / maximum
//! - **mix-saturate**: the last color with one channel moved so its
//!   saturation matches the batch's average saturation
//!
//! ## Quick Start
//!
//! ```rust
//! use colormix::{blend_colors, BlendMode, Rgba};
//!
//! let report = blend_colors(["ff0000", "00ff00", "0000ff"], BlendMode::Mix)?;
//! assert_eq!(report.color, Rgba::new(85, 85, 85, 255));
//! assert_eq!(report.hex, "#555555ff");
//! assert_eq!(report.saturation, 0.0);
//! # Ok::<(), colormix::ColorMixError>(())
//! ```
//!
//! ## Reading a file
//!
//! ```rust,no_run
//! use colormix::{BlendConfig, BlendMode, BlendProcessor};
//!
//! let config = BlendConfig::builder()
//!     .mode(BlendMode::MixSaturate)
//!     .input("colors.txt")
//!     .color("abc")
//!     .build()?;
//! let report = BlendProcessor::new(config)?.run()?;
//! println!("{} (hue {:.2})", report.hex, report.hue);
//! # Ok::<(), colormix::ColorMixError>(())
//! ```
//!
//! ### Feature Flags
//!
//! - `cli` (default): command-line interface and tracing subscriber setup
//! - `tracing-json`: JSON formatted diagnostics for the CLI

pub mod blend;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod processor;
pub mod services;
pub mod tracing_config;
pub mod types;
pub mod utils;

// Public API exports
pub use config::{BlendConfig, BlendConfigBuilder, BlendMode, DecimalPolicy, ReportFormat};
pub use error::{ColorMixError, Result};
pub use processor::BlendProcessor;
pub use services::{BatchReadOutcome, ColorIOService, ReportFormatter};
pub use types::{BlendReport, ColorBatch, RejectedToken, Rgba, TokenSource};
pub use utils::{ColorFormat, ColorParser};

#[cfg(feature = "cli")]
pub use tracing_config::{init_cli_tracing, TracingConfig, TracingFormat};

/// Blend in-memory color tokens without touching the filesystem
///
/// Invalid tokens are skipped and listed in the report, as they are for file
/// input.
///
/// # Errors
/// - No token parsed to a valid color
///
/// # Examples
/// ```rust
/// use colormix::{blend_colors, BlendMode, Rgba};
///
/// let report = blend_colors(["abc", "12345", "10,20,30,40"], BlendMode::Lowest)?;
/// assert_eq!(report.color, Rgba::new(10, 20, 30, 40));
/// assert_eq!(report.rejected.len(), 1);
/// # Ok::<(), colormix::ColorMixError>(())
/// ```
pub fn blend_colors<I, S>(tokens: I, mode: BlendMode) -> Result<BlendReport>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = BlendConfig::builder().mode(mode).colors(tokens).build()?;

    let mut outcome = BatchReadOutcome::default();
    ColorIOService::append_tokens(&mut outcome, &config.colors, config.decimal_policy);

    BlendProcessor::new(config)?.process(outcome)
}
