//! Unified blend processor
//!
//! `BlendProcessor` ties together batch reading, reduction and report
//! construction for one configuration. The CLI and library entry points
//! both go through it so they behave the same.

use crate::{
    blend,
    config::BlendConfig,
    error::{ColorMixError, Result},
    services::{BatchReadOutcome, ColorIOService},
    types::{BlendReport, Rgba},
};
use log::{debug, info};
use std::time::Instant;
use tracing::{info as trace_info, instrument};

/// Processor that turns a configured input into a [`BlendReport`]
#[derive(Debug, Clone)]
pub struct BlendProcessor {
    config: BlendConfig,
}

impl BlendProcessor {
    /// Create a processor after validating `config`
    ///
    /// # Errors
    /// - Invalid configuration
    pub fn new(config: BlendConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this processor runs with
    #[must_use]
    pub fn config(&self) -> &BlendConfig {
        &self.config
    }

    /// Read the configured input file and command-line tokens
    ///
    /// # Errors
    /// - The input cannot be opened or read
    pub fn read_input(&self) -> Result<BatchReadOutcome> {
        let _span = crate::tracing_config::spans::batch_read(&self.config).entered();
        let outcome = ColorIOService::read_batch(&self.config)?;
        debug!(
            "Read {} valid colors, {} rejected",
            outcome.batch.len(),
            outcome.rejected.len()
        );
        Ok(outcome)
    }

    /// Reduce an already-read batch and build the report
    ///
    /// # Errors
    /// - The batch holds no valid colors
    /// - Numeric failure in the reducer
    #[instrument(skip(self, outcome), fields(mode = %self.config.mode, samples = outcome.batch.len()))]
    pub fn process(&self, outcome: BatchReadOutcome) -> Result<BlendReport> {
        if outcome.batch.is_empty() {
            return Err(ColorMixError::EmptyBatch);
        }

        let start = Instant::now();
        let color: Rgba = blend::reduce(&outcome.batch, self.config.mode)?;
        trace_info!(
            color = %color,
            elapsed_us = start.elapsed().as_micros() as u64,
            "blend complete"
        );

        Ok(BlendReport::new(
            self.config.clone(),
            color,
            outcome.batch.len(),
            outcome.rejected,
        ))
    }

    /// Read the input and blend it in one step
    ///
    /// # Errors
    /// - Any error from [`Self::read_input`] or [`Self::process`]
    pub fn run(&self) -> Result<BlendReport> {
        info!("Blending colors with mode '{}'", self.config.mode);
        let outcome = self.read_input()?;
        self.process(outcome)
    }
}
