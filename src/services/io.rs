//! Color batch I/O service
//!
//! This module separates reading color tokens from files and standard input
//! from the blending logic, so the reader can be exercised with in-memory
//! buffers.

use crate::{
    config::{BlendConfig, DecimalPolicy},
    error::{ColorMixError, Result},
    types::{ColorBatch, RejectedToken, TokenSource},
    utils::ColorParser,
};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Samples collected from one input plus the tokens that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReadOutcome {
    pub batch: ColorBatch,
    pub rejected: Vec<RejectedToken>,
}

impl BatchReadOutcome {
    /// Parse one token and record it in the batch or the rejection list
    ///
    /// Tokens are trimmed first. Blank tokens are ignored. Rejections are
    /// only logged at debug level; callers report them.
    pub fn ingest(&mut self, source: TokenSource, raw: &str, policy: DecimalPolicy) {
        let token = raw.trim();
        if token.is_empty() {
            return;
        }

        match ColorParser::parse(token, policy) {
            Ok(color) => {
                log::debug!("Parsed {} from {}: {}", token, source, color);
                self.batch.push(color);
            },
            Err(e) => {
                log::debug!("Rejected {} from {}: {}", token, source, e);
                let reason = match e {
                    ColorMixError::InvalidColor { reason, .. } => reason,
                    other => other.to_string(),
                };
                self.rejected.push(RejectedToken {
                    source,
                    token: token.to_string(),
                    reason,
                });
            },
        }
    }
}

/// Service for reading color tokens into a batch
pub struct ColorIOService;

impl ColorIOService {
    /// Read the batch described by `config`
    ///
    /// File lines come first, then `config.colors` in order. An input path of
    /// `-` reads standard input.
    ///
    /// # Errors
    /// - The input file cannot be opened or read
    pub fn read_batch(config: &BlendConfig) -> Result<BatchReadOutcome> {
        let mut outcome = if config.reads_stdin() {
            let stdin = std::io::stdin();
            Self::read_from_reader(stdin.lock(), config.decimal_policy).map_err(|e| match e {
                ColorMixError::Io(io_err) => {
                    ColorMixError::file_io_error("read colors from", "<stdin>", &io_err)
                },
                other => other,
            })?
        } else {
            Self::read_file(&config.input, config.decimal_policy)?
        };

        Self::append_tokens(&mut outcome, &config.colors, config.decimal_policy);
        Ok(outcome)
    }

    /// Read newline-separated color tokens from a file
    ///
    /// The file handle is closed when this function returns, on success or
    /// error.
    ///
    /// # Errors
    /// - The file does not exist or cannot be opened
    /// - The file content cannot be read as UTF-8 text
    ///
    /// # Examples
    /// ```rust,no_run
    /// use colormix::{services::ColorIOService, DecimalPolicy};
    ///
    /// let outcome = ColorIOService::read_file("colors.txt", DecimalPolicy::Reject)?;
    /// println!("{} colors", outcome.batch.len());
    /// # Ok::<(), colormix::ColorMixError>(())
    /// ```
    pub fn read_file<P: AsRef<Path>>(path: P, policy: DecimalPolicy) -> Result<BatchReadOutcome> {
        let path_ref = path.as_ref();

        let file = std::fs::File::open(path_ref)
            .map_err(|e| ColorMixError::file_io_error("open color file", path_ref, &e))?;

        Self::read_from_reader(BufReader::new(file), policy).map_err(|e| match e {
            ColorMixError::Io(io_err) => {
                ColorMixError::file_io_error("read color file", path_ref, &io_err)
            },
            other => other,
        })
    }

    /// Read newline-separated color tokens from any buffered reader
    ///
    /// # Errors
    /// - The reader fails or yields invalid UTF-8
    pub fn read_from_reader<R: BufRead>(reader: R, policy: DecimalPolicy) -> Result<BatchReadOutcome> {
        let mut outcome = BatchReadOutcome::default();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            outcome.ingest(TokenSource::Line(index + 1), &line, policy);
        }
        Ok(outcome)
    }

    /// Append command-line tokens after the file content
    pub fn append_tokens<S: AsRef<str>>(
        outcome: &mut BatchReadOutcome,
        tokens: &[S],
        policy: DecimalPolicy,
    ) {
        for (index, token) in tokens.iter().enumerate() {
            outcome.ingest(TokenSource::Argument(index + 1), token.as_ref(), policy);
        }
    }
}
