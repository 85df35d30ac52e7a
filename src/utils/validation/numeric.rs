//! Numeric validation utilities
//!
//! Safe conversions between decimal input, normalized floats and 8-bit
//! channels.

use crate::config::DecimalPolicy;
use crate::error::{ColorMixError, Result};

/// Tolerance used when checking whether a computed value lies in `[0, 1]`
pub const UNIT_EPSILON: f64 = 1e-9;

/// Validator for numeric operations and conversions
pub struct NumericValidator;

impl NumericValidator {
    /// Convert a decimal channel value to `u8` under the given policy
    ///
    /// `Reject` fails on values above 255, `Clamp` saturates them.
    pub fn channel_from_decimal(value: u32, policy: DecimalPolicy) -> Result<u8> {
        match (u8::try_from(value), policy) {
            (Ok(channel), _) => Ok(channel),
            (Err(_), DecimalPolicy::Clamp) => {
                log::debug!("Clamping decimal channel {} to 255", value);
                Ok(u8::MAX)
            },
            (Err(_), DecimalPolicy::Reject) => Err(ColorMixError::config_value_error(
                "channel",
                value,
                "0-255",
                None,
            )),
        }
    }

    /// True when `value` lies in `[0, 1]`, allowing [`UNIT_EPSILON`] slack
    pub fn in_unit_interval(value: f64) -> bool {
        (-UNIT_EPSILON..=1.0 + UNIT_EPSILON).contains(&value)
    }

    /// Convert a normalized value to an 8-bit channel
    ///
    /// The value is clamped to `[0, 1]`, scaled by 255 and rounded half to even.
    pub fn unit_to_channel(value: f64) -> Result<u8> {
        if !value.is_finite() {
            return Err(ColorMixError::processing(format!(
                "Cannot convert non-finite value {} to a channel",
                value
            )));
        }

        let scaled = (value.clamp(0.0, 1.0) * 255.0).round_ties_even();
        Ok(scaled as u8)
    }

    /// Integer mean of `values`, rounded half to even
    ///
    /// Returns `None` for an empty slice.
    pub fn mean_round_half_even(values: &[u8]) -> Option<u8> {
        let count = u64::try_from(values.len()).ok().filter(|&n| n > 0)?;
        let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();

        let quotient = sum / count;
        let twice_remainder = 2 * (sum % count);
        let rounded = match twice_remainder.cmp(&count) {
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Greater => quotient + 1,
            std::cmp::Ordering::Equal => quotient + (quotient & 1),
        };

        u8::try_from(rounded).ok()
    }
}
