//! Color parsing utilities
//!
//! Recognizes short hex (`rgb`), long hex (`rrggbb`), long hex with alpha
//! (`rrggbbaa`) and decimal (`r,g,b,a`) tokens.

use crate::{
    config::DecimalPolicy,
    error::{ColorMixError, Result},
    types::Rgba,
    utils::NumericValidator,
};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Hex code of 3, 6 or 8 digits, either case, one optional leading `#`
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?<digits>[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("valid regex")
});

/// Four comma-separated fields of 1-3 ASCII digits
static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3}),([0-9]{1,3}),([0-9]{1,3}),([0-9]{1,3})$").expect("valid regex")
});

/// Any run of hex digits, used only to explain a rejected token
static HEX_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]+$").expect("valid regex"));

/// Textual format of a color token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `rgb`, each digit doubled
    ShortHex,
    /// `rrggbb`
    LongHex,
    /// `rrggbbaa`
    LongHexAlpha,
    /// `r,g,b,a` with 1-3 decimal digits per field
    Decimal,
}

/// Utility for parsing color tokens
pub struct ColorParser;

impl ColorParser {
    /// Detect the format of a token without decoding it
    ///
    /// Hex tokens may carry one leading `#` and use either letter case.
    ///
    /// # Examples
    /// ```rust
    /// use colormix::utils::{ColorFormat, ColorParser};
    ///
    /// assert_eq!(ColorParser::classify("abc"), Some(ColorFormat::ShortHex));
    /// assert_eq!(ColorParser::classify("#A0B1C2"), Some(ColorFormat::LongHex));
    /// assert_eq!(ColorParser::classify("1,2,3,4"), Some(ColorFormat::Decimal));
    /// assert_eq!(ColorParser::classify("12345"), None);
    /// ```
    pub fn classify(token: &str) -> Option<ColorFormat> {
        if let Some(caps) = HEX_RE.captures(token) {
            return Self::hex_format(&caps);
        }
        DECIMAL_RE.is_match(token).then_some(ColorFormat::Decimal)
    }

    /// Parse a color token
    ///
    /// Decimal fields above 255 are handled according to `policy`.
    ///
    /// # Examples
    /// ```rust
    /// use colormix::{utils::ColorParser, DecimalPolicy, Rgba};
    ///
    /// let teal = ColorParser::parse("#008080", DecimalPolicy::Reject)?;
    /// assert_eq!(teal, Rgba::new(0, 128, 128, 255));
    ///
    /// let faded = ColorParser::parse("10,20,30,40", DecimalPolicy::Reject)?;
    /// assert_eq!(faded, Rgba::new(10, 20, 30, 40));
    /// # Ok::<(), colormix::ColorMixError>(())
    /// ```
    pub fn parse(token: &str, policy: DecimalPolicy) -> Result<Rgba> {
        if let Some(caps) = HEX_RE.captures(token) {
            let digits = caps.name("digits").map_or("", |m| m.as_str());
            return match Self::hex_format(&caps) {
                Some(ColorFormat::ShortHex) => {
                    let [r, g, b] = Self::hex_digits::<3>(digits, token)?;
                    Ok(Rgba::opaque(r * 17, g * 17, b * 17))
                },
                Some(ColorFormat::LongHex) => {
                    let [r, g, b] = Self::hex_pairs::<3>(digits, token)?;
                    Ok(Rgba::opaque(r, g, b))
                },
                Some(ColorFormat::LongHexAlpha) => {
                    let [r, g, b, a] = Self::hex_pairs::<4>(digits, token)?;
                    Ok(Rgba::new(r, g, b, a))
                },
                _ => Err(ColorMixError::invalid_color(token, Self::describe_failure(token))),
            };
        }

        if let Some(caps) = DECIMAL_RE.captures(token) {
            let [r, g, b, a] = Self::decimal_fields(&caps, token, policy)?;
            return Ok(Rgba::new(r, g, b, a));
        }

        Err(ColorMixError::invalid_color(token, Self::describe_failure(token)))
    }

    fn hex_format(caps: &Captures<'_>) -> Option<ColorFormat> {
        match caps.name("digits")?.len() {
            3 => Some(ColorFormat::ShortHex),
            6 => Some(ColorFormat::LongHex),
            8 => Some(ColorFormat::LongHexAlpha),
            _ => None,
        }
    }

    fn hex_digits<const N: usize>(hex: &str, token: &str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        for (slot, c) in out.iter_mut().zip(hex.chars()) {
            let digit = c
                .to_digit(16)
                .ok_or_else(|| ColorMixError::invalid_color(token, "not a hex digit"))?;
            *slot = digit as u8;
        }
        Ok(out)
    }

    fn hex_pairs<const N: usize>(hex: &str, token: &str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        for (i, slot) in out.iter_mut().enumerate() {
            let pair = hex
                .get(i * 2..i * 2 + 2)
                .ok_or_else(|| ColorMixError::invalid_color(token, "truncated hex code"))?;
            *slot = u8::from_str_radix(pair, 16)
                .map_err(|_| ColorMixError::invalid_color(token, "not a hex digit"))?;
        }
        Ok(out)
    }

    fn decimal_fields(caps: &Captures<'_>, token: &str, policy: DecimalPolicy) -> Result<[u8; 4]> {
        let mut out = [0u8; 4];
        for (slot, field) in out.iter_mut().zip(caps.iter().skip(1).flatten()) {
            let value: u32 = field
                .as_str()
                .parse()
                .map_err(|_| ColorMixError::invalid_color(token, "not a decimal number"))?;
            *slot = NumericValidator::channel_from_decimal(value, policy).map_err(|_| {
                ColorMixError::invalid_color(token, format!("channel value {value} exceeds 255"))
            })?;
        }
        Ok(out)
    }

    fn describe_failure(token: &str) -> &'static str {
        if token.is_empty() {
            "empty token"
        } else if token.contains(',') {
            "expected four comma-separated fields of 1-3 digits"
        } else if HEX_DIGITS_RE.is_match(token) {
            "hex code must have 3, 6 or 8 digits"
        } else {
            "unrecognized color format"
        }
    }
}
