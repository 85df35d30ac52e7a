//! Core color types: samples, batches and blend reports

use crate::config::BlendConfig;
use serde::{Deserialize, Serialize};

/// A single RGBA color sample with 8-bit channels
///
/// The value is immutable once built. Hue, saturation and lightness are
/// derived on demand from the normalized channels and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from its four channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Red, green and blue as an array, in that order
    #[must_use]
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels divided by 255, in R, G, B, A order
    #[must_use]
    pub fn normalized(&self) -> [f64; 4] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
            f64::from(self.a) / 255.0,
        ]
    }

    /// Largest and smallest normalized RGB channel
    fn extremes(&self) -> (f64, f64) {
        let [r, g, b, _] = self.normalized();
        (r.max(g).max(b), r.min(g).min(b))
    }

    /// Hue in degrees, in `[0, 360)`
    ///
    /// Achromatic colors report 0.
    #[must_use]
    pub fn hue(&self) -> f64 {
        let [r, g, b, _] = self.normalized();
        let (cmax, cmin) = self.extremes();
        let delta = cmax - cmin;

        if delta == 0.0 {
            return 0.0;
        }

        // Ties for the maximum resolve in R, G, B order
        let hue = if cmax == r {
            60.0 * ((g - b) / delta)
        } else if cmax == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        if hue < 0.0 {
            hue + 360.0
        } else {
            hue
        }
    }

    /// HSL saturation in `[0, 1]`
    #[must_use]
    pub fn saturation(&self) -> f64 {
        let (cmax, cmin) = self.extremes();
        if cmax == cmin {
            return 0.0;
        }
        (cmax - cmin) / (1.0 - (cmax + cmin - 1.0).abs())
    }

    /// HSL lightness in `[0, 1]`
    #[must_use]
    pub fn lightness(&self) -> f64 {
        let (cmax, cmin) = self.extremes();
        (cmax + cmin) / 2.0
    }

    /// True when all three color channels are equal
    #[must_use]
    pub fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Lowercase `#rrggbbaa` representation
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parsed samples stored as four parallel channel sequences
///
/// Samples keep their input order, which matters for `mix-saturate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorBatch {
    reds: Vec<u8>,
    greens: Vec<u8>,
    blues: Vec<u8>,
    alphas: Vec<u8>,
}

impl ColorBatch {
    /// Create an empty batch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample
    pub fn push(&mut self, color: Rgba) {
        self.reds.push(color.r);
        self.greens.push(color.g);
        self.blues.push(color.b);
        self.alphas.push(color.a);
    }

    /// Number of samples in the batch
    #[must_use]
    pub fn len(&self) -> usize {
        self.reds.len()
    }

    /// True when no sample was collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reds.is_empty()
    }

    #[must_use]
    pub fn reds(&self) -> &[u8] {
        &self.reds
    }

    #[must_use]
    pub fn greens(&self) -> &[u8] {
        &self.greens
    }

    #[must_use]
    pub fn blues(&self) -> &[u8] {
        &self.blues
    }

    #[must_use]
    pub fn alphas(&self) -> &[u8] {
        &self.alphas
    }

    /// Sample at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Rgba> {
        Some(Rgba::new(
            *self.reds.get(index)?,
            *self.greens.get(index)?,
            *self.blues.get(index)?,
            *self.alphas.get(index)?,
        ))
    }

    /// Most recently appended sample
    #[must_use]
    pub fn last(&self) -> Option<Rgba> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Iterate over samples in input order
    pub fn iter(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.reds
            .iter()
            .zip(&self.greens)
            .zip(&self.blues)
            .zip(&self.alphas)
            .map(|(((&r, &g), &b), &a)| Rgba::new(r, g, b, a))
    }
}

impl FromIterator<Rgba> for ColorBatch {
    fn from_iter<I: IntoIterator<Item = Rgba>>(iter: I) -> Self {
        let mut batch = Self::new();
        for color in iter {
            batch.push(color);
        }
        batch
    }
}

/// Where a token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "position")]
pub enum TokenSource {
    /// 1-based line number in the input file
    Line(usize),
    /// 1-based position among the command-line colors
    Argument(usize),
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(n) => write!(f, "line {n}"),
            Self::Argument(n) => write!(f, "argument {n}"),
        }
    }
}

/// A token that failed to parse and was left out of the batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedToken {
    pub source: TokenSource,
    pub token: String,
    pub reason: String,
}

/// Final result of one blend run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendReport {
    pub config: BlendConfig,
    pub color: Rgba,
    pub hex: String,
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub sample_count: usize,
    pub rejected: Vec<RejectedToken>,
}

impl BlendReport {
    /// Build a report from the blended color, deriving hex and HSL values
    #[must_use]
    pub fn new(
        config: BlendConfig,
        color: Rgba,
        sample_count: usize,
        rejected: Vec<RejectedToken>,
    ) -> Self {
        Self {
            config,
            color,
            hex: color.to_hex(),
            hue: color.hue(),
            saturation: color.saturation(),
            lightness: color.lightness(),
            sample_count,
            rejected,
        }
    }
}
