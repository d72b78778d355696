//! Flat colors, the three-slot palette and intensity quantization

use std::fmt;
use std::str::FromStr;

use image::Rgb;

use crate::io::configuration::{DEFAULT_PALETTE, LAYER_COUNT, QUANTIZE_THRESHOLDS};
use crate::io::error::{LogoError, invalid_parameter};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray color with every channel at `level`
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Convert to an `image` pixel
    pub const fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }
}

impl FromStr for Color {
    type Err = LogoError;

    /// Parse `#rrggbb` or `rrggbb`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_parameter(
                "palette",
                &text,
                &"colors must be six hex digits, optionally prefixed with '#'",
            ));
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| invalid_parameter("palette", &text, &"unreadable hex channel"))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordered three-color palette, one slot per quantization bin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; LAYER_COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE)
    }
}

impl FromStr for Palette {
    type Err = LogoError;

    /// Parse a comma-separated list of exactly three hex colors
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parsed = text
            .split(',')
            .map(str::parse::<Color>)
            .collect::<Result<Vec<_>, _>>()?;

        let colors: [Color; LAYER_COUNT] = parsed.try_into().map_err(|rejected: Vec<Color>| {
            invalid_parameter(
                "palette",
                &text,
                &format!("expected {LAYER_COUNT} colors, found {}", rejected.len()),
            )
        })?;

        Ok(Self::new(colors))
    }
}

impl Palette {
    /// Create a palette from colors in slot order
    pub const fn new(colors: [Color; LAYER_COUNT]) -> Self {
        Self { colors }
    }

    /// Colors in slot order
    pub const fn colors(&self) -> &[Color; LAYER_COUNT] {
        &self.colors
    }

    /// Color in a given slot
    pub fn get(&self, slot: usize) -> Option<Color> {
        self.colors.get(slot).copied()
    }

    /// Reorder the palette using a shuffle bias
    ///
    /// Biases below 0.5 reverse the order; 0.5 and above (and NaN) keep it.
    pub fn shuffled(mut self, bias: f64) -> Self {
        if bias < 0.5 {
            self.colors.reverse();
        }
        self
    }

    /// Flat color for an accumulated intensity, or `None` when the pixel keeps the background
    pub fn quantize(&self, intensity: u8) -> Option<Color> {
        quantize_slot(intensity).and_then(|slot| self.get(slot))
    }
}

/// Classify an intensity into a palette slot using `QUANTIZE_THRESHOLDS`
pub fn quantize_slot(intensity: u8) -> Option<usize> {
    QUANTIZE_THRESHOLDS
        .iter()
        .position(|&threshold| intensity >= threshold)
}
