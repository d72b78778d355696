//! Decimal-window parameter extraction driving every generator decision
//!
//! The seed's base-10 string is cut into nine consecutive two-digit windows.
//! Each window becomes one field normalized to `[0, 1)`. Windows that fall
//! past the end of the string are NaN, and NaN fails every `>` comparison, so
//! short seeds deterministically fall through to the default shapes.

use crate::io::configuration::LAYER_COUNT;

/// Number of fields extracted from a seed
pub const FIELD_COUNT: usize = 9;

/// Width of each decimal window
pub const WINDOW_WIDTH: usize = 2;

/// Digit count needed to fill every window
pub const FULL_SEED_DIGITS: usize = FIELD_COUNT * WINDOW_WIDTH;

/// Value every field holds before the first seed arrives
pub const STARTUP_FIELD_VALUE: f64 = 0.5;

/// Immutable per-seed generator parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    /// Tile-shape selector per color layer (windows 0-2)
    pub tile_selectors: [f64; LAYER_COUNT],
    /// Arc (above 0.5) versus full ellipse (window 3)
    pub ellipse_selector: f64,
    /// Rotation of the half-size right triangle (window 4)
    pub triangle_rotation: f64,
    /// Rotation of the edge triangle (window 5)
    pub edge_triangle_rotation: f64,
    /// Rotation of the mirrored right triangle (window 6)
    pub mirrored_triangle_rotation: f64,
    /// Rotation of the half-disc arc (window 7)
    pub arc_rotation: f64,
    /// Palette shuffle bias (window 8)
    pub shuffle_bias: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::from_fields([STARTUP_FIELD_VALUE; FIELD_COUNT])
    }
}

impl ParameterSet {
    /// Build a parameter set from fields in window order
    pub const fn from_fields(fields: [f64; FIELD_COUNT]) -> Self {
        let [t0, t1, t2, ellipse, triangle, edge, mirrored, arc, shuffle] = fields;
        Self {
            tile_selectors: [t0, t1, t2],
            ellipse_selector: ellipse,
            triangle_rotation: triangle,
            edge_triangle_rotation: edge,
            mirrored_triangle_rotation: mirrored,
            arc_rotation: arc,
            shuffle_bias: shuffle,
        }
    }

    /// Fields in window order
    pub const fn fields(&self) -> [f64; FIELD_COUNT] {
        let [t0, t1, t2] = self.tile_selectors;
        [
            t0,
            t1,
            t2,
            self.ellipse_selector,
            self.triangle_rotation,
            self.edge_triangle_rotation,
            self.mirrored_triangle_rotation,
            self.arc_rotation,
            self.shuffle_bias,
        ]
    }

    /// Tile-shape selector for a layer; NaN for layers outside the set
    pub fn tile_selector(&self, layer_index: usize) -> f64 {
        self.tile_selectors
            .get(layer_index)
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// Number of fields that came from a missing or malformed window
    pub fn missing_field_count(&self) -> usize {
        self.fields().iter().filter(|value| value.is_nan()).count()
    }

    /// Whether any field is the NaN sentinel
    pub fn is_partial(&self) -> bool {
        self.missing_field_count() > 0
    }
}

/// Slice a seed's decimal string into normalized fields
pub fn extract_parameters(seed: u64) -> ParameterSet {
    let digits = seed.to_string();
    let mut fields = [f64::NAN; FIELD_COUNT];

    for (index, field) in fields.iter_mut().enumerate() {
        *field = window_value(&digits, index * WINDOW_WIDTH);
    }

    ParameterSet::from_fields(fields)
}

/// Parse the window starting at `start`, clamped to the string end
///
/// An empty or non-numeric window yields NaN.
pub fn window_value(digits: &str, start: usize) -> f64 {
    let end = (start + WINDOW_WIDTH).min(digits.len());
    digits
        .get(start..end)
        .filter(|window| !window.is_empty())
        .and_then(|window| window.parse::<u8>().ok())
        .map_or(f64::NAN, |value| f64::from(value) / 100.0)
}

/// Map a field to a number of quarter turns in `0..4`
///
/// NaN and negative values map to no rotation.
pub fn quarter_turns(value: f64) -> u8 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    ((value * 4.0).floor() as u64 % 4) as u8
}
