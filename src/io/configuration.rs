//! Generator constants and the immutable runtime configuration

use crate::io::error::{Result, invalid_parameter};
use crate::render::palette::{Color, Palette};

// Generator constants
/// Number of additive layers, one per palette color
pub const LAYER_COUNT: usize = 3;

/// Gray step per layer; layer `i` is filled with `BASE_INTENSITY * i`
pub const BASE_INTENSITY: u8 = 84;

/// Default number of tiles along each side of the offscreen buffer
pub const DEFAULT_GRID_SIZE: usize = 1;

// Keeps tiles at least a few pixels wide on the default canvas
/// Maximum allowed grid size
pub const MAX_GRID_SIZE: usize = 64;

/// Background color of the offscreen buffer and the display canvas (`#1F1F1F`)
pub const BACKGROUND_COLOR: Color = Color::new(0x1f, 0x1f, 0x1f);

/// Palette used when none is configured (`#0ea9eb`, `#fb6819`, `#e70e75`)
pub const DEFAULT_PALETTE: [Color; LAYER_COUNT] = [
    Color::new(0x0e, 0xa9, 0xeb),
    Color::new(0xfb, 0x68, 0x19),
    Color::new(0xe7, 0x0e, 0x75),
];

/// Shuffle bias applied to the palette once at startup
pub const DEFAULT_SHUFFLE_BIAS: f64 = 0.5;

/// Intensity thresholds mapping to palette slots 0, 1 and 2
pub const QUANTIZE_THRESHOLDS: [u8; LAYER_COUNT] = [252, 162, 84];

// Canvas geometry
/// Default canvas height driving the offscreen buffer size
pub const DEFAULT_CANVAS_HEIGHT: u32 = 400;

/// Offscreen buffer side as a fraction of the canvas height
pub const BUFFER_SCALE: f64 = 0.4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed offscreen buffer side in pixels
pub const MAX_BUFFER_SIDE: usize = 8192;

/// Maximum allowed display side in pixels
pub const MAX_WINDOW_SIDE: u32 = 16_384;

/// Default display width in pixels
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;

/// Default display height in pixels
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

/// Horizontal gap between the two figures as a fraction of the display width
pub const FIGURE_GAP_RATIO: f64 = 0.025;

/// Vertical lift of both figures as a fraction of the display height
pub const FIGURE_LIFT_RATIO: f64 = 0.15;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to colored logo filenames
pub const LOGO_SUFFIX: &str = "_logo";
/// Suffix added to silhouette filenames
pub const SILHOUETTE_SUFFIX: &str = "_silhouette";
/// Source image extensions picked up when rendering a directory
pub const SOURCE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

// Logging
/// Default log level filter
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Pattern used by the console appender
pub const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Immutable generator configuration, built once and shared by every composition
#[derive(Debug, Clone, PartialEq)]
pub struct LogoConfig {
    /// Palette after the startup shuffle
    pub palette: Palette,
    /// Tiles per buffer side
    pub grid_size: usize,
    /// Gray step per layer
    pub base_intensity: u8,
    /// Background color
    pub background: Color,
    /// Canvas height; the buffer side is `BUFFER_SCALE * canvas_height`
    pub canvas_height: u32,
    /// Display size (width, height)
    pub window: (u32, u32),
    /// Re-derive the palette order from each seed instead of keeping the startup order
    pub reshuffle_per_seed: bool,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default().shuffled(DEFAULT_SHUFFLE_BIAS),
            grid_size: DEFAULT_GRID_SIZE,
            base_intensity: BASE_INTENSITY,
            background: BACKGROUND_COLOR,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            window: (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
            reshuffle_per_seed: false,
        }
    }
}

impl LogoConfig {
    /// Validate a configuration before the first composition
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid size is zero or exceeds `MAX_GRID_SIZE`
    /// - The derived buffer side is zero or exceeds `MAX_BUFFER_SIDE`
    /// - The buffer side is smaller than the grid size
    /// - A display dimension is zero or exceeds `MAX_WINDOW_SIDE`
    pub fn validated(self) -> Result<Self> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "grid",
                &self.grid_size,
                &format!("must be between 1 and {MAX_GRID_SIZE}"),
            ));
        }

        let side = self.buffer_side();
        if side == 0 || side > MAX_BUFFER_SIDE {
            return Err(invalid_parameter(
                "canvas-height",
                &self.canvas_height,
                &format!("buffer side {side} must be between 1 and {MAX_BUFFER_SIDE}"),
            ));
        }

        if side < self.grid_size {
            return Err(invalid_parameter(
                "grid",
                &self.grid_size,
                &format!("cannot split a {side}px buffer into that many tiles"),
            ));
        }

        let (width, height) = self.window;
        if width == 0 || height == 0 || width > MAX_WINDOW_SIDE || height > MAX_WINDOW_SIDE {
            return Err(invalid_parameter(
                "window",
                &format!("{width}x{height}"),
                &format!("display dimensions must be between 1 and {MAX_WINDOW_SIDE}"),
            ));
        }

        Ok(self)
    }

    /// Side length in pixels of the square offscreen buffer
    pub fn buffer_side(&self) -> usize {
        (BUFFER_SCALE * f64::from(self.canvas_height)).round() as usize
    }
}
