//! Square offscreen buffer with an additive intensity plane and a flat color surface
//!
//! Layers are drawn in gray and accumulate additively on the intensity plane.
//! Quantization reads that plane and writes palette colors to the color
//! surface, so the unquantized silhouette stays available alongside the
//! colored result and re-quantizing never drifts.

use image::RgbImage;
use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter, resource_exhaustion};
use crate::render::palette::{Color, Palette};

/// Offscreen drawing surface recreated for every seed
#[derive(Debug, Clone, PartialEq)]
pub struct OffscreenBuffer {
    /// Accumulated gray intensity (indexed by `row`, `col`)
    intensity: Array2<u8>,
    /// Flat colors written by quantization
    colors: RgbImage,
    background: Color,
    quantized: bool,
}

impl OffscreenBuffer {
    /// Allocate a buffer cleared to the background color
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The side length is zero
    /// - Either surface cannot be allocated
    pub fn new(side: usize, background: Color) -> Result<Self> {
        if side == 0 {
            return Err(invalid_parameter(
                "buffer side",
                &side,
                &"offscreen buffer must be at least one pixel wide",
            ));
        }

        let pixel_count = side
            .checked_mul(side)
            .ok_or_else(|| resource_exhaustion("intensity plane", side, side))?;
        let plane = try_filled(pixel_count, background.r)
            .ok_or_else(|| resource_exhaustion("intensity plane", side, side))?;
        let intensity = Array2::from_shape_vec((side, side), plane)
            .map_err(|error| invalid_parameter("buffer side", &side, &error))?;

        let colors = try_rgb_image(side, side, background, "color surface")?;

        Ok(Self {
            intensity,
            colors,
            background,
            quantized: false,
        })
    }

    /// Side length in pixels
    pub fn side(&self) -> usize {
        self.intensity.nrows()
    }

    /// Background color the buffer was cleared to
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Whether the color surface holds quantized palette colors
    pub const fn is_quantized(&self) -> bool {
        self.quantized
    }

    /// Intensity at a pixel, `None` outside the buffer
    pub fn intensity(&self, x: usize, y: usize) -> Option<u8> {
        self.intensity.get((y, x)).copied()
    }

    /// The whole intensity plane (indexed by `row`, `col`)
    pub const fn intensity_plane(&self) -> &Array2<u8> {
        &self.intensity
    }

    /// Additively blend `amount` into a pixel, saturating at 255
    ///
    /// Out-of-range coordinates are ignored.
    pub fn add_intensity(&mut self, x: usize, y: usize, amount: u8) {
        if let Some(value) = self.intensity.get_mut((y, x)) {
            *value = value.saturating_add(amount);
        }
    }

    /// Color at a pixel of the color surface, `None` outside the buffer
    pub fn color(&self, x: usize, y: usize) -> Option<Color> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.colors
            .get_pixel_checked(x, y)
            .map(|pixel| Color::new(pixel.0[0], pixel.0[1], pixel.0[2]))
    }

    /// Rewrite every pixel of the color surface with its flat palette color
    ///
    /// Pixels below the lowest threshold keep their gray intensity. The
    /// classification reads the intensity plane only, so repeated calls
    /// produce the same surface.
    pub fn quantize(&mut self, palette: &Palette) {
        for ((row, col), &level) in self.intensity.indexed_iter() {
            let color = palette.quantize(level).unwrap_or_else(|| Color::gray(level));
            self.colors
                .put_pixel(col as u32, row as u32, color.to_rgb());
        }
        self.quantized = true;
    }

    /// The unquantized buffer as a gray image
    pub fn silhouette_image(&self) -> RgbImage {
        let side = self.side() as u32;
        RgbImage::from_fn(side, side, |x, y| {
            let level = self
                .intensity
                .get((y as usize, x as usize))
                .copied()
                .unwrap_or(self.background.r);
            Color::gray(level).to_rgb()
        })
    }

    /// The color surface
    pub const fn colored_image(&self) -> &RgbImage {
        &self.colors
    }
}

/// Allocate an image filled with one color, reporting allocation failure as an error
///
/// # Errors
///
/// Returns an error if the pixel storage cannot be reserved or the dimensions
/// do not fit the image crate's `u32` coordinates.
pub fn try_rgb_image(
    width: usize,
    height: usize,
    fill: Color,
    surface: &'static str,
) -> Result<RgbImage> {
    let channel_count = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| resource_exhaustion(surface, width, height))?;
    let mut raw = try_filled(channel_count, 0_u8)
        .ok_or_else(|| resource_exhaustion(surface, width, height))?;
    for pixel in raw.chunks_exact_mut(3) {
        pixel.copy_from_slice(&[fill.r, fill.g, fill.b]);
    }

    let width_u32 =
        u32::try_from(width).map_err(|error| invalid_parameter("image width", &width, &error))?;
    let height_u32 = u32::try_from(height)
        .map_err(|error| invalid_parameter("image height", &height, &error))?;
    RgbImage::from_raw(width_u32, height_u32, raw)
        .ok_or_else(|| resource_exhaustion(surface, width, height))
}

// Oversized requests return None instead of aborting the process
fn try_filled<T: Copy>(len: usize, value: T) -> Option<Vec<T>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).ok()?;
    data.resize(len, value);
    Some(data)
}
