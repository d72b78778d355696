//! Four-fold rotational placement of the offscreen buffer on the display canvas
//!
//! A figure is four copies of the buffer rotated by 0°, 90°, 180° and 270°,
//! each with one corner on a shared pivot. The silhouette figure sits left of
//! the display centre and the colored figure right of it.

use image::RgbImage;
use image::imageops::{replace, rotate90, rotate180, rotate270};

use crate::io::configuration::{BUFFER_SCALE, FIGURE_GAP_RATIO, FIGURE_LIFT_RATIO, LogoConfig};
use crate::io::error::Result;
use crate::render::buffer::try_rgb_image;

/// Canvas positions of both figure pivots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLayout {
    /// Display size (width, height)
    pub window: (u32, u32),
    /// Buffer side in pixels
    pub buffer_side: usize,
    /// Pivot of the silhouette figure
    pub silhouette_pivot: [i64; 2],
    /// Pivot of the colored figure
    pub colored_pivot: [i64; 2],
}

impl DisplayLayout {
    /// Derive pivots from the display size and canvas height
    pub fn new(config: &LogoConfig) -> Self {
        let (width, height) = config.window;
        let side = config.buffer_side() as f64;
        let width_f = f64::from(width);
        let height_f = f64::from(height);
        let gap = FIGURE_GAP_RATIO * width_f;
        // Offset by two unrounded buffer sides so both figures straddle the centre
        let span = 2.0 * BUFFER_SCALE * f64::from(config.canvas_height);

        let pivot_y = side + height_f / 2.0 - FIGURE_LIFT_RATIO * height_f;
        let silhouette_x = side + width_f / 2.0 - span - gap;
        let colored_x = side + width_f / 2.0 + gap;

        Self {
            window: config.window,
            buffer_side: config.buffer_side(),
            silhouette_pivot: [silhouette_x.round() as i64, pivot_y.round() as i64],
            colored_pivot: [colored_x.round() as i64, pivot_y.round() as i64],
        }
    }
}

/// Both figures and the display canvas they were placed on
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedLogo {
    /// Four-fold figure of the unquantized buffer
    pub silhouette: RgbImage,
    /// Four-fold figure of the quantized buffer
    pub colored: RgbImage,
    /// Full display canvas with both figures
    pub canvas: RgbImage,
    /// Pivot positions used for the canvas
    pub layout: DisplayLayout,
}

/// Arrange four rotated copies of a square tile around the figure centre
///
/// The result is twice the tile side. The unrotated copy occupies the
/// bottom-right quadrant; each further clockwise quarter turn moves one
/// quadrant clockwise, so the figure is invariant under quarter turns about
/// its centre.
pub fn four_fold(tile: &RgbImage) -> RgbImage {
    let side = i64::from(tile.width());
    let mut figure = RgbImage::new(tile.width() * 2, tile.height() * 2);

    replace(&mut figure, tile, side, side);
    replace(&mut figure, &rotate90(tile), 0, side);
    replace(&mut figure, &rotate180(tile), 0, 0);
    replace(&mut figure, &rotate270(tile), side, 0);

    figure
}

/// Build both figures and place them on a background-filled display canvas
///
/// Figure parts outside the display are clipped.
///
/// # Errors
///
/// Returns an error if the display canvas cannot be allocated.
pub fn compose_display(
    silhouette_tile: &RgbImage,
    colored_tile: &RgbImage,
    config: &LogoConfig,
) -> Result<ComposedLogo> {
    let layout = DisplayLayout::new(config);
    let silhouette = four_fold(silhouette_tile);
    let colored = four_fold(colored_tile);

    let (width, height) = layout.window;
    let mut canvas = try_rgb_image(
        width as usize,
        height as usize,
        config.background,
        "display canvas",
    )?;

    let half = i64::from(silhouette_tile.width());
    let [sx, sy] = layout.silhouette_pivot;
    let [cx, cy] = layout.colored_pivot;
    replace(&mut canvas, &silhouette, sx - half, sy - half);
    replace(&mut canvas, &colored, cx - half, cy - half);

    Ok(ComposedLogo {
        silhouette,
        colored,
        canvas,
        layout,
    })
}
