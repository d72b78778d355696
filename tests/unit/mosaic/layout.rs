//! Tests for four-fold figures and display placement

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use image2logo::io::configuration::{BACKGROUND_COLOR, LogoConfig};
    use image2logo::mosaic::layout::{DisplayLayout, compose_display, four_fold};

    // Every pixel gets a distinct color so misplaced quadrants show up
    fn numbered_tile(side: u32) -> RgbImage {
        RgbImage::from_fn(side, side, |x, y| Rgb([x as u8, y as u8, 200]))
    }

    // Tests the figure is unchanged by a clockwise quarter turn
    // Verified by swapping the 90 and 270 degree quadrants
    #[test]
    fn test_four_fold_symmetry() {
        let figure = four_fold(&numbered_tile(5));
        let n = figure.width();
        assert_eq!(figure.dimensions(), (10, 10));

        for y in 0..n {
            for x in 0..n {
                assert_eq!(
                    figure.get_pixel(n - 1 - y, x),
                    figure.get_pixel(x, y),
                    "pixel ({x}, {y})"
                );
            }
        }
    }

    // Tests the unrotated copy sits in the bottom-right quadrant
    // Verified by placing the unrotated copy top-left
    #[test]
    fn test_four_fold_unrotated_quadrant() {
        let tile = numbered_tile(4);
        let figure = four_fold(&tile);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(figure.get_pixel(x + 4, y + 4), tile.get_pixel(x, y));
            }
        }
        // the tile's top-left corner meets the pivot from every quadrant
        assert_eq!(figure.get_pixel(3, 3), tile.get_pixel(0, 0));
        assert_eq!(figure.get_pixel(4, 3), tile.get_pixel(0, 0));
        assert_eq!(figure.get_pixel(3, 4), tile.get_pixel(0, 0));
    }

    // Tests pivot positions for the default display
    // Verified by omitting the horizontal gap
    #[test]
    fn test_default_pivots() {
        let layout = DisplayLayout::new(&LogoConfig::default());
        assert_eq!(layout.buffer_side, 160);
        assert_eq!(layout.silhouette_pivot, [448, 412]);
        assert_eq!(layout.colored_pivot, [832, 412]);
    }

    // Tests both figures land on the canvas around their pivots
    // Verified by anchoring figures at their top-left corner
    #[test]
    fn test_compose_display_placement() {
        let config = LogoConfig::default();
        let silhouette = RgbImage::from_pixel(160, 160, Rgb([90, 90, 90]));
        let colored = numbered_tile(160);
        let logo = compose_display(&silhouette, &colored, &config).expect("canvas");

        assert_eq!(logo.canvas.dimensions(), (1280, 720));
        assert_eq!(logo.colored.dimensions(), (320, 320));
        assert_eq!(logo.canvas.get_pixel(832, 412), colored.get_pixel(0, 0));
        assert_eq!(logo.canvas.get_pixel(448, 412), &Rgb([90, 90, 90]));
        assert_eq!(logo.canvas.get_pixel(0, 0), &BACKGROUND_COLOR.to_rgb());
        assert_eq!(logo.canvas.get_pixel(640, 412), &BACKGROUND_COLOR.to_rgb());
    }

    // Tests figures larger than the display are clipped
    // Verified by sizing the canvas from the figures
    #[test]
    fn test_compose_display_clips() {
        let config = LogoConfig {
            window: (100, 60),
            ..LogoConfig::default()
        };
        let tile = numbered_tile(160);
        let logo = compose_display(&tile, &tile, &config).expect("canvas");
        assert_eq!(logo.canvas.dimensions(), (100, 60));
    }
}
