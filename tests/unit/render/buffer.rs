//! Tests for the offscreen buffer surfaces

#[cfg(test)]
mod tests {
    use image2logo::LogoError;
    use image2logo::io::configuration::BACKGROUND_COLOR;
    use image2logo::render::buffer::{OffscreenBuffer, try_rgb_image};
    use image2logo::render::palette::{Color, Palette};

    fn buffer(side: usize) -> OffscreenBuffer {
        OffscreenBuffer::new(side, BACKGROUND_COLOR).expect("small buffer")
    }

    // Tests a fresh buffer is cleared to the background on both surfaces
    // Verified by zero-initializing the intensity plane
    #[test]
    fn test_new_buffer_is_background() {
        let buffer = buffer(4);
        assert_eq!(buffer.side(), 4);
        assert!(!buffer.is_quantized());
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(buffer.intensity(x, y), Some(BACKGROUND_COLOR.r));
                assert_eq!(buffer.color(x, y), Some(BACKGROUND_COLOR));
            }
        }
        assert_eq!(buffer.intensity(4, 0), None);
        assert_eq!(buffer.color(0, 4), None);
    }

    // Tests zero-sized buffers are refused
    // Verified by allowing empty planes
    #[test]
    fn test_zero_side_rejected() {
        assert!(matches!(
            OffscreenBuffer::new(0, BACKGROUND_COLOR),
            Err(LogoError::InvalidParameter { .. })
        ));
    }

    // Tests additive blending saturates and ignores out-of-range pixels
    // Verified by using wrapping addition
    #[test]
    fn test_add_intensity() {
        let mut buffer = buffer(3);
        buffer.add_intensity(1, 2, 84);
        assert_eq!(buffer.intensity(1, 2), Some(115));
        buffer.add_intensity(1, 2, 200);
        assert_eq!(buffer.intensity(1, 2), Some(255));
        buffer.add_intensity(9, 9, 50);
        assert_eq!(buffer.intensity(2, 1), Some(31));
    }

    // Tests quantization flattens levels and leaves dim pixels gray
    // Verified by classifying dim pixels into the last slot
    #[test]
    fn test_quantize() {
        let palette = Palette::default();
        let mut buffer = buffer(2);
        buffer.add_intensity(1, 0, 84);
        buffer.add_intensity(0, 1, 168);
        buffer.add_intensity(1, 1, 252);
        buffer.quantize(&palette);

        let [first, second, third] = *palette.colors();
        assert!(buffer.is_quantized());
        assert_eq!(buffer.color(0, 0), Some(BACKGROUND_COLOR));
        assert_eq!(buffer.color(1, 0), Some(third));
        assert_eq!(buffer.color(0, 1), Some(second));
        assert_eq!(buffer.color(1, 1), Some(first));
    }

    // Tests quantizing twice produces the same surface
    // Verified by classifying from the color surface instead of the intensity plane
    #[test]
    fn test_quantize_idempotent() {
        let palette = Palette::default();
        let mut buffer = buffer(16);
        for i in 0..16 {
            buffer.add_intensity(i, i, 84);
            buffer.add_intensity(i, 15 - i, 168);
            buffer.add_intensity(i, 0, 240);
        }

        buffer.quantize(&palette);
        let once = buffer.colored_image().clone();
        buffer.quantize(&palette);
        assert_eq!(buffer.colored_image(), &once);
    }

    // Tests the silhouette keeps the gray intensities after quantization
    // Verified by reading the silhouette from the color surface
    #[test]
    fn test_silhouette_survives_quantization() {
        let mut buffer = buffer(2);
        buffer.add_intensity(0, 0, 168);
        buffer.quantize(&Palette::default());

        let silhouette = buffer.silhouette_image();
        assert_eq!(silhouette.dimensions(), (2, 2));
        assert_eq!(silhouette.get_pixel(0, 0), &Color::gray(199).to_rgb());
        assert_eq!(silhouette.get_pixel(1, 1), &BACKGROUND_COLOR.to_rgb());
    }

    // Tests impossible image sizes surface as resource exhaustion
    // Verified by allocating without overflow checks
    #[test]
    fn test_try_rgb_image_exhaustion() {
        let result = try_rgb_image(usize::MAX / 2, 1, BACKGROUND_COLOR, "test surface");
        assert!(matches!(
            result,
            Err(LogoError::ResourceExhaustion {
                surface: "test surface",
                ..
            })
        ));
    }

    // Tests filled images carry the fill color everywhere
    // Verified by skipping the fill loop
    #[test]
    fn test_try_rgb_image_fill() {
        let fill = Color::new(1, 2, 3);
        let image = try_rgb_image(3, 2, fill, "test surface").expect("tiny image");
        assert_eq!(image.dimensions(), (3, 2));
        assert!(image.pixels().all(|pixel| pixel == &fill.to_rgb()));
    }
}
