//! Tests for PNG export of figures and display canvases

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use image2logo::io::configuration::LogoConfig;
    use image2logo::io::image::{export_logo, export_png};
    use image2logo::mosaic::composer::MosaicComposer;
    use tempfile::TempDir;

    // Tests PNG export writes a readable file and no staging leftovers
    // Verified by disabling the rename step
    #[test]
    fn test_export_png_creates_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("nested").join("figure.png");
        let image = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 60, y as u8 * 80, 7]));

        export_png(&image, &path).expect("export");

        let read_back = image::open(&path).expect("png").to_rgb8();
        assert_eq!(read_back, image);
        assert!(!path.with_extension("png.partial").exists());
    }

    // Tests unwritable destinations are reported
    // Verified by ignoring the save result
    #[test]
    fn test_export_png_unwritable() {
        let temp_dir = TempDir::new().expect("temp dir");
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, "not a directory").expect("write blocker");

        let image = RgbImage::new(1, 1);
        assert!(export_png(&image, &blocker.join("figure.png")).is_err());
    }

    // Tests export_logo writes the figures with their suffixes
    // Verified by swapping the silhouette and colored images
    #[test]
    fn test_export_logo() {
        let temp_dir = TempDir::new().expect("temp dir");
        let config = LogoConfig {
            canvas_height: 40,
            window: (100, 60),
            ..LogoConfig::default()
        };
        let state = MosaicComposer::new(config)
            .expect("config")
            .compose_seed(42)
            .expect("compose");

        let exported = export_logo(&state, temp_dir.path(), "photo", true).expect("export");

        assert_eq!(exported.logo, temp_dir.path().join("photo_logo.png"));
        assert_eq!(
            exported.silhouette,
            temp_dir.path().join("photo_silhouette.png")
        );
        let display = exported.display.expect("display requested");

        let logo = image::open(&exported.logo).expect("png").to_rgb8();
        let silhouette = image::open(&exported.silhouette).expect("png").to_rgb8();
        assert_eq!(logo, state.logo.colored);
        assert_eq!(silhouette, state.logo.silhouette);
        assert_eq!(image::open(display).expect("png").to_rgb8().dimensions(), (100, 60));
    }
}
