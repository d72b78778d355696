//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use image2logo::LogoError;
    use image2logo::io::error::{invalid_parameter, resource_exhaustion};
    use image2logo::io::events::SeedEvent;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests a failed source read names the path and keeps the IO cause
    // Verified by returning None from source()
    #[test]
    fn test_file_system_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = LogoError::FileSystem {
            path: "/tmp/photo.jpg".into(),
            operation: "read source",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read source"));
        assert!(error.to_string().contains("/tmp/photo.jpg"));
    }

    // Tests ResourceExhaustion names the surface and size
    // Verified by omitting dimensions from message
    #[test]
    fn test_resource_exhaustion_error() {
        let error = resource_exhaustion("display canvas", 1280, 720);

        let message = error.to_string();
        assert!(message.contains("display canvas"));
        assert!(message.contains("1280x720"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("grid", &0, &"must be between 1 and 64");

        let message = error.to_string();
        assert!(message.contains("grid"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be between 1 and 64"));
        assert!(error.source().is_none());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = LogoError::ImageExport {
            path: PathBuf::from("/readonly/photo_logo.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/readonly/photo_logo.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests EventDecode carries the line number and JSON cause
    // Verified by dropping the line from the message
    #[test]
    fn test_event_decode_error() {
        let error = SeedEvent::from_json("{\"detected\":", 12).expect_err("truncated");

        assert!(matches!(error, LogoError::EventDecode { line: 12, .. }));
        assert!(error.to_string().contains("line 12"));
        assert!(error.source().is_some());
    }

    // Tests bare IO errors convert into file system errors
    // Verified by mapping IO errors to InvalidParameter
    #[test]
    fn test_from_io_error() {
        let error = LogoError::from(std::io::Error::other("pipe closed"));
        assert!(matches!(
            &error,
            LogoError::FileSystem { path, operation: "read event", .. }
                if path == &PathBuf::from("<event stream>")
        ));
        assert!(error.to_string().contains("pipe closed"));
    }
}
