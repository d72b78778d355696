//! PNG export of composed figures and display canvases

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::io::configuration::{LOGO_SUFFIX, SILHOUETTE_SUFFIX};
use crate::io::error::{LogoError, Result};
use crate::mosaic::composer::MosaicState;

/// Paths written for one mosaic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedLogo {
    /// Colored four-fold figure
    pub logo: PathBuf,
    /// Unquantized four-fold figure
    pub silhouette: PathBuf,
    /// Full display canvas, when requested
    pub display: Option<PathBuf>,
}

/// Save an image as PNG, creating parent directories as needed
///
/// The image is written to a sibling temporary file and renamed into place,
/// so readers of `output_path` never observe a partial file.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
/// - The temporary file cannot be renamed
pub fn export_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| LogoError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let staging_path = output_path.with_extension("png.partial");
    image
        .save_with_format(&staging_path, image::ImageFormat::Png)
        .map_err(|e| LogoError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    std::fs::rename(&staging_path, output_path).map_err(|e| LogoError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "rename",
        source: e,
    })?;

    Ok(())
}

/// Write the colored and silhouette figures (and optionally the display canvas)
///
/// Files are named `<stem>_logo.png`, `<stem>_silhouette.png` and
/// `<stem>_display.png` inside `directory`.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn export_logo(
    state: &MosaicState,
    directory: &Path,
    stem: &str,
    include_display: bool,
) -> Result<ExportedLogo> {
    let logo = directory.join(format!("{stem}{LOGO_SUFFIX}.png"));
    let silhouette = directory.join(format!("{stem}{SILHOUETTE_SUFFIX}.png"));

    export_png(&state.logo.colored, &logo)?;
    export_png(&state.logo.silhouette, &silhouette)?;

    let display = if include_display {
        let path = directory.join(format!("{stem}_display.png"));
        export_png(&state.logo.canvas, &path)?;
        Some(path)
    } else {
        None
    };

    Ok(ExportedLogo {
        logo,
        silhouette,
        display,
    })
}
