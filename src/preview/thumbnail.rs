use std::path::{Path, PathBuf};

use image::RgbImage;

use super::error::PreviewError;

/// Default longest thumbnail edge, in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 16;

/// A decoded, downscaled image held only for on-screen preview.
///
/// The decoded pixels live as long as the handle. Dropping it (by replacing
/// or clearing the preview) releases them.
#[derive(Debug)]
pub struct PreviewImage {
    path: PathBuf,
    pixels: RgbImage,
}

impl PreviewImage {
    /// Decodes `path` and scales it to fit within `max_edge` x `max_edge`,
    /// preserving aspect ratio.
    ///
    /// The format is sniffed from the file contents; the extension is not
    /// checked.
    pub fn open(path: impl AsRef<Path>, max_edge: u32) -> Result<Self, PreviewError> {
        let path = path.as_ref();
        let decoded = image::ImageReader::open(path)
            .map_err(|source| PreviewError::Decode {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(source),
            })?
            .with_guessed_format()
            .map_err(|source| PreviewError::Decode {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(source),
            })?
            .decode()
            .map_err(|source| PreviewError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        let max_edge = max_edge.max(1);
        let pixels = if decoded.width() <= max_edge && decoded.height() <= max_edge {
            decoded.to_rgb8()
        } else {
            decoded.thumbnail(max_edge, max_edge).to_rgb8()
        };
        log::info!(
            "loaded preview {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );
        Ok(Self {
            path: path.to_path_buf(),
            pixels,
        })
    }

    /// Returns the file the preview was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Returns the thumbnail width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Returns the thumbnail height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns the RGB value at `(x, y)`, or `None` outside the thumbnail.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        (x < self.width() && y < self.height()).then(|| self.pixels.get_pixel(x, y).0)
    }
}

impl Drop for PreviewImage {
    fn drop(&mut self) {
        log::debug!("released preview {}", self.path.display());
    }
}
