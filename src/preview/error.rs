use std::path::PathBuf;

/// Errors that can occur while loading a preview image or listing candidates.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A directory could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The directory that failed.
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file could not be opened or decoded as an image.
    #[error("cannot load image {path}: {source}")]
    Decode {
        /// The file that failed.
        path: PathBuf,
        source: image::ImageError,
    },
}
