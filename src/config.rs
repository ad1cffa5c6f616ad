//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::preview::DEFAULT_THUMBNAIL_SIZE;

/// Startup options for the comment preview form.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "comment-preview", version, about)]
pub struct Config {
    /// Image to load into the preview card on startup.
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Directory the image picker opens in.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub picker_dir: PathBuf,

    /// Log file. Defaults to `comment-preview.log` in the user cache directory.
    #[arg(long, value_name = "PATH", env = "COMMENT_PREVIEW_LOG")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,

    /// Longest edge of the preview thumbnail, in pixels.
    #[arg(
        long,
        value_name = "PX",
        default_value_t = DEFAULT_THUMBNAIL_SIZE,
        value_parser = clap::value_parser!(u32).range(2..=64),
    )]
    pub thumbnail_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image: None,
            picker_dir: PathBuf::from("."),
            log_file: None,
            log_level: "info".to_string(),
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}
