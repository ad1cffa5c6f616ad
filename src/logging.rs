//! File-backed logging. The terminal belongs to the UI, so records go to a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};

use crate::tui::AppError;

/// Returns the default log path inside the user cache directory.
pub fn default_log_path() -> Result<PathBuf, AppError> {
    let cache_dir = dirs::cache_dir().ok_or(AppError::NoCacheDir)?;
    Ok(cache_dir.join("comment-preview").join("comment-preview.log"))
}

/// Installs the global logger, appending to `path`.
///
/// `default_filter` applies when `RUST_LOG` is unset.
pub fn init(path: &Path, default_filter: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    log::info!("logging to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_app_dir() {
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with("comment-preview/comment-preview.log"));
        }
    }

    #[test]
    fn init_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cp.log");
        // Another test may have installed the logger already; the file is
        // created before the logger is set either way.
        let _ = init(&path, "info");
        assert!(path.exists());
    }
}
