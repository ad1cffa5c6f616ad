use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::error::PreviewError;

/// Extensions offered by the image picker.
pub const ACCEPTED_EXTENSIONS: &str = ".jpg, .jpeg, .png";

static IMAGE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(jpe?g|png)$").expect("valid hardcoded regex"));

/// Returns `true` if the file name carries an accepted image extension.
///
/// This is only a filter hint for the picker; [`PreviewImage::open`](super::PreviewImage::open)
/// decodes whatever it is given.
pub fn has_image_extension(name: &str) -> bool {
    IMAGE_NAME_RE.is_match(name)
}

/// What a picker entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    /// The parent directory (`..`).
    Parent,
    /// A sub-directory.
    Dir,
    /// A file with an accepted image extension.
    Image,
}

/// A single row in the image picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub kind: EntryKind,
    pub name: String,
    pub path: PathBuf,
}

/// Lists `dir` for the picker: `..` (if there is a parent), then
/// sub-directories, then image files, each group sorted by name.
///
/// Hidden entries (leading `.`) are skipped. Entries that cannot be
/// inspected are skipped rather than failing the whole listing.
pub fn list_images(dir: &Path) -> Result<Vec<PickerEntry>, PreviewError> {
    let io_err = |source| PreviewError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let Ok(entry) = entry else { continue };
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        let kind = if path.is_dir() {
            EntryKind::Dir
        } else if has_image_extension(&name) {
            EntryKind::Image
        } else {
            continue;
        };
        entries.push(PickerEntry { kind, name, path });
    }
    entries.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.name.cmp(&b.name)));

    if let Some(parent) = dir.parent() {
        entries.insert(
            0,
            PickerEntry {
                kind: EntryKind::Parent,
                name: "..".to_string(),
                path: parent.to_path_buf(),
            },
        );
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_accepts_jpg_jpeg_png() {
        assert!(has_image_extension("a.jpg"));
        assert!(has_image_extension("a.jpeg"));
        assert!(has_image_extension("a.png"));
        assert!(has_image_extension("A.JPG"));
        assert!(has_image_extension("photo.Png"));
    }

    #[test]
    fn extension_filter_rejects_others() {
        assert!(!has_image_extension("a.gif"));
        assert!(!has_image_extension("a.svg"));
        assert!(!has_image_extension("png"));
        assert!(!has_image_extension("a.png.txt"));
        assert!(!has_image_extension("a.jpgx"));
    }

    #[test]
    fn lists_dirs_then_images_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("b.png"), b"").unwrap();
        fs::write(dir.path().join("a.jpg"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::write(dir.path().join(".hidden.png"), b"").unwrap();

        let entries = list_images(dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "alpha", "zeta", "a.jpg", "b.png"]);
        assert_eq!(entries[0].kind, EntryKind::Parent);
        assert_eq!(entries[1].kind, EntryKind::Dir);
        assert_eq!(entries[3].kind, EntryKind::Image);
        assert_eq!(entries[3].path, dir.path().join("a.jpg"));
    }

    #[test]
    fn missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_images(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, PreviewError::Io { .. }));
    }
}
