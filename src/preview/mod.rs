//! Image preview: decoding a chosen file into a thumbnail handle and
//! listing picker candidates.

mod error;
mod listing;
mod thumbnail;

pub use error::PreviewError;
pub use listing::{ACCEPTED_EXTENSIONS, EntryKind, PickerEntry, has_image_extension, list_images};
pub use thumbnail::{DEFAULT_THUMBNAIL_SIZE, PreviewImage};
