//! TUI screen implementations.

pub mod compose;
pub mod help;
pub mod image_picker;

pub use compose::{ComposeState, draw_compose};
pub use help::{HelpState, draw_help};
pub use image_picker::{ImagePickerState, draw_image_picker};
