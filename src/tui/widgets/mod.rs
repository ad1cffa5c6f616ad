//! Reusable TUI widgets.

pub mod form;
pub mod preview_card;
pub mod status_bar;

pub use form::{FieldKind, Form, FormField, draw_form};
pub use preview_card::{PreviewCard, Thumbnail};
pub use status_bar::{Status, StatusBarContext, draw_status_bar};
