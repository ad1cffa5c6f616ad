//! Form state controller: owns the draft and the derived UI state, and is the
//! only way either of them changes.

use std::collections::BTreeSet;
use std::path::Path;

use crate::model::{
    CommentDraft, Field, FieldUpdate, LikeEvent, LikeLedger, ValidationError, ValidationFailure,
    parse_like_count, validate,
};
use crate::preview::{DEFAULT_THUMBNAIL_SIZE, PreviewError, PreviewImage};

/// Holds a [`CommentDraft`] plus the preview handle, like ledger and last
/// validation result, and keeps them consistent across edits.
#[derive(Debug)]
pub struct FormController {
    draft: CommentDraft,
    likes: LikeLedger,
    preview: Option<PreviewImage>,
    validation: Option<ValidationFailure>,
    edited: BTreeSet<Field>,
    thumbnail_size: u32,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Creates a controller with an empty draft and no preview.
    pub fn new() -> Self {
        Self::with_thumbnail_size(DEFAULT_THUMBNAIL_SIZE)
    }

    /// Creates a controller whose previews are scaled to `thumbnail_size` pixels.
    pub fn with_thumbnail_size(thumbnail_size: u32) -> Self {
        Self {
            draft: CommentDraft::default(),
            likes: LikeLedger::new(),
            preview: None,
            validation: None,
            edited: BTreeSet::new(),
            thumbnail_size,
        }
    }

    /// Overwrites one field. Never validates.
    ///
    /// Count and liked updates go through the like ledger, so setting
    /// `Liked` to a new value applies the same delta as [`toggle_like`](Self::toggle_like).
    pub fn set_field(&mut self, update: FieldUpdate) {
        let field = update.field();
        match update {
            FieldUpdate::LikeCount(n) => self.record_like(LikeEvent::Set(n)),
            FieldUpdate::Liked(liked) => {
                if liked != self.likes.liked() {
                    self.record_like(if liked {
                        LikeEvent::Liked
                    } else {
                        LikeEvent::Unliked
                    });
                }
            }
            text => self.draft = std::mem::take(&mut self.draft).apply(text),
        }
        self.edited.insert(field);
    }

    /// Flips the liked flag and adjusts the count. Returns the new flag.
    pub fn toggle_like(&mut self) -> bool {
        let liked = !self.likes.liked();
        self.set_field(FieldUpdate::Liked(liked));
        liked
    }

    /// Parses `input` as the like count (`0` when it is not a number) and
    /// overwrites the count. Returns the stored value.
    pub fn set_like_count_direct(&mut self, input: &str) -> i64 {
        let count = parse_like_count(input);
        self.set_field(FieldUpdate::LikeCount(count));
        count
    }

    /// Loads `path` as the preview, releasing any previous preview.
    ///
    /// On failure the current preview is left in place.
    pub fn select_image(&mut self, path: &Path) -> Result<(), PreviewError> {
        match PreviewImage::open(path, self.thumbnail_size) {
            Ok(image) => {
                self.preview = Some(image);
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}");
                Err(e)
            }
        }
    }

    /// Drops the current preview, if any.
    pub fn clear_image(&mut self) {
        self.preview = None;
    }

    /// Validates the whole draft.
    ///
    /// On success the stored errors are cleared. On failure the full error
    /// set replaces whatever the previous attempt stored. The draft itself
    /// is never modified.
    pub fn validate_and_submit(&mut self) -> Result<(), ValidationFailure> {
        match validate(&self.draft) {
            Ok(()) => {
                self.validation = None;
                log::info!(
                    "comment is valid: {}",
                    serde_json::to_string(&self.draft).unwrap_or_default()
                );
                Ok(())
            }
            Err(failure) => {
                log::warn!("{failure}");
                self.validation = Some(failure.clone());
                Err(failure)
            }
        }
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    /// Returns the like toggle, which always equals `draft().liked`.
    pub fn like_toggle(&self) -> bool {
        self.draft.liked
    }

    /// Returns the like count shown on the card.
    pub fn like_count(&self) -> i64 {
        self.draft.like_count
    }

    /// Returns the like ledger.
    pub fn likes(&self) -> &LikeLedger {
        &self.likes
    }

    /// Returns the current preview, if an image has been selected.
    pub fn preview(&self) -> Option<&PreviewImage> {
        self.preview.as_ref()
    }

    /// Returns the failure from the last submit, or `None` if it succeeded
    /// or nothing has been submitted.
    pub fn validation(&self) -> Option<&ValidationFailure> {
        self.validation.as_ref()
    }

    /// Returns the stored error for `field`, if any.
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.validation.as_ref().and_then(|v| v.error_for(field))
    }

    /// Returns `true` once `field` has been changed.
    pub fn is_edited(&self, field: Field) -> bool {
        self.edited.contains(&field)
    }

    fn record_like(&mut self, event: LikeEvent) {
        log::debug!("like event {event:?}");
        self.likes.record(event);
        self.draft = std::mem::take(&mut self.draft)
            .apply(FieldUpdate::LikeCount(self.likes.count()))
            .apply(FieldUpdate::Liked(self.likes.liked()));
    }
}
