mod draft;
mod like;
mod validation;

pub use draft::{CommentDraft, Field, FieldUpdate};
pub use like::{HISTORY_LIMIT, LikeEvent, LikeLedger, parse_like_count};
pub use validation::{
    FieldError, MIN_COMMENT_LEN, MIN_USERNAME_LEN, Rule, ValidationError, ValidationFailure,
    comment_rule, username_rule, validate,
};
