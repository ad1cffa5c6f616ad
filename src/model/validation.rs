use thiserror::Error;

use super::draft::{CommentDraft, Field};

/// Minimum username length, in UTF-16 code units.
pub const MIN_USERNAME_LEN: usize = 2;
/// Minimum comment length, in UTF-16 code units.
pub const MIN_COMMENT_LEN: usize = 5;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username is too short")]
    UsernameTooShort,
    #[error("Comment is too short")]
    CommentTooShort,
}

/// A validation error addressed to the field it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

impl FieldError {
    /// Returns the user-facing message for this error.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// The aggregate result of a failed validation run.
///
/// Holds at most one error per field, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationFailure {
    errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Returns all field errors.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the error for `field`, if that field failed.
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.error)
    }

    /// Returns the message for `field`, if that field failed.
    pub fn message_for(&self, field: Field) -> Option<String> {
        self.error_for(field).map(ToString::to_string)
    }

    /// Returns the number of failed fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false` for a failure produced by [`validate`].
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A field-level rule: inspects the draft and reports at most one error.
pub type Rule = fn(&CommentDraft) -> Option<FieldError>;

// The count and the liked flag are typed `i64` and `bool`, so the numeric
// and boolean checks hold by construction and need no rule.
static RULES: &[Rule] = &[username_rule, comment_rule];

/// Runs every rule against the draft and aggregates the failures.
pub fn validate(draft: &CommentDraft) -> Result<(), ValidationFailure> {
    let errors: Vec<FieldError> = RULES.iter().filter_map(|rule| rule(draft)).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { errors })
    }
}

/// Length as a browser counts it: characters outside the BMP count twice.
fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Username must be at least [`MIN_USERNAME_LEN`] units long.
pub fn username_rule(draft: &CommentDraft) -> Option<FieldError> {
    (text_len(&draft.username) < MIN_USERNAME_LEN).then_some(FieldError {
        field: Field::Username,
        error: ValidationError::UsernameTooShort,
    })
}

/// Comment must be at least [`MIN_COMMENT_LEN`] units long.
pub fn comment_rule(draft: &CommentDraft) -> Option<FieldError> {
    (text_len(&draft.comment) < MIN_COMMENT_LEN).then_some(FieldError {
        field: Field::Comment,
        error: ValidationError::CommentTooShort,
    })
}
