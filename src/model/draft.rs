use std::fmt;

use serde::{Deserialize, Serialize};

/// Addressable fields of a [`CommentDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Comment,
    LikeCount,
    Liked,
}

static ALL_FIELDS: &[Field] = &[
    Field::Username,
    Field::Comment,
    Field::LikeCount,
    Field::Liked,
];

impl Field {
    /// Returns all fields in form order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Returns the field's key as it appears in the serialized draft.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Comment => "comment",
            Field::LikeCount => "likeCount",
            Field::Liked => "liked",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single-field overwrite applied to a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Username(String),
    Comment(String),
    LikeCount(i64),
    Liked(bool),
}

impl FieldUpdate {
    /// Returns the field this update writes.
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Username(_) => Field::Username,
            FieldUpdate::Comment(_) => Field::Comment,
            FieldUpdate::LikeCount(_) => Field::LikeCount,
            FieldUpdate::Liked(_) => Field::Liked,
        }
    }
}

/// The not-yet-submitted comment record.
///
/// Drafts are values: every edit produces a new draft via [`CommentDraft::apply`]
/// and the old one is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub username: String,
    pub comment: String,
    pub like_count: i64,
    pub liked: bool,
}

impl CommentDraft {
    /// Returns a copy of this draft with one field overwritten.
    #[must_use]
    pub fn apply(self, update: FieldUpdate) -> Self {
        match update {
            FieldUpdate::Username(username) => Self { username, ..self },
            FieldUpdate::Comment(comment) => Self { comment, ..self },
            FieldUpdate::LikeCount(like_count) => Self { like_count, ..self },
            FieldUpdate::Liked(liked) => Self { liked, ..self },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let draft = CommentDraft::default();
        assert_eq!(draft.username, "");
        assert_eq!(draft.comment, "");
        assert_eq!(draft.like_count, 0);
        assert!(!draft.liked);
    }

    #[test]
    fn apply_overwrites_only_target_field() {
        let draft = CommentDraft::default()
            .apply(FieldUpdate::Username("Al".into()))
            .apply(FieldUpdate::Comment("hello there".into()));
        assert_eq!(draft.username, "Al");
        assert_eq!(draft.comment, "hello there");
        assert_eq!(draft.like_count, 0);

        let draft = draft.apply(FieldUpdate::Username("Bo".into()));
        assert_eq!(draft.username, "Bo");
        assert_eq!(draft.comment, "hello there");
    }

    #[test]
    fn apply_count_and_flag() {
        let draft = CommentDraft::default()
            .apply(FieldUpdate::LikeCount(12))
            .apply(FieldUpdate::Liked(true));
        assert_eq!(draft.like_count, 12);
        assert!(draft.liked);
    }

    #[test]
    fn update_reports_its_field() {
        assert_eq!(FieldUpdate::Username(String::new()).field(), Field::Username);
        assert_eq!(FieldUpdate::Comment(String::new()).field(), Field::Comment);
        assert_eq!(FieldUpdate::LikeCount(0).field(), Field::LikeCount);
        assert_eq!(FieldUpdate::Liked(false).field(), Field::Liked);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let draft = CommentDraft {
            username: "Al".into(),
            comment: "short".into(),
            like_count: 3,
            liked: true,
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(
            json,
            r#"{"username":"Al","comment":"short","likeCount":3,"liked":true}"#
        );
    }

    #[test]
    fn field_keys_match_serialized_names() {
        let keys: Vec<&str> = Field::all().iter().map(Field::key).collect();
        assert_eq!(keys, vec!["username", "comment", "likeCount", "liked"]);
        assert_eq!(Field::LikeCount.to_string(), "likeCount");
    }
}
