//! Capsule submission content.
//!
//! The create entry point takes a small integer content-kind tag whose
//! value decides the argument arity, so the three legal shapes are a
//! tagged union rather than a pile of string checks.

use thiserror::Error;

/// Errors from assembling a submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("title must not be empty")]
    NoTitle,
    #[error("provide text content, an image URL, or both")]
    Empty,
}

/// The content carried by a capsule submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapsuleContent {
    /// Text body only (kind tag 0).
    Text(String),
    /// Image URL only (kind tag 1).
    Image(String),
    /// Both text and image (kind tag 2).
    Both {
        /// Text body.
        text: String,
        /// Image URL.
        image: String,
    },
}

impl CapsuleContent {
    /// Classify trimmed form input into a content variant.
    ///
    /// Returns [`ContentError::Empty`] when both fields are blank; no
    /// transaction may be built in that case.
    pub fn new(text: &str, image: &str) -> Result<Self, ContentError> {
        let text = text.trim();
        let image = image.trim();
        match (text.is_empty(), image.is_empty()) {
            (false, true) => Ok(Self::Text(text.to_string())),
            (true, false) => Ok(Self::Image(image.to_string())),
            (false, false) => Ok(Self::Both {
                text: text.to_string(),
                image: image.to_string(),
            }),
            (true, true) => Err(ContentError::Empty),
        }
    }

    /// The `u8` content-kind tag the create entry point expects.
    pub const fn kind_tag(&self) -> u8 {
        match self {
            Self::Text(_) => 0,
            Self::Image(_) => 1,
            Self::Both { .. } => 2,
        }
    }
}

/// A validated capsule submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Capsule title.
    pub title: String,
    /// Content payload.
    pub content: CapsuleContent,
}

impl Submission {
    /// Validate raw form fields into a submission.
    ///
    /// The title is checked first so the user is told about a missing
    /// title before a missing body.
    pub fn new(title: &str, text: &str, image: &str) -> Result<Self, ContentError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ContentError::NoTitle);
        }
        Ok(Self {
            title: title.to_string(),
            content: CapsuleContent::new(text, image)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_only_is_kind_zero() {
        let content = CapsuleContent::new("hello", "").unwrap();
        assert_eq!(content, CapsuleContent::Text("hello".into()));
        assert_eq!(content.kind_tag(), 0);
    }

    #[test]
    fn image_only_is_kind_one() {
        let content = CapsuleContent::new("", "https://img.example/a.png").unwrap();
        assert_eq!(content.kind_tag(), 1);
    }

    #[test]
    fn both_is_kind_two() {
        let content = CapsuleContent::new("body", "https://img.example/a.png").unwrap();
        assert_eq!(content.kind_tag(), 2);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(CapsuleContent::new("  ", "\t"), Err(ContentError::Empty));
    }

    #[test]
    fn title_only_submission_rejected() {
        assert_eq!(
            Submission::new("a title", "", ""),
            Err(ContentError::Empty)
        );
    }

    #[test]
    fn missing_title_rejected_first() {
        assert_eq!(Submission::new("", "text", ""), Err(ContentError::NoTitle));
        assert_eq!(Submission::new("  ", "", ""), Err(ContentError::NoTitle));
    }

    #[test]
    fn fields_are_trimmed() {
        let submission = Submission::new(" t ", " body ", "").unwrap();
        assert_eq!(submission.title, "t");
        assert_eq!(submission.content, CapsuleContent::Text("body".into()));
    }
}
