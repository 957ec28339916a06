use std::{fmt, str::FromStr};

use chrono::Local;
use non_empty_string::NonEmptyString;

use crate::domain::{Post, PostId, parse_tags};

/// Today's local calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// A post being composed.
///
/// Mirrors [`Post`] but keeps every field as raw user input. Tags are held
/// as the comma-separated string the user typed. Drafts are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Raw title.
    pub title: String,
    /// Raw date. Blank means "today" at submission time.
    pub date: String,
    /// Comma-separated tags.
    pub tags: String,
    /// Raw summary.
    pub summary: String,
    /// Raw content.
    pub content: String,
}

/// One editable field of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The title.
    Title,
    /// The date.
    Date,
    /// The comma-separated tags.
    Tags,
    /// The summary.
    Summary,
    /// The content.
    Content,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Date,
        Self::Tags,
        Self::Summary,
        Self::Content,
    ];

    /// The lowercase field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Tags => "tags",
            Self::Summary => "summary",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The name did not match any draft field.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown field '{0}'")]
pub struct UnknownFieldError(String);

impl FromStr for Field {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// Why a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Invalid {
    /// The title is empty after trimming.
    #[error("a title is required")]
    MissingTitle,
    /// The content is empty after trimming.
    #[error("content is required")]
    MissingContent,
}

impl Draft {
    /// An empty draft whose date is pre-filled with `date`.
    #[must_use]
    pub fn with_date(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// An empty draft dated today.
    #[must_use]
    pub fn cleared() -> Self {
        Self::with_date(today())
    }

    /// Replace the value of exactly one field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Date => &mut self.date,
            Field::Tags => &mut self.tags,
            Field::Summary => &mut self.summary,
            Field::Content => &mut self.content,
        };
        *slot = value.into();
    }

    /// The current raw value of a field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Date => &self.date,
            Field::Tags => &self.tags,
            Field::Summary => &self.summary,
            Field::Content => &self.content,
        }
    }

    /// Check whether the draft can become a post.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field, title before content.
    pub fn validate(&self) -> Result<(), Invalid> {
        if self.title.trim().is_empty() {
            return Err(Invalid::MissingTitle);
        }
        if self.content.trim().is_empty() {
            return Err(Invalid::MissingContent);
        }
        Ok(())
    }

    /// Build a post from this draft.
    ///
    /// Title, summary and content are trimmed, tags are parsed and a blank
    /// date becomes `today`.
    ///
    /// # Errors
    ///
    /// Fails with the same reasons as [`Draft::validate`].
    pub fn to_post(&self, id: PostId, today: &str) -> Result<Post, Invalid> {
        let title = NonEmptyString::new(self.title.trim().to_string())
            .map_err(|_| Invalid::MissingTitle)?;
        let content = NonEmptyString::new(self.content.trim().to_string())
            .map_err(|_| Invalid::MissingContent)?;

        let date = match self.date.trim() {
            "" => today.to_string(),
            date => date.to_string(),
        };

        Ok(Post {
            id,
            title,
            date,
            tags: parse_tags(&self.tags),
            summary: self.summary.trim().to_string(),
            content,
        })
    }
}
