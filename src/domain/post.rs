use std::{convert::Infallible, fmt, str::FromStr};

use chrono::Utc;
use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How fresh post identifiers are minted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdScheme {
    /// A random (v4) UUID.
    #[default]
    Uuid,
    /// `post-<epoch millis>`.
    ///
    /// Two posts created within the same millisecond collide, so this is only
    /// suitable for a single user adding entries by hand.
    Timestamp,
}

/// Opaque, stable identifier of a [`Post`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Mint a fresh identifier using the given scheme.
    #[must_use]
    pub fn generate(scheme: IdScheme) -> Self {
        match scheme {
            IdScheme::Uuid => Self(Uuid::new_v4().to_string()),
            IdScheme::Timestamp => Self(format!("post-{}", Utc::now().timestamp_millis())),
        }
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for PostId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single dated journal entry.
///
/// Posts are never edited in place. They are created from a
/// [`Draft`](crate::domain::Draft) and later either kept or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, assigned at creation.
    pub id: PostId,
    /// Title of the entry.
    pub title: NonEmptyString,
    /// Calendar date (`YYYY-MM-DD`). This is the only sort key.
    pub date: String,
    /// Short labels, in the order they were entered.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional one-line summary. Empty when absent.
    #[serde(default)]
    pub summary: String,
    /// The body of the entry.
    pub content: NonEmptyString,
}

impl Post {
    /// The lower-cased text that search queries are matched against.
    ///
    /// Title, summary, content and every tag, joined by single spaces.
    #[must_use]
    pub fn haystack(&self) -> String {
        let mut parts = vec![self.title.as_str(), self.summary.as_str(), self.content.as_str()];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

/// Split a comma-separated tag list into trimmed, non-empty tags.
///
/// ```
/// # use journal::domain::parse_tags;
/// assert_eq!(parse_tags("planning, , practice,"), ["planning", "practice"]);
/// ```
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}
