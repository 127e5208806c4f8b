//! Book metadata.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Time of day appended to the publication date in package metadata.
const DATE_TIME_SUFFIX: &str = "T15:00:00Z";

/// Bibliographic metadata written into the package descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    pub title: String,
    pub author: String,
    pub publisher: String,
    /// Where the text came from, usually the origin URL.
    pub source: String,
    pub published: DateTime<FixedOffset>,
    pub language: String,
    /// Vertical writing with right-to-left page progression.
    pub vertical: bool,
}

impl Metadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: String::new(),
            publisher: String::new(),
            source: String::new(),
            published: Utc::now().fixed_offset(),
            language: "en".to_string(),
            vertical: false,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the publication instant. The calendar date is taken in the
    /// instant's own offset.
    pub fn with_published<Tz: TimeZone>(mut self, published: DateTime<Tz>) -> Self {
        self.published = published.fixed_offset();
        self
    }

    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    /// Publication date as written to `dc:date` and `dcterms:modified`.
    pub fn date_string(&self) -> String {
        format!("{}{}", self.published.format("%Y-%m-%d"), DATE_TIME_SUFFIX)
    }
}
