use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully assembled article, body already rendered to HTML.
///
/// Nothing is persisted: articles are rebuilt from the upstream
/// collection on every request and dropped once the response is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub slug: String,
    pub body_html: String,
    pub created_at: DateTime<Utc>,
    pub published: bool,
}

/// Listing entry: just enough to render a link. Identity is the
/// (category, slug) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub title: String,
    pub category: String,
    pub slug: String,
}

/// One unit of page body content, in upstream order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Paragraph { spans: Vec<RichTextSpan> },
    Heading { level: HeadingLevel, spans: Vec<RichTextSpan> },
    BulletedItem { spans: Vec<RichTextSpan> },
    NumberedItem { spans: Vec<RichTextSpan> },
    Image { url: Option<String> },
    TableOfContents,
    Quote { spans: Vec<RichTextSpan> },
    Divider,
    Unsupported { kind: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::One => "h1",
            HeadingLevel::Two => "h2",
            HeadingLevel::Three => "h3",
        }
    }
}

/// A contiguous run of rich text, flattened to plain text.
/// Formatting (bold, links, colors) is not carried through.
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextSpan {
    pub text: String,
}

impl RichTextSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
