//! Serde model for the slice of the Notion API this service consumes.
//!
//! Pages arrive as a loosely-typed property bag; properties and blocks are
//! internally tagged on `"type"`. Unknown property types collapse to
//! [`PropertyValue::Other`] so one exotic field never fails a whole page,
//! while blocks keep their raw kind string for diagnostics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One record in the collection. Only the fields this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    pub created_time: DateTime<Utc>,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Select { select: Option<SelectOption> },
    Checkbox { checkbox: bool },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
    pub text: Option<TextContent>,
}

impl RichText {
    /// Plain text content of this span. Prefers the raw `text.content`
    /// field and falls back to `plain_text` for non-text span kinds.
    pub fn content(&self) -> &str {
        match &self.text {
            Some(text) => &text.content,
            None => &self.plain_text,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// Collection schema, used only to enumerate select options.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSchema {
    #[serde(default)]
    pub properties: HashMap<String, SchemaProperty>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchemaProperty {
    Select { select: SelectConfig },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

/// A body block. The kind-specific payload stays as raw JSON until
/// [`crate::extract::content_block`] maps it to a `ContentBlock`, so an
/// unrecognized kind still carries its name through to the renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextPayload {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagePayload {
    pub file: Option<HostedFile>,
    pub external: Option<HostedFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostedFile {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageList {
    #[serde(default)]
    pub results: Vec<Page>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlockList {
    #[serde(default)]
    pub results: Vec<Block>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_page() {
        let page: Page = serde_json::from_value(json!({
            "id": "abc-123",
            "created_time": "2024-03-01T10:00:00.000Z",
            "properties": {
                "Title": {
                    "type": "title",
                    "title": [{"plain_text": "Hello", "text": {"content": "Hello"}}]
                },
                "Published": {"type": "checkbox", "checkbox": true},
                "Category": {"type": "select", "select": {"name": "tech"}},
                "Rollup": {"type": "rollup", "rollup": {}}
            }
        }))
        .unwrap();

        assert_eq!(page.id, "abc-123");
        assert!(matches!(
            page.properties.get("Published"),
            Some(PropertyValue::Checkbox { checkbox: true })
        ));
        // unknown property types degrade instead of failing the page
        assert!(matches!(
            page.properties.get("Rollup"),
            Some(PropertyValue::Other)
        ));
    }

    #[test]
    fn test_deserialize_block_keeps_unknown_kind() {
        let block: Block = serde_json::from_value(json!({
            "id": "b1",
            "type": "synced_block",
            "synced_block": {}
        }))
        .unwrap();
        assert_eq!(block.kind, "synced_block");
    }

    #[test]
    fn test_rich_text_falls_back_to_plain_text() {
        let span: RichText = serde_json::from_value(json!({
            "plain_text": "mentioned",
            "mention": {}
        }))
        .unwrap();
        assert_eq!(span.content(), "mentioned");
    }
}
