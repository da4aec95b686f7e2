//! Typed extraction from the upstream property bag.
//!
//! Title, Category and Slug are required on every published page: a
//! property that is absent, empty or of the wrong declared type is a data
//! error (`Error::MissingProperty`), never a silent default. Only the
//! first span of a title/rich-text property is read; multi-span formatting
//! is flattened to plain text.

use serde::de::DeserializeOwned;

use cms_core::models::{Article, ArticleSummary, ContentBlock, HeadingLevel, RichTextSpan};
use cms_core::{Error, Result};

use crate::wire::{Block, CollectionSchema, ImagePayload, Page, PropertyValue, RichText, RichTextPayload, SchemaProperty};

pub const PROP_TITLE: &str = "Title";
pub const PROP_CATEGORY: &str = "Category";
pub const PROP_SLUG: &str = "Slug";
pub const PROP_PUBLISHED: &str = "Published";
pub const PROP_CREATED_AT: &str = "CreatedAt";

/// Listing fields only; no body involved.
pub fn extract_summary(page: &Page) -> Result<ArticleSummary> {
    Ok(ArticleSummary {
        title: title_text(page, PROP_TITLE)?,
        category: select_name(page, PROP_CATEGORY)?,
        slug: rich_text_value(page, PROP_SLUG)?,
    })
}

/// Full article from a page plus its already-rendered body.
pub fn extract_article(page: &Page, body_html: String) -> Result<Article> {
    let summary = extract_summary(page)?;
    Ok(Article {
        id: page.id.clone(),
        title: summary.title,
        category: summary.category,
        slug: summary.slug,
        body_html,
        created_at: page.created_time,
        published: checkbox(page, PROP_PUBLISHED),
    })
}

/// Declared option names of the `Category` select field, in schema order.
/// Empty when the field is absent or not a select.
pub fn extract_categories(schema: &CollectionSchema) -> Vec<String> {
    match schema.properties.get(PROP_CATEGORY) {
        Some(SchemaProperty::Select { select }) => {
            select.options.iter().map(|option| option.name.clone()).collect()
        }
        _ => Vec::new(),
    }
}

pub fn content_blocks(blocks: &[Block]) -> Vec<ContentBlock> {
    blocks.iter().map(content_block).collect()
}

pub fn content_block(block: &Block) -> ContentBlock {
    match block.kind.as_str() {
        "paragraph" => ContentBlock::Paragraph { spans: spans(block, "paragraph") },
        "heading_1" => ContentBlock::Heading {
            level: HeadingLevel::One,
            spans: spans(block, "heading_1"),
        },
        "heading_2" => ContentBlock::Heading {
            level: HeadingLevel::Two,
            spans: spans(block, "heading_2"),
        },
        "heading_3" => ContentBlock::Heading {
            level: HeadingLevel::Three,
            spans: spans(block, "heading_3"),
        },
        "bulleted_list_item" => ContentBlock::BulletedItem {
            spans: spans(block, "bulleted_list_item"),
        },
        "numbered_list_item" => ContentBlock::NumberedItem {
            spans: spans(block, "numbered_list_item"),
        },
        "image" => {
            let image: ImagePayload = payload(block, "image");
            ContentBlock::Image {
                url: image.file.or(image.external).map(|file| file.url),
            }
        }
        "table_of_contents" => ContentBlock::TableOfContents,
        "quote" => ContentBlock::Quote { spans: spans(block, "quote") },
        "divider" => ContentBlock::Divider,
        other => ContentBlock::Unsupported { kind: other.to_string() },
    }
}

fn title_text(page: &Page, field: &'static str) -> Result<String> {
    match page.properties.get(field) {
        Some(PropertyValue::Title { title }) => first_span(title, field),
        _ => Err(Error::MissingProperty { field }),
    }
}

fn rich_text_value(page: &Page, field: &'static str) -> Result<String> {
    match page.properties.get(field) {
        Some(PropertyValue::RichText { rich_text }) => first_span(rich_text, field),
        _ => Err(Error::MissingProperty { field }),
    }
}

fn select_name(page: &Page, field: &'static str) -> Result<String> {
    match page.properties.get(field) {
        Some(PropertyValue::Select { select: Some(option) }) => Ok(option.name.clone()),
        _ => Err(Error::MissingProperty { field }),
    }
}

fn checkbox(page: &Page, field: &str) -> bool {
    matches!(
        page.properties.get(field),
        Some(PropertyValue::Checkbox { checkbox: true })
    )
}

fn first_span(spans: &[RichText], field: &'static str) -> Result<String> {
    spans
        .first()
        .map(|span| span.content().to_string())
        .ok_or(Error::MissingProperty { field })
}

fn spans(block: &Block, key: &str) -> Vec<RichTextSpan> {
    let payload: RichTextPayload = payload(block, key);
    payload
        .rich_text
        .iter()
        .map(|text| RichTextSpan::new(text.content()))
        .collect()
}

fn payload<T: DeserializeOwned + Default>(block: &Block, key: &str) -> T {
    block
        .data
        .get(key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(value: serde_json::Value) -> Page {
        serde_json::from_value(value).unwrap()
    }

    fn valid_page() -> serde_json::Value {
        json!({
            "id": "page-1",
            "created_time": "2024-03-01T10:00:00.000Z",
            "properties": {
                "Title": {
                    "type": "title",
                    "title": [
                        {"plain_text": "Hello World", "text": {"content": "Hello World"}},
                        {"plain_text": " (ignored)", "text": {"content": " (ignored)"}}
                    ]
                },
                "Category": {"type": "select", "select": {"name": "tech"}},
                "Slug": {
                    "type": "rich_text",
                    "rich_text": [{"plain_text": "hello-world", "text": {"content": "hello-world"}}]
                },
                "Published": {"type": "checkbox", "checkbox": true}
            }
        })
    }

    #[test]
    fn test_extract_summary() {
        let summary = extract_summary(&page(valid_page())).unwrap();
        assert_eq!(summary.title, "Hello World");
        assert_eq!(summary.category, "tech");
        assert_eq!(summary.slug, "hello-world");
    }

    #[test]
    fn test_extract_article() {
        let article = extract_article(&page(valid_page()), "<p>body</p>".to_string()).unwrap();
        assert_eq!(article.id, "page-1");
        assert_eq!(article.body_html, "<p>body</p>");
        assert!(article.published);
        let expected: chrono::DateTime<chrono::Utc> = "2024-03-01T10:00:00Z".parse().unwrap();
        assert_eq!(article.created_at, expected);
    }

    #[test]
    fn test_missing_slug_fails() {
        let mut raw = valid_page();
        raw["properties"].as_object_mut().unwrap().remove("Slug");
        let err = extract_summary(&page(raw)).unwrap_err();
        assert!(matches!(err, Error::MissingProperty { field: "Slug" }));
    }

    #[test]
    fn test_empty_title_fails() {
        let mut raw = valid_page();
        raw["properties"]["Title"]["title"] = json!([]);
        let err = extract_summary(&page(raw)).unwrap_err();
        assert!(matches!(err, Error::MissingProperty { field: "Title" }));
    }

    #[test]
    fn test_wrong_property_type_fails() {
        let mut raw = valid_page();
        raw["properties"]["Slug"] = json!({"type": "checkbox", "checkbox": false});
        let err = extract_summary(&page(raw)).unwrap_err();
        assert!(matches!(err, Error::MissingProperty { field: "Slug" }));
    }

    #[test]
    fn test_unselected_category_fails() {
        let mut raw = valid_page();
        raw["properties"]["Category"] = json!({"type": "select", "select": null});
        let err = extract_summary(&page(raw)).unwrap_err();
        assert!(matches!(err, Error::MissingProperty { field: "Category" }));
    }

    #[test]
    fn test_missing_published_defaults_to_false() {
        let mut raw = valid_page();
        raw["properties"].as_object_mut().unwrap().remove("Published");
        let article = extract_article(&page(raw), String::new()).unwrap();
        assert!(!article.published);
    }

    #[test]
    fn test_extract_categories() {
        let schema: CollectionSchema = serde_json::from_value(json!({
            "properties": {
                "Category": {
                    "type": "select",
                    "select": {"options": [{"name": "tech"}, {"name": "life"}]}
                },
                "Title": {"type": "title", "title": {}}
            }
        }))
        .unwrap();
        assert_eq!(extract_categories(&schema), vec!["tech", "life"]);
    }

    #[test]
    fn test_extract_categories_absent_or_not_select() {
        let empty: CollectionSchema = serde_json::from_value(json!({"properties": {}})).unwrap();
        assert!(extract_categories(&empty).is_empty());

        let wrong: CollectionSchema = serde_json::from_value(json!({
            "properties": {"Category": {"type": "rich_text", "rich_text": {}}}
        }))
        .unwrap();
        assert!(extract_categories(&wrong).is_empty());
    }

    fn block(value: serde_json::Value) -> Block {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_content_block_kinds() {
        let paragraph = content_block(&block(json!({
            "type": "paragraph",
            "paragraph": {"rich_text": [{"plain_text": "text", "text": {"content": "text"}}]}
        })));
        assert_eq!(
            paragraph,
            ContentBlock::Paragraph { spans: vec![RichTextSpan::new("text")] }
        );

        let heading = content_block(&block(json!({
            "type": "heading_2",
            "heading_2": {"rich_text": [{"plain_text": "Intro", "text": {"content": "Intro"}}]}
        })));
        assert_eq!(
            heading,
            ContentBlock::Heading {
                level: HeadingLevel::Two,
                spans: vec![RichTextSpan::new("Intro")]
            }
        );

        let divider = content_block(&block(json!({"type": "divider", "divider": {}})));
        assert_eq!(divider, ContentBlock::Divider);
    }

    #[test]
    fn test_content_block_image_variants() {
        let hosted = content_block(&block(json!({
            "type": "image",
            "image": {"file": {"url": "https://files.example/a.png"}}
        })));
        assert_eq!(
            hosted,
            ContentBlock::Image { url: Some("https://files.example/a.png".to_string()) }
        );

        let external = content_block(&block(json!({
            "type": "image",
            "image": {"external": {"url": "https://cdn.example/b.png"}}
        })));
        assert_eq!(
            external,
            ContentBlock::Image { url: Some("https://cdn.example/b.png".to_string()) }
        );

        let bare = content_block(&block(json!({"type": "image", "image": {}})));
        assert_eq!(bare, ContentBlock::Image { url: None });
    }

    #[test]
    fn test_content_block_unknown_kind() {
        let unknown = content_block(&block(json!({
            "type": "synced_block",
            "synced_block": {}
        })));
        assert_eq!(
            unknown,
            ContentBlock::Unsupported { kind: "synced_block".to_string() }
        );
    }
}
