use tracing::warn;

use crate::models::{ContentBlock, RichTextSpan};

/// Renders a single block to an HTML string. Total: unknown kinds
/// degrade to an empty string with a warning, never an error.
pub fn render_block(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Paragraph { spans } => format!("<p>{}</p>", span_text(spans)),
        ContentBlock::Heading { level, spans } => {
            let tag = level.tag();
            format!("<{tag}>{}</{tag}>", span_text(spans))
        }
        ContentBlock::BulletedItem { spans } => {
            format!("<ul>{}</ul>", list_item(spans))
        }
        ContentBlock::NumberedItem { spans } => {
            format!("<ol>{}</ol>", list_item(spans))
        }
        ContentBlock::Image { url } => match url {
            Some(url) => format!(r#"<img src="{}" alt="Image" />"#, escape_html(url)),
            None => String::new(),
        },
        ContentBlock::TableOfContents => "<div><strong>Table of Contents</strong></div>".to_string(),
        ContentBlock::Quote { spans } => spans
            .iter()
            .map(|span| format!("<blockquote>{}</blockquote>", escape_html(&span.text)))
            .collect(),
        ContentBlock::Divider => "<hr/>".to_string(),
        ContentBlock::Unsupported { kind } => {
            warn!(%kind, "unsupported block kind");
            String::new()
        }
    }
}

/// Renders a whole document, preserving upstream block order.
///
/// Consecutive list items of the same kind are merged into a single
/// `<ul>`/`<ol>` instead of one list per item.
pub fn render_document(blocks: &[ContentBlock]) -> String {
    let mut html = String::new();
    let mut index = 0;
    while index < blocks.len() {
        match &blocks[index] {
            ContentBlock::BulletedItem { .. } => {
                html.push_str("<ul>");
                while let Some(ContentBlock::BulletedItem { spans }) = blocks.get(index) {
                    html.push_str(&list_item(spans));
                    index += 1;
                }
                html.push_str("</ul>");
            }
            ContentBlock::NumberedItem { .. } => {
                html.push_str("<ol>");
                while let Some(ContentBlock::NumberedItem { spans }) = blocks.get(index) {
                    html.push_str(&list_item(spans));
                    index += 1;
                }
                html.push_str("</ol>");
            }
            block => {
                html.push_str(&render_block(block));
                index += 1;
            }
        }
    }
    html
}

fn list_item(spans: &[RichTextSpan]) -> String {
    format!("<li>{}</li>", span_text(spans))
}

fn span_text(spans: &[RichTextSpan]) -> String {
    spans.iter().map(|span| escape_html(&span.text)).collect()
}

/// Escapes text for interpolation into markup. Upstream content is
/// third-party data and must not be able to inject tags.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
