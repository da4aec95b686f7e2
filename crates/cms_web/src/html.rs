//! HTML fragments for the htmx frontend. Fragments swap into `#content`
//! and push the real URL so direct navigation keeps working.

use cms_core::models::{Article, ArticleSummary};
use cms_core::render::escape_html;

pub fn article_list(summaries: &[ArticleSummary]) -> String {
    let mut html = String::from("<ul>");
    for summary in summaries {
        let href = escape_html(&format!("/cms/{}/{}", summary.category, summary.slug));
        html.push_str(&format!(
            r##"<li><a href="#" hx-get="{href}" hx-target="#content" hx-push-url="{href}">{title}</a></li>"##,
            title = escape_html(&summary.title),
        ));
    }
    html.push_str("</ul>");
    html
}

pub fn article_detail(article: &Article) -> String {
    format!(
        concat!(
            "<article>",
            "<h1>{title}</h1>",
            "<p><strong>Category:</strong> {category}</p>",
            "<div>{body}</div>",
            r##"<a href="#" hx-get="/cms" hx-target="#content" hx-push-url="/cms">Back to Articles</a>"##,
            "</article>"
        ),
        title = escape_html(&article.title),
        category = escape_html(&article.category),
        body = article.body_html,
    )
}
