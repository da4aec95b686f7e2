use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::error;

use cms_core::Error;
use cms_notion::repository::DEFAULT_PAGE_SIZE;

use crate::html;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub format: Option<String>,
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Response {
    match state.repository.list_published(DEFAULT_PAGE_SIZE).await {
        Ok(summaries) if params.format.as_deref() == Some("json") => {
            Json(summaries).into_response()
        }
        Ok(summaries) => Html(html::article_list(&summaries)).into_response(),
        Err(error) => fetch_failed(error),
    }
}

pub async fn list_categories(State(state): State<Arc<AppState>>) -> Response {
    match state.repository.list_categories().await {
        Ok(categories) => Json(categories).into_response(),
        Err(error) => fetch_failed(error),
    }
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path((category, slug)): Path<(String, String)>,
) -> Response {
    match state.repository.get_article(&category, &slug).await {
        Ok(article) => Html(html::article_detail(&article)).into_response(),
        Err(Error::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, "Article not found").into_response()
        }
        Err(error) => fetch_failed(error),
    }
}

// upstream detail stays in the logs, the client gets a generic failure
fn fetch_failed(error: Error) -> Response {
    error!(%error, "failed to fetch content");
    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch content").into_response()
}
