use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub mod handlers;
pub mod html;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState, static_dir: PathBuf) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/cms", get(handlers::list_articles))
        .route("/cms/categories", get(handlers::list_categories))
        .route("/cms/:category/:slug", get(handlers::get_article))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(Arc::new(state))
}
