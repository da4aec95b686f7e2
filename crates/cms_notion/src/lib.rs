pub mod client;
pub mod config;
pub mod extract;
pub mod query;
pub mod repository;
pub mod wire;

pub use client::{ContentApi, NotionClient};
pub use config::Config;
pub use repository::ArticleRepository;

pub mod prelude {
    pub use crate::client::ContentApi;
    pub use crate::repository::ArticleRepository;
    pub use cms_core::{Error, Result};
}
