use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream error: {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("missing or malformed property: {field}")]
    MissingProperty { field: &'static str },

    #[error("no article matches {category}/{slug}")]
    NotFound { category: String, slug: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
