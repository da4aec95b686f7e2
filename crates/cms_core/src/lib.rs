pub mod error;
pub mod models;
pub mod render;

pub use error::Error;
pub use models::{Article, ArticleSummary, ContentBlock, HeadingLevel, RichTextSpan};
pub type Result<T> = std::result::Result<T, Error>;
