//! Article types: metadata, loading, and the in-memory collection.

mod frontmatter;
mod load;
mod meta;
mod store;

pub use frontmatter::extract_frontmatter;
pub use load::{ScannedArticle, collect_content_files, load_articles, scan_articles};
pub use meta::ArticleMeta;
pub use store::{Article, ArticleStore};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
