//! Core value types shared across the crate.

mod difficulty;
mod slug;
mod url;

pub use difficulty::Difficulty;
pub use slug::slugify;
pub use url::UrlPath;
