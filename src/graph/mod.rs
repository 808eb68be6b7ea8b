//! Navigation graph over article metadata: related-article ranking and
//! learning-path suggestions.

mod path;
mod related;

pub use path::{LearningPath, MAX_PATH_ENTRIES, PathEntry, build_learning_path};
pub use related::{MAX_RELATED, RelatedArticle, find_related};
