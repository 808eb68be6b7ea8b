//! Learning-path suggestions: what to read before and after an article.

use serde::Serialize;

use crate::article::{Article, ArticleStore};

/// Maximum entries per direction.
///
/// Fixed contractual default, not a tunable.
pub const MAX_PATH_ENTRIES: usize = 3;

/// One step in a learning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub slug: String,
    pub title: String,
}

impl PathEntry {
    fn from_article(article: &Article) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title().to_string(),
        }
    }
}

/// Recommended prior and follow-up reading for a target article.
#[derive(Debug, Default, Serialize)]
pub struct LearningPath {
    pub previous: Vec<PathEntry>,
    pub next: Vec<PathEntry>,
}

/// Partition the collection into previous/next reading for `target_slug`.
///
/// Previous: listed in the target's prerequisites, or same branch with
/// strictly lower difficulty. Next: lists the target as a prerequisite,
/// or same branch with strictly higher difficulty. Absent difficulty
/// ranks as beginner on both sides. Candidates are taken in collection
/// order with no further scoring, capped at three per direction. An
/// unknown target slug yields empty lists, not an error.
pub fn build_learning_path(store: &ArticleStore, target_slug: &str) -> LearningPath {
    let Some(target) = store.get(target_slug) else {
        return LearningPath::default();
    };

    let target_rank = target.meta.difficulty_rank();
    let mut path = LearningPath::default();

    for article in store {
        if article.slug == target.slug {
            continue;
        }

        let same_branch = article.meta.mindmap_branch == target.meta.mindmap_branch;
        let rank = article.meta.difficulty_rank();

        if path.previous.len() < MAX_PATH_ENTRIES
            && (target.meta.prerequisites.contains(&article.slug)
                || (same_branch && rank < target_rank))
        {
            path.previous.push(PathEntry::from_article(article));
        }

        if path.next.len() < MAX_PATH_ENTRIES
            && (article.meta.prerequisites.contains(&target.slug)
                || (same_branch && rank > target_rank))
        {
            path.next.push(PathEntry::from_article(article));
        }

        if path.previous.len() == MAX_PATH_ENTRIES && path.next.len() == MAX_PATH_ENTRIES {
            break;
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleMeta;
    use crate::core::Difficulty;

    fn make_article(
        slug: &str,
        title: &str,
        prerequisites: &[&str],
        branch: Option<&str>,
        difficulty: Option<Difficulty>,
    ) -> Article {
        Article::new(
            slug,
            ArticleMeta {
                title: Some(title.to_string()),
                prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
                mindmap_branch: branch.map(|s| s.to_string()),
                difficulty,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_prerequisite_links() {
        let store = ArticleStore::from_articles(vec![
            make_article("intro", "Introduction to Order Books", &[], None, None),
            make_article(
                "adv-ob",
                "Advanced Order Book Design",
                &["intro"],
                None,
                None,
            ),
        ]);

        // A's prerequisites appear in previous
        let path = build_learning_path(&store, "adv-ob");
        assert_eq!(path.previous.len(), 1);
        assert_eq!(path.previous[0].slug, "intro");
        assert_eq!(path.previous[0].title, "Introduction to Order Books");

        // B listing A as a prerequisite puts B in A's next
        let path = build_learning_path(&store, "intro");
        assert_eq!(path.next.len(), 1);
        assert_eq!(path.next[0].slug, "adv-ob");
    }

    #[test]
    fn test_branch_difficulty_ordering() {
        let store = ArticleStore::from_articles(vec![
            make_article(
                "easy",
                "Easy",
                &[],
                Some("Foundations"),
                Some(Difficulty::Beginner),
            ),
            make_article(
                "hard",
                "Hard",
                &[],
                Some("Foundations"),
                Some(Difficulty::Advanced),
            ),
        ]);

        let path = build_learning_path(&store, "easy");
        assert!(path.previous.is_empty());
        assert_eq!(path.next.len(), 1);
        assert_eq!(path.next[0].slug, "hard");

        let path = build_learning_path(&store, "hard");
        assert!(path.next.is_empty());
        assert_eq!(path.previous.len(), 1);
        assert_eq!(path.previous[0].slug, "easy");
    }

    #[test]
    fn test_absent_difficulty_ranks_as_beginner() {
        let store = ArticleStore::from_articles(vec![
            make_article("implicit", "Implicit", &[], Some("Core"), None),
            make_article(
                "mid",
                "Mid",
                &[],
                Some("Core"),
                Some(Difficulty::Intermediate),
            ),
        ]);

        let path = build_learning_path(&store, "mid");
        assert_eq!(path.previous.len(), 1);
        assert_eq!(path.previous[0].slug, "implicit");
    }

    #[test]
    fn test_different_branch_not_suggested() {
        let store = ArticleStore::from_articles(vec![
            make_article(
                "a",
                "A",
                &[],
                Some("Foundations"),
                Some(Difficulty::Beginner),
            ),
            make_article(
                "b",
                "B",
                &[],
                Some("Components"),
                Some(Difficulty::Advanced),
            ),
        ]);

        let path = build_learning_path(&store, "a");
        assert!(path.next.is_empty());
    }

    #[test]
    fn test_same_difficulty_not_suggested() {
        let store = ArticleStore::from_articles(vec![
            make_article("a", "A", &[], Some("Core"), Some(Difficulty::Beginner)),
            make_article("b", "B", &[], Some("Core"), Some(Difficulty::Beginner)),
        ]);

        let path = build_learning_path(&store, "a");
        assert!(path.previous.is_empty());
        assert!(path.next.is_empty());
    }

    #[test]
    fn test_caps_at_three_in_collection_order() {
        let mut articles = vec![make_article(
            "target",
            "Target",
            &[],
            Some("Core"),
            Some(Difficulty::Advanced),
        )];
        for i in 0..5 {
            articles.push(make_article(
                &format!("b{i}"),
                &format!("B{i}"),
                &[],
                Some("Core"),
                Some(Difficulty::Beginner),
            ));
        }
        let store = ArticleStore::from_articles(articles);

        let path = build_learning_path(&store, "target");
        assert_eq!(path.previous.len(), MAX_PATH_ENTRIES);
        let slugs: Vec<_> = path.previous.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b0", "b1", "b2"]);
    }

    #[test]
    fn test_target_never_included() {
        let store = ArticleStore::from_articles(vec![make_article(
            "solo",
            "Solo",
            &["solo"],
            Some("Core"),
            None,
        )]);

        let path = build_learning_path(&store, "solo");
        assert!(path.previous.is_empty());
        assert!(path.next.is_empty());
    }

    #[test]
    fn test_unknown_target_yields_empty() {
        let store = ArticleStore::from_articles(vec![make_article("a", "A", &[], None, None)]);
        let path = build_learning_path(&store, "missing");
        assert!(path.previous.is_empty());
        assert!(path.next.is_empty());
    }

    #[test]
    fn test_dangling_prerequisite_ignored() {
        let store = ArticleStore::from_articles(vec![make_article(
            "adv",
            "Adv",
            &["never-written"],
            None,
            None,
        )]);

        let path = build_learning_path(&store, "adv");
        assert!(path.previous.is_empty());
    }
}
