//! Related-article ranking by metadata overlap.

use serde::Serialize;

use crate::article::ArticleStore;

/// Maximum number of related articles returned.
///
/// Fixed contractual default, not a tunable: consumers lay out exactly
/// this many sidebar slots.
pub const MAX_RELATED: usize = 5;

/// Scoring weights: concept, tag, and title matches.
const CONCEPT_WEIGHT: u32 = 3;
const TAG_WEIGHT: u32 = 2;
const TITLE_WEIGHT: u32 = 1;

/// A ranked related-article suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedArticle {
    pub slug: String,
    pub title: String,
    pub relevance: u32,
}

/// Score every other article against the query concepts and return the
/// top matches by descending relevance.
///
/// Per query concept a candidate earns the strongest single match: +3
/// when any of its concepts contains the query as a case-insensitive
/// substring, else +2 for any tag, else +1 for the title. Scores
/// accumulate across query concepts. Zero-score candidates and the
/// excluded slug are dropped. Ties keep collection order (stable sort).
pub fn find_related(
    store: &ArticleStore,
    concepts: &[String],
    exclude_slug: &str,
) -> Vec<RelatedArticle> {
    let queries: Vec<String> = concepts.iter().map(|c| c.to_lowercase()).collect();

    let mut ranked: Vec<RelatedArticle> = store
        .iter()
        .filter(|a| a.slug != exclude_slug)
        .filter_map(|article| {
            let title_lower = article.title().to_lowercase();
            let mut relevance = 0;

            for query in &queries {
                if article
                    .meta
                    .concepts
                    .iter()
                    .any(|c| c.to_lowercase().contains(query))
                {
                    relevance += CONCEPT_WEIGHT;
                } else if article
                    .meta
                    .tags
                    .iter()
                    .any(|t| t.to_lowercase().contains(query))
                {
                    relevance += TAG_WEIGHT;
                } else if title_lower.contains(query) {
                    relevance += TITLE_WEIGHT;
                }
            }

            (relevance > 0).then(|| RelatedArticle {
                slug: article.slug.clone(),
                title: article.title().to_string(),
                relevance,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    ranked.truncate(MAX_RELATED);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{Article, ArticleMeta};

    fn make_article(slug: &str, title: &str, concepts: &[&str], tags: &[&str]) -> Article {
        Article::new(
            slug,
            ArticleMeta {
                title: Some(title.to_string()),
                concepts: concepts.iter().map(|s| s.to_string()).collect(),
                tags: tags.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
        )
    }

    fn query(concepts: &[&str]) -> Vec<String> {
        concepts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_spec_scenario() {
        let store = ArticleStore::from_articles(vec![
            make_article("intro", "Introduction to Order Books", &["Order Book"], &[]),
            make_article(
                "adv-ob",
                "Advanced Order Book Design",
                &["Order Book", "Matching Engine"],
                &[],
            ),
        ]);

        let related = find_related(&store, &query(&["Order Book"]), "intro");
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "adv-ob");
        assert_eq!(related[0].title, "Advanced Order Book Design");
        // Concept match wins at +3; the weaker title match does not stack.
        assert_eq!(related[0].relevance, 3);
    }

    #[test]
    fn test_scoring_weights() {
        let store = ArticleStore::from_articles(vec![
            make_article("c", "Unrelated Title", &["Latency"], &[]),
            make_article("t", "Unrelated Title", &[], &["Latency"]),
            make_article("n", "Latency Numbers", &[], &[]),
        ]);

        let related = find_related(&store, &query(&["Latency"]), "x");
        assert_eq!(related.len(), 3);
        assert_eq!((related[0].slug.as_str(), related[0].relevance), ("c", 3));
        assert_eq!((related[1].slug.as_str(), related[1].relevance), ("t", 2));
        assert_eq!((related[2].slug.as_str(), related[2].relevance), ("n", 1));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let store = ArticleStore::from_articles(vec![make_article(
            "q",
            "X",
            &["Lock-Free Queue Design"],
            &[],
        )]);

        let related = find_related(&store, &query(&["lock-free queue"]), "x");
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].relevance, 3);
    }

    #[test]
    fn test_excludes_self() {
        let store = ArticleStore::from_articles(vec![make_article(
            "intro",
            "Intro",
            &["Order Book"],
            &[],
        )]);

        assert!(find_related(&store, &query(&["Order Book"]), "intro").is_empty());
    }

    #[test]
    fn test_zero_score_excluded() {
        let store =
            ArticleStore::from_articles(vec![make_article("other", "Other", &["FPGA"], &[])]);

        assert!(find_related(&store, &query(&["Order Book"]), "x").is_empty());
    }

    #[test]
    fn test_cap_at_five_and_stable_ties() {
        let articles: Vec<Article> = (0..8)
            .map(|i| make_article(&format!("a{i}"), "X", &["Latency"], &[]))
            .collect();
        let store = ArticleStore::from_articles(articles);

        let related = find_related(&store, &query(&["Latency"]), "none");
        assert_eq!(related.len(), MAX_RELATED);
        // All scores equal; collection order preserved
        let slugs: Vec<_> = related.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a0", "a1", "a2", "a3", "a4"]);
    }

    #[test]
    fn test_descending_relevance() {
        let store = ArticleStore::from_articles(vec![
            make_article("weak", "Latency Notes", &[], &[]),
            make_article("strong", "Latency Deep Dive", &["Latency"], &[]),
        ]);

        let related = find_related(&store, &query(&["Latency"]), "x");
        assert_eq!(related[0].slug, "strong");
        assert_eq!(related[0].relevance, 3);
        assert_eq!(related[1].slug, "weak");
        assert_eq!(related[1].relevance, 1);
    }

    #[test]
    fn test_accumulates_over_multiple_concepts() {
        let store = ArticleStore::from_articles(vec![make_article(
            "both",
            "X",
            &["Order Book", "Matching Engine"],
            &[],
        )]);

        let related = find_related(&store, &query(&["Order Book", "Matching Engine"]), "x");
        assert_eq!(related[0].relevance, 6);
    }

    #[test]
    fn test_empty_query_returns_empty() {
        let store = ArticleStore::from_articles(vec![make_article("a", "A", &["X"], &[])]);
        assert!(find_related(&store, &[], "x").is_empty());
    }
}
