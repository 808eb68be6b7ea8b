//! In-memory article collection snapshot.
//!
//! The store is an explicit value owned by the caller, not a process-wide
//! singleton. It is built once per collection snapshot and discarded when
//! the content set changes; the resolver index derived from it follows the
//! same lifecycle.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::log;

use super::ArticleMeta;

/// A single article: stable slug plus hand-authored metadata.
///
/// The slug is the only identifier safe for persistent cross-references;
/// titles may be edited. The core never mutates an article.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// Stable, URL-safe unique identifier (also the URL path segment).
    pub slug: String,
    /// Frontmatter metadata (flattened in JSON output).
    #[serde(flatten)]
    pub meta: ArticleMeta,
}

impl Article {
    pub fn new(slug: impl Into<String>, meta: ArticleMeta) -> Self {
        Self {
            slug: slug.into(),
            meta,
        }
    }

    /// Check if this article is a draft.
    #[inline]
    pub fn is_draft(&self) -> bool {
        self.meta.draft
    }

    /// Get title, falling back to the slug if not set.
    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or(&self.slug)
    }
}

/// Ordered collection of articles with slug lookup.
///
/// Iteration order is the collection order the articles were supplied in;
/// the ranker and path builder rely on it for stable tie-breaking.
#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
    by_slug: FxHashMap<String, usize>,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from articles in collection order.
    ///
    /// Duplicate slugs keep the first occurrence; later ones are skipped
    /// with a warning since the slug is the canonical key.
    pub fn from_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let mut store = Self::new();
        for article in articles {
            store.push(article);
        }
        store
    }

    /// Append an article, enforcing slug uniqueness (first wins).
    pub fn push(&mut self, article: Article) {
        if self.by_slug.contains_key(&article.slug) {
            log!("store"; "duplicate slug `{}`, keeping first occurrence", article.slug);
            return;
        }
        self.by_slug
            .insert(article.slug.clone(), self.articles.len());
        self.articles.push(article);
    }

    /// Look up an article by slug.
    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.by_slug.get(slug).map(|&idx| &self.articles[idx])
    }

    /// Check whether a slug exists in the collection.
    #[inline]
    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Iterate articles in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArticleStore {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.iter()
    }
}
