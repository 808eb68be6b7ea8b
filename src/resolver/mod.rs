//! Wiki-link resolution: map free-text article references to canonical URLs.
//!
//! The index registers several textual variants of every article title
//! against its slug, so `[[Advanced Order Book Design]]`,
//! `[[advanced-order-book-design]]` and `[[Order Book Design Advanced]]`-era
//! editing drift all keep resolving. The normalization heuristics are
//! deliberately frozen: changing them would silently break links in
//! existing content.

mod rewrite;

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::article::ArticleStore;
use crate::core::UrlPath;
use crate::debug;

pub use rewrite::{extract_wiki_refs, rewrite_wiki_links};

/// Whitespace runs, replaced by a single hyphen for slug-style keys.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

/// Connector words collapsed out of "simplified" title keys.
const CONNECTOR_WORDS: [&str; 6] = ["for", "in", "with", "using", "and", "or"];

/// Leading articles stripped from "simplified" title keys.
const LEADING_ARTICLES: [&str; 3] = ["a", "an", "the"];

/// Immutable lookup index from reference text to canonical slug.
///
/// A pure function of the article collection snapshot: build once, read
/// many times, rebuild from scratch when the collection changes. Key
/// collisions between articles resolve last-write-wins in collection
/// order; a tolerated ambiguity, not an error — changing the rule would
/// silently re-point links in existing content.
#[derive(Debug, Default)]
pub struct LinkIndex {
    /// Reference key -> slug.
    keys: FxHashMap<String, String>,
    /// URL prefix stamped onto resolved slugs (e.g. `/blog/`).
    prefix: UrlPath,
}

impl LinkIndex {
    /// Build the index for a collection snapshot.
    pub fn build(store: &ArticleStore, prefix: UrlPath) -> Self {
        let mut keys = FxHashMap::default();

        for article in store {
            let title = article.title();
            let hyphenated = hyphenate(title);

            keys.insert(title.to_string(), article.slug.clone());
            keys.insert(title.to_lowercase(), article.slug.clone());
            // Identity mapping so slug-formatted links resolve directly
            keys.insert(article.slug.clone(), article.slug.clone());
            keys.insert(hyphenated.to_lowercase(), article.slug.clone());
            keys.insert(hyphenated, article.slug.clone());

            // Only register simplified forms when simplification changed
            // the string, to avoid redundant keys.
            let simplified = simplify_title(title);
            if simplified != title {
                keys.insert(simplified.to_lowercase(), article.slug.clone());
                keys.insert(simplified, article.slug.clone());
            }
        }

        debug!("resolver"; "indexed {} keys for {} articles", keys.len(), store.len());
        Self { keys, prefix }
    }

    /// Resolve a wiki reference to its canonical URL.
    ///
    /// Tries, in order: exact key, lowercased, whitespace-to-hyphen, and
    /// whitespace-to-hyphen lowercased. A miss is `None`, never an error:
    /// broken wiki-links are expected editorial debt.
    pub fn resolve(&self, link_text: &str) -> Option<UrlPath> {
        let text = link_text.trim();

        let slug = self
            .keys
            .get(text)
            .or_else(|| self.keys.get(&text.to_lowercase()))
            .or_else(|| self.keys.get(&hyphenate(text)))
            .or_else(|| self.keys.get(&hyphenate(text).to_lowercase()))?;

        Some(self.url_for(slug))
    }

    /// Canonical URL for a slug: `<prefix>/<slug>/`.
    #[inline]
    pub fn url_for(&self, slug: &str) -> UrlPath {
        self.prefix.join_page(slug)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Replace internal whitespace runs with single hyphens.
fn hyphenate(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), "-").into_owned()
}

/// Simplify a title: strip one leading article (a/an/the) and collapse
/// connector words, matched case-insensitively as whole words.
fn simplify_title(title: &str) -> String {
    let mut words = title.split_whitespace().peekable();

    if let Some(first) = words.peek()
        && LEADING_ARTICLES
            .iter()
            .any(|a| first.eq_ignore_ascii_case(a))
    {
        words.next();
    }

    let kept: Vec<&str> = words
        .filter(|w| !CONNECTOR_WORDS.iter().any(|c| w.eq_ignore_ascii_case(c)))
        .collect();

    kept.join(" ")
}

/// Shared handle to the resolver index with atomic rebuild.
///
/// The index is read-only after construction; `load()` is lock-free. When
/// the collection snapshot changes, `rebuild()` swaps in a fresh index
/// atomically. Racing rebuilds over the same snapshot are safe: each
/// produces an equivalent index and the last write wins.
#[derive(Debug)]
pub struct ResolverCache {
    index: ArcSwap<LinkIndex>,
}

impl ResolverCache {
    /// Build the cache for a collection snapshot.
    pub fn new(store: &ArticleStore, prefix: UrlPath) -> Self {
        Self {
            index: ArcSwap::from_pointee(LinkIndex::build(store, prefix)),
        }
    }

    /// Get the current index (lock-free).
    #[inline]
    pub fn load(&self) -> Arc<LinkIndex> {
        self.index.load_full()
    }

    /// Rebuild the index over a new collection snapshot.
    ///
    /// Stale keys never survive a rebuild; the old index is dropped once
    /// the last reader releases its handle.
    pub fn rebuild(&self, store: &ArticleStore) {
        let prefix = self.load().prefix.clone();
        self.index.store(Arc::new(LinkIndex::build(store, prefix)));
    }
}
