//! Article metadata from Markdown frontmatter.

use serde::Deserialize;

use crate::core::Difficulty;

use super::JsonMap;

/// Deserialize a string list, treating `null` as empty vec
fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Article metadata from frontmatter in Markdown files.
///
/// # Standard Fields
///
/// | Field              | Type              | Description                        |
/// |--------------------|-------------------|------------------------------------|
/// | `title`            | `String`          | Display title                      |
/// | `description`      | `String`          | Short summary                      |
/// | `date`             | `String`          | Publication date                   |
/// | `draft`            | `bool`            | Draft status (default: false)      |
/// | `concepts`         | `Vec<String>`     | Topic labels                       |
/// | `tags`             | `Vec<String>`     | Category labels                    |
/// | `prerequisites`    | `Vec<String>`     | Slugs this article depends on      |
/// | `related-articles` | `Vec<String>`     | Author-curated cross-references    |
/// | `difficulty`       | `Difficulty`      | beginner / intermediate / advanced |
/// | `mindmap-branch`   | `String`          | Coarse topical grouping            |
///
/// List fields may be absent or `null`; both deserialize to empty vecs so
/// downstream matching never special-cases absence. The camelCase aliases
/// (`relatedArticles`, `mindmapBranch`) keep older frontmatter loading
/// unchanged.
///
/// # Custom Fields (`extra`)
///
/// Any additional fields are captured in `extra` as raw JSON.
#[derive(Debug, Clone, Default, serde::Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ArticleMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    #[serde(default)]
    pub draft: bool,
    /// Free-text topic labels used as ranker query terms.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub concepts: Vec<String>,
    /// Free-text category labels.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub tags: Vec<String>,
    /// Slugs of articles that should be read first. Dangling entries are
    /// tolerated editorial debt, not errors.
    #[serde(default, deserialize_with = "deserialize_list")]
    pub prerequisites: Vec<String>,
    /// Slugs explicitly cross-referenced by the author (may be stale).
    #[serde(
        default,
        alias = "relatedArticles",
        deserialize_with = "deserialize_list"
    )]
    pub related_articles: Vec<String>,
    /// Reading difficulty; absent ranks as beginner for ordering.
    pub difficulty: Option<Difficulty>,
    /// Coarse topical grouping (e.g. "Foundations", "Components").
    #[serde(alias = "mindmapBranch")]
    pub mindmap_branch: Option<String>,
    /// Additional user-defined fields (raw JSON).
    #[serde(flatten, default)]
    pub extra: JsonMap,
}

impl ArticleMeta {
    /// Difficulty with the absent-defaults-to-beginner rule applied.
    #[inline]
    pub fn difficulty_rank(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let meta = ArticleMeta::default();
        assert!(meta.title.is_none());
        assert!(!meta.draft);
        assert!(meta.concepts.is_empty());
        assert!(meta.prerequisites.is_empty());
        assert_eq!(meta.difficulty_rank(), Difficulty::Beginner);
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "title": "Advanced Order Book Design",
            "concepts": ["Order Book", "Matching Engine"],
            "prerequisites": ["intro"],
            "difficulty": "advanced",
            "mindmap-branch": "Components"
        }"#;
        let meta: ArticleMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Advanced Order Book Design"));
        assert_eq!(meta.concepts, vec!["Order Book", "Matching Engine"]);
        assert_eq!(meta.prerequisites, vec!["intro"]);
        assert_eq!(meta.difficulty, Some(Difficulty::Advanced));
        assert_eq!(meta.mindmap_branch.as_deref(), Some("Components"));
    }

    #[test]
    fn test_camel_case_aliases() {
        let json = r#"{"relatedArticles": ["intro"], "mindmapBranch": "Foundations"}"#;
        let meta: ArticleMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta.related_articles, vec!["intro"]);
        assert_eq!(meta.mindmap_branch.as_deref(), Some("Foundations"));
    }

    #[test]
    fn test_null_lists() {
        let json = r#"{"concepts": null, "tags": null, "prerequisites": null}"#;
        let meta: ArticleMeta = serde_json::from_str(json).unwrap();
        assert!(meta.concepts.is_empty());
        assert!(meta.tags.is_empty());
        assert!(meta.prerequisites.is_empty());
    }

    #[test]
    fn test_extra_fields() {
        let json = r#"{"title": "Test", "hero-image": "/img/ob.png", "order": 3}"#;
        let meta: ArticleMeta = serde_json::from_str(json).unwrap();
        assert_eq!(
            meta.extra.get("hero-image").and_then(|v| v.as_str()),
            Some("/img/ob.png")
        );
        assert_eq!(meta.extra.get("order").and_then(|v| v.as_i64()), Some(3));
    }
}
