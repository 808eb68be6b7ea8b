//! Frontmatter extraction from Markdown sources.
//!
//! Supports TOML fences (`+++ ... +++`) parsed through serde, and simple
//! YAML-like fences (`--- ... ---`) parsed line by line. Hand-authored
//! frontmatter drifts, so the YAML-like path is forgiving: unknown keys go
//! to `extra`, list fields accept both `[a, b]` and `a, b` spellings.

use anyhow::Result;

use crate::core::Difficulty;

use super::ArticleMeta;

/// Extract frontmatter and return (metadata, body).
///
/// Returns `None` when the source carries no frontmatter fence at all.
pub fn extract_frontmatter(content: &str) -> Result<Option<(ArticleMeta, &str)>> {
    match detect_frontmatter(content) {
        Some((fm, body, is_toml)) => {
            let meta = if is_toml {
                parse_toml(fm)?
            } else {
                parse_yaml_like(fm)
            };
            Ok(Some((meta, body)))
        }
        None => Ok(None),
    }
}

/// Detect and extract frontmatter.
/// Returns `(frontmatter, body, is_toml)` if found.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start();

    // YAML: ---...---
    if trimmed.starts_with("---")
        && let Some(end) = trimmed[3..].find("\n---")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, false));
    }

    // TOML: +++...+++
    if trimmed.starts_with("+++")
        && let Some(end) = trimmed[3..].find("\n+++")
    {
        let fm = trimmed[3..3 + end].trim();
        let body = trimmed[3 + end + 4..].trim_start_matches('\n');
        return Some((fm, body, true));
    }

    None
}

/// Parse TOML frontmatter.
fn parse_toml(content: &str) -> Result<ArticleMeta> {
    toml::from_str(content).map_err(|e| anyhow::anyhow!("Invalid TOML frontmatter: {}", e))
}

/// Parse simple YAML-like frontmatter (key: value).
///
/// Supports standard fields (title, concepts, etc.) and custom fields in
/// `extra`. List keys accept camelCase aliases so older frontmatter keeps
/// loading unchanged.
fn parse_yaml_like(content: &str) -> ArticleMeta {
    let mut meta = ArticleMeta::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let key_lower = key.trim().to_lowercase();
            let value = value.trim();

            match key_lower.as_str() {
                "title" => meta.title = Some(unquote(value).to_string()),
                "description" => meta.description = Some(unquote(value).to_string()),
                "date" | "pubdate" | "pub-date" => meta.date = Some(unquote(value).to_string()),
                "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                "concepts" => meta.concepts = parse_list(value),
                "tags" => meta.tags = parse_list(value),
                "prerequisites" => meta.prerequisites = parse_list(value),
                "related-articles" | "relatedarticles" => {
                    meta.related_articles = parse_list(value);
                }
                "difficulty" => meta.difficulty = parse_difficulty(value),
                "mindmap-branch" | "mindmapbranch" => {
                    meta.mindmap_branch = Some(unquote(value).to_string());
                }
                _ => {
                    // Custom field -> extra (preserve original key case)
                    let key = key.trim().to_string();
                    meta.extra.insert(key, parse_yaml_value(value));
                }
            }
        }
    }

    meta
}

/// Parse a list value: `[a, b]`, `a, b`, or a single item.
fn parse_list(value: &str) -> Vec<String> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);

    inner
        .split(',')
        .map(|s| unquote(s.trim()).to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_difficulty(value: &str) -> Option<Difficulty> {
    match unquote(value).to_ascii_lowercase().as_str() {
        "beginner" => Some(Difficulty::Beginner),
        "intermediate" => Some(Difficulty::Intermediate),
        "advanced" => Some(Difficulty::Advanced),
        _ => None,
    }
}

/// Strip one layer of matching quotes.
fn unquote(s: &str) -> &str {
    let s = s.trim();
    if s.len() >= 2 {
        let bytes = s.as_bytes();
        if (bytes[0] == b'"' && bytes[s.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[s.len() - 1] == b'\'')
        {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Parse a YAML-like value string to JSON value
///
/// Supports booleans, numbers, comma-separated arrays, and strings.
fn parse_yaml_value(s: &str) -> serde_json::Value {
    use serde_json::Value;

    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if s.eq_ignore_ascii_case("null") || s == "~" {
        return Value::Null;
    }

    if let Ok(n) = s.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(n) = s.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(n)
    {
        return Value::Number(num);
    }

    if s.contains(',') || s.starts_with('[') {
        return Value::Array(
            parse_list(s)
                .into_iter()
                .map(Value::String)
                .collect(),
        );
    }

    Value::String(unquote(s).to_string())
}
