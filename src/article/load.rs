//! Content loading: walk the content directory and materialize articles.
//!
//! Files are parsed in parallel, then sorted by source path so the
//! collection order is deterministic across runs. The ranker and path
//! builder break ties in collection order, and the resolver's last-wins
//! key collisions depend on it too.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::core::slugify;
use crate::debug;

use super::{Article, ArticleMeta, ArticleStore, extract_frontmatter};

/// An article together with its source file and Markdown body.
///
/// The store only needs the article; validation also walks the body.
#[derive(Debug)]
pub struct ScannedArticle {
    pub path: PathBuf,
    pub article: Article,
    pub body: String,
}

/// Collect Markdown content files.
///
/// With no explicit paths, walks the whole content directory. Explicit
/// paths may be files or directories, resolved against cwd first and the
/// content directory second.
pub fn collect_content_files(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    if paths.is_empty() {
        return Ok(collect_markdown_files(content_dir));
    }

    let mut all_files = Vec::new();
    for path in paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if is_markdown(&resolved) {
                all_files.push(resolved);
            } else {
                anyhow::bail!("Not a Markdown content file: {}", path.display());
            }
        } else if resolved.is_dir() {
            all_files.extend(collect_markdown_files(&resolved));
        } else {
            let content_relative = content_dir.join(path);
            anyhow::bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_relative.display()
            );
        }
    }

    Ok(all_files)
}

/// Scan content files into articles, keeping bodies for link validation.
///
/// Results are sorted by path (collection order). Draft articles are
/// filtered out unless `include_drafts` is set.
pub fn scan_articles(
    files: &[PathBuf],
    root: &Path,
    include_drafts: bool,
) -> Result<Vec<ScannedArticle>> {
    let mut scanned: Vec<ScannedArticle> = files
        .par_iter()
        .map(|path| scan_file(path, root))
        .collect::<Result<Vec<_>>>()?;

    scanned.retain(|s| include_drafts || !s.article.is_draft());
    scanned.sort_by(|a, b| a.path.cmp(&b.path));

    debug!("scan"; "loaded {} article(s)", scanned.len());
    Ok(scanned)
}

/// Load the whole content directory into a store (collection snapshot).
pub fn load_articles(config: &SiteConfig, include_drafts: bool) -> Result<ArticleStore> {
    let files = collect_content_files(&[], &config.content.dir)?;
    let scanned = scan_articles(&files, config.get_root(), include_drafts)?;
    Ok(ArticleStore::from_articles(
        scanned.into_iter().map(|s| s.article),
    ))
}

/// Parse one Markdown file: slug from the file stem, metadata from
/// frontmatter, body kept verbatim.
fn scan_file(path: &Path, root: &Path) -> Result<ScannedArticle> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let (meta, body) = match extract_frontmatter(&source)
        .with_context(|| format!("failed to parse frontmatter in {}", path.display()))?
    {
        Some((meta, body)) => (meta, body.to_string()),
        None => (ArticleMeta::default(), source),
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let slug = slugify(&stem);
    if slug.is_empty() {
        anyhow::bail!("cannot derive a slug from {}", path.display());
    }

    Ok(ScannedArticle {
        path: path.strip_prefix(root).unwrap_or(path).to_path_buf(),
        article: Article::new(slug, meta),
        body,
    })
}

/// Walk a directory for Markdown files.
fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_markdown(p))
        .collect()
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md" | "markdown")
    )
}

/// Resolve a path that may be relative to cwd or the content directory.
fn resolve_path(path: &Path, content_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if path.exists() {
        return path.to_path_buf();
    }
    content_dir.join(path)
}
