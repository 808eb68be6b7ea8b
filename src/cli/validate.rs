//! Validate command: surface editorial debt before it ships.
//!
//! Checks two things across the collection:
//! - wiki references in article bodies that no index key resolves
//! - `prerequisites`/`related-articles` slugs absent from the collection
//!
//! The navigation core tolerates both at render time by design; this
//! command exists so authors can find them anyway.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use owo_colors::OwoColorize;
use parking_lot::RwLock;
use rayon::prelude::*;

use crate::article::{ArticleStore, ScannedArticle, collect_content_files, scan_articles};
use crate::cli::ValidateArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::resolver::{ResolverCache, extract_wiki_refs};
use crate::utils::{plural_count, plural_s};

/// Execute validate command.
pub fn run_validate(args: &ValidateArgs, config: &SiteConfig) -> Result<()> {
    // The index must cover the whole collection even when only a subset
    // of files is being checked: links point anywhere.
    let all_files = collect_content_files(&[], &config.content.dir)?;
    let all_scanned = scan_articles(&all_files, config.get_root(), true)?;
    let store = ArticleStore::from_articles(all_scanned.iter().map(|s| s.article.clone()));

    let to_check: Vec<&ScannedArticle> = if args.paths.is_empty() {
        all_scanned.iter().collect()
    } else {
        let requested = collect_content_files(&args.paths, &config.content.dir)?;
        let requested: Vec<_> = requested
            .iter()
            .map(|p| p.strip_prefix(config.get_root()).unwrap_or(p))
            .collect();
        all_scanned
            .iter()
            .filter(|s| requested.iter().any(|r| *r == s.path))
            .collect()
    };

    if to_check.is_empty() {
        log!("validate"; "no content files found");
        return Ok(());
    }

    log!("validate"; "validating {}", plural_count(to_check.len(), "article"));

    let cache = ResolverCache::new(&store, config.content.url_prefix.clone());
    let index = cache.load();

    let report = Arc::new(RwLock::new(ValidationReport::default()));

    to_check.par_iter().for_each(|scanned| {
        let source = scanned.path.display().to_string();

        for reference in extract_wiki_refs(&scanned.body) {
            if index.resolve(&reference).is_none() {
                report.write().add_link(
                    source.clone(),
                    format!("[[{}]]", reference),
                    "no matching article".to_string(),
                );
            }
        }

        let meta = &scanned.article.meta;
        for slug in meta.prerequisites.iter().chain(&meta.related_articles) {
            if !store.contains(slug) {
                report.write().add_metadata(
                    source.clone(),
                    format!("`{}`", slug),
                    "unknown slug".to_string(),
                );
            }
        }
    });

    let report = Arc::try_unwrap(report).unwrap().into_inner();

    report.print();
    log!("validate"; "{}", report);

    let warn_only = args.warn_only || config.validate.warn_only;
    if report.error_count() > 0 && !warn_only {
        anyhow::bail!(
            "validation failed: {}",
            plural_count(report.error_count(), "finding")
        );
    }
    Ok(())
}

/// A single validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The reference/slug that failed.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// Unified validation report, grouped by source file.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Unresolvable wiki references.
    links: BTreeMap<String, Vec<ValidationError>>,
    /// Dangling metadata slugs.
    metadata: BTreeMap<String, Vec<ValidationError>>,
}

impl ValidationReport {
    /// Add an unresolvable wiki reference.
    pub fn add_link(&mut self, source: String, target: String, reason: String) {
        self.links
            .entry(source)
            .or_default()
            .push(ValidationError { target, reason });
    }

    /// Add a dangling metadata slug.
    pub fn add_metadata(&mut self, source: String, target: String, reason: String) {
        self.metadata
            .entry(source)
            .or_default()
            .push(ValidationError { target, reason });
    }

    /// Total finding count.
    pub fn error_count(&self) -> usize {
        self.links.values().map(|v| v.len()).sum::<usize>()
            + self.metadata.values().map(|v| v.len()).sum::<usize>()
    }

    /// Print the full report to stderr (links -> metadata).
    pub fn print(&self) {
        Self::print_section("wiki links", &self.links);
        Self::print_section("metadata", &self.metadata);
    }

    fn print_section(name: &str, errors: &BTreeMap<String, Vec<ValidationError>>) {
        if errors.is_empty() {
            return;
        }
        eprintln!();

        let file_count = errors.len();
        let error_count: usize = errors.values().map(|v| v.len()).sum();

        eprintln!(
            "{} {}",
            name.red().bold(),
            format!(
                "({file_count} file{}, {error_count} finding{})",
                plural_s(file_count),
                plural_s(error_count)
            )
            .dimmed()
        );

        for (path, errs) in errors {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for e in errs {
                eprintln!("{} {} {}", "→".red(), e.target, e.reason.dimmed());
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        if total == 0 {
            write!(f, "{}", "all references resolve".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("finding{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let mut report = ValidationReport::default();
        assert_eq!(report.error_count(), 0);

        report.add_link("a.md".into(), "[[Missing]]".into(), "no match".into());
        report.add_link("a.md".into(), "[[Other]]".into(), "no match".into());
        report.add_metadata("b.md".into(), "`gone`".into(), "unknown slug".into());

        assert_eq!(report.error_count(), 3);
    }

    #[test]
    fn test_report_display() {
        owo_colors::set_override(false);
        let mut report = ValidationReport::default();
        assert_eq!(report.to_string(), "all references resolve");

        report.add_link("a.md".into(), "[[X]]".into(), "no match".into());
        assert!(report.to_string().contains("1 finding"));
        owo_colors::unset_override();
    }
}
