//! Resolve command implementation.

use anyhow::Result;

use crate::article::load_articles;
use crate::cli::ResolveArgs;
use crate::config::SiteConfig;
use crate::core::UrlPath;
use crate::log;
use crate::resolver::ResolverCache;

/// Execute resolve command.
///
/// An unresolvable reference is a normal outcome for the resolver, but a
/// non-zero exit here so scripts can branch on it.
pub fn run_resolve(args: &ResolveArgs, config: &SiteConfig) -> Result<()> {
    let url = resolve_reference(&args.reference, config)?;

    match url {
        Some(url) => {
            println!("{}", url);
            Ok(())
        }
        None => {
            log!("resolve"; "no article matches `{}`", args.reference);
            anyhow::bail!("unresolved reference");
        }
    }
}

fn resolve_reference(reference: &str, config: &SiteConfig) -> Result<Option<UrlPath>> {
    let store = load_articles(config, false)?;
    let cache = ResolverCache::new(&store, config.content.url_prefix.clone());
    Ok(cache.load().resolve(reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site_with_article() -> (TempDir, SiteConfig) {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("intro.md"),
            "---\ntitle: Introduction to Order Books\n---\nbody",
        )
        .unwrap();

        let mut config = SiteConfig::from_str("").unwrap();
        config.set_root(tmp.path());
        config.content.dir = content;
        (tmp, config)
    }

    #[test]
    fn test_resolve_known_title() {
        let (_tmp, config) = site_with_article();
        let url = resolve_reference("Introduction to Order Books", &config).unwrap();
        assert_eq!(url.unwrap(), "/blog/intro/");
    }

    #[test]
    fn test_resolve_unknown_title() {
        let (_tmp, config) = site_with_article();
        let url = resolve_reference("Totally Unknown Title", &config).unwrap();
        assert!(url.is_none());
    }
}
