//! Related and path command implementations.
//!
//! Both load the full collection snapshot, compute the navigation result
//! for one target slug, and print JSON. An unknown slug prints an empty
//! result; per the navigation contract that is data quality, not an
//! error.

use anyhow::Result;

use crate::article::load_articles;
use crate::cli::GraphArgs;
use crate::config::SiteConfig;
use crate::debug;
use crate::graph::{build_learning_path, find_related};

/// Execute related command.
pub fn run_related(args: &GraphArgs, config: &SiteConfig) -> Result<()> {
    let store = load_articles(config, args.drafts)?;

    let related = match store.get(&args.slug) {
        Some(target) => find_related(&store, &target.meta.concepts, &target.slug),
        None => {
            debug!("related"; "slug `{}` not in collection", args.slug);
            Vec::new()
        }
    };

    print_json(&related, args.pretty)
}

/// Execute path command.
pub fn run_path(args: &GraphArgs, config: &SiteConfig) -> Result<()> {
    let store = load_articles(config, args.drafts)?;
    let path = build_learning_path(&store, &args.slug);
    print_json(&path, args.pretty)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", formatted);
    Ok(())
}
