//! tickwiki - navigation tooling for a Markdown article collection.

#![allow(dead_code)]

mod article;
mod cli;
mod config;
mod core;
mod graph;
mod logger;
mod resolver;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Resolve { args } => cli::resolve::run_resolve(args, &config),
        Commands::Related { args } => cli::graph::run_related(args, &config),
        Commands::Path { args } => cli::graph::run_path(args, &config),
        Commands::Validate { args } => cli::validate::run_validate(args, &config),
    }
}
