//! Site configuration management for `tickwiki.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                        |
//! |--------------|------------------------------------------------|
//! | `[site]`     | Site metadata (title, description, url)        |
//! | `[content]`  | Content directory and article URL prefix       |
//! | `[validate]` | Link validation behavior (warn-only)           |
//!
//! The config file is searched upward from the current directory; the
//! project root is the config file's parent. All configuration the core
//! needs (which collection to load, URL prefix conventions) lives here —
//! the resolver and graph modules themselves own no configuration.

mod error;

pub use error::ConfigError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::core::UrlPath;
use crate::log;

/// Root configuration structure representing tickwiki.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    root: PathBuf,

    /// Site metadata
    pub site: SiteSection,

    /// Content location and URL conventions
    pub content: ContentSection,

    /// Validation behavior
    pub validate: ValidateSection,
}

/// `[site]` section: informational metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteSection {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
}

/// `[content]` section: where articles live and how their URLs look.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ContentSection {
    /// Content directory (relative to project root until normalized).
    pub dir: PathBuf,
    /// URL prefix stamped onto article slugs, e.g. `/blog/`.
    pub url_prefix: UrlPath,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content"),
            url_prefix: UrlPath::from_page("/blog/"),
        }
    }
}

/// `[validate]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ValidateSection {
    /// Report findings without failing the command.
    pub warn_only: bool,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root
    /// is its parent directory. CLI flags override config values.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match find_config_file(&cli.config) {
            Some(path) => path,
            None => {
                log!(
                    "error";
                    "Config file '{}' not found in this directory or any parent.",
                    cli.config.display()
                );
                bail!("missing config file");
            }
        };

        let mut config = Self::from_path(&config_path)?;

        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;
        config.finalize(&root, cli);

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            let display_path = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            log!("warning"; "unknown fields in {}, ignoring:", display_path);
            for field in &ignored {
                eprintln!("- {}", field);
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Finalize after loading: normalize paths and apply CLI overrides.
    fn finalize(&mut self, root: &Path, cli: &Cli) {
        self.root = normalize_path(root);

        if let Some(dir) = &cli.content {
            self.content.dir = dir.clone();
        }
        self.content.dir = normalize_path(&self.root.join(&self.content.dir));
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path (tests and embedding callers).
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }
}

/// Search upward from cwd for the config file.
fn find_config_file(name: &Path) -> Option<PathBuf> {
    // Absolute path: use directly
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`), falling
/// back to joining with the current directory.
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}
