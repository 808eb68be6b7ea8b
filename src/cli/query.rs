//! Query command implementation.
//!
//! Extracts article metadata in batch and prints it as JSON, with
//! optional field filtering. Adapted for scripting: output goes to
//! stdout by default or to a file with `--output`.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::article::{ScannedArticle, collect_content_files, scan_articles};
use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let files = collect_content_files(&args.paths, &config.content.dir)?;

    log!("query"; "querying {}", plural_count(files.len(), "file"));

    let scanned = scan_articles(&files, config.get_root(), args.drafts)?;
    let output = format_results(&scanned, args, config);

    output_results(&output, args)
}

/// Format all results as a JSON array with slug/url first.
fn format_results(scanned: &[ScannedArticle], args: &QueryArgs, config: &SiteConfig) -> JsonValue {
    let prefix = &config.content.url_prefix;

    let pages: Vec<JsonValue> = scanned
        .iter()
        .map(|s| {
            let mut obj = Map::new();

            // slug and url always first
            obj.insert("slug".to_string(), JsonValue::String(s.article.slug.clone()));
            obj.insert(
                "url".to_string(),
                JsonValue::String(prefix.join_page(&s.article.slug).as_str().to_string()),
            );

            let meta_value = serde_json::to_value(&s.article.meta).unwrap_or_default();
            if let JsonValue::Object(meta_obj) = meta_value {
                match &args.fields {
                    Some(fields) => {
                        for field in fields {
                            obj.insert(
                                field.clone(),
                                meta_obj.get(field).cloned().unwrap_or(JsonValue::Null),
                            );
                        }
                    }
                    None => {
                        for (key, value) in meta_obj {
                            if !is_empty_value(&value) {
                                obj.insert(key, value);
                            }
                        }
                    }
                }
            }

            JsonValue::Object(obj)
        })
        .collect();

    JsonValue::Array(pages)
}

/// Check if a JSON value is considered "empty" (null, "", or [])
fn is_empty_value(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(arr) => arr.is_empty(),
        _ => false,
    }
}

fn output_results(output: &JsonValue, args: &QueryArgs) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}
