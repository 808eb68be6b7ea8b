//! Wiki-link rewriting and extraction over Markdown sources.
//!
//! HFT articles are dense with code blocks, and snippets like
//! `array[[i]]` or doc-test fixtures must never be treated as wiki
//! references. Both entry points therefore walk the Markdown event
//! stream first and ignore everything inside fenced, indented, or
//! inline code.

use std::ops::Range;
use std::sync::LazyLock;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use regex::Regex;

use super::LinkIndex;

/// Author-facing `[[Article Name]]` reference syntax.
static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\[\]]+)\]\]").expect("wiki-link regex is valid"));

/// Rewrite every resolvable `[[Name]]` into a Markdown link.
///
/// Resolvable references become `[Name](<url>)`; unresolvable ones are
/// rendered as the bare reference text with the brackets stripped, so a
/// broken link degrades to plain prose instead of failing the build.
pub fn rewrite_wiki_links(markdown: &str, index: &LinkIndex) -> String {
    let code = code_ranges(markdown);
    let mut out = String::with_capacity(markdown.len());
    let mut last = 0;

    for caps in WIKI_LINK.captures_iter(markdown) {
        let m = caps.get(0).expect("match 0 always present");
        if in_code(&code, m.range()) {
            continue;
        }

        out.push_str(&markdown[last..m.start()]);
        let text = caps[1].trim();
        match index.resolve(text) {
            Some(url) => {
                out.push_str(&format!("[{}]({})", text, url));
            }
            None => out.push_str(text),
        }
        last = m.end();
    }

    out.push_str(&markdown[last..]);
    out
}

/// Extract all wiki references from a Markdown body, code spans excluded.
///
/// Returns the raw reference texts in document order, unresolved; callers
/// decide what a miss means (the validator reports it, the rewriter
/// degrades it to plain text).
pub fn extract_wiki_refs(markdown: &str) -> Vec<String> {
    let code = code_ranges(markdown);

    WIKI_LINK
        .captures_iter(markdown)
        .filter(|caps| {
            let m = caps.get(0).expect("match 0 always present");
            !in_code(&code, m.range())
        })
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Byte ranges of the source covered by code blocks or inline code.
fn code_ranges(markdown: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut block_start: Option<usize> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(_)) => block_start = Some(range.start),
            Event::End(TagEnd::CodeBlock) => {
                if let Some(start) = block_start.take() {
                    ranges.push(start..range.end);
                }
            }
            Event::Code(_) => ranges.push(range),
            _ => {}
        }
    }

    ranges
}

fn in_code(ranges: &[Range<usize>], m: Range<usize>) -> bool {
    ranges.iter().any(|r| m.start >= r.start && m.end <= r.end)
}
