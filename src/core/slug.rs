//! Slug derivation for article identifiers.

use deunicode::deunicode;

/// Turn a file stem (or title) into a stable, URL-safe slug.
///
/// Transliterates Unicode to ASCII, lowercases, and collapses every run
/// of non-alphanumeric characters into a single dash.
pub fn slugify(input: &str) -> String {
    let ascii = deunicode(input);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        assert_eq!(slugify("order-book-basics"), "order-book-basics");
    }

    #[test]
    fn test_spaces_and_case() {
        assert_eq!(slugify("Order Book Basics"), "order-book-basics");
    }

    #[test]
    fn test_collapses_separators() {
        assert_eq!(slugify("lock--free__queues!"), "lock-free-queues");
    }

    #[test]
    fn test_unicode_transliteration() {
        assert_eq!(slugify("Café Latency"), "cafe-latency");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(slugify("--tsc timing--"), "tsc-timing");
    }

    #[test]
    fn test_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
