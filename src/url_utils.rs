//! URL Utility Functions
//!
//! Resolution of listing hrefs against the season page and canonicalization
//! of document URLs for equality comparison against the stored state.

use url::Url;

/// Scheme every canonical URL is rewritten to.
const CANONICAL_SCHEME: &str = "https://";

/// Prefixes stripped before the host, checked case-insensitively in this order.
const SCHEME_PREFIXES: [&str; 3] = ["https://", "http://", "//"];

/// Resolve a listing href against the page it was found on.
///
/// Hrefs that already start with `http` are returned as-is (trimmed); anything
/// else is joined onto `base`. If joining fails the trimmed href is returned
/// unchanged so the caller still gets a comparable string.
///
/// # Examples
/// ```
/// use fia_doc_watch::url_utils::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://www.fia.com/documents/season/season-2025-2071").unwrap();
/// assert_eq!(
///     resolve_href("/system/files/decision-document/doc.pdf", &base),
///     "https://www.fia.com/system/files/decision-document/doc.pdf"
/// );
/// ```
#[must_use]
pub fn resolve_href(href: &str, base: &Url) -> String {
    let href = href.trim();

    if href.is_empty() {
        return String::new();
    }

    if starts_with_ignore_case(href, "http") {
        return href.to_string();
    }

    match base.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Canonicalize a URL for equality comparison.
///
/// - the scheme is forced to `https` (a missing or `http` scheme maps to the same target)
/// - the host is lower-cased, the path keeps its case
/// - query string and fragment are dropped
/// - trailing path separators are dropped
///
/// This is a pure string transform: it never fails and never touches the
/// network. Garbage input yields a degenerate but comparable string, and the
/// transform is idempotent for every input.
///
/// # Examples
/// ```
/// use fia_doc_watch::url_utils::normalize_url;
///
/// assert_eq!(normalize_url("HTTP://Example.com/a/b/"), "https://example.com/a/b");
/// assert_eq!(normalize_url("https://example.com/a/b?utm=x#top"), "https://example.com/a/b");
/// ```
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let s = raw.trim();

    let rest = SCHEME_PREFIXES
        .iter()
        .find(|prefix| starts_with_ignore_case(s, prefix))
        .map_or(s, |prefix| &s[prefix.len()..]);

    // Query and fragment both end the resource part.
    let resource = rest.find(['?', '#']).map_or(rest, |idx| &rest[..idx]);
    let resource = resource.trim_end_matches(|c: char| c == '/' || c.is_whitespace());

    let (host, path) = resource
        .find('/')
        .map_or((resource, ""), |idx| resource.split_at(idx));

    format!("{CANONICAL_SCHEME}{}{path}", host.to_lowercase())
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.fia.com/documents/championships/season/season-2025-2071")
            .unwrap_or_else(|e| panic!("Failed to parse base URL: {e}"))
    }

    #[test]
    fn test_resolve_href_relative() {
        assert_eq!(
            resolve_href("/system/files/decision-document/a.pdf", &base()),
            "https://www.fia.com/system/files/decision-document/a.pdf"
        );
        assert_eq!(
            resolve_href("season-2024", &base()),
            "https://www.fia.com/documents/championships/season/season-2024"
        );
    }

    #[test]
    fn test_resolve_href_absolute_kept() {
        assert_eq!(
            resolve_href("  http://other.com/x.pdf ", &base()),
            "http://other.com/x.pdf"
        );
    }

    #[test]
    fn test_resolve_href_empty() {
        assert_eq!(resolve_href("", &base()), "");
        assert_eq!(resolve_href("   ", &base()), "");
    }

    #[test]
    fn test_normalize_superficial_variants_collapse() {
        let canonical = "https://example.com/a/b";
        for variant in [
            "HTTP://Example.com/a/b/",
            "https://example.com/a/b",
            "http://EXAMPLE.COM/a/b?utm_source=x",
            "https://example.com/a/b/#section",
            "//example.com/a/b",
            "example.com/a/b",
            "  https://example.com/a/b//  ",
        ] {
            assert_eq!(normalize_url(variant), canonical, "variant {variant:?}");
        }
    }

    #[test]
    fn test_normalize_preserves_path_case() {
        assert_eq!(
            normalize_url("https://WWW.FIA.com/Decision_Doc.PDF"),
            "https://www.fia.com/Decision_Doc.PDF"
        );
    }

    #[test]
    fn test_normalize_root_path() {
        assert_eq!(normalize_url("https://example.com/"), "https://example.com");
    }

    #[test]
    fn test_normalize_degenerate_input() {
        assert_eq!(normalize_url(""), "https://");
        assert_eq!(normalize_url("   "), "https://");
        assert_eq!(normalize_url("?#"), "https://");
        assert_eq!(normalize_url("/relative"), "https:///relative");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "",
            "https://",
            "HTTP://Example.com/a/b/",
            "https://example.com/",
            "///x//",
            "https://http://x/",
            "x /",
            "https:// x",
            "a//b//",
            "ftp://host/path?q",
            "Ünïcode.Example/Path",
            "#frag-only",
            "garbage with spaces ",
            "https://www.fia.com/sites/default/files/decision-document/2025_azerbaijan_grand_prix_-_decision.pdf",
        ] {
            let once = normalize_url(raw);
            assert_eq!(normalize_url(&once), once, "input {raw:?}");
        }
    }
}
