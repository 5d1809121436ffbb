//! Newest-document discovery on the season listing.
//!
//! The page is a flat list in which event headers (plain entries) precede the
//! document links published for that event, newest first. The scan takes the
//! first qualifying document link and then walks back for its event header.
//!
//! Newest-first is an assumption about the FIA publishing convention. If the
//! page ever reorders, the scan silently picks another document.

use regex::Regex;
use url::Url;

use crate::dom::{ListItem, ListingPage};
use crate::event;
use crate::patterns::STEWARDS_TITLE;
use crate::result::DocumentCandidate;
use crate::title::clean_title;
use crate::url_utils::{normalize_url, resolve_href};

/// Title used when the document link has no visible text.
pub const FALLBACK_TITLE: &str = "generic document";

/// Which hrefs count as published documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRules {
    /// File extension the lower-cased href must end with.
    pub extension: String,

    /// Path segment the href must contain.
    pub path_segment: String,
}

impl Default for DocumentRules {
    fn default() -> Self {
        Self {
            extension: ".pdf".to_string(),
            path_segment: "/system/files/decision-document/".to_string(),
        }
    }
}

impl DocumentRules {
    /// Check whether a raw href points at a published document.
    #[must_use]
    pub fn accepts(&self, href: &str) -> bool {
        href.to_lowercase().ends_with(&self.extension) && href.contains(&self.path_segment)
    }
}

/// Optional restriction to a document subtype, matched against the cleaned title.
///
/// Applied by the caller over [`document_candidates`]; the parser itself
/// never filters.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pattern: Option<Regex>,
}

impl CategoryFilter {
    /// A filter that accepts every document.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Only documents issued by the stewards (decisions, stewards' notes).
    #[must_use]
    pub fn stewards_only() -> Self {
        Self {
            pattern: Some(STEWARDS_TITLE.clone()),
        }
    }

    #[must_use]
    pub fn accepts(&self, candidate: &DocumentCandidate) -> bool {
        self.pattern
            .as_ref()
            .is_none_or(|pattern| pattern.is_match(&candidate.title))
    }
}

/// Find the newest document on the page.
///
/// Returns `None` when no entry links to a qualifying document, which is a
/// normal state early in a season.
#[must_use]
pub fn find_latest_document(
    page: &ListingPage,
    base: &Url,
    rules: &DocumentRules,
) -> Option<DocumentCandidate> {
    // First qualifying entry is the newest; nothing after it is looked at.
    document_candidates(page, base, rules).next()
}

/// All qualifying documents on the page, newest first.
///
/// Candidates are built lazily, so taking the first one stops the scan.
pub fn document_candidates<'a>(
    page: &'a ListingPage,
    base: &'a Url,
    rules: &'a DocumentRules,
) -> impl Iterator<Item = DocumentCandidate> + 'a {
    let items = page.items();
    items
        .iter()
        .enumerate()
        .filter_map(move |(position, item)| match item {
            ListItem::Link { href, text } if rules.accepts(href) => {
                Some(build_candidate(items, position, href, text, base))
            }
            _ => None,
        })
}

fn build_candidate(
    items: &[ListItem],
    position: usize,
    href: &str,
    text: &str,
    base: &Url,
) -> DocumentCandidate {
    let url = normalize_url(&resolve_href(href, base));

    let title = match clean_title(text) {
        cleaned if cleaned.is_empty() => FALLBACK_TITLE.to_string(),
        cleaned => cleaned,
    };

    let preceding_headers = items[..position].iter().rev().filter_map(|item| match item {
        ListItem::Header { text } => Some(text.as_str()),
        _ => None,
    });
    let event_name = event::resolve_from_neighbors(preceding_headers)
        .unwrap_or_else(|| event::resolve_from_url(&url));

    tracing::debug!(position, %url, %event_name, "document candidate");

    DocumentCandidate {
        event_name,
        title,
        url,
    }
}
