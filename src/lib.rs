//! # fia-doc-watch
//!
//! Watches the FIA season documents page and sends one notification per newly
//! published decision document, remembering the last notified document across
//! runs in a small state file.
//!
//! ## Quick Start
//!
//! ```rust
//! use fia_doc_watch::{find_latest_document_in_html, DocumentRules};
//! use url::Url;
//!
//! let html = r#"<ul>
//!     <li>2025 Azerbaijan Grand Prix</li>
//!     <li><a href="/system/files/decision-document/doc_12.pdf">Doc 12 - Decision</a></li>
//! </ul>"#;
//! let base = Url::parse("https://www.fia.com/documents/season/season-2025-2071").unwrap();
//!
//! let latest = find_latest_document_in_html(html, &base, &DocumentRules::default()).unwrap();
//! assert_eq!(latest.event_name, "2025 Azerbaijan Grand Prix");
//! assert_eq!(latest.url, "https://www.fia.com/system/files/decision-document/doc_12.pdf");
//! ```
//!
//! ## Pipeline
//!
//! - **Fetch**: the listing page is retrieved through a [`PageFetcher`]
//! - **Discover**: the first qualifying document link is the newest one
//! - **Compare**: its canonical URL is checked against the [`SeenStateStore`]
//! - **Notify**: a new document is announced through a [`Notifier`], then persisted

mod error;
mod patterns;
mod result;

/// Listing page adapter over `dom_query`.
pub mod dom;

/// Newest-document discovery.
pub mod listing;

/// Event name resolution from headers or URL slugs.
pub mod event;

/// Document title cleaning.
pub mod title;

/// URL resolution and canonicalization.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Seen-state persistence.
pub mod store;

/// Environment-driven configuration.
pub mod config;

/// Page fetching capability.
pub mod fetch;

/// Notification capability and message formats.
pub mod notify;

/// Watch pass orchestration.
pub mod watch;

// Public API - re-exports
pub use config::{Config, FetchConfig, TelegramConfig};
pub use dom::{ListItem, ListingPage};
pub use error::{Error, Result};
pub use fetch::{HttpFetcher, PageFetcher};
pub use listing::{document_candidates, find_latest_document, CategoryFilter, DocumentRules};
pub use notify::{Notifier, TelegramNotifier};
pub use result::{DocumentCandidate, Outcome, RunReport};
pub use store::SeenStateStore;
pub use watch::{WatchSettings, Watcher};

/// Parses an HTML listing page and returns its newest document.
///
/// # Example
///
/// ```rust
/// use fia_doc_watch::{find_latest_document_in_html, DocumentRules};
/// use url::Url;
///
/// let base = Url::parse("https://www.fia.com/").unwrap();
/// assert!(find_latest_document_in_html("<p>empty</p>", &base, &DocumentRules::default()).is_none());
/// ```
#[must_use]
pub fn find_latest_document_in_html(
    html: &str,
    base: &url::Url,
    rules: &DocumentRules,
) -> Option<DocumentCandidate> {
    find_latest_document(&ListingPage::parse(html), base, rules)
}

/// Same as [`find_latest_document_in_html`], for raw page bytes with charset detection.
#[must_use]
pub fn find_latest_document_in_bytes(
    html: &[u8],
    base: &url::Url,
    rules: &DocumentRules,
) -> Option<DocumentCandidate> {
    find_latest_document(&ListingPage::parse_bytes(html), base, rules)
}
