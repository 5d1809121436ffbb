//! Listing Page Adapter
//!
//! Flattens the season page into the ordered sequence of list entries the
//! document parser works on, using the `dom_query` crate. All `<li>` elements
//! are taken in document order, nested ones included, so the parser never
//! needs to see HTML.

use dom_query::{Document, NodeRef, Selection};

/// One `<li>` entry of the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    /// Entry without any anchor; a possible event-name header.
    Header {
        /// Text nodes joined with single spaces.
        text: String,
    },
    /// Entry whose first `<a href>` may point at a document.
    Link {
        /// Raw href attribute, trimmed.
        href: String,
        /// Visible link text, unprocessed.
        text: String,
    },
    /// Entry with anchors but no usable href. Neither header nor document.
    Other,
}

impl ListItem {
    /// Convenience constructor for header entries.
    #[must_use]
    pub fn header(text: impl Into<String>) -> Self {
        Self::Header { text: text.into() }
    }

    /// Convenience constructor for link entries.
    #[must_use]
    pub fn link(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Link {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// The season page as an ordered, top-to-bottom sequence of list entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    items: Vec<ListItem>,
}

impl ListingPage {
    /// Parse an HTML document into its list entries.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let doc = Document::from(html);
        let items = doc.select("li").iter().map(|li| classify(&li)).collect();
        Self { items }
    }

    /// Decode raw page bytes (honouring a `<meta charset>`) and parse them.
    #[must_use]
    pub fn parse_bytes(html: &[u8]) -> Self {
        Self::parse(&crate::encoding::transcode_to_utf8(html))
    }

    /// Build a page from already-classified entries.
    #[must_use]
    pub fn from_items(items: Vec<ListItem>) -> Self {
        Self { items }
    }

    /// Entries in page order.
    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn classify(li: &Selection) -> ListItem {
    let anchors = li.select("a");
    if !anchors.exists() {
        return ListItem::Header {
            text: joined_text(li),
        };
    }

    // Only the first anchor carrying an href counts.
    let with_href = li.select("a[href]");
    match with_href.first().attr("href") {
        Some(href) => ListItem::Link {
            href: href.trim().to_string(),
            text: with_href.first().text().to_string(),
        },
        None => ListItem::Other,
    }
}

/// Text nodes of the entry, each trimmed, empty ones dropped, joined by spaces.
fn joined_text(sel: &Selection) -> String {
    let Some(root) = sel.nodes().first() else {
        return String::new();
    };

    root.descendants()
        .into_iter()
        .filter(NodeRef::is_text)
        .map(|node| node.text().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
