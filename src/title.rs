//! Document title cleaning.
//!
//! Link text on the season page is assembled from several inline elements, so
//! the raw text often has doubled whitespace, a "Published on" marker glued to
//! the document name and a time glued to its zone code.

use crate::patterns::{PUBLISHED_ON, TIME_ZONE_GLUED, WHITESPACE_RUN};

/// Separator inserted between a document name and its "Published on" marker.
pub const PUBLISHED_SEPARATOR: &str = " | ";

/// Clean raw link text into a stable display title.
///
/// Whitespace runs collapse to one space, a separator is inserted before an
/// unseparated "published on" marker, and `HH:MMZZZ` becomes `HH:MM ZZZ`.
/// Empty or whitespace-only input yields an empty string; the caller decides
/// on a fallback label.
///
/// # Examples
/// ```
/// use fia_doc_watch::title::clean_title;
///
/// assert_eq!(
///     clean_title("Decision  No 42Published on 14:05CET"),
///     "Decision No 42 | Published on 14:05 CET"
/// );
/// ```
#[must_use]
pub fn clean_title(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    let collapsed = collapsed.trim();

    if collapsed.is_empty() {
        return String::new();
    }

    let separated = separate_published_marker(collapsed);
    TIME_ZONE_GLUED
        .replace_all(&separated, "$1 $2")
        .into_owned()
}

/// Insert [`PUBLISHED_SEPARATOR`] before the first "published on" marker unless
/// the text before it already ends with one.
///
/// Only a `|` counts as separation. A plain space between the document name
/// and the marker does not, so `"Doc 12 published on ..."` also gets the
/// separator and both page layouts clean to the same title.
fn separate_published_marker(text: &str) -> String {
    let Some(marker) = PUBLISHED_ON.find(text) else {
        return text.to_string();
    };

    let head = text[..marker.start()].trim_end();
    if head.is_empty() || head.ends_with('|') {
        return text.to_string();
    }

    format!("{head}{PUBLISHED_SEPARATOR}{}", &text[marker.start()..])
}
