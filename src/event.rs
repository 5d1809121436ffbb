//! Event name resolution.
//!
//! The season page groups documents under plain list entries naming the event
//! ("2025 Azerbaijan Grand Prix", "Pre-Season Tests"). When no such entry
//! precedes a document, the name is rebuilt from the document's file slug.

use crate::patterns::GRAND_PRIX_SLUG;

/// Label used when neither the page structure nor the URL names the event.
pub const FALLBACK_EVENT: &str = "Latest event";

/// Substrings that mark a header entry as an event name. Case-sensitive.
const EVENT_MARKERS: [&str; 2] = ["Grand Prix", "Tests"];

/// Check whether a header entry looks like an event name.
///
/// This is a deliberately narrow vocabulary match for the FIA page, not a
/// general classifier.
///
/// # Examples
/// ```
/// use fia_doc_watch::event::looks_like_event_header;
///
/// assert!(looks_like_event_header("2025 Azerbaijan Grand Prix"));
/// assert!(!looks_like_event_header("Decision Document 42"));
/// ```
#[must_use]
pub fn looks_like_event_header(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && EVENT_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Pick the first header that looks like an event name.
///
/// `headers` must be ordered nearest-to-farthest from the document.
#[must_use]
pub fn resolve_from_neighbors<'a, I>(headers: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .find(|header| looks_like_event_header(header))
        .map(|header| header.trim().to_string())
}

/// Rebuild an event name from a `<year>_<words>_grand_prix` document slug.
///
/// Returns [`FALLBACK_EVENT`] when the URL carries no such slug.
///
/// # Examples
/// ```
/// use fia_doc_watch::event::resolve_from_url;
///
/// assert_eq!(
///     resolve_from_url("https://www.fia.com/decision-document/2025_azerbaijan_grand_prix_42.pdf"),
///     "Azerbaijan Grand Prix"
/// );
/// assert_eq!(resolve_from_url("https://www.fia.com/decision-document/misc_42.pdf"), "Latest event");
/// ```
#[must_use]
pub fn resolve_from_url(url: &str) -> String {
    let Some(words) = GRAND_PRIX_SLUG
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
    else {
        return FALLBACK_EVENT.to_string();
    };

    let mut name = words
        .split('_')
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");
    name.push_str(" Grand Prix");
    name
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_header_detection() {
        assert!(looks_like_event_header("2025 Azerbaijan Grand Prix"));
        assert!(looks_like_event_header("  Pre-Season Tests  "));
        assert!(!looks_like_event_header("Decision Document 42"));
        assert!(!looks_like_event_header("   "));
    }

    #[test]
    fn event_header_detection_is_case_sensitive() {
        assert!(!looks_like_event_header("2025 azerbaijan grand prix"));
        assert!(!looks_like_event_header("TESTS"));
    }

    #[test]
    fn neighbors_prefer_nearest_match() {
        let headers = ["Documents", "2025 Monaco Grand Prix", "2025 Spanish Grand Prix"];
        assert_eq!(
            resolve_from_neighbors(headers),
            Some("2025 Monaco Grand Prix".to_string())
        );
    }

    #[test]
    fn neighbors_without_match() {
        assert_eq!(resolve_from_neighbors(["Documents", "Season 2025"]), None);
        assert_eq!(resolve_from_neighbors(Vec::<&str>::new()), None);
    }

    #[test]
    fn url_slug_is_title_cased() {
        assert_eq!(
            resolve_from_url(".../decision-document/2025_azerbaijan_grand_prix_42.pdf"),
            "Azerbaijan Grand Prix"
        );
        assert_eq!(
            resolve_from_url("/decision-document/2025_SAUDI_ARABIAN_GRAND_PRIX_-_entry_list.pdf"),
            "Saudi Arabian Grand Prix"
        );
    }

    #[test]
    fn url_without_slug_falls_back() {
        assert_eq!(resolve_from_url(".../decision-document/misc_42.pdf"), FALLBACK_EVENT);
        assert_eq!(resolve_from_url(""), FALLBACK_EVENT);
        assert_eq!(resolve_from_url("2025_grand_prix.pdf"), FALLBACK_EVENT);
    }
}
