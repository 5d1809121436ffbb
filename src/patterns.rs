//! Compiled regex patterns for listing text and URLs.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Patterns are organized by the component that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Title Cleaning Patterns
// =============================================================================

/// Matches any run of whitespace, including non-breaking spaces from the page.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Matches the "published on" marker that FIA titles embed before the publication date.
pub static PUBLISHED_ON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)published on").expect("PUBLISHED_ON regex"));

/// Matches an `HH:MM` time glued to a zone abbreviation, e.g. `14:05CET` or `14:05CEST`.
///
/// The trailing `\b` keeps longer words such as `14:05CESTX` untouched.
pub static TIME_ZONE_GLUED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\b\d{1,2}:\d{2})([A-Z]{3,4})\b").expect("TIME_ZONE_GLUED regex")
});

// =============================================================================
// Event Name Patterns
// =============================================================================

/// Matches the `<year>_<words>_grand_prix` slug in decision document file names.
///
/// Capture group 1 holds the underscore-delimited words before `grand_prix`.
pub static GRAND_PRIX_SLUG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d{4}_([a-z0-9]+(?:_[a-z0-9]+)*?)_grand_prix")
        .expect("GRAND_PRIX_SLUG regex")
});

// =============================================================================
// Category Filter Patterns
// =============================================================================

/// Matches titles of documents issued by the stewards.
pub static STEWARDS_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Decision|The Stewards)").expect("STEWARDS_TITLE regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_on_is_case_insensitive() {
        assert!(PUBLISHED_ON.is_match("PUBLISHED ON 14.06.25"));
        assert!(PUBLISHED_ON.is_match("Published on"));
    }

    #[test]
    fn time_zone_requires_word_boundary() {
        assert!(TIME_ZONE_GLUED.is_match("14:05CET"));
        assert!(TIME_ZONE_GLUED.is_match("14:05CEST"));
        assert!(!TIME_ZONE_GLUED.is_match("14:05CESTX"));
        assert!(!TIME_ZONE_GLUED.is_match("14:05 CET"));
    }

    #[test]
    fn grand_prix_slug_captures_words() {
        let caps = GRAND_PRIX_SLUG
            .captures("/decision-document/2025_saudi_arabian_grand_prix_-_decision.pdf")
            .and_then(|c| c.get(1))
            .map(|m| m.as_str());
        assert_eq!(caps, Some("saudi_arabian"));
    }

    #[test]
    fn stewards_title_matches_both_forms() {
        assert!(STEWARDS_TITLE.is_match("Decision - Car 44"));
        assert!(STEWARDS_TITLE.is_match("Note from the stewards"));
        assert!(!STEWARDS_TITLE.is_match("Entry List"));
    }
}
