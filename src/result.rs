//! Result types for a watch pass.
//!
//! This module defines the discovered document and the outcome reported by
//! each run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The newest document found on the listing page, before comparison with state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCandidate {
    /// Event the document belongs to, e.g. "2025 Azerbaijan Grand Prix".
    pub event_name: String,

    /// Cleaned display title of the document link.
    pub title: String,

    /// Absolute document URL in canonical form.
    pub url: String,
}

/// What a single watch pass did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The page lists no qualifying document (or the category filter rejected it).
    NoDocument,

    /// The newest document was already notified in an earlier run.
    Unchanged { document: DocumentCandidate },

    /// A notification was sent for a newly observed document.
    Notified { document: DocumentCandidate },
}

impl Outcome {
    /// The document this outcome refers to, if any.
    #[must_use]
    pub fn document(&self) -> Option<&DocumentCandidate> {
        match self {
            Self::NoDocument => None,
            Self::Unchanged { document } | Self::Notified { document } => Some(document),
        }
    }

    #[must_use]
    pub fn is_notified(&self) -> bool {
        matches!(self, Self::Notified { .. })
    }
}

/// Outcome plus the time it was reached, as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub checked_at: DateTime<Utc>,

    #[serde(flatten)]
    pub outcome: Outcome,
}

impl From<Outcome> for RunReport {
    fn from(outcome: Outcome) -> Self {
        Self {
            checked_at: Utc::now(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> DocumentCandidate {
        DocumentCandidate {
            event_name: "2025 Monaco Grand Prix".to_string(),
            title: "Doc 3 - Entry List".to_string(),
            url: "https://www.fia.com/system/files/decision-document/doc_3.pdf".to_string(),
        }
    }

    #[test]
    fn outcome_document_accessor() {
        assert_eq!(Outcome::NoDocument.document(), None);
        let outcome = Outcome::Notified { document: candidate() };
        assert_eq!(outcome.document(), Some(&candidate()));
        assert!(outcome.is_notified());
        assert!(!Outcome::Unchanged { document: candidate() }.is_notified());
    }

    #[test]
    fn report_serializes_flat() {
        let report = RunReport::from(Outcome::Unchanged { document: candidate() });
        let json = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(json["status"], "unchanged");
        assert_eq!(json["document"]["event_name"], "2025 Monaco Grand Prix");
        assert!(json["checked_at"].is_string());
    }
}
