use serde::{Deserialize, Serialize};

/// A single place candidate produced by a search.
///
/// Candidates are decoded from the geocoding service's wire format and pass
/// through [`reconcile`](crate::reconcile::reconcile) before publication, so
/// within one published list every `display_name` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Human-readable label for the place. Doubles as the deduplication
    /// identity key during reconciliation.
    pub display_name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Ranking score assigned by the service, higher is more prominent.
    /// Zero when the wire record carries none.
    pub importance: f64,
    /// Classification tag from the service (wire field `type`), e.g.
    /// `"administrative"` or `"city"`. Empty when the record carries none.
    pub category: String,
}
