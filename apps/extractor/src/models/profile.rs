use serde::{Deserialize, Serialize};

/// Structured profile assembled from a single parse call.
///
/// Every field defaults to empty when its heuristic finds nothing. Downstream
/// consumers never need to distinguish "not present in the document" from
/// "extractor gave up": both look the same here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Capped at 10, ordered by the skill vocabulary, not document order.
    pub skills: Vec<String>,
    /// Capped at 3, document order.
    pub education: Vec<String>,
    /// Capped at 3, document order.
    pub experience: Vec<String>,
}
