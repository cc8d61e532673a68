use serde::{Deserialize, Serialize};

/// One stored (vector, label) pair. The insertion index doubles as the
/// tie-break key for equal search scores, so entries are never reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub vector: Vec<f32>,
    pub label: String,
    pub index: usize,
}

/// Search output: the matched entry's label and vector plus its cosine
/// score against the query. Transient, never stored back.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    pub label: String,
    pub vector: Vec<f32>,
    pub score: f32,
}
