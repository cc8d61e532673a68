use crate::error::{Result, StoreError};
use crate::similarity::cosine_similarity;
use crate::types::{Entry, ScoredResult};

/// Append-only in-memory vector store with exact brute-force top-K search.
///
/// Every vector in a store has the same dimension. The dimension is either
/// fixed at creation or established by the first appended batch.
pub struct VectorStore {
    entries: Vec<Entry>,
    dimension: Option<usize>,
}

impl VectorStore {
    /// Create an empty store with a fixed dimension.
    pub fn new(dimension: usize) -> Self {
        log::info!("Creating VectorStore (dimension {dimension})");
        Self {
            entries: Vec::new(),
            dimension: Some(dimension),
        }
    }

    /// Create an empty store whose dimension is taken from the first
    /// appended vector.
    pub fn with_deferred_dimension() -> Self {
        Self {
            entries: Vec::new(),
            dimension: None,
        }
    }

    /// Append a batch of vectors with a parallel batch of labels.
    ///
    /// The batch is validated in full before anything is stored: a length
    /// mismatch between the two sequences or a wrong-dimension vector
    /// rejects the whole batch and leaves the store untouched.
    pub fn append(&mut self, vectors: Vec<Vec<f32>>, labels: Vec<String>) -> Result<()> {
        if vectors.len() != labels.len() {
            return Err(StoreError::LengthMismatch {
                vectors: vectors.len(),
                labels: labels.len(),
            });
        }

        let dimension = match self.dimension {
            Some(dim) => dim,
            None => match vectors.first() {
                Some(first) => first.len(),
                None => return Ok(()),
            },
        };
        for vector in &vectors {
            if vector.len() != dimension {
                return Err(StoreError::DimensionMismatch {
                    expected: dimension,
                    actual: vector.len(),
                });
            }
        }
        self.dimension = Some(dimension);

        let count = vectors.len();
        for (vector, label) in vectors.into_iter().zip(labels.into_iter()) {
            let index = self.entries.len();
            self.entries.push(Entry {
                vector,
                label,
                index,
            });
        }

        log::info!("Appended {count} vectors. Total: {}", self.entries.len());
        Ok(())
    }

    /// Append a single (vector, label) pair through the batch path.
    pub fn push(&mut self, vector: Vec<f32>, label: impl Into<String>) -> Result<()> {
        self.append(vec![vector], vec![label.into()])
    }

    /// Exact top-K search by cosine similarity.
    ///
    /// Scores every entry against the query, sorts descending by score with
    /// ties broken by ascending insertion index, and returns the first
    /// `min(k, len)` results. `k = 0` and an empty store both yield an
    /// empty result rather than an error.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredResult>> {
        log::debug!("Searching {} entries (k: {k})", self.entries.len());

        if let Some(dimension) = self.dimension {
            if query.len() != dimension {
                return Err(StoreError::DimensionMismatch {
                    expected: dimension,
                    actual: query.len(),
                });
            }
        }

        if self.entries.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let score = cosine_similarity(query, &entry.vector)?;
            scored.push((entry, score));
        }

        scored.sort_by(|(a, sa), (b, sb)| {
            sb.partial_cmp(sa)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.index.cmp(&b.index))
        });
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(entry, score)| ScoredResult {
                label: entry.label.clone(),
                vector: entry.vector.clone(),
                score,
            })
            .collect())
    }

    /// Fixed dimension, or `None` until the first append establishes it.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
