use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Batch length mismatch: {vectors} vectors but {labels} labels")]
    LengthMismatch { vectors: usize, labels: usize },

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Cosine similarity is undefined for a zero-magnitude vector")]
    UndefinedSimilarity,

    #[error("Mirror error: {0}")]
    Mirror(String),
}
