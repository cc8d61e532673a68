use crate::error::{Result, StoreError};

/// Cosine similarity between two vectors: `dot(a,b) / (|a| * |b|)`.
///
/// Mismatched lengths are an error rather than a silent truncation to the
/// shorter vector, and a zero-magnitude operand is an error rather than a
/// NaN leaking into ranking. For well-formed non-zero inputs the result is
/// mathematically in `[-1.0, 1.0]`; floating-point rounding may land a hair
/// outside and is not clamped.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(StoreError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(StoreError::UndefinedSimilarity);
    }

    Ok(dot_product / (norm_a * norm_b))
}
