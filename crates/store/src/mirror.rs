use crate::error::{Result, StoreError};
use crate::store::VectorStore;
use crate::types::ScoredResult;
use async_trait::async_trait;

/// A hit returned by a mirror's own search path. Mirror scores are not
/// assumed comparable in scale or sign to the core's cosine score.
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorHit {
    pub label: String,
    pub score: f32,
}

/// Remote index kept in sync with the core store for cross-validation.
///
/// Implementations wrap an external vector database behind an explicit
/// handle with an open/close lifecycle; nothing here is ambient process
/// state. The core store never depends on a mirror for correctness.
#[async_trait]
pub trait IndexMirror: Send {
    async fn insert(&mut self, vectors: &[Vec<f32>], labels: &[String]) -> Result<()>;

    async fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<MirrorHit>>;

    /// Release the underlying connection. Further calls may fail.
    async fn close(&mut self) -> Result<()>;
}

/// Core store paired with an optional mirror.
///
/// Appends go to the core first; a mirror insert failure is logged and
/// dropped so the core's success is never tied to the mirror's health.
pub struct MirroredStore {
    store: VectorStore,
    mirror: Option<Box<dyn IndexMirror>>,
}

impl MirroredStore {
    pub fn new(store: VectorStore) -> Self {
        Self {
            store,
            mirror: None,
        }
    }

    pub fn with_mirror(store: VectorStore, mirror: Box<dyn IndexMirror>) -> Self {
        Self {
            store,
            mirror: Some(mirror),
        }
    }

    pub async fn append(&mut self, vectors: Vec<Vec<f32>>, labels: Vec<String>) -> Result<()> {
        match self.mirror.as_mut() {
            Some(mirror) => {
                self.store.append(vectors.clone(), labels.clone())?;
                if let Err(err) = mirror.insert(&vectors, &labels).await {
                    log::warn!("Mirror insert failed, core store unaffected: {err}");
                }
            }
            None => self.store.append(vectors, labels)?,
        }
        Ok(())
    }

    /// The core's exact search path.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredResult>> {
        self.store.search(query, k)
    }

    /// The mirror's independent search path, for cross-validation.
    pub async fn search_mirror(&self, query: &[f32], top_k: usize) -> Result<Vec<MirrorHit>> {
        match self.mirror.as_ref() {
            Some(mirror) => mirror.search(query, top_k).await,
            None => Err(StoreError::Mirror("no mirror attached".to_string())),
        }
    }

    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    pub async fn close(&mut self) -> Result<()> {
        if let Some(mirror) = self.mirror.as_mut() {
            mirror.close().await?;
        }
        self.mirror = None;
        Ok(())
    }
}

/// In-process reference mirror backed by a second [`VectorStore`].
///
/// Stands in for a remote index during tests and demos; because it shares
/// the core's exact scoring, rank agreement with the core is a correctness
/// check on any other mirror adapter's plumbing.
pub struct ExactMirror {
    store: VectorStore,
    closed: bool,
}

impl ExactMirror {
    pub fn new(dimension: usize) -> Self {
        Self {
            store: VectorStore::new(dimension),
            closed: false,
        }
    }
}

#[async_trait]
impl IndexMirror for ExactMirror {
    async fn insert(&mut self, vectors: &[Vec<f32>], labels: &[String]) -> Result<()> {
        if self.closed {
            return Err(StoreError::Mirror("mirror is closed".to_string()));
        }
        self.store.append(vectors.to_vec(), labels.to_vec())
    }

    async fn search(&self, query: &[f32], top_k: usize) -> Result<Vec<MirrorHit>> {
        if self.closed {
            return Err(StoreError::Mirror("mirror is closed".to_string()));
        }
        let results = self.store.search(query, top_k)?;
        Ok(results
            .into_iter()
            .map(|r| MirrorHit {
                label: r.label,
                score: r.score,
            })
            .collect())
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingMirror;

    #[async_trait]
    impl IndexMirror for FailingMirror {
        async fn insert(&mut self, _vectors: &[Vec<f32>], _labels: &[String]) -> Result<()> {
            Err(StoreError::Mirror("connection refused".to_string()))
        }

        async fn search(&self, _query: &[f32], _top_k: usize) -> Result<Vec<MirrorHit>> {
            Err(StoreError::Mirror("connection refused".to_string()))
        }

        async fn close(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn mirror_insert_failure_does_not_fail_core_append() {
        let mut mirrored = MirroredStore::with_mirror(VectorStore::new(2), Box::new(FailingMirror));
        mirrored
            .append(vec![vec![1.0, 0.0]], vec!["a".to_string()])
            .await
            .unwrap();
        assert_eq!(mirrored.store().len(), 1);
    }

    #[tokio::test]
    async fn core_append_failure_is_still_reported() {
        let mut mirrored = MirroredStore::with_mirror(VectorStore::new(2), Box::new(FailingMirror));
        let err = mirrored
            .append(vec![vec![1.0, 0.0, 0.0]], vec!["a".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DimensionMismatch { .. }));
        assert!(mirrored.store().is_empty());
    }

    #[tokio::test]
    async fn search_mirror_without_mirror_is_an_error() {
        let mirrored = MirroredStore::new(VectorStore::new(2));
        assert!(matches!(
            mirrored.search_mirror(&[1.0, 0.0], 1).await,
            Err(StoreError::Mirror(_))
        ));
    }

    #[tokio::test]
    async fn closed_exact_mirror_rejects_operations() {
        let mut mirror = ExactMirror::new(2);
        mirror.close().await.unwrap();
        assert!(matches!(
            mirror.insert(&[vec![1.0, 0.0]], &["a".to_string()]).await,
            Err(StoreError::Mirror(_))
        ));
        assert!(matches!(
            mirror.search(&[1.0, 0.0], 1).await,
            Err(StoreError::Mirror(_))
        ));
    }
}
