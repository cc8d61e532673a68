//! # cosim Store
//!
//! Exact in-memory vector similarity search over cosine similarity.
//!
//! ## Features
//!
//! - **Append-only storage** of fixed-dimension vectors with string labels
//! - **Exact brute-force top-K search** with deterministic tie-breaking
//! - **Atomic batch inserts** that never partially apply
//! - **Optional mirror** adapter for cross-validating against an external index
//!
//! ## Example
//!
//! ```
//! use cosim_store::VectorStore;
//!
//! fn main() -> cosim_store::Result<()> {
//!     let mut store = VectorStore::new(3);
//!     store.append(
//!         vec![vec![1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0]],
//!         vec!["doc1".to_string(), "doc4".to_string()],
//!     )?;
//!
//!     let results = store.search(&[1.0, 2.0, 2.0], 1)?;
//!     assert_eq!(results[0].label, "doc1");
//!     Ok(())
//! }
//! ```

mod error;
mod mirror;
mod similarity;
mod store;
mod types;

pub use error::{Result, StoreError};
pub use mirror::{ExactMirror, IndexMirror, MirrorHit, MirroredStore};
pub use similarity::cosine_similarity;
pub use store::VectorStore;
pub use types::{Entry, ScoredResult};
