use std::sync::Arc;

use crate::catalog::{Catalog, SimilarityMatrix};
use crate::services::providers::MetadataProvider;

/// Shared application state
///
/// The catalog and similarity matrix are loaded once at startup and
/// read-only for the process lifetime, so handlers share them through
/// plain `Arc`s with no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub similarity: Arc<SimilarityMatrix>,
    pub metadata: Arc<dyn MetadataProvider>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        similarity: SimilarityMatrix,
        metadata: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            similarity: Arc::new(similarity),
            metadata,
        }
    }
}
