//! Execution context for tools.

use sajarubox_catalog::Catalog;
use sajarubox_fs::DocumentStore;
use std::path::PathBuf;
use std::sync::Arc;

/// Execution context passed to tools and resource handlers.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Document root accessor.
    pub store: DocumentStore,
    /// Resource and topic tables.
    pub catalog: Arc<Catalog>,
    /// Unique operation ID for logging.
    pub operation_id: String,
}

impl ToolContext {
    /// Create a context over a root directory with the built-in catalog.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_catalog(root, Catalog::builtin().clone())
    }

    /// Create with a custom catalog.
    pub fn with_catalog(root: impl Into<PathBuf>, catalog: Catalog) -> Self {
        Self {
            store: DocumentStore::new(root),
            catalog: Arc::new(catalog),
            operation_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Same store and catalog, fresh operation ID.
    pub fn next_operation(&self) -> Self {
        Self {
            store: self.store.clone(),
            catalog: Arc::clone(&self.catalog),
            operation_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}
