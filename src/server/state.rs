//! Shared handler state
//!
//! Groups the stores the request handlers read from. The stores themselves
//! hold no per-request data, so cloning the state only bumps reference counts.

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::version::store::MetadataStore;
use crate::version::stores::FsStore;

#[derive(Clone)]
pub struct IndexState {
    metadata: Arc<dyn MetadataStore>,
    archives: Arc<dyn MetadataStore>,
}

impl IndexState {
    /// Create a new IndexState with the given stores
    pub fn new(metadata: Arc<dyn MetadataStore>, archives: Arc<dyn MetadataStore>) -> Self {
        Self { metadata, archives }
    }

    /// Filesystem-backed state for the configured directories
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(
            Arc::new(FsStore::metadata(&storage.metadata_dir)),
            Arc::new(FsStore::archives(&storage.archive_dir)),
        )
    }

    /// Store of `.metadata` artifacts
    pub fn metadata(&self) -> &Arc<dyn MetadataStore> {
        &self.metadata
    }

    /// Store of package archives
    pub fn archives(&self) -> &Arc<dyn MetadataStore> {
        &self.archives
    }
}
