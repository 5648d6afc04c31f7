//! Storage trait for stored version artifacts

#[cfg(test)]
use mockall::automock;

use crate::version::error::StoreError;

/// Key/value access to stored artifacts.
///
/// Keys look like `<package>-<version>`; any file extension or other
/// storage-specific decoration is the implementation's business.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MetadataStore: Send + Sync {
    /// Lists every stored key starting with `prefix`, sorted
    async fn enumerate(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    /// Reads the content stored under `key`
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Raw artifact bytes
    /// * `Err(StoreError::NotFound)` - If nothing is stored under `key`
    async fn read(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Checks whether anything is stored under `key`
    async fn contains(&self, key: &str) -> Result<bool, StoreError>;
}

/// Storage key of one package version
pub fn artifact_key(package: &str, version: &str) -> String {
    format!("{}-{}", package, version)
}

/// Prefix shared by the keys of every version of `package`
pub fn package_prefix(package: &str) -> String {
    format!("{}-", package)
}
