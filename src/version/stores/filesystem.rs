//! Directory-backed artifact store
//!
//! Key `K` lives in the file `<dir>/K<suffix>`, e.g.
//! `metadata_files/algebra-1.2.metadata`.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::version::error::StoreError;
use crate::version::store::MetadataStore;

/// File suffix of package metadata artifacts
pub const METADATA_SUFFIX: &str = ".metadata";

/// File suffix of package archives
pub const ARCHIVE_SUFFIX: &str = ".zip";

#[derive(Debug, Clone)]
pub struct FsStore {
    dir: PathBuf,
    suffix: String,
}

impl FsStore {
    /// Creates a store over `dir` whose artifacts end in `suffix`
    pub fn new(dir: impl Into<PathBuf>, suffix: &str) -> Self {
        Self {
            dir: dir.into(),
            suffix: suffix.to_string(),
        }
    }

    /// Store over a directory of `.metadata` files
    pub fn metadata(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, METADATA_SUFFIX)
    }

    /// Store over a directory of `.zip` package archives
    pub fn archives(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, ARCHIVE_SUFFIX)
    }

    fn path_of(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}{}", key, self.suffix))
    }
}

#[async_trait::async_trait]
impl MetadataStore for FsStore {
    async fn enumerate(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Store directory {:?} does not exist", self.dir);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(key) = name.strip_suffix(self.suffix.as_str())
                && key.starts_with(prefix)
            {
                keys.push(key.to_string());
            }
        }
        keys.sort();

        Ok(keys)
    }

    async fn read(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        match tokio::fs::read(self.path_of(key)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(key.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn contains(&self, key: &str) -> Result<bool, StoreError> {
        let metadata = match tokio::fs::metadata(self.path_of(key)).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        Ok(metadata.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with_files(files: &[(&str, &str)]) -> (TempDir, FsStore) {
        let temp_dir = TempDir::new().unwrap();
        for (name, content) in files {
            std::fs::write(temp_dir.path().join(name), content).unwrap();
        }
        let store = FsStore::metadata(temp_dir.path());
        (temp_dir, store)
    }

    #[tokio::test]
    async fn enumerate_returns_sorted_keys_without_suffix() {
        let (_temp_dir, store) = store_with_files(&[
            ("algebra-1.2.metadata", "b"),
            ("algebra-1.0.metadata", "a"),
            ("geometry-1.0.metadata", "c"),
            ("algebra-notes.txt", "ignored"),
        ]);

        let keys = store.enumerate("algebra-").await.unwrap();

        assert_eq!(keys, vec!["algebra-1.0", "algebra-1.2"]);
    }

    #[tokio::test]
    async fn enumerate_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FsStore::metadata(temp_dir.path().join("missing"));

        assert!(store.enumerate("algebra-").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn read_returns_file_bytes() {
        let (_temp_dir, store) = store_with_files(&[("algebra-1.0.metadata", "name = algebra")]);

        let bytes = store.read("algebra-1.0").await.unwrap();

        assert_eq!(bytes, b"name = algebra");
    }

    #[tokio::test]
    async fn read_missing_key_returns_not_found() {
        let (_temp_dir, store) = store_with_files(&[]);

        let result = store.read("algebra-9.9").await;

        assert!(matches!(result, Err(StoreError::NotFound(key)) if key == "algebra-9.9"));
    }

    #[tokio::test]
    async fn contains_reports_presence() {
        let (_temp_dir, store) = store_with_files(&[("algebra-1.0.metadata", "")]);

        assert!(store.contains("algebra-1.0").await.unwrap());
        assert!(!store.contains("algebra-2.0").await.unwrap());
    }

    #[tokio::test]
    async fn archive_store_uses_zip_suffix() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("algebra-1.0.zip"), [0x50, 0x4b]).unwrap();
        std::fs::write(temp_dir.path().join("algebra-1.1.metadata"), "").unwrap();
        let store = FsStore::archives(temp_dir.path());

        assert_eq!(store.enumerate("algebra-").await.unwrap(), vec!["algebra-1.0"]);
        assert_eq!(store.read("algebra-1.0").await.unwrap(), vec![0x50, 0x4b]);
    }
}
