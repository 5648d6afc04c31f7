//! Store test utilities

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;

use mathget_index::config::StorageConfig;
use mathget_index::server::routes::build_router;
use mathget_index::server::state::IndexState;

/// On-disk index fixture with a metadata and an archive directory
pub struct IndexFixture {
    pub temp_dir: TempDir,
}

impl IndexFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("metadata_files")).unwrap();
        std::fs::create_dir_all(temp_dir.path().join("packages")).unwrap();
        Self { temp_dir }
    }

    /// Store `<package>-<version>.metadata` for each version, with content
    /// `version = <version>`
    pub fn with_metadata(self, package: &str, versions: &[&str]) -> Self {
        for version in versions {
            std::fs::write(
                self.metadata_path(package, version),
                format!("version = {}", version),
            )
            .unwrap();
        }
        self
    }

    /// Store `<package>-<version>.zip` for each version
    pub fn with_archives(self, package: &str, versions: &[&str]) -> Self {
        for version in versions {
            std::fs::write(
                self.storage()
                    .archive_dir
                    .join(format!("{}-{}.zip", package, version)),
                [0x50, 0x4b, 0x03, 0x04],
            )
            .unwrap();
        }
        self
    }

    pub fn metadata_path(&self, package: &str, version: &str) -> std::path::PathBuf {
        self.storage()
            .metadata_dir
            .join(format!("{}-{}.metadata", package, version))
    }

    pub fn storage(&self) -> StorageConfig {
        StorageConfig {
            metadata_dir: self.temp_dir.path().join("metadata_files"),
            archive_dir: self.temp_dir.path().join("packages"),
        }
    }

    pub fn router(&self) -> Router {
        build_router(IndexState::from_config(&self.storage()))
    }
}

/// Response parts collected from a routed request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .map(|value| value.to_str().unwrap())
    }
}

/// Send a GET request through the router
pub async fn get(router: Router, uri: &str) -> TestResponse {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}
