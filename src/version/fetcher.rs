//! Artifact retrieval for a resolved version

use tracing::debug;

use crate::version::catalog::catalog_versions;
use crate::version::constraint::Constraint;
use crate::version::error::{IndexError, StoreError};
use crate::version::resolver::resolve;
use crate::version::store::{MetadataStore, artifact_key};

/// Artifact content stored for one resolved package version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub version: String,
    pub content: Vec<u8>,
}

/// Resolve `constraint` against the versions currently stored for `package`
pub async fn resolve_stored(
    store: &dyn MetadataStore,
    package: &str,
    constraint: &Constraint,
) -> Result<String, IndexError> {
    let versions = catalog_versions(store, package).await?;
    let version = resolve(package, &versions, constraint)?;
    debug!("Resolved {} {} to {}", package, constraint, version);
    Ok(version)
}

/// Resolve `constraint` for `package` and read the matching artifact
pub async fn lookup_artifact(
    store: &dyn MetadataStore,
    package: &str,
    constraint: &Constraint,
) -> Result<Artifact, IndexError> {
    let version = resolve_stored(store, package, constraint).await?;
    fetch_artifact(store, package, &version).await
}

/// Read the artifact stored for `package` at `version`.
///
/// A key that disappeared since the catalog was enumerated is reported as
/// [`IndexError::ArtifactMissing`].
pub async fn fetch_artifact(
    store: &dyn MetadataStore,
    package: &str,
    version: &str,
) -> Result<Artifact, IndexError> {
    let key = artifact_key(package, version);

    match store.read(&key).await {
        Ok(content) => Ok(Artifact {
            version: version.to_string(),
            content,
        }),
        Err(StoreError::NotFound(_)) => Err(IndexError::ArtifactMissing(key)),
        Err(e) => Err(e.into()),
    }
}
