use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Artifact not found: {0}")]
    NotFound(String),
}

/// Every way an index request can fail.
///
/// The HTTP layer answers all of them with the same empty 404; the variants
/// only exist so failures can be told apart in the logs.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Unknown package: {0}")]
    UnknownPackage(String),

    #[error("No version of {package} matches constraint {constraint:?}")]
    NoMatchingVersion { package: String, constraint: String },

    #[error("Artifact missing for key {0}")]
    ArtifactMissing(String),

    #[error("Malformed constraint {constraint:?}: {reason}")]
    MalformedConstraint { constraint: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
