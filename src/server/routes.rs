//! HTTP routes of the package index
//!
//! Every failure answers `404` with an empty body; the reason only shows up
//! in the logs.

use axum::Router;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::server::state::IndexState;
use crate::version::catalog::sanitize_package_name;
use crate::version::constraint::Constraint;
use crate::version::error::IndexError;
use crate::version::fetcher::lookup_artifact;
use crate::version::lister::{list_versions, render_listing};

const TEXT_PLAIN: &str = "text/plain";
const APPLICATION_ZIP: &str = "application/zip";

#[derive(Debug, Default, Deserialize)]
pub struct VersionQuery {
    version: Option<String>,
}

impl IntoResponse for IndexError {
    fn into_response(self) -> Response {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Build the index router.
///
/// The `.php` paths are the ones existing MathGet clients request.
pub fn build_router(state: IndexState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metadata/{*package}", get(get_metadata))
        .route("/versions/{*package}", get(get_versions))
        .route("/install/{*package}", get(get_archive))
        .route("/packages/metadata.php/{*package}", get(get_metadata))
        .route("/packages/versions.php/{*package}", get(get_versions))
        .route("/packages/install.php/{*package}", get(get_archive))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn get_metadata(
    State(state): State<IndexState>,
    package: Result<Path<String>, PathRejection>,
    query: Result<Query<VersionQuery>, QueryRejection>,
) -> Result<Response, IndexError> {
    let package = package_name(package)?;
    let constraint = parse_constraint(query)?;
    debug!("Metadata request for {} {}", package, constraint);

    let artifact = lookup_artifact(state.metadata().as_ref(), &package, &constraint)
        .await
        .inspect_err(|e| log_failure("metadata", &package, e))?;

    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], artifact.content).into_response())
}

async fn get_versions(
    State(state): State<IndexState>,
    package: Result<Path<String>, PathRejection>,
) -> Result<Response, IndexError> {
    let package = package_name(package)?;
    debug!("Versions request for {}", package);

    let versions = list_versions(state.metadata().as_ref(), &package)
        .await
        .inspect_err(|e| log_failure("versions", &package, e))?;

    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], render_listing(&versions)).into_response())
}

async fn get_archive(
    State(state): State<IndexState>,
    package: Result<Path<String>, PathRejection>,
    query: Result<Query<VersionQuery>, QueryRejection>,
) -> Result<Response, IndexError> {
    let package = package_name(package)?;
    let constraint = parse_constraint(query)?;
    debug!("Archive request for {} {}", package, constraint);

    let artifact = lookup_artifact(state.archives().as_ref(), &package, &constraint)
        .await
        .inspect_err(|e| log_failure("install", &package, e))?;

    Ok(([(header::CONTENT_TYPE, APPLICATION_ZIP)], artifact.content).into_response())
}

fn package_name(path: Result<Path<String>, PathRejection>) -> Result<String, IndexError> {
    match path {
        Ok(Path(raw)) => Ok(sanitize_package_name(&raw)),
        Err(rejection) => {
            info!("Rejected package path: {}", rejection);
            Err(IndexError::UnknownPackage(String::new()))
        }
    }
}

fn parse_constraint(
    query: Result<Query<VersionQuery>, QueryRejection>,
) -> Result<Constraint, IndexError> {
    match query {
        Ok(Query(query)) => Ok(Constraint::parse(query.version.as_deref().unwrap_or_default())),
        Err(rejection) => {
            info!("Rejected version query: {}", rejection);
            Err(IndexError::MalformedConstraint {
                constraint: String::new(),
                reason: rejection.body_text(),
            })
        }
    }
}

fn log_failure(route: &str, package: &str, error: &IndexError) {
    match error {
        IndexError::UnknownPackage(_)
        | IndexError::NoMatchingVersion { .. }
        | IndexError::MalformedConstraint { .. } => {
            info!("{} request for {:?} not found: {}", route, package, error)
        }
        IndexError::ArtifactMissing(_) | IndexError::Storage(_) => {
            warn!("{} request for {:?} failed: {}", route, package, error)
        }
    }
}
