//! Version listing for a package
//!
//! Produces the `versions = [...]` text served by the versions endpoint.

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::version::catalog::catalog_versions;
use crate::version::error::IndexError;
use crate::version::natural::natural_sort;
use crate::version::store::{MetadataStore, artifact_key};

/// Upper bound on storage presence checks in flight for one listing
const MAX_CONCURRENT_CHECKS: usize = 16;

/// All stored versions of `package` in natural order.
///
/// Every version is checked against storage once more before it is
/// returned; versions whose artifact vanished in the meantime are dropped.
pub async fn list_versions(
    store: &dyn MetadataStore,
    package: &str,
) -> Result<Vec<String>, IndexError> {
    let mut versions = catalog_versions(store, package).await?;
    natural_sort(&mut versions);

    let keys: Vec<String> = versions.iter().map(|v| artifact_key(package, v)).collect();
    let checks: Vec<_> = stream::iter(keys)
        .map(|key| async move { store.contains(&key).await })
        .buffered(MAX_CONCURRENT_CHECKS)
        .collect()
        .await;

    let listed: Vec<String> = versions
        .into_iter()
        .zip(checks)
        .filter_map(|(version, present)| match present {
            Ok(true) => Some(version),
            Ok(false) => {
                debug!("Skipping vanished version {}-{}", package, version);
                None
            }
            Err(e) => {
                warn!("Failed to check {}-{}: {}", package, version, e);
                None
            }
        })
        .collect();

    if listed.is_empty() {
        return Err(IndexError::UnknownPackage(package.to_string()));
    }

    Ok(listed)
}

/// Render versions as the listing body:
///
/// ```text
/// versions = [
///     "1.0",
///     "1.2"
/// ]
/// ```
pub fn render_listing(versions: &[String]) -> String {
    let entries: Vec<String> = versions.iter().map(|v| format!("    \"{}\"", v)).collect();

    format!("versions = [\n{}\n]\n", entries.join(",\n"))
}
