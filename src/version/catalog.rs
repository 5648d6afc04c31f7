//! Per-request package catalog
//!
//! The catalog is the list of versions currently stored for one package.
//! It is rebuilt from storage on every request and never cached.

use tracing::debug;

use crate::version::error::IndexError;
use crate::version::store::{MetadataStore, package_prefix};

/// Remove path separators from a requested package name so it cannot reach
/// outside the package's own key namespace.
pub fn sanitize_package_name(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '/' | '\\')).collect()
}

/// Whether `remainder`, a key with the `<package>-` prefix removed, is a
/// version of that package rather than a key of a dash-extended sibling
/// such as `algebra-ext-2.0` under `algebra`.
///
/// Versions start with a digit; dashes after the first segment are kept,
/// so `2021-01` is a version while `ext-2.0` is not.
fn is_version_of_package(remainder: &str) -> bool {
    remainder
        .split('-')
        .next()
        .and_then(|segment| segment.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

/// Enumerate the stored versions of `package`, in storage key order.
///
/// Keys of other packages sharing the `<package>-` prefix are skipped.
///
/// # Returns
/// * `Ok(Vec<String>)` - Raw version identifiers, never empty
/// * `Err(IndexError::UnknownPackage)` - If nothing is stored for `package`
pub async fn catalog_versions(
    store: &dyn MetadataStore,
    package: &str,
) -> Result<Vec<String>, IndexError> {
    if package.is_empty() {
        return Err(IndexError::UnknownPackage(package.to_string()));
    }

    let prefix = package_prefix(package);
    let versions: Vec<String> = store
        .enumerate(&prefix)
        .await?
        .into_iter()
        .filter_map(|key| key.strip_prefix(&prefix).map(str::to_string))
        .filter(|version| {
            let owned = is_version_of_package(version);
            if !owned {
                debug!("Skipping {}-{}: not a version of {}", package, version, package);
            }
            owned
        })
        .collect();

    debug!("Found {} versions for {}", versions.len(), package);

    if versions.is_empty() {
        return Err(IndexError::UnknownPackage(package.to_string()));
    }

    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::store::MockMetadataStore;
    use mockall::predicate::eq;
    use rstest::rstest;

    #[rstest]
    #[case("algebra", "algebra")]
    #[case("/algebra", "algebra")]
    #[case("/../algebra/", "..algebra")]
    #[case("a\\b/c", "abc")]
    #[case("/", "")]
    fn sanitize_package_name_strips_separators(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(sanitize_package_name(raw), expected);
    }

    #[tokio::test]
    async fn catalog_versions_strips_package_prefix() {
        let mut store = MockMetadataStore::new();
        store
            .expect_enumerate()
            .with(eq("algebra-"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    "algebra-1.0".to_string(),
                    "algebra-2021-01".to_string(),
                ])
            });

        let versions = catalog_versions(&store, "algebra").await.unwrap();

        assert_eq!(versions, vec!["1.0", "2021-01"]);
    }

    #[rstest]
    #[case("1.0", true)]
    #[case("2021-01", true)]
    #[case("0", true)]
    #[case("ext-2.0", false)]
    #[case("ext", false)]
    #[case("", false)]
    #[case("-1.0", false)]
    fn is_version_of_package_requires_leading_digit(#[case] remainder: &str, #[case] owned: bool) {
        assert_eq!(is_version_of_package(remainder), owned);
    }

    #[tokio::test]
    async fn catalog_versions_skips_dash_extended_sibling_packages() {
        let mut store = MockMetadataStore::new();
        store.expect_enumerate().with(eq("algebra-")).returning(|_| {
            Ok(vec![
                "algebra-1.0".to_string(),
                "algebra-1.2".to_string(),
                "algebra-ext-2.0".to_string(),
            ])
        });

        let versions = catalog_versions(&store, "algebra").await.unwrap();

        assert_eq!(versions, vec!["1.0", "1.2"]);
    }

    #[tokio::test]
    async fn catalog_versions_only_sibling_keys_is_unknown_package() {
        let mut store = MockMetadataStore::new();
        store
            .expect_enumerate()
            .returning(|_| Ok(vec!["algebra-ext-2.0".to_string()]));

        let result = catalog_versions(&store, "algebra").await;

        assert!(matches!(result, Err(IndexError::UnknownPackage(name)) if name == "algebra"));
    }

    #[tokio::test]
    async fn catalog_versions_without_keys_is_unknown_package() {
        let mut store = MockMetadataStore::new();
        store.expect_enumerate().returning(|_| Ok(vec![]));

        let result = catalog_versions(&store, "algebra").await;

        assert!(matches!(result, Err(IndexError::UnknownPackage(name)) if name == "algebra"));
    }

    #[tokio::test]
    async fn catalog_versions_skips_storage_for_empty_name() {
        let mut store = MockMetadataStore::new();
        store.expect_enumerate().never();

        let result = catalog_versions(&store, "").await;

        assert!(matches!(result, Err(IndexError::UnknownPackage(_))));
    }

    #[tokio::test]
    async fn catalog_versions_propagates_storage_errors() {
        let mut store = MockMetadataStore::new();
        store.expect_enumerate().returning(|_| {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        });

        let result = catalog_versions(&store, "algebra").await;

        assert!(matches!(result, Err(IndexError::Storage(_))));
    }
}
