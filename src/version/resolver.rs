//! Constraint resolution against a package catalog
//!
//! Picks the single stored version that satisfies a [`Constraint`]. All
//! comparisons happen on padded forms (see [`crate::version::padding`]); the
//! returned identifier is always the original, unpadded one.

use crate::version::constraint::Constraint;
use crate::version::error::IndexError;
use crate::version::padding::PaddedCatalog;

/// Resolve `constraint` against the stored `versions` of `package`.
///
/// `^X` and `_X` take the larger of the padded request and the catalog's
/// newest (`^`) or oldest (`_`) version. `^X` therefore always lands on the
/// newest stored version, and `_X` on `X` itself or the oldest version.
pub fn resolve(
    package: &str,
    versions: &[String],
    constraint: &Constraint,
) -> Result<String, IndexError> {
    if versions.is_empty() {
        return Err(IndexError::UnknownPackage(package.to_string()));
    }

    let catalog = PaddedCatalog::new(versions);
    let no_match = || IndexError::NoMatchingVersion {
        package: package.to_string(),
        constraint: constraint.to_string(),
    };

    let target = match constraint {
        Constraint::Latest => catalog.max_padded().map(str::to_string),
        Constraint::Pinned(prefix) => {
            let dotted = format!("{}.", prefix);
            catalog
                .entries()
                .iter()
                .filter(|e| e.original == *prefix || e.original.starts_with(&dotted))
                .map(|e| e.padded.clone())
                .max()
        }
        Constraint::Exact(requested) => Some(pad_requested(&catalog, requested, constraint)?),
        Constraint::Compatible(requested) => {
            let padded = pad_requested(&catalog, requested, constraint)?;
            catalog
                .max_padded()
                .map(|newest| padded.as_str().max(newest).to_string())
        }
        Constraint::AtLeast(requested) => {
            let padded = pad_requested(&catalog, requested, constraint)?;
            catalog
                .min_padded()
                .map(|oldest| padded.as_str().max(oldest).to_string())
        }
    }
    .ok_or_else(no_match)?;

    catalog
        .original_of(&target)
        .map(str::to_string)
        .ok_or_else(no_match)
}

fn pad_requested(
    catalog: &PaddedCatalog,
    requested: &str,
    constraint: &Constraint,
) -> Result<String, IndexError> {
    catalog
        .pad(requested)
        .ok_or_else(|| IndexError::MalformedConstraint {
            constraint: constraint.to_string(),
            reason: format!(
                "version is longer than the widest stored version ({} bytes)",
                catalog.width()
            ),
        })
}
