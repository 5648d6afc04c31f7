//! Fixed-width version normalization
//!
//! Versions of a package are right-padded with `.0` chunks until they all
//! share the width of the longest one. Byte-wise comparison of the padded
//! forms then stands in for component-wise numeric comparison. This only
//! holds while every version uses the same component widths: `1.10` pads
//! below `1.2` (`1.10` < `1.20`) and components of 100 or more are not
//! ordered numerically.

/// Width of the longest raw version in `versions`, in bytes.
pub fn max_width<S: AsRef<str>>(versions: &[S]) -> usize {
    versions
        .iter()
        .map(|v| v.as_ref().len())
        .max()
        .unwrap_or(0)
}

/// Pad `version` to exactly `width` bytes.
///
/// Appends `.0` once per two missing bytes, then a single `0` if one byte is
/// still missing. Returns `None` when `version` is already longer than
/// `width`.
///
/// Examples with `width = 5`:
/// - "1" -> "1.0.0"
/// - "1.2" -> "1.2.0"
/// - "1.20" -> "1.200"
pub fn pad_version(version: &str, width: usize) -> Option<String> {
    let gap = width.checked_sub(version.len())?;

    let mut padded = String::with_capacity(width);
    padded.push_str(version);
    padded.push_str(&".0".repeat(gap / 2));
    if padded.len() != width {
        padded.push('0');
    }

    Some(padded)
}

/// One catalog entry: the stored identifier and its padded form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedVersion {
    pub original: String,
    pub padded: String,
}

/// The versions of one package, normalized to a common width.
///
/// Built once per request; the width is carried here instead of being
/// shared between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedCatalog {
    width: usize,
    entries: Vec<PaddedVersion>,
}

impl PaddedCatalog {
    /// Normalize `versions` to the width of the longest one.
    ///
    /// Entry order follows `versions`.
    pub fn new(versions: &[String]) -> Self {
        let width = max_width(versions);
        let entries = versions
            .iter()
            .filter_map(|original| {
                pad_version(original, width).map(|padded| PaddedVersion {
                    original: original.clone(),
                    padded,
                })
            })
            .collect();

        Self { width, entries }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn entries(&self) -> &[PaddedVersion] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pad an arbitrary string to this catalog's width
    pub fn pad(&self, version: &str) -> Option<String> {
        pad_version(version, self.width)
    }

    /// Largest padded form in the catalog
    pub fn max_padded(&self) -> Option<&str> {
        self.entries.iter().map(|e| e.padded.as_str()).max()
    }

    /// Smallest padded form in the catalog
    pub fn min_padded(&self) -> Option<&str> {
        self.entries.iter().map(|e| e.padded.as_str()).min()
    }

    /// Map a padded form back to the stored identifier.
    ///
    /// If two identifiers pad to the same form, the first one wins.
    pub fn original_of(&self, padded: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.padded == padded)
            .map(|e| e.original.as_str())
    }
}
