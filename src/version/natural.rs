//! Natural ("human") ordering for version listings
//!
//! Digit runs compare by numeric value, everything else byte-wise, so
//! `1.9` sorts before `1.10`.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static CHUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+|\D+").expect("valid chunk pattern"));

/// Compare two strings in natural order.
///
/// Equal-by-value strings (`1.01` and `1.1`) fall back to byte-wise order so
/// the ordering is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = CHUNK.find_iter(a).map(|m| m.as_str());
    let mut right = CHUNK.find_iter(b).map(|m| m.as_str());

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => compare_chunks(x, y),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}

/// Sort `versions` in place in natural order
pub fn natural_sort(versions: &mut [String]) {
    versions.sort_by(|a, b| natural_cmp(a, b));
}

fn compare_chunks(x: &str, y: &str) -> Ordering {
    let x_digits = x.bytes().all(|b| b.is_ascii_digit());
    let y_digits = y.bytes().all(|b| b.is_ascii_digit());

    match (x_digits, y_digits) {
        (true, true) => {
            // Compare by value without parsing, so long runs cannot overflow
            let x = x.trim_start_matches('0');
            let y = y.trim_start_matches('0');
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => x.cmp(y),
    }
}
