//! Requested version constraints
//!
//! - `latest` (or nothing) - the newest stored version
//! - `1.2.3` - exactly this version
//! - `^1.2` - compatible-with: the newer of `1.2` and the newest stored version
//! - `~1.2` - pinned: the newest version equal to `1.2` or starting with `1.2.`
//! - `_1.2` - at-least: the newer of `1.2` and the oldest stored version

use std::fmt;

pub const LATEST: &str = "latest";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Constraint {
    #[default]
    Latest,
    Exact(String),
    Compatible(String),
    Pinned(String),
    AtLeast(String),
}

impl Constraint {
    /// Parse a constraint from the raw query value. An empty value means `latest`.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == LATEST {
            Constraint::Latest
        } else if let Some(rest) = raw.strip_prefix('~') {
            Constraint::Pinned(rest.to_string())
        } else if let Some(rest) = raw.strip_prefix('^') {
            Constraint::Compatible(rest.to_string())
        } else if let Some(rest) = raw.strip_prefix('_') {
            Constraint::AtLeast(rest.to_string())
        } else {
            Constraint::Exact(raw.to_string())
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Latest => f.write_str(LATEST),
            Constraint::Exact(v) => f.write_str(v),
            Constraint::Compatible(v) => write!(f, "^{}", v),
            Constraint::Pinned(v) => write!(f, "~{}", v),
            Constraint::AtLeast(v) => write!(f, "_{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Constraint::Latest)]
    #[case("latest", Constraint::Latest)]
    #[case("1.2.3", Constraint::Exact("1.2.3".to_string()))]
    #[case("^1.2", Constraint::Compatible("1.2".to_string()))]
    #[case("~1", Constraint::Pinned("1".to_string()))]
    #[case("_0.9", Constraint::AtLeast("0.9".to_string()))]
    #[case("Latest", Constraint::Exact("Latest".to_string()))]
    #[case("^", Constraint::Compatible(String::new()))]
    fn parse_returns_expected(#[case] raw: &str, #[case] expected: Constraint) {
        assert_eq!(Constraint::parse(raw), expected);
    }

    #[rstest]
    #[case("latest")]
    #[case("1.2.3")]
    #[case("^1.2")]
    #[case("~1")]
    #[case("_0.9")]
    fn display_restores_raw_form(#[case] raw: &str) {
        assert_eq!(Constraint::parse(raw).to_string(), raw);
    }
}
