//! Path matching logic.
//!
//! # Responsibilities
//! - Match a bare path against a literal pattern
//! - Apply trailing-slash and case options
//!
//! # Design Decisions
//! - Literal patterns only, no dynamic segments
//! - Non-strict mode ignores a single trailing slash on the input
//! - Case-insensitive comparison is ASCII only

use serde::{Deserialize, Serialize};

/// Options that control how paths are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MatchOptions {
    /// When true, a trailing slash on the input is significant.
    pub strict: bool,

    /// When true, paths are compared case-sensitively.
    pub sensitive: bool,
}

/// Trait for matching paths against a pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this pattern.
    fn matches(&self, path: &str) -> bool;
}

/// Matches a path against one literal pattern.
#[derive(Debug, Clone)]
pub struct ExactPathMatcher {
    pattern: String,
    options: MatchOptions,
}

impl ExactPathMatcher {
    /// Create a new matcher. The pattern itself is normalized with the same
    /// trailing-slash rule as incoming paths.
    pub fn new(pattern: impl Into<String>, options: MatchOptions) -> Self {
        let pattern = pattern.into();
        let pattern = if options.strict {
            pattern
        } else {
            trim_trailing_slash(&pattern).to_string()
        };
        Self { pattern, options }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for ExactPathMatcher {
    fn matches(&self, path: &str) -> bool {
        let path = if self.options.strict {
            path
        } else {
            trim_trailing_slash(path)
        };

        if self.options.sensitive {
            path == self.pattern
        } else {
            path.eq_ignore_ascii_case(&self.pattern)
        }
    }
}

/// Strips one trailing slash, keeping the root path intact.
fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_only_root() {
        let matcher = ExactPathMatcher::new("/", MatchOptions::default());
        assert!(matcher.matches("/"));
        assert!(!matcher.matches("/anything"));
        assert!(!matcher.matches(""));
    }

    #[test]
    fn test_trailing_slash() {
        let loose = ExactPathMatcher::new("/about", MatchOptions::default());
        assert!(loose.matches("/about"));
        assert!(loose.matches("/about/"));
        assert!(!loose.matches("/about//"));

        let strict = ExactPathMatcher::new(
            "/about",
            MatchOptions { strict: true, sensitive: false },
        );
        assert!(strict.matches("/about"));
        assert!(!strict.matches("/about/"));
    }

    #[test]
    fn test_case_sensitivity() {
        let insensitive = ExactPathMatcher::new("/About", MatchOptions::default());
        assert!(insensitive.matches("/about"));
        assert!(insensitive.matches("/ABOUT"));

        let sensitive = ExactPathMatcher::new(
            "/About",
            MatchOptions { strict: false, sensitive: true },
        );
        assert!(sensitive.matches("/About"));
        assert!(!sensitive.matches("/about"));
    }
}
