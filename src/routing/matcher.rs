//! Path matching logic.
//!
//! # Responsibilities
//! - Match a navigation path exactly (case-sensitive, byte-for-byte)
//! - Match any path at all (wildcard fallback)
//!
//! # Design Decisions
//! - No normalization: `/posts/` and `/Posts` are different paths from `/posts`
//! - No regex, no parameters; the table is a flat list of literals

/// Trait for matching navigation paths against a pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this pattern.
    fn matches(&self, path: &str) -> bool;

    /// The pattern as written in the route table.
    fn pattern(&self) -> &str;

    /// Whether this matcher accepts every path.
    fn is_wildcard(&self) -> bool {
        false
    }
}

/// Matches one literal path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatcher {
    path: String,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactMatcher {
    fn matches(&self, path: &str) -> bool {
        self.path == path
    }

    fn pattern(&self) -> &str {
        &self.path
    }
}

/// Matches every path, including the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WildcardMatcher;

impl WildcardMatcher {
    /// Pattern text used for the catch-all route.
    pub const PATTERN: &'static str = "*";
}

impl Matcher for WildcardMatcher {
    fn matches(&self, _path: &str) -> bool {
        true
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }

    fn is_wildcard(&self) -> bool {
        true
    }
}
