//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the ordered route table
//! - Validate table shape once, at construction
//! - Select exactly one page for any path
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc, no locks)
//! - O(n) scan in table order; first match wins
//! - The trailing wildcard makes dispatch total, so there is no NoMatch

use thiserror::Error;

use crate::pages::Page;
use crate::routing::matcher::{ExactMatcher, Matcher, WildcardMatcher};

/// Errors raised when a route table is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route table has no wildcard route")]
    MissingWildcard,

    #[error("wildcard route at position {0} is not the last entry")]
    WildcardNotLast(usize),

    #[error("duplicate route pattern {0:?}")]
    DuplicatePattern(String),
}

/// An association between a path pattern and the page it renders.
#[derive(Debug)]
pub struct Route {
    matcher: Box<dyn Matcher>,
    page: Page,
}

impl Route {
    /// Route that matches one literal path.
    pub fn exact(path: impl Into<String>, page: Page) -> Self {
        Self {
            matcher: Box::new(ExactMatcher::new(path)),
            page,
        }
    }

    /// Catch-all route.
    pub fn wildcard(page: Page) -> Self {
        Self {
            matcher: Box::new(WildcardMatcher),
            page,
        }
    }

    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_wildcard(&self) -> bool {
        self.matcher.is_wildcard()
    }

    fn matches(&self, path: &str) -> bool {
        self.matcher.matches(path)
    }
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Page,
}

impl RouteTable {
    /// Build a table, checking that it ends in exactly one wildcard and
    /// that no literal pattern appears twice.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let last = routes.len().checked_sub(1);

        for (i, route) in routes.iter().enumerate() {
            if route.is_wildcard() && Some(i) != last {
                return Err(RouteTableError::WildcardNotLast(i));
            }
            let duplicate = routes[..i]
                .iter()
                .any(|earlier| !route.is_wildcard() && earlier.pattern() == route.pattern());
            if duplicate {
                return Err(RouteTableError::DuplicatePattern(route.pattern().to_string()));
            }
        }

        let fallback = match routes.last() {
            Some(route) if route.is_wildcard() => route.page(),
            _ => return Err(RouteTableError::MissingWildcard),
        };

        Ok(Self { routes, fallback })
    }

    /// The application's table: `/` → Home, `/posts` → Posts, `*` → NotFound.
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route::exact("/", Page::Home),
                Route::exact("/posts", Page::Posts),
                Route::wildcard(Page::NotFound),
            ],
            fallback: Page::NotFound,
        }
    }

    /// Select the page for `path`. Never fails.
    pub fn dispatch(&self, path: &str) -> Page {
        self.routes
            .iter()
            .find(|route| route.matches(path))
            .map(Route::page)
            .unwrap_or(self.fallback)
    }

    /// Routes in evaluation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
