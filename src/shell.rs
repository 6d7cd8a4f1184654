//! The application shell: route table plus site settings.
//!
//! `Shell::render` is a pure function of the path. It touches no shared
//! mutable state, so the same path always produces the same output.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::history::MemoryHistory;
use crate::pages::{layout, Page};
use crate::routing::RouteTable;

/// Result of dispatching one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The page the route table selected.
    pub page: Page,
    /// Full HTML document: navigation bar followed by the page.
    pub html: String,
}

/// Dispatches navigation paths to pages and renders them.
#[derive(Debug, Clone)]
pub struct Shell {
    routes: Arc<RouteTable>,
    site: SiteConfig,
}

impl Shell {
    pub fn new(routes: Arc<RouteTable>, site: SiteConfig) -> Self {
        Self { routes, site }
    }

    /// Shell over the standard route table.
    pub fn standard(site: SiteConfig) -> Self {
        Self::new(Arc::new(RouteTable::standard()), site)
    }

    pub fn dispatch(&self, path: &str) -> Page {
        self.routes.dispatch(path)
    }

    pub fn render(&self, path: &str) -> Rendered {
        let page = self.dispatch(path);
        Rendered {
            page,
            html: layout::render_document(&self.site.title, page),
        }
    }

    /// Render whatever location `history` currently points at.
    pub fn render_current(&self, history: &MemoryHistory) -> Rendered {
        self.render(history.location())
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::standard(SiteConfig::default())
    }
}
