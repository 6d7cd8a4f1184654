//! Page definitions.
//!
//! Pages are stateless: each one renders the same literal content every
//! time it is selected.

pub mod layout;

use serde::Serialize;

/// A renderable page, identified by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    Home,
    Posts,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Posts, Page::NotFound];

    /// Identifier used in logs and metric labels.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Posts => "Posts",
            Page::NotFound => "NotFound",
        }
    }

    /// The page's visible text.
    pub fn text(self) -> &'static str {
        match self {
            Page::Home => "Home Page",
            Page::Posts => "Posts Page",
            Page::NotFound => "Page Not Found",
        }
    }

    pub fn is_not_found(self) -> bool {
        matches!(self, Page::NotFound)
    }

    /// Page content as an HTML fragment.
    pub fn render(self) -> String {
        format!("<h1>{}</h1>", self.text())
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text() {
        assert_eq!(Page::Home.text(), "Home Page");
        assert_eq!(Page::Posts.text(), "Posts Page");
        assert_eq!(Page::NotFound.text(), "Page Not Found");
    }

    #[test]
    fn test_page_render_contains_text() {
        for page in Page::ALL {
            assert!(page.render().contains(page.text()));
        }
        assert_eq!(Page::NotFound.render(), "<h1>Page Not Found</h1>");
    }

    #[test]
    fn test_only_not_found_is_flagged() {
        assert!(Page::NotFound.is_not_found());
        assert!(!Page::Home.is_not_found());
        assert!(!Page::Posts.is_not_found());
    }
}
