//! Response construction.
//!
//! # Design Decisions
//! - Body is always the full HTML document, navigation bar included
//! - The fallback page is served with 404 so crawlers and clients can
//!   tell it apart, but it is rendered like any other page

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::pages::Page;
use crate::shell::Rendered;

/// HTTP status for a dispatched page.
pub fn status_for(page: Page) -> StatusCode {
    if page.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    }
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        (status_for(self.page), Html(self.html)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Shell;
    use axum::http::header;

    #[test]
    fn test_status_for_pages() {
        assert_eq!(status_for(Page::Home), StatusCode::OK);
        assert_eq!(status_for(Page::Posts), StatusCode::OK);
        assert_eq!(status_for(Page::NotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_rendered_into_response() {
        let response = Shell::default().render("/missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
