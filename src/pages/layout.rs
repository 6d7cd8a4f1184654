//! Page chrome: the navigation bar and the surrounding document.
//!
//! The navigation bar is rendered on every response, whatever page was
//! dispatched.

use crate::pages::Page;

/// Links shown in the navigation bar, in display order.
pub const NAV_LINKS: [NavLink; 2] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Posts", href: "/posts" },
];

/// One entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn render_nav() -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|link| format!(r#"<a href="{}">{}</a>"#, link.href, link.label))
        .collect();
    format!(r#"<nav class="space-x-4 p-4">{links}</nav>"#)
}

/// Navigation bar followed by the page inside `<main>`.
pub fn render_shell(page: Page) -> String {
    format!(r#"{}<main class="p-4">{}</main>"#, render_nav(), page.render())
}

/// Complete HTML document for `page`.
pub fn render_document(title: &str, page: Page) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en">"#,
            r#"<head><meta charset="utf-8"><title>{title}</title></head>"#,
            "<body><div>{body}</div></body>",
            "</html>",
        ),
        title = escape_html(title),
        body = render_shell(page),
    )
}

/// Escape text for use inside HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
