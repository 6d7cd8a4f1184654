//! Page Shell Library
//!
//! A navigation bar plus three routed pages (Home, Posts, Not-Found),
//! served as HTML.

pub mod config;
pub mod history;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod routing;
pub mod shell;

pub use config::schema::ShellConfig;
pub use history::MemoryHistory;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pages::Page;
pub use routing::RouteTable;
pub use shell::{Rendered, Shell};
