//! Metrics collection and exposition.
//!
//! # Metrics
//! - `shell_page_renders_total` (counter): renders by page
//! - `shell_render_duration_seconds` (histogram): dispatch + render time by page
//!
//! Recording is a no-op until a recorder is installed, so tests and the
//! CLI can call into the shell freely.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::pages::Page;

/// Install the Prometheus recorder with an HTTP scrape listener on `addr`.
/// Must be called from inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one page render.
pub fn record_render(page: Page, start: Instant) {
    metrics::counter!("shell_page_renders_total", "page" => page.name()).increment(1);
    metrics::histogram!("shell_render_duration_seconds", "page" => page.name())
        .record(start.elapsed().as_secs_f64());
}
