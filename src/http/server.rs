//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router whose only handler is the page dispatcher
//! - Wire up middleware (tracing, timeout, request ID, cache headers)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{set_header::SetResponseHeaderLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ShellConfig;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::shell::Shell;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub shell: Arc<Shell>,
}

/// HTTP server for the page shell.
pub struct HttpServer {
    router: Router,
    config: ShellConfig,
}

impl HttpServer {
    /// Create a server over the standard route table.
    pub fn new(config: ShellConfig) -> Self {
        let shell = Shell::standard(config.site.clone());
        Self::with_shell(config, shell)
    }

    pub fn with_shell(config: ShellConfig, shell: Shell) -> Self {
        let state = AppState {
            shell: Arc::new(shell),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Every path goes to the fallback; the shell's route table, not
    /// Axum's, decides which page renders.
    #[allow(deprecated)]
    fn build_router(config: &ShellConfig, state: AppState) -> Router {
        Router::new()
            .fallback(page_handler)
            .with_state(state)
            .layer(SetResponseHeaderLayer::if_not_present(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache"),
            ))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown_rx` fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            title = %self.config.site.title,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}

/// Dispatch the request path and render the selected page.
async fn page_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start_time = Instant::now();
    let path = uri.path();
    let rendered = state.shell.render(path);

    if rendered.page.is_not_found() {
        tracing::info!(
            request_id = %request_id(&headers),
            path = %path,
            "No route matched, rendering fallback"
        );
    } else {
        tracing::debug!(
            request_id = %request_id(&headers),
            method = %method,
            path = %path,
            page = %rendered.page,
            "Page dispatched"
        );
    }

    metrics::record_render(rendered.page, start_time);
    rendered.into_response()
}
