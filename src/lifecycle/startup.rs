//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize logging and metrics from validated configuration
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, ShellConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};

/// Fatal errors during startup or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("invalid metrics address {0:?}")]
    MetricsAddress(String),

    #[error("failed to start metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Start the metrics exporter if enabled.
pub fn init_metrics(config: &ShellConfig) -> Result<(), StartupError> {
    if !config.observability.metrics_enabled {
        return Ok(());
    }
    let addr: SocketAddr = config
        .observability
        .metrics_address
        .parse()
        .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
    metrics::init_metrics(addr)?;
    Ok(())
}

/// Bind the configured listener address.
pub async fn bind(config: &ShellConfig) -> Result<TcpListener, StartupError> {
    let address = config.listener.bind_address.clone();
    TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })
}

/// Run the full server lifecycle: logging, metrics, bind, serve until a
/// termination signal arrives.
pub async fn run(config: ShellConfig) -> Result<(), StartupError> {
    logging::init(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    init_metrics(&config)?;

    let listener = bind(&config).await?;

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    HttpServer::new(config)
        .run(listener, shutdown_rx)
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_disabled_is_noop() {
        let mut config = ShellConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(init_metrics(&config).is_ok());
    }

    #[test]
    fn test_bad_metrics_address() {
        let mut config = ShellConfig::default();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "bogus".into();
        assert!(matches!(
            init_metrics(&config),
            Err(StartupError::MetricsAddress(_))
        ));
    }

    #[tokio::test]
    async fn test_bind_error_names_address() {
        let mut config = ShellConfig::default();
        config.listener.bind_address = "no-port-here".into();
        let err = bind(&config).await.unwrap_err();
        assert!(err.to_string().contains("no-port-here"));
    }
}
