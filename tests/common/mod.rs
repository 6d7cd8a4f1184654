//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use page_shell::config::ShellConfig;
use page_shell::http::HttpServer;
use page_shell::lifecycle::Shutdown;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the shell server with `config` on 127.0.0.1:0.
pub async fn start_server(config: ShellConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let shutdown_rx = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, shutdown_rx).await });

    TestServer { addr, shutdown, handle }
}

/// Client that never reuses connections, so shutdown is not held open.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
