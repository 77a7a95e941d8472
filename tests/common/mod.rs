//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use node_status_mock::config::ServiceConfig;
use node_status_mock::http::HttpServer;
use node_status_mock::lifecycle::Shutdown;
use node_status_mock::DataState;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A server running on an ephemeral loopback port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub data: Arc<DataState>,
    pub config_tx: mpsc::UnboundedSender<ServiceConfig>,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    #[allow(dead_code)]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service with the given config and a fixed seed.
pub async fn start_server(mut config: ServiceConfig, seed: u64) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let data = DataState::with_seed(&config.generator, seed);
    let server = HttpServer::with_state(&config, data);
    let data = server.data();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let (config_tx, config_updates) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move {
        server.run(listener, config_updates, server_shutdown).await
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        shutdown,
        data,
        config_tx,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
