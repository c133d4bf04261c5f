//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use urlshort::routing::RouteLookup;
use urlshort::{HttpServer, ServiceConfig, Shutdown};

/// Boot the full server on an ephemeral port.
pub async fn start_server(routes: Arc<dyn RouteLookup>) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let stop = shutdown.subscribe();
    let server = HttpServer::new(ServiceConfig::default(), routes);
    tokio::spawn(async move {
        let _ = server.run(listener, stop).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
