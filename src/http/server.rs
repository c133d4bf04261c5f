//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Compose the redirect service with the default mux fallback
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::fallback::default_mux;
use crate::http::redirect::resolve;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::routing::RouteLookup;

/// HTTP server for the redirect service.
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving routes from `routes`.
    pub fn new(config: ServiceConfig, routes: Arc<dyn RouteLookup>) -> Self {
        Self {
            router: Self::build_router(&config, routes),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, routes: Arc<dyn RouteLookup>) -> Router {
        Router::new()
            .fallback_service(resolve(routes, default_mux()))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the stack without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
