//! Redirect resolution.
//!
//! # Responsibilities
//! - Look up the decoded request path against the active route source
//! - Answer `302 Found` with a `Location` header on a hit
//! - Hand the untouched request to the fallback service on a miss
//!
//! # Design Decisions
//! - Exposed as a `tower::Service` so any fallback (an Axum `Router`, a
//!   bare handler service) can sit behind it
//! - Route source shared through `Arc<dyn RouteLookup>`; cloning the
//!   service per connection is cheap and lock-free for the map variant
//! - Lookups run on the blocking pool so a store waiting on its file lock
//!   never stalls a runtime worker
//! - Store read failures answer 500 for that request only
//! - Paths that do not decode to UTF-8 are misses

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use percent_encoding::percent_decode_str;
use tower::{Service, ServiceExt};

use crate::http::request::X_REQUEST_ID;
use crate::observability::metrics;
use crate::routing::RouteLookup;

/// Service that redirects mapped paths and delegates everything else.
#[derive(Clone)]
pub struct RedirectService<F> {
    routes: Arc<dyn RouteLookup>,
    fallback: F,
}

impl<F> RedirectService<F> {
    pub fn new(routes: Arc<dyn RouteLookup>, fallback: F) -> Self {
        Self { routes, fallback }
    }
}

/// Compose a route source with a fallback service.
pub fn resolve<F>(routes: Arc<dyn RouteLookup>, fallback: F) -> RedirectService<F> {
    RedirectService::new(routes, fallback)
}

impl<F> std::fmt::Debug for RedirectService<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedirectService")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

impl<F> Service<Request<Body>> for RedirectService<F>
where
    F: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    F::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // The fallback is driven to readiness through `oneshot` in `call`.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let routes = Arc::clone(&self.routes);
        let fallback = self.fallback.clone();

        Box::pin(async move {
            let request_id = request
                .headers()
                .get(X_REQUEST_ID)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown")
                .to_string();
            let source = routes.source();

            let Some(path) = request_path(&request) else {
                tracing::debug!(request_id = %request_id, raw_path = %request.uri().path(), "Path is not UTF-8, falling back");
                metrics::record_fallback(source);
                return fallback.oneshot(request).await;
            };

            // Store lookups may wait on the SQLite file lock.
            let lookup = {
                let path = path.clone();
                tokio::task::spawn_blocking(move || routes.lookup(&path)).await
            };

            match lookup {
                Ok(Ok(Some(url))) => {
                    tracing::debug!(
                        request_id = %request_id,
                        path = %path,
                        location = %url,
                        source,
                        "Redirecting"
                    );
                    metrics::record_redirect(source);
                    Ok(found(&url))
                }
                Ok(Ok(None)) => {
                    tracing::debug!(request_id = %request_id, path = %path, source, "No route, falling back");
                    metrics::record_fallback(source);
                    fallback.oneshot(request).await
                }
                Ok(Err(e)) => {
                    tracing::error!(request_id = %request_id, path = %path, error = %e, "Route lookup failed");
                    Ok((StatusCode::INTERNAL_SERVER_ERROR, "Route lookup failed").into_response())
                }
                Err(e) => {
                    tracing::error!(request_id = %request_id, path = %path, error = %e, "Route lookup task failed");
                    Ok((StatusCode::INTERNAL_SERVER_ERROR, "Route lookup failed").into_response())
                }
            }
        })
    }
}

/// Percent-decoded request path, as the route files spell it.
///
/// `None` when the decoded bytes are not UTF-8; such paths never match.
fn request_path(request: &Request<Body>) -> Option<String> {
    let bytes: Vec<u8> = percent_decode_str(request.uri().path()).collect();
    String::from_utf8(bytes).ok()
}

/// Build a `302 Found` response pointing at `url`.
fn found(url: &str) -> Response {
    match HeaderValue::from_str(url) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(_) => {
            tracing::error!(location = %url, "Mapped URL is not a valid Location header");
            (StatusCode::INTERNAL_SERVER_ERROR, "Invalid redirect target").into_response()
        }
    }
}
