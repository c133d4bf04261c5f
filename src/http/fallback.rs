//! Default handlers behind the redirect layer.

use axum::{routing::any, Router};

/// Body served at `/` when no route claims it.
pub const GREETING: &str = "Hello, world!\n";

/// The innermost fallback: a greeting at `/`, Axum's 404 everywhere else.
pub fn default_mux() -> Router {
    Router::new().route("/", any(hello))
}

async fn hello() -> &'static str {
    GREETING
}
