//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (stamp request ID)
//!     → redirect.rs (route lookup)
//!         hit  → 302 Found + Location
//!         miss → fallback.rs (greeting at "/", 404 otherwise)
//! ```

pub mod fallback;
pub mod redirect;
pub mod request;
pub mod server;

pub use fallback::default_mux;
pub use redirect::{resolve, RedirectService};
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
