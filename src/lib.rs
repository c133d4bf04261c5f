//! Path-based URL redirect service.
//!
//! Resolves a request path against exactly one route source (built-in map,
//! YAML file, JSON file or SQLite store) and answers `302 Found`, handing
//! unmatched requests to a default fallback.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod store;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
