//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup and request handling produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (redirect / fallback counters)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request log line
//! - Metrics are cheap (atomic increments) and no-ops without a recorder

pub mod logging;
pub mod metrics;
