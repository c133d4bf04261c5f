//! Persistent route store.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RouteStore::open(path, busy_timeout)
//!     → seed(RouteMap) in one write transaction
//!
//! Per request:
//!     lookup(path) in a read transaction
//!     → Some(url) | None
//! ```
//!
//! # Design Decisions
//! - Single SQLite file, single fixed table acting as the route bucket
//! - Keys and values stored as byte strings
//! - No writes after seeding; readers share one serialized connection

pub mod bucket;

pub use bucket::{RouteStore, StorageError, BUCKET_NAME};
