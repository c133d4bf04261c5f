//! Per-request route lookup.
//!
//! # Responsibilities
//! - Abstract over where routes live (in-memory map or persistent store)
//! - Return the redirect target for an exact path, or an explicit miss
//!
//! # Design Decisions
//! - Read-only after bootstrap, so implementations are `Send + Sync`
//! - Absence (`None`) is the only "no route" signal; an empty URL is a hit

use crate::routing::record::RouteMap;
use crate::store::StorageError;

/// A read-only source of routes consulted on every request.
pub trait RouteLookup: Send + Sync + std::fmt::Debug {
    /// Returns the redirect target for `path`, or `None` when unmapped.
    fn lookup(&self, path: &str) -> Result<Option<String>, StorageError>;

    /// Short label naming the backing source, used in logs and metrics.
    fn source(&self) -> &'static str;
}

impl RouteLookup for RouteMap {
    fn lookup(&self, path: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(path).map(str::to_owned))
    }

    fn source(&self) -> &'static str {
        "map"
    }
}
