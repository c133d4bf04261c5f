//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the optional
//! TOML settings file. Every field has a default, so an empty file (or no
//! file at all) yields a runnable service.

use std::collections::BTreeMap;

use serde::{Deserialize};

use crate::routing::RouteMap;

/// Root configuration for the redirect service.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Persistent route store settings.
    pub store: StoreConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Built-in literal routes, used when no other source is selected and
    /// as the seed for the persistent store.
    pub routes: LiteralRoutes,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Persistent route store configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite file.
    pub path: String,

    /// How long to wait for the file lock when opening, in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "routes.db".to_string(),
            busy_timeout_ms: 2_000,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Expose a Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Literal `path → url` table from the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LiteralRoutes(pub BTreeMap<String, String>);

impl Default for LiteralRoutes {
    fn default() -> Self {
        Self(BTreeMap::from([
            (
                "/urlshort-godoc".to_string(),
                "https://godoc.org/github.com/gophercises/urlshort".to_string(),
            ),
            (
                "/yaml-godoc".to_string(),
                "https://godoc.org/gopkg.in/yaml.v2".to_string(),
            ),
        ]))
    }
}

impl LiteralRoutes {
    pub fn to_route_map(&self) -> RouteMap {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}
