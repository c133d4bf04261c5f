//! Route source selection.
//!
//! Flags are resolved exactly once into a [`RouteSource`]. Precedence:
//! YAML file, then JSON file, then the persistent store, then the
//! built-in literal routes. Sources are never merged.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::cli::Cli;
use crate::config::schema::ServiceConfig;
use crate::routing::RouteMap;

/// The single origin of route data for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSource {
    /// Built-in routes held in memory.
    LiteralMap(RouteMap),
    /// Routes decoded from a YAML file.
    YamlFile(PathBuf),
    /// Routes decoded from a JSON file.
    JsonFile(PathBuf),
    /// Routes served from the SQLite store, seeded from `seed` at startup.
    StorePath {
        path: PathBuf,
        busy_timeout: Duration,
        seed: RouteMap,
    },
}

impl RouteSource {
    /// Pick the active source from flags and settings.
    pub fn select(cli: &Cli, config: &ServiceConfig) -> Self {
        let yaml = cli.yaml_import.as_deref();
        let json = cli.json_import.as_deref();

        let requested = [yaml.is_some(), json.is_some(), cli.db_import]
            .iter()
            .filter(|set| **set)
            .count();
        if requested > 1 {
            tracing::warn!("Several route sources requested; using the highest-precedence one");
        }

        if let Some(path) = yaml {
            RouteSource::YamlFile(path.to_path_buf())
        } else if let Some(path) = json {
            RouteSource::JsonFile(path.to_path_buf())
        } else if cli.db_import {
            RouteSource::StorePath {
                path: PathBuf::from(&config.store.path),
                busy_timeout: Duration::from_millis(config.store.busy_timeout_ms),
                seed: config.routes.to_route_map(),
            }
        } else {
            RouteSource::LiteralMap(config.routes.to_route_map())
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RouteSource::LiteralMap(_) => "literal",
            RouteSource::YamlFile(_) => "yaml",
            RouteSource::JsonFile(_) => "json",
            RouteSource::StorePath { .. } => "store",
        }
    }
}
