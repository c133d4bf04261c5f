//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate settings, apply CLI overrides
//! - Resolve the route source and build its lookup
//! - Start the optional metrics exporter
//! - Bind the listener last
//!
//! # Design Decisions
//! - Components return errors; only `main` decides to exit
//! - Subsystems initialize in order, not concurrently

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::schema::ObservabilityConfig;
use crate::config::validation::validate_config;
use crate::config::{load_config, read_route_file, Cli, ConfigError, RouteSource, ServiceConfig};
use crate::http::HttpServer;
use crate::observability::metrics;
use crate::routing::{parse_json, parse_yaml, ParseError, RouteLookup};
use crate::store::{RouteStore, StorageError};

/// Every way startup can fail. All of them are fatal.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot decode routes from {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("cannot listen on {address}: {source}")]
    Listen {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid metrics address {address}: {source}")]
    MetricsAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },

    #[error("cannot start metrics exporter: {0}")]
    Metrics(#[from] BuildError),
}

/// Settings from `--config` (or defaults) with CLI overrides applied.
pub fn load_settings(cli: &Cli) -> Result<ServiceConfig, StartupError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Turn the selected source into a lookup the resolver can share.
pub fn build_routes(source: &RouteSource) -> Result<Arc<dyn RouteLookup>, StartupError> {
    let routes: Arc<dyn RouteLookup> = match source {
        RouteSource::LiteralMap(map) => Arc::new(map.clone()),
        RouteSource::YamlFile(path) => {
            let raw = read_route_file(path)?;
            let map = parse_yaml(&raw).map_err(|source| StartupError::Malformed {
                path: path.clone(),
                source,
            })?;
            Arc::new(map)
        }
        RouteSource::JsonFile(path) => {
            let raw = read_route_file(path)?;
            let map = parse_json(&raw).map_err(|source| StartupError::Malformed {
                path: path.clone(),
                source,
            })?;
            Arc::new(map)
        }
        RouteSource::StorePath {
            path,
            busy_timeout,
            seed,
        } => {
            let store = RouteStore::open(path, *busy_timeout)?;
            store.seed(seed)?;
            Arc::new(store)
        }
    };

    Ok(routes)
}

/// Install the Prometheus exporter when enabled.
fn start_metrics(config: &ObservabilityConfig) -> Result<(), StartupError> {
    if !config.metrics_enabled {
        return Ok(());
    }
    let addr: SocketAddr =
        config
            .metrics_address
            .parse()
            .map_err(|source| StartupError::MetricsAddress {
                address: config.metrics_address.clone(),
                source,
            })?;
    metrics::init_metrics(addr)?;
    Ok(())
}

/// Wire everything up and bind the listener.
pub async fn bootstrap(cli: &Cli) -> Result<(HttpServer, TcpListener), StartupError> {
    let config = load_settings(cli)?;
    let source = RouteSource::select(cli, &config);
    let routes = build_routes(&source)?;

    tracing::info!(
        source = source.kind(),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    start_metrics(&config.observability)?;

    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Listen { address, source })?;

    Ok((HttpServer::new(config, routes), listener))
}
