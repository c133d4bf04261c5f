//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags (cli.rs) + optional TOML settings file
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → source.rs (resolve flags into one RouteSource)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod cli;
pub mod loader;
pub mod schema;
pub mod source;
pub mod validation;

pub use cli::Cli;
pub use loader::{load_config, read_route_file, ConfigError};
pub use schema::{ListenerConfig, ServiceConfig, StoreConfig};
pub use source::RouteSource;
