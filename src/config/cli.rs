//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

/// Redirect short paths to full URLs.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "urlshort", version, about, long_about = None)]
pub struct Cli {
    /// YAML file to import routes from
    #[arg(long = "yaml-import", visible_alias = "yamlImport", value_name = "FILE")]
    pub yaml_import: Option<PathBuf>,

    /// JSON file to import routes from
    #[arg(long = "json-import", visible_alias = "jsonImport", value_name = "FILE")]
    pub json_import: Option<PathBuf>,

    /// Serve routes from the persistent store, seeded with the built-in routes
    #[arg(long = "db-import", visible_alias = "dbImport")]
    pub db_import: bool,

    /// TOML settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the listener bind address
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,
}
