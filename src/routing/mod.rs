//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     raw YAML / JSON bytes
//!     → parser.rs (decode into RouteRecord[])
//!     → record.rs (fold into RouteMap, last duplicate wins)
//!     → Freeze as immutable RouteMap
//!
//! Incoming Request (path):
//!     → lookup.rs (exact path lookup against map or store)
//!     → Return: target URL or explicit miss
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact match only: no prefixes, no patterns, no slash normalization
//! - A miss is not an error; it hands the request to the fallback

pub mod lookup;
pub mod parser;
pub mod record;

pub use lookup::RouteLookup;
pub use parser::{parse_json, parse_yaml, ParseError};
pub use record::{RouteMap, RouteRecord};
