//! Route file decoding.
//!
//! Both formats carry an ordered list of `{path, url}` records:
//!
//! ```yaml
//! - path: /some-path
//!   url: https://www.some-url.com/demo
//! ```
//!
//! ```json
//! [{"path": "/some-path", "url": "https://www.some-url.com/demo"}]
//! ```
//!
//! Decoding is purely structural. `null` is an empty list in both formats;
//! a blank YAML document is too, while blank JSON is malformed.

use thiserror::Error;

use crate::routing::record::{RouteMap, RouteRecord};

/// A route payload could not be decoded as a list of route records.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed YAML route list: {0}")]
    MalformedYaml(#[from] serde_yaml::Error),

    #[error("malformed JSON route list: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Decode a YAML sequence of route records into a [`RouteMap`].
pub fn parse_yaml(raw: &[u8]) -> Result<RouteMap, ParseError> {
    if is_blank(raw) {
        return Ok(RouteMap::new());
    }
    let records: Option<Vec<RouteRecord>> = serde_yaml::from_slice(raw)?;
    Ok(RouteMap::from_records(records.unwrap_or_default()))
}

/// Decode a JSON array of route records into a [`RouteMap`].
pub fn parse_json(raw: &[u8]) -> Result<RouteMap, ParseError> {
    let records: Option<Vec<RouteRecord>> = serde_json::from_slice(raw)?;
    Ok(RouteMap::from_records(records.unwrap_or_default()))
}

fn is_blank(raw: &[u8]) -> bool {
    raw.iter().all(u8::is_ascii_whitespace)
}
