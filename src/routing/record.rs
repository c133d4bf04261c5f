//! Route records and the path → URL mapping built from them.

use std::collections::HashMap;

use serde::Deserialize;

/// A single redirect rule as it appears in a route file.
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteRecord {
    /// Exact request path to match.
    pub path: String,

    /// Redirect target. Opaque; never validated.
    pub url: String,
}

impl RouteRecord {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Immutable mapping from request path to redirect target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMap {
    routes: HashMap<String, String>,
}

impl RouteMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an ordered sequence of records into a mapping.
    ///
    /// Later records overwrite earlier ones with the same path.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RouteRecord>,
    {
        let routes = records
            .into_iter()
            .fold(HashMap::new(), |mut acc, record| {
                acc.insert(record.path, record.url);
                acc
            });
        Self { routes }
    }

    /// Look up the redirect target for an exact path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.routes.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over `(path, url)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RouteMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_records(iter.into_iter().map(|(k, v)| RouteRecord::new(k, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_duplicate_wins() {
        let map = RouteMap::from_records(vec![
            RouteRecord::new("/dup", "https://first"),
            RouteRecord::new("/other", "https://other"),
            RouteRecord::new("/dup", "https://last"),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("/dup"), Some("https://last"));
        assert_eq!(map.get("/other"), Some("https://other"));
    }

    #[test]
    fn test_exact_match_only() {
        let map: RouteMap = [("/docs", "https://docs")].into_iter().collect();

        assert_eq!(map.get("/docs"), Some("https://docs"));
        assert_eq!(map.get("/docs/"), None);
        assert_eq!(map.get("/DOCS"), None);
        assert_eq!(map.get("/doc"), None);
    }

    #[test]
    fn test_empty_value_is_present() {
        let map = RouteMap::from_records(vec![RouteRecord::new("/blank", "")]);
        assert_eq!(map.get("/blank"), Some(""));
    }
}
