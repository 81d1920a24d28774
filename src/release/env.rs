//! Environment access for CI detection.
//!
//! Resolution logic only ever asks "is this variable set, and to what?", so it is
//! written against the small `EnvSource` trait. The process environment is the
//! production source; tests use `MapEnv`.

use std::collections::HashMap;

pub trait EnvSource {
    /// Raw value of `key`, if present.
    fn raw(&self, key: &str) -> Option<String>;

    /// Value of `key` if it is present and non-empty.
    ///
    /// An empty variable counts as unset, matching how CI platforms
    /// blank out variables that do not apply to the current build.
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key).filter(|v| !v.is_empty())
    }
}

/// The process environment, with an optional `.env` file merged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Load `.env` (if any) into the process environment and return the source.
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn raw(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn raw(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_count_as_unset() {
        let env = MapEnv::new().with("CIRCLE_TAG", "").with("CIRCLECI", "true");
        assert_eq!(env.raw("CIRCLE_TAG").as_deref(), Some(""));
        assert_eq!(env.get("CIRCLE_TAG"), None);
        assert_eq!(env.get("CIRCLECI").as_deref(), Some("true"));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn map_env_collects_from_pairs() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.get("B").as_deref(), Some("2"));
    }
}
