//! Named descriptor collections for concurrently-running profiles.

use std::path::Path;

use indexmap::IndexMap;

use crate::config::BundlerConfig;
use crate::discovery::load_file;
use crate::error::{ConfigError, Result};

/// Descriptors for environment profiles that run at the same time.
///
/// Each profile binds its own dev server, so ports must be distinct
/// across the set. Insertion order is preserved for diagnostics.
///
/// # Example
///
/// ```
/// use floe_config::{BundlerConfig, ProfileSet};
/// use serde_json::json;
///
/// let a = BundlerConfig::from_value(json!({"devOptions": {"port": 8888}})).unwrap();
/// let b = BundlerConfig::from_value(json!({"devOptions": {"port": 8889}})).unwrap();
///
/// let mut set = ProfileSet::new();
/// set.insert("web-a", a).unwrap();
/// set.insert("web-b", b).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ProfileSet {
    profiles: IndexMap<String, BundlerConfig>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile, rejecting dev server port collisions and
    /// duplicate profile names.
    pub fn insert(&mut self, name: impl Into<String>, config: BundlerConfig) -> Result<()> {
        let name = name.into();

        if self.profiles.contains_key(&name) {
            return Err(ConfigError::schema(
                "profiles",
                format!("profile `{name}` declared twice"),
            ));
        }

        let port = config.dev_options.port;
        let holder = self
            .profiles
            .iter()
            .find_map(|(existing, cfg)| (cfg.dev_options.port == port).then(|| existing.clone()));
        if let Some(first) = holder {
            return Err(ConfigError::PortCollision {
                port,
                first,
                second: name,
            });
        }

        self.profiles.insert(name, config);
        Ok(())
    }

    /// Load a set from named descriptor files.
    pub fn load<I, P>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, P)>,
        P: AsRef<Path>,
    {
        let mut set = Self::new();
        for (name, path) in entries {
            let config = load_file(path.as_ref())?;
            set.insert(name, config)?;
        }
        Ok(set)
    }

    pub fn get(&self, name: &str) -> Option<&BundlerConfig> {
        self.profiles.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BundlerConfig)> {
        self.profiles.iter().map(|(name, cfg)| (name.as_str(), cfg))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(port: u16) -> BundlerConfig {
        BundlerConfig::from_value(json!({ "devOptions": { "port": port } })).expect("profile")
    }

    #[test]
    fn distinct_ports_coexist() {
        let mut set = ProfileSet::new();
        set.insert("web-a", profile(8888)).unwrap();
        set.insert("web-b", profile(8889)).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("web-a").unwrap().dev_options.port, 8888);
    }

    #[test]
    fn colliding_ports_are_rejected() {
        let mut set = ProfileSet::new();
        set.insert("web-a", profile(8888)).unwrap();

        let err = set.insert("web-b", profile(8888)).unwrap_err();
        match err {
            ConfigError::PortCollision {
                port,
                first,
                second,
            } => {
                assert_eq!(port, 8888);
                assert_eq!(first, "web-a");
                assert_eq!(second, "web-b");
            }
            other => panic!("expected PortCollision, got {other:?}"),
        }
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duplicate_profile_names_are_rejected() {
        let mut set = ProfileSet::new();
        set.insert("web", profile(8888)).unwrap();
        assert!(set.insert("web", profile(9000)).is_err());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut set = ProfileSet::new();
        set.insert("b", profile(8889)).unwrap();
        set.insert("a", profile(8888)).unwrap();

        let names: Vec<_> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
