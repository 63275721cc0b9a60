use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "eShop";
pub const DEFAULT_COLLECTION_NAME: &str = "OrderCollection";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub collection_name: String,
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            database_name: DEFAULT_DATABASE_NAME.into(),
            collection_name: DEFAULT_COLLECTION_NAME.into(),
            seed_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            database_name: get("DATABASE_NAME").unwrap_or(defaults.database_name),
            collection_name: get("COLLECTION_NAME").unwrap_or(defaults.collection_name),
            seed_file: get("SEED_FILE").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.database_url, "mongodb://localhost:27017");
        assert_eq!(cfg.database_name, "eShop");
        assert_eq!(cfg.collection_name, "OrderCollection");
        assert!(cfg.seed_file.is_none());
    }

    #[test]
    fn overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("DATABASE_URL", "memory://"),
            ("COLLECTION_NAME", "Orders2"),
            ("DATABASE_NAME", "  "),
            ("SEED_FILE", "fixtures/orders.json"),
        ]
        .into_iter()
        .collect();
        let cfg = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.database_url, "memory://");
        assert_eq!(cfg.collection_name, "Orders2");
        assert_eq!(cfg.database_name, "eShop");
        assert_eq!(cfg.seed_file, Some(PathBuf::from("fixtures/orders.json")));
    }
}
