//! Server configuration from environment variables

use crate::catalog::StyleCatalog;
use crate::engine::RecommendationEngine;
use crate::error::CatalogError;
use crate::scoring::ScoreRules;
use crate::types::StyleEntry;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const PORT_VAR: &str = "STROKEFINDER_PORT";
pub const BIND_VAR: &str = "STROKEFINDER_BIND";
pub const CATALOG_VAR: &str = "STROKEFINDER_CATALOG";

pub const DEFAULT_PORT: u16 = 8082;
pub const DEFAULT_BIND: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// JSON catalog replacing the built-in styles
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            catalog_path: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR} is not a valid port: {port:?}"))?;
        }
        if let Some(bind) = lookup(BIND_VAR) {
            config.bind = bind;
        }
        config.catalog_path = lookup(CATALOG_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    /// Engine from the configured catalog file, or the built-in data
    pub fn build_engine(&self) -> Result<RecommendationEngine> {
        match self.catalog_path {
            Some(ref path) => {
                let engine = load_catalog_file(path)
                    .with_context(|| format!("failed to load catalog {}", path.display()))?;
                info!(
                    "Loaded {} styles from {}",
                    engine.catalog().len(),
                    path.display()
                );
                Ok(engine)
            }
            None => Ok(RecommendationEngine::builtin()),
        }
    }
}

/// On-disk catalog document: `{ "styles": [...], "rules": {...} }`
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub styles: Vec<StyleEntry>,
    #[serde(default)]
    pub rules: ScoreRules,
}

impl CatalogFile {
    pub fn into_engine(self) -> Result<RecommendationEngine, CatalogError> {
        let catalog = StyleCatalog::new(self.styles)?;
        RecommendationEngine::new(catalog, &self.rules)
    }
}

pub fn load_catalog_file(path: &Path) -> Result<RecommendationEngine, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let file: CatalogFile = serde_json::from_str(&raw)?;
    file.into_engine()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:8082");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (PORT_VAR, "9000"),
            (BIND_VAR, "127.0.0.1"),
            (CATALOG_VAR, "/etc/strokes.json"),
        ]))
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/etc/strokes.json")));
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(ServerConfig::from_lookup(lookup(&[(PORT_VAR, "pool")])).is_err());
    }

    #[test]
    fn catalog_file_without_rules_uses_builtin_tables() {
        // Built-in rules mention styles this file does not define
        let json = r#"{ "styles": [ {"key": "a", "name": "A"}, {"key": "b", "name": "B"} ] }"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();
        assert!(matches!(file.into_engine(), Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn catalog_file_with_partial_rules() {
        let json = r#"{
            "styles": [
                {"key": "a", "name": "A", "tags": ["safety"]},
                {"key": "b", "name": "B"}
            ],
            "rules": {
                "level": {}, "goal_nudges": {}, "focus": {},
                "age": { "kid": [ {"style": "b", "delta": 9} ] }
            }
        }"#;
        let file: CatalogFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.rules.tag_bonus, 4);
        let engine = file.into_engine().unwrap();
        assert_eq!(engine.catalog().len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_catalog_file(Path::new("/nonexistent/strokes.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
