//! CLI configuration file.
//!
//! ```toml
//! [catalog]
//! chips = "data/chips.json"
//! ncps = "data/ncps.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub chips: PathBuf,
    pub ncps: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            chips: PathBuf::from("chips.json"),
            ncps: PathBuf::from("ncps.json"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        // Catalog paths are relative to the config file
        if let Some(dir) = path.parent() {
            config.catalog.chips = dir.join(&config.catalog.chips);
            config.catalog.ncps = dir.join(&config.catalog.ncps);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bn5save.toml");
        fs::write(&path, "[catalog]\nchips = \"data/chips.json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.catalog.chips, dir.path().join("data/chips.json"));
        assert_eq!(config.catalog.ncps, dir.path().join("ncps.json"));
    }

    #[test]
    fn test_load_missing_config() {
        assert!(Config::load(Path::new("no-such-config.toml")).is_err());
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bn5save.toml");
        fs::write(&path, "[catalog\n").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
