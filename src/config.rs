// src/config.rs
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::listing::PageSpec;

pub const DEFAULT_CONFIG_FILE: &str = "jobdeck.yaml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_page_size: usize,
    pub log_level: String,
    pub log_format: LogFormat,
    /// TOML catalog overriding the built-in templates and industries
    pub catalog_path: Option<PathBuf>,
    /// Pins content generation when set
    pub rng_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            catalog_path: None,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: AppConfig,
    #[serde(default)]
    production: AppConfig,
}

impl AppConfig {
    /// Load `jobdeck.yaml` from the current directory for the active environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE), &Self::get_environment())
    }

    pub fn get_environment() -> String {
        std::env::var("JOBDECK_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Load a config file; a missing file yields defaults
    pub fn load_from(path: &Path, environment: &str) -> Result<Self> {
        if !path.exists() {
            info!(
                "No config file at {}, using defaults for environment: {}",
                path.display(),
                environment
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_yaml_str(&content, environment)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        info!(
            "Loaded configuration for environment {} from {}",
            environment,
            path.display()
        );
        Ok(config)
    }

    pub fn from_yaml_str(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse config YAML")?;

        let mut config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        if let Some(path) = config.catalog_path.take() {
            config.catalog_path = Some(Self::resolve_path(&path)?);
        }

        config.validate()?;
        Ok(config)
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            anyhow::bail!("default_page_size must be at least 1");
        }
        Ok(())
    }

    /// Page request from optional CLI values, falling back to the configured size
    pub fn page_spec(&self, page: Option<usize>, page_size: Option<usize>) -> crate::Result<PageSpec> {
        PageSpec::new(
            page.unwrap_or(1),
            page_size.unwrap_or(self.default_page_size),
        )
    }

    /// Random source for content generation; an explicit seed wins over the configured one
    pub fn rng(&self, seed: Option<u64>) -> StdRng {
        match seed.or(self.rng_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::io::Write;

    const YAML: &str = r#"
local:
  default_page_size: 5
  log_level: debug
  rng_seed: 42
production:
  default_page_size: 25
  log_format: json
  catalog_path: /etc/jobdeck/catalog.toml
"#;

    #[test]
    fn test_selects_environment_section() {
        let local = AppConfig::from_yaml_str(YAML, "local").unwrap();
        assert_eq!(local.default_page_size, 5);
        assert_eq!(local.log_level, "debug");
        assert_eq!(local.log_format, LogFormat::Pretty);
        assert_eq!(local.rng_seed, Some(42));

        let production = AppConfig::from_yaml_str(YAML, "production").unwrap();
        assert_eq!(production.default_page_size, 25);
        assert_eq!(production.log_level, "info");
        assert_eq!(production.log_format, LogFormat::Json);
        assert_eq!(
            production.catalog_path,
            Some(PathBuf::from("/etc/jobdeck/catalog.toml"))
        );

        let staging = AppConfig::from_yaml_str(YAML, "staging").unwrap();
        assert_eq!(staging, local);
    }

    #[test]
    fn test_relative_catalog_path_is_resolved() {
        let config =
            AppConfig::from_yaml_str("local:\n  catalog_path: catalog/custom.toml\n", "local").unwrap();
        let path = config.catalog_path.unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("catalog/custom.toml"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(AppConfig::from_yaml_str("local:\n  default_page_size: 0\n", "local").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/jobdeck.yaml"), "local").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();
        let config = AppConfig::load_from(file.path(), "production").unwrap();
        assert_eq!(config.default_page_size, 25);
    }

    #[test]
    fn test_page_spec_defaults() {
        let config = AppConfig::default();
        let page = config.page_spec(None, None).unwrap();
        assert_eq!((page.page(), page.page_size()), (1, 10));
        assert!(config.page_spec(Some(0), None).is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = AppConfig {
            rng_seed: Some(7),
            ..AppConfig::default()
        };
        let a: u64 = config.rng(None).gen();
        let b: u64 = config.rng(None).gen();
        let c: u64 = config.rng(Some(8)).gen();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
