use crate::types::{DialectChoice, OutputFormat};
use chrono::NaiveDateTime;
use healthlens_engine::RuleContext;
use healthlens_engine::context::{DEFAULT_FLEET_HOST_PREFIX, DEFAULT_REQUIRED_PACKAGES};
use healthlens_types::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Values used when a flag is not given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub dialect: DialectChoice,
    pub format: OutputFormat,
}

/// Site-specific inputs of the extraction rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Host-name prefix of fleet nodes in `node status` sections
    pub fleet_host_prefix: String,
    /// Packages a cluster dump must not report as missing
    pub required_packages: Vec<String>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            fleet_host_prefix: DEFAULT_FLEET_HOST_PREFIX.to_string(),
            required_packages: DEFAULT_REQUIRED_PACKAGES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub rules: RuleSettings,
}

impl Config {
    /// Load from an explicit path, or from the default location.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => {
                    tracing::debug!("no config directory on this platform, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file absent, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("healthlens").join("config.toml"))
    }

    pub fn rule_context(&self, now: NaiveDateTime) -> RuleContext {
        RuleContext::new(now)
            .with_fleet_host_prefix(self.rules.fleet_host_prefix.clone())
            .with_required_packages(self.rules.required_packages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.rules.fleet_host_prefix, "mdc");
        assert_eq!(config.rules.required_packages, vec!["pcs".to_string()]);
    }

    #[test]
    fn test_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[defaults]
dialect = "node"
format = "json"

[rules]
fleet_host_prefix = "edge"
required_packages = ["pcs", "fence-agents"]
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.defaults.dialect, DialectChoice::Node);
        assert_eq!(config.defaults.format, OutputFormat::Json);
        assert_eq!(config.rules.fleet_host_prefix, "edge");
        assert_eq!(config.rules.required_packages.len(), 2);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[rules]\nfleet_host_prefix = \"core\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.defaults, Defaults::default());
        assert_eq!(config.rules.fleet_host_prefix, "core");
        assert_eq!(config.rules.required_packages, vec!["pcs".to_string()]);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\nformat = \"pdf\"\n").unwrap();

        match Config::load_from(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("config.toml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_rule_context_carries_settings() {
        let config = Config {
            rules: RuleSettings {
                fleet_host_prefix: "edge".to_string(),
                required_packages: vec![],
            },
            ..Config::default()
        };
        let now = NaiveDateTime::parse_from_str("2025-11-25T12:00:00", "%Y-%m-%dT%H:%M:%S")
            .unwrap();
        let ctx = config.rule_context(now);
        assert_eq!(ctx.now, now);
        assert_eq!(ctx.fleet_host_prefix, "edge");
        assert!(ctx.required_packages.is_empty());
    }
}
