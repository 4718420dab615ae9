use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation backend settings
    #[serde(default)]
    pub backend: BackendConfig,
    /// Optional sender identity attached to every generation request
    #[serde(default)]
    pub sender: SenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base address of the generation service
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SenderConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("redraft");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is missing.
    /// `REDRAFT_BASE_URL` overrides the configured backend address.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_base_url_override(std::env::var("REDRAFT_BASE_URL").ok());

        Ok(config)
    }

    /// Apply the `REDRAFT_BASE_URL` override; blank values are ignored
    fn apply_base_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url
            && !url.trim().is_empty()
        {
            self.backend.base_url = url;
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path.parent().unwrap();

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(Self::config_dir()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [backend]
            base_url = "https://drafts.example.com"

            [sender]
            name = "Ada"
            email = "ada@example.com"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.backend.base_url, "https://drafts.example.com");
        assert_eq!(config.sender.name.as_deref(), Some("Ada"));
        assert_eq!(config.sender.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert!(config.sender.name.is_none());
        assert!(config.sender.email.is_none());
    }

    #[test]
    fn test_partial_sender_section() {
        let toml = r#"
            [sender]
            name = "Ada"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.sender.name.as_deref(), Some("Ada"));
        assert!(config.sender.email.is_none());
        assert_eq!(config.backend.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_env_override_beats_configured_base_url() {
        let toml = r#"
            [backend]
            base_url = "https://from-file.example.com"
        "#;

        let mut config: Config = toml::from_str(toml).unwrap();
        config.apply_base_url_override(Some("http://127.0.0.1:9100".to_string()));
        assert_eq!(config.backend.base_url, "http://127.0.0.1:9100");
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let toml = r#"
            [backend]
            base_url = "https://from-file.example.com"
        "#;

        let mut config: Config = toml::from_str(toml).unwrap();
        config.apply_base_url_override(Some("   ".to_string()));
        assert_eq!(config.backend.base_url, "https://from-file.example.com");

        config.apply_base_url_override(None);
        assert_eq!(config.backend.base_url, "https://from-file.example.com");
    }

    #[test]
    fn test_roundtrip() {
        let config = Config {
            backend: BackendConfig {
                base_url: "http://10.0.0.1:9000".to_string(),
            },
            sender: SenderConfig {
                name: Some("Ada".to_string()),
                email: None,
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.backend.base_url, "http://10.0.0.1:9000");
        assert_eq!(parsed.sender.name.as_deref(), Some("Ada"));
    }
}
