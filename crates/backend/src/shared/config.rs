use contracts::shared::config::ClientConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Overrides `[classifier] base_url`
pub const CLASSIFIER_URL_ENV: &str = "FIC_CLASSIFIER_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClassifierConfig {
    pub base_url: String,
}

impl Config {
    /// The part of the configuration the browser needs
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.classifier.base_url.clone())
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
dist_dir = "dist"

[classifier]
base_url = "http://127.0.0.1:8000"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `FIC_CLASSIFIER_URL` wins over both.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_override(&mut config, std::env::var(CLASSIFIER_URL_ENV).ok());
    tracing::info!("Classifier endpoint: {}", config.classifier.base_url);
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Blank values are ignored
pub fn apply_env_override(config: &mut Config, classifier_url: Option<String>) {
    if let Some(url) = classifier_url {
        let url = url.trim();
        if !url.is_empty() {
            config.classifier.base_url = url.to_string();
        }
    }
}

/// Resolve the frontend bundle directory.
/// Relative paths are taken relative to the executable directory
pub fn resolve_dist_dir(config: &Config) -> PathBuf {
    let dist_dir = Path::new(&config.server.dist_dir);

    if dist_dir.is_absolute() {
        return dist_dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dist_dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: relative to current directory (`cargo run` from the workspace)
    dist_dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> Config {
        toml::from_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(config.classifier.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.client_config(), ClientConfig::default());
    }

    #[test]
    fn test_env_override() {
        let mut config = default_config();
        apply_env_override(&mut config, Some("  https://fic.example.com  ".to_string()));
        assert_eq!(config.classifier.base_url, "https://fic.example.com");
        assert_eq!(
            config.client_config().predict_url(),
            "https://fic.example.com/predict"
        );

        apply_env_override(&mut config, Some("   ".to_string()));
        assert_eq!(config.classifier.base_url, "https://fic.example.com");

        apply_env_override(&mut config, None);
        assert_eq!(config.classifier.base_url, "https://fic.example.com");
    }

    #[test]
    fn test_absolute_dist_dir_is_kept() {
        let mut config = default_config();
        let dir = std::env::temp_dir().join("fic-dist");
        config.server.dist_dir = dir.to_string_lossy().into_owned();
        assert_eq!(resolve_dist_dir(&config), dir);
    }
}
