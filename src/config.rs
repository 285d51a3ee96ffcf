use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, SubgrabError};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "subgrab.toml";

fn default_endpoint() -> String {
    "http://api.thesubdb.com/".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_user_agent() -> String {
    format!(
        "SubDB/1.0 (subgrab/{}; {})",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_REPOSITORY")
    )
}

fn default_extensions() -> Vec<String> {
    ["avi", "mp4", "mkv", "mpg", "mpeg", "mov", "rm", "vob", "wmv", "flv", "3gp", "3g2"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// SubDB lookup endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Subtitle language requested for every file
    #[serde(default = "default_language")]
    pub language: String,
    /// User-Agent header; SubDB rejects requests without its client format
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Video container extensions (without the dot), matched case-sensitively
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            language: default_language(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl ScanConfig {
    /// Whether the path carries one of the allowed video extensions
    pub fn is_video<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SubgrabError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.service.endpoint.trim().is_empty() {
            return Err(SubgrabError::Config("service.endpoint must not be empty".to_string()));
        }
        if self.service.language.trim().is_empty() {
            return Err(SubgrabError::Config("service.language must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_allow_list() {
        let scan = ScanConfig::default();
        assert!(scan.is_video("movie.mkv"));
        assert!(scan.is_video("/videos/clip.3g2"));
        assert!(!scan.is_video("notes.txt"));
        assert!(!scan.is_video("MOVIE.MKV"));
        assert!(!scan.is_video("mkv"));
        assert!(!scan.is_video(".mkv"));
    }

    #[test]
    fn test_default_user_agent_names_client_and_url() {
        let agent = ServiceConfig::default().user_agent;
        let client = agent
            .strip_prefix("SubDB/1.0 (")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap();
        let (name, url) = client.split_once("; ").unwrap();
        assert_eq!(name, format!("subgrab/{}", env!("CARGO_PKG_VERSION")));
        assert!(url.starts_with("https://"));
    }

    #[test]
    fn test_partial_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nlanguage = \"pt\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.service.language, "pt");
        assert_eq!(config.service.endpoint, "http://api.thesubdb.com/");
        assert_eq!(config.scan.extensions.len(), 12);
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nendpoint = \"\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, SubgrabError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::from_file("/nonexistent/subgrab.toml").unwrap_err();
        assert!(matches!(err, SubgrabError::Config(_)));
    }
}
