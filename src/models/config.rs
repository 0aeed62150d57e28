use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Palette size for new sessions
    pub default_size: usize,

    /// Smallest size a palette can be resized to
    pub min_size: usize,

    /// Largest size a palette can be resized to
    pub max_size: usize,

    /// Snapshots kept per session, oldest dropped first
    pub history_limit: usize,

    /// Extra harmony colors generated beyond the palette size
    pub harmony_headroom: usize,

    /// Timeout for fetching images by URL
    pub fetch_timeout_secs: u64,

    /// Largest accepted encoded image
    pub max_image_bytes: usize,

    /// Allow image URLs on loopback, private or link-local addresses
    pub allow_private_hosts: bool,

    /// Live sessions kept in memory; the least recently used is evicted
    pub max_sessions: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_size: 5,
            min_size: 3,
            max_size: 8,
            history_limit: 20,
            harmony_headroom: 3,
            fetch_timeout_secs: 10,
            max_image_bytes: 10 * 1024 * 1024,
            allow_private_hosts: false,
            max_sessions: 1000,
        }
    }
}

impl AppConfig {
    /// Load configuration from the file named by `CONFIG_FILE`, if any.
    pub fn load_from_env() -> Self {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_file(Path::new(&path)),
            Err(_) => {
                tracing::debug!("CONFIG_FILE not set, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a YAML file, falling back to defaults
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        default_size = config.default_size,
                        history_limit = config.history_limit,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate configuration YAML
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.min_size == 0 {
            return Err("min_size must be at least 1".to_string());
        }
        if self.min_size > self.max_size {
            return Err(format!(
                "min_size {} exceeds max_size {}",
                self.min_size, self.max_size
            ));
        }
        if !(self.min_size..=self.max_size).contains(&self.default_size) {
            return Err(format!(
                "default_size {} outside [{}, {}]",
                self.default_size, self.min_size, self.max_size
            ));
        }
        if self.history_limit < 2 {
            return Err("history_limit must be at least 2".to_string());
        }
        if self.max_sessions == 0 {
            return Err("max_sessions must be at least 1".to_string());
        }
        Ok(())
    }

    /// Whether `size` is an allowed palette size
    pub fn size_in_range(&self, size: usize) -> bool {
        (self.min_size..=self.max_size).contains(&size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_size, 5);
        assert_eq!(config.min_size, 3);
        assert_eq!(config.max_size, 8);
        assert_eq!(config.history_limit, 20);
        assert_eq!(config.harmony_headroom, 3);
        assert_eq!(config.fetch_timeout_secs, 10);
        assert_eq!(config.max_image_bytes, 10 * 1024 * 1024);
        assert!(!config.allow_private_hosts);
        assert_eq!(config.max_sessions, 1000);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let yaml = r#"
default_size: 6
history_limit: 5
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_size, 6);
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.max_size, 8);
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = AppConfig::from_yaml("min_size: 9\nmax_size: 4\ndefault_size: 5").unwrap_err();
        assert!(err.contains("exceeds max_size"));
    }

    #[test]
    fn test_rejects_default_outside_bounds() {
        let err = AppConfig::from_yaml("default_size: 12").unwrap_err();
        assert!(err.contains("default_size 12"));
    }

    #[test]
    fn test_rejects_tiny_history() {
        assert!(AppConfig::from_yaml("history_limit: 1").is_err());
    }

    #[test]
    fn test_rejects_zero_sessions() {
        let err = AppConfig::from_yaml("max_sessions: 0").unwrap_err();
        assert!(err.contains("max_sessions"));
    }

    #[test]
    fn test_size_in_range() {
        let config = AppConfig::default();
        assert!(!config.size_in_range(2));
        assert!(config.size_in_range(3));
        assert!(config.size_in_range(8));
        assert!(!config.size_in_range(9));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_size: 10\nharmony_headroom: 0").unwrap();

        let config = AppConfig::load_from_file(file.path());
        assert_eq!(config.max_size, 10);
        assert_eq!(config.harmony_headroom, 0);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = AppConfig::load_from_file(Path::new("/nonexistent/swatchbook.yaml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_invalid_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_size: [not, a, number]").unwrap();

        let config = AppConfig::load_from_file(file.path());
        assert_eq!(config, AppConfig::default());
    }
}
