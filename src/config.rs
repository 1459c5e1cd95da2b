use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub general: GeneralConfig,
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub admin: AdminConfig,
}

/// Content location configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeneralConfig {
    /// Override for the content directory; defaults to the platform data dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Initial window geometry
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Admin area configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AdminConfig {
    /// Passphrase for the admin panel; empty disables the admin area
    pub passphrase: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            general: GeneralConfig { content_dir: None },
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            window: WindowConfig {
                width: 1100.0,
                height: 760.0,
            },
            admin: AdminConfig {
                passphrase: String::new(),
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "vitrine") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Config::default()
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => return config,
                Err(e) => {
                    eprintln!("Failed to parse config file: {}", e);
                    eprintln!("Using default configuration");
                }
            },
            Err(e) => {
                eprintln!("Failed to read config file: {}", e);
                eprintln!("Using default configuration");
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Resolve the content root: explicit override first, then the platform data dir,
    /// then a local fallback so the app still runs on exotic setups.
    pub fn content_root(&self) -> PathBuf {
        if let Some(dir) = &self.general.content_dir {
            return dir.clone();
        }
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "vitrine") {
            return proj_dirs.data_dir().join("content");
        }
        PathBuf::from("vitrine-content")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.window.width, 1100.0);
        assert_eq!(config.window.height, 760.0);
        assert!(config.general.content_dir.is_none());
        assert!(config.admin.passphrase.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.window.width, deserialized.window.width);
    }

    #[test]
    fn test_content_root_override() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = Config::default();
        config.general.content_dir = Some(dir.path().join("content"));
        assert_eq!(config.content_root(), dir.path().join("content"));
    }

    #[test]
    fn test_load_from_rejects_garbage() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").expect("write");
        let config = Config::load_from(&path);
        assert_eq!(config.theme.mode, "dark");
    }
}
