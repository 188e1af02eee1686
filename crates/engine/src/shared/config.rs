use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub export: ExportConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Directory the summary export is written into
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// How many stores the store-performance table shows
    #[serde(default = "default_top_stores")]
    pub top_stores: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_stores: default_top_stores(),
        }
    }
}

fn default_top_stores() -> usize {
    10
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[export]
dir = "target/export"

[display]
top_stores = 10
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the export directory from configuration
/// Resolves relative paths relative to the current working directory
pub fn get_export_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.export.dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(dir))
            .unwrap_or_else(|_| dir.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.export.dir, "target/export");
        assert_eq!(config.display.top_stores, 10);
    }

    #[test]
    fn test_display_section_optional() {
        let config: Config = toml::from_str("[export]\ndir = \"out\"").unwrap();
        assert_eq!(config.display.top_stores, 10);
    }
}
