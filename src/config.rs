use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional settings file; any field left out falls back to CLI defaults
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    #[serde(default)]
    pub(crate) base_url: Option<String>,
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) delay_ms: Option<u64>,
    #[serde(default)]
    pub(crate) max_pages: Option<u32>,
    #[serde(default)]
    pub(crate) per_page: Option<u32>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        log::debug!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/qrstats/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("qrstats").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/qrstats/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("qrstats").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.qrstats.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".qrstats.toml"));
        }

        paths
    }
}
