use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Directory holding the per-day session files
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Duration used when none is given on the command line
    #[serde(default)]
    pub(crate) default_duration: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    /// File this config was read from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if let Some(mut config) = Self::load_from(&path) {
                config.source = Some(path);
                return config;
            }
        }

        Self::default()
    }

    /// Parse a single config file; `None` if it is missing or invalid.
    /// Runs before logging is set up, so warnings go straight to stderr.
    fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/pomodoro/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("pomodoro").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/pomodoro/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("pomodoro").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.pomodoro.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".pomodoro.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("pomodoro")));
    }

    #[test]
    fn parses_all_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
data_dir = "/var/pomodoro"
default_duration = "50m"
timezone = "UTC"
color = "never"
debug = true
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/var/pomodoro")));
        assert_eq!(config.default_duration.as_deref(), Some("50m"));
        assert_eq!(config.timezone.as_deref(), Some("UTC"));
        assert_eq!(config.color, Some(ConfigColorMode::Never));
        assert!(config.debug);
        assert!(!config.no_color);
    }

    #[test]
    fn empty_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(config.data_dir.is_none());
        assert!(config.color.is_none());
    }

    #[test]
    fn invalid_file_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "color = 7").unwrap();
        assert!(Config::load_from(&path).is_none());
        assert!(Config::load_from(&tmp.path().join("missing.toml")).is_none());
    }
}
