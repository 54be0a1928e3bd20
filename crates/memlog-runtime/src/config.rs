use crate::Result;
use memlog_core::resolve_workspace_path;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where inputs and outputs live. Relative paths are taken from the
/// current directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Manifest of build sources
    pub sources: PathBuf,
    /// Cache directory for fetched URLs
    pub logs_dir: PathBuf,
    /// Destination of `data.js` / `data.csv`
    pub output_dir: PathBuf,
    /// Viewer page opened in the browser
    pub viewer: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: PathBuf::from("memory_sources.txt"),
            logs_dir: PathBuf::from(".memlog/logs"),
            output_dir: PathBuf::from("memory_data"),
            viewer: PathBuf::from("memory_data/index.html"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    pub editors: Vec<String>,
    pub browsers: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            editors: ["code", "codium", "nano"].map(String::from).to_vec(),
            browsers: default_browsers(),
        }
    }
}

fn default_browsers() -> Vec<String> {
    let browsers: &[&str] = if cfg!(target_os = "macos") {
        &["open"]
    } else if cfg!(windows) {
        &["explorer"]
    } else {
        &["xdg-open", "open"]
    };
    browsers.iter().map(|b| b.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Whole-request timeout for remote sources; `None` waits forever
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: Some(300),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub launchers: LauncherConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_workspace_path(None)?.join("config.toml"))
    }
}
