use crate::presentation::ConsoleObserver;
use crate::types::LogLevel;
use anyhow::{Context, Result};
use memlog_core::resolve_against;
use memlog_runtime::{CommandLauncher, Config};
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    cwd: PathBuf,
    config: Config,
    pub log_level: LogLevel,
}

impl ExecutionContext {
    pub fn new(config_path: Option<PathBuf>, log_level: LogLevel) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let config_path = match config_path {
            Some(path) => resolve_against(&cwd, &path),
            None => Config::default_path()?,
        };
        let config = Config::load_from(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

        Ok(Self {
            cwd,
            config,
            log_level,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A CLI override if given, otherwise the configured path; relative
    /// paths are anchored at the current directory.
    pub fn resolve_path(&self, explicit: Option<PathBuf>, configured: &Path) -> PathBuf {
        let path = explicit.unwrap_or_else(|| configured.to_path_buf());
        resolve_against(&self.cwd, &path)
    }

    pub fn launcher(&self) -> CommandLauncher {
        CommandLauncher::from_config(&self.config.launchers)
    }

    pub fn console(&self) -> ConsoleObserver {
        ConsoleObserver::new(self.log_level)
    }
}
