use crate::config::LauncherConfig;
use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Opens files for the user with whatever tools the host provides
pub trait Launcher {
    fn open_in_editor(&self, path: &Path) -> Result<()>;
    fn open_in_browser(&self, path: &Path) -> Result<()>;
}

/// Runs external commands from prioritized candidate lists.
///
/// A candidate is a command line such as `code --wait`; the target path is
/// appended as the last argument. The first candidate that starts and exits
/// successfully wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLauncher {
    editors: Vec<String>,
    browsers: Vec<String>,
}

impl CommandLauncher {
    pub fn new(editors: Vec<String>, browsers: Vec<String>) -> Self {
        Self { editors, browsers }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.editors.clone(), config.browsers.clone())
    }

    fn launch(kind: &str, candidates: &[String], path: &Path) -> Result<()> {
        if candidates.iter().any(|candidate| run_candidate(candidate, path)) {
            return Ok(());
        }

        Err(Error::Launch(format!(
            "no {} could open {} (tried: {})",
            kind,
            path.display(),
            if candidates.is_empty() {
                "nothing configured".to_string()
            } else {
                candidates.join(", ")
            }
        )))
    }
}

impl Launcher for CommandLauncher {
    fn open_in_editor(&self, path: &Path) -> Result<()> {
        Self::launch("editor", &self.editors, path)
    }

    fn open_in_browser(&self, path: &Path) -> Result<()> {
        Self::launch("browser", &self.browsers, path)
    }
}

fn run_candidate(candidate: &str, path: &Path) -> bool {
    let mut parts = candidate.split_whitespace();
    let Some(program) = parts.next() else {
        return false;
    };

    Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_falls_back_to_next_candidate() {
        let launcher = CommandLauncher::new(
            vec![
                "memlog-no-such-editor".to_string(),
                "false".to_string(),
                "true --ignored".to_string(),
            ],
            vec![],
        );

        assert!(launcher.open_in_editor(Path::new("sources.txt")).is_ok());
    }

    #[test]
    fn test_all_candidates_failing_is_an_error() {
        let launcher = CommandLauncher::new(
            vec![],
            vec!["memlog-no-such-browser".to_string(), "  ".to_string()],
        );

        let err = launcher
            .open_in_browser(Path::new("index.html"))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("no browser could open index.html"));
        assert!(message.contains("memlog-no-such-browser"));
    }

    #[test]
    fn test_empty_candidate_list() {
        let launcher = CommandLauncher::new(vec![], vec![]);
        let err = launcher.open_in_editor(Path::new("a")).unwrap_err();
        assert!(err.to_string().contains("nothing configured"));
    }
}
