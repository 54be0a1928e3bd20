use std::io;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;

/// Retrieves a remote source into a local file.
///
/// Timeouts, redirects and retries are the implementation's concern; the
/// resolver only needs the bytes at `dest` once this returns `Ok`.
pub trait Fetcher: Send + Sync {
    /// Download `url` into `dest`, replacing any existing file
    fn fetch(&self, url: &str, dest: &Path) -> io::Result<()>;
}

/// Blocking HTTP(S) fetcher backed by one shared `ureq` agent
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> io::Result<()> {
        let response = self.agent.get(url).call().map_err(io::Error::other)?;
        let mut reader = response.into_body().into_reader();

        // Staged next to `dest` so the final persist is a same-filesystem rename;
        // the staging file is removed on drop if anything fails.
        let dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let mut staged = NamedTempFile::new_in(dir)?;
        io::copy(&mut reader, staged.as_file_mut())?;
        staged.as_file().sync_all()?;
        staged.persist(dest)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_fetch_leaves_no_files() {
        let temp = tempfile::TempDir::new().unwrap();
        let dest = temp.path().join("nightly");
        let fetcher = HttpFetcher::new(Some(Duration::from_secs(5)));

        // Nothing listens on the discard port of the loopback interface.
        let result = fetcher.fetch("http://127.0.0.1:9/log", &dest);

        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
