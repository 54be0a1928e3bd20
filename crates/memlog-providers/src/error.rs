use std::fmt;
use std::path::PathBuf;

/// Result type for memlog-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// Manifest parsed to zero sources
    EmptyManifest { origin: Option<PathBuf> },

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyManifest { origin: Some(path) } => write!(
                f,
                "Failed to parse: no sources specified in {}",
                path.display()
            ),
            Error::EmptyManifest { origin: None } => {
                write!(f, "Failed to parse: no sources specified")
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::EmptyManifest { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
