use std::fmt;

/// Result type for memlog-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Manifest or extraction layer error
    Provider(memlog_providers::Error),

    /// Aggregation or rendering error
    Engine(memlog_engine::Error),

    /// A source locator could not be retrieved
    SourceUnavailable { locator: String, reason: String },

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// No launcher candidate could open the target
    Launch(String),
}

impl Error {
    pub(crate) fn unavailable(locator: &str, reason: impl fmt::Display) -> Self {
        Error::SourceUnavailable {
            locator: locator.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Provider(err) => write!(f, "{}", err),
            Error::Engine(err) => write!(f, "Render error: {}", err),
            Error::SourceUnavailable { locator, reason } => {
                write!(f, "Memory log source \"{}\" is unavailable: {}", locator, reason)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Launch(msg) => write!(f, "Launch error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Provider(err) => Some(err),
            Error::Engine(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::SourceUnavailable { .. } | Error::Config(_) | Error::Launch(_) => None,
        }
    }
}

impl From<memlog_providers::Error> for Error {
    fn from(err: memlog_providers::Error) -> Self {
        Error::Provider(err)
    }
}

impl From<memlog_engine::Error> for Error {
    fn from(err: memlog_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<memlog_core::Error> for Error {
    fn from(err: memlog_core::Error) -> Self {
        match err {
            memlog_core::Error::Io(err) => Error::Io(err),
            memlog_core::Error::Config(msg) => Error::Config(msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
