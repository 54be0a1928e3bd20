use clap::ValueEnum;
use memlog_runtime::EventLevel;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Whether events of `level` are shown at this verbosity
    pub fn allows(self, level: EventLevel) -> bool {
        let max = match self {
            LogLevel::Error => return false,
            LogLevel::Warn => EventLevel::Warn,
            LogLevel::Info => EventLevel::Info,
            LogLevel::Debug | LogLevel::Trace => EventLevel::Debug,
        };
        level <= max
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_filtering() {
        assert!(!LogLevel::Error.allows(EventLevel::Warn));
        assert!(LogLevel::Warn.allows(EventLevel::Warn));
        assert!(!LogLevel::Warn.allows(EventLevel::Info));
        assert!(LogLevel::Info.allows(EventLevel::Info));
        assert!(!LogLevel::Info.allows(EventLevel::Debug));
        assert!(LogLevel::Trace.allows(EventLevel::Debug));
    }
}
