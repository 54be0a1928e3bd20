use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to labels read from mobile-suite log lines
pub const MOBILE_LABEL_SUFFIX: &str = " (mobile)";

/// One `[MEMINFO]` reading pulled out of a log.
///
/// `label` is the test-suite name reported by the log line (optionally
/// suffixed with [`MOBILE_LABEL_SUFFIX`]); several records in one source may
/// share a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub label: String,
    pub used_bytes: u64,
}

impl MemoryRecord {
    pub fn new(label: impl Into<String>, used_bytes: u64) -> Self {
        Self {
            label: label.into(),
            used_bytes,
        }
    }
}

/// Which test suite emitted a `[MEMINFO]` line.
///
/// The mobile marker is a superstring of the desktop one, so callers must
/// match [`SuiteMarker::MobileWeb`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteMarker {
    Web,
    MobileWeb,
}

impl SuiteMarker {
    pub const fn as_str(self) -> &'static str {
        match self {
            SuiteMarker::Web => ".WebSuite",
            SuiteMarker::MobileWeb => ".MobileWebSuite",
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            ".WebSuite" => Some(SuiteMarker::Web),
            ".MobileWebSuite" => Some(SuiteMarker::MobileWeb),
            _ => None,
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, SuiteMarker::MobileWeb)
    }
}

impl fmt::Display for SuiteMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
