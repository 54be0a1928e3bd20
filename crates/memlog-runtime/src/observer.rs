use std::fmt;
use std::path::PathBuf;

/// Severity of a [`PipelineEvent`]. Ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventLevel {
    Warn,
    Info,
    Debug,
}

/// Progress observations emitted while a parse runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    ParsingSources { count: usize },
    FetchingUrl { label: String, url: String },
    ReadingDirectory { path: String },
    ReadingFile { path: String },
    SourceParsed { locator: String, records: usize },
    /// A source yielded no `[MEMINFO]` readings; processing continues
    EmptySource { locator: String },
    WritingJs { path: PathBuf },
    WritingCsv { path: PathBuf },
    WritingOutputs { dir: PathBuf },
}

impl PipelineEvent {
    pub fn level(&self) -> EventLevel {
        match self {
            PipelineEvent::EmptySource { .. } => EventLevel::Warn,
            PipelineEvent::ParsingSources { .. } | PipelineEvent::WritingCsv { .. } => {
                EventLevel::Info
            }
            PipelineEvent::FetchingUrl { .. }
            | PipelineEvent::ReadingDirectory { .. }
            | PipelineEvent::ReadingFile { .. }
            | PipelineEvent::SourceParsed { .. }
            | PipelineEvent::WritingJs { .. }
            | PipelineEvent::WritingOutputs { .. } => EventLevel::Debug,
        }
    }
}

impl fmt::Display for PipelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineEvent::ParsingSources { count } => {
                write!(f, "Parsing memory data from {} sources", count)
            }
            PipelineEvent::FetchingUrl { label, url } => {
                write!(f, "Fetching memory logs for {} from URL: {}", label, url)
            }
            PipelineEvent::ReadingDirectory { path } => {
                write!(f, "Reading memory logs from folder: {}", path)
            }
            PipelineEvent::ReadingFile { path } => {
                write!(f, "Reading memory logs from file: {}", path)
            }
            PipelineEvent::SourceParsed { locator, records } => {
                write!(f, "Got {} memory readings from source: {}", records, locator)
            }
            PipelineEvent::EmptySource { locator } => {
                write!(f, "Memory log source \"{}\" is empty", locator)
            }
            PipelineEvent::WritingJs { path } => {
                write!(f, "Writing JS data to: {}", path.display())
            }
            PipelineEvent::WritingCsv { path } => {
                write!(f, "Writing CSV data to: {}", path.display())
            }
            PipelineEvent::WritingOutputs { dir } => {
                write!(f, "Writing output files to folder: {}", dir.display())
            }
        }
    }
}

/// Receives pipeline events. Called concurrently from sibling sources.
pub trait Observer: Send + Sync {
    fn observe(&self, event: &PipelineEvent);
}

impl<F> Observer for F
where
    F: Fn(&PipelineEvent) + Send + Sync,
{
    fn observe(&self, event: &PipelineEvent) {
        self(event)
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn observe(&self, _event: &PipelineEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_empty_source_is_a_warning() {
        let event = PipelineEvent::EmptySource {
            locator: "logs/a.log".to_string(),
        };
        assert_eq!(event.level(), EventLevel::Warn);
        assert_eq!(event.to_string(), "Memory log source \"logs/a.log\" is empty");
    }

    #[test]
    fn test_levels_order_by_severity() {
        assert!(EventLevel::Warn < EventLevel::Info);
        assert!(EventLevel::Info < EventLevel::Debug);
    }

    #[test]
    fn test_closures_observe() {
        let seen = Mutex::new(Vec::new());
        let observer = |event: &PipelineEvent| seen.lock().unwrap().push(event.level());

        observer.observe(&PipelineEvent::ParsingSources { count: 2 });
        NullObserver.observe(&PipelineEvent::ParsingSources { count: 3 });

        assert_eq!(*seen.lock().unwrap(), vec![EventLevel::Info]);
    }
}
