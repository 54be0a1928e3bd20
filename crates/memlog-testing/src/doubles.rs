//! Test doubles for the runtime's collaborator traits.

use memlog_runtime::{EventLevel, Fetcher, Observer, PipelineEvent};
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// Serves canned bodies by URL and records every request.
///
/// Unknown URLs fail with `NotFound`. A page may carry a delay, which is
/// slept before the body is written.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, (String, Duration)>,
    calls: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_delayed_page(url, body, Duration::ZERO)
    }

    pub fn with_delayed_page(
        mut self,
        url: impl Into<String>,
        body: impl Into<String>,
        delay: Duration,
    ) -> Self {
        self.pages.insert(url.into(), (body.into(), delay));
        self
    }

    /// URLs requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> io::Result<()> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some((body, delay)) => {
                std::thread::sleep(*delay);
                std::fs::write(dest, body)
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("404 Not Found: {}", url),
            )),
        }
    }
}

/// Keeps every event it observes.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn at_level(&self, level: EventLevel) -> Vec<PipelineEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.level() == level)
            .collect()
    }
}

impl Observer for RecordingObserver {
    fn observe(&self, event: &PipelineEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
