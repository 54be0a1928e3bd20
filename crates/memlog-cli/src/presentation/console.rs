use crate::types::LogLevel;
use is_terminal::IsTerminal;
use memlog_runtime::{EventLevel, Observer, ParseOutcome, PipelineEvent};
use owo_colors::OwoColorize;

/// Renders pipeline events on stderr, filtered by `--log-level`.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleObserver {
    level: LogLevel,
    colored: bool,
}

impl ConsoleObserver {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            colored: std::io::stderr().is_terminal(),
        }
    }

    pub fn note(&self, level: EventLevel, message: &str) {
        if !self.level.allows(level) {
            return;
        }
        eprintln!("{} {}", self.tag(level), message);
    }

    fn tag(&self, level: EventLevel) -> String {
        let label = match level {
            EventLevel::Warn => "warn:",
            EventLevel::Info => "info:",
            EventLevel::Debug => "debug:",
        };
        if !self.colored {
            return label.to_string();
        }
        match level {
            EventLevel::Warn => label.yellow().bold().to_string(),
            EventLevel::Info => label.cyan().to_string(),
            EventLevel::Debug => label.dimmed().to_string(),
        }
    }
}

impl Observer for ConsoleObserver {
    fn observe(&self, event: &PipelineEvent) {
        self.note(event.level(), &event.to_string());
    }
}

pub fn print_parse_summary(outcome: &ParseOutcome) {
    println!(
        "Parsed {} suites from {} builds ({} manifest sources)",
        outcome.suite_count, outcome.build_count, outcome.source_count
    );
    println!("  {}", outcome.written.js_path.display());
    if let Some(csv_path) = &outcome.written.csv_path {
        println!("  {}", csv_path.display());
    }
}
