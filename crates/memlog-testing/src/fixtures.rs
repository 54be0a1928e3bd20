//! Builders for log text in the shape the extractor recognizes.

use memlog_types::SuiteMarker;

/// One `[MEMINFO]` reading line.
///
/// # Example
/// ```
/// use memlog_testing::fixtures::MemInfoLine;
/// use memlog_types::SuiteMarker;
///
/// let line = MemInfoLine::new(SuiteMarker::Web, "@home", 500).tests(3).render();
/// assert!(line.contains("used: 500"));
/// ```
#[derive(Debug, Clone)]
pub struct MemInfoLine {
    suite: SuiteMarker,
    label: String,
    used: u64,
    total: u64,
    limit: u64,
    tests: Option<u64>,
}

impl MemInfoLine {
    pub fn new(suite: SuiteMarker, label: impl Into<String>, used: u64) -> Self {
        Self {
            suite,
            label: label.into(),
            used,
            total: used.saturating_mul(2),
            limit: used.saturating_mul(4),
            tests: None,
        }
    }

    pub fn tests(mut self, tests: u64) -> Self {
        self.tests = Some(tests);
        self
    }

    pub fn render(&self) -> String {
        let mut line = format!(
            "2024-03-18 10:42:07,311 INFO  [com.example.ui{}] pool-1-thread-1: [MEMINFO] {} (after GC) - used: {} - total: {} - limit: {}",
            self.suite, self.label, self.used, self.total, self.limit
        );
        if let Some(tests) = self.tests {
            line.push_str(&format!(" - tests: {}", tests));
        }
        line
    }
}

/// Shorthand for a desktop-suite reading line
pub fn web_line(label: &str, used: u64) -> String {
    MemInfoLine::new(SuiteMarker::Web, label, used).render()
}

/// Shorthand for a mobile-suite reading line
pub fn mobile_line(label: &str, used: u64) -> String {
    MemInfoLine::new(SuiteMarker::MobileWeb, label, used).render()
}

/// Surround reading lines with typical build output noise
pub fn noisy_log(lines: &[String]) -> String {
    let mut out = vec![
        "> Task :app:test".to_string(),
        "Downloading https://repo.example.com/artifact.jar".to_string(),
    ];
    for line in lines {
        out.push(line.clone());
        out.push("    at com.example.Runner.run(Runner.java:42)".to_string());
    }
    out.push("BUILD SUCCESSFUL in 4m 12s".to_string());
    out.join("\n")
}
