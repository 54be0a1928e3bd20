use memlog_types::SuiteMarker;
use regex::Regex;
use std::sync::LazyLock;

/// Token every memory reading line carries
pub const MEMINFO_MARKER: &str = "[MEMINFO] @";

/// Suite marker (last one before the `: [MEMINFO]` tag) and the text after the tag
static SUITE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(\.(?:Mobile)?WebSuite).*: \[MEMINFO\] (.+)$").unwrap()
});

/// A log line recognized as a memory reading, with `,` and `"` removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub suite: SuiteMarker,
    /// Everything after `[MEMINFO] `, starting at the `@` label
    pub payload: String,
}

/// Decide whether `line` is a memory reading and which suite emitted it.
pub fn classify_line(line: &str) -> Option<ClassifiedLine> {
    if !line.contains(MEMINFO_MARKER) {
        return None;
    }

    let cleaned = line.replace([',', '"'], "");
    let caps = SUITE_LINE.captures(&cleaned)?;
    let suite = SuiteMarker::from_marker(caps.get(1)?.as_str())?;

    Some(ClassifiedLine {
        suite,
        payload: caps.get(2)?.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_suite() {
        let line = "12:00 org.acme.WebSuite worker: [MEMINFO] @home (after GC) - used: 1";
        let classified = classify_line(line).unwrap();
        assert_eq!(classified.suite, SuiteMarker::Web);
        assert_eq!(classified.payload, "@home (after GC) - used: 1");
    }

    #[test]
    fn test_mobile_suite_not_mistaken_for_desktop() {
        let line = "org.acme.MobileWebSuite worker: [MEMINFO] @home (after GC)";
        assert_eq!(classify_line(line).unwrap().suite, SuiteMarker::MobileWeb);
    }

    #[test]
    fn test_marker_required() {
        assert!(classify_line("org.acme.WebSuite worker: [MEMINFO] home").is_none());
        assert!(classify_line("org.acme.WebSuite worker: nothing here").is_none());
    }

    #[test]
    fn test_suite_required() {
        assert!(classify_line("worker: [MEMINFO] @home (after GC) - used: 1").is_none());
        assert!(classify_line("WebSuite worker: [MEMINFO] @home").is_none());
    }

    #[test]
    fn test_delimiters_removed() {
        let line = "\"a.WebSuite\": [MEMINFO] @x,y";
        assert_eq!(classify_line(line).unwrap().payload, "@xy");
    }
}
