//! `[MEMINFO]` extraction from free-form build and test logs.
//!
//! Two stages: [`classify_line`] decides whether a line is a memory reading
//! and which suite emitted it, then [`parse_fields`] reads the numeric
//! fields from the rest of the line. Everything else in the log is noise.

mod classify;
mod fields;

pub use classify::{ClassifiedLine, MEMINFO_MARKER, classify_line};
pub use fields::{MemInfoFields, parse_fields};

use memlog_types::{MOBILE_LABEL_SUFFIX, MemoryRecord};

/// Pull every memory reading out of `text`, in log order.
///
/// Mobile-suite readings are dropped unless `allow_mobile` is set, in which
/// case their label gets the ` (mobile)` suffix. An empty result is not an
/// error.
pub fn extract_records(text: &str, allow_mobile: bool) -> Vec<MemoryRecord> {
    let mut records = Vec::new();

    for line in text.lines() {
        let Some(classified) = classify_line(line) else {
            continue;
        };
        let Some(fields) = parse_fields(&classified.payload) else {
            continue;
        };
        if fields.label.is_empty() {
            continue;
        }

        let label = if classified.suite.is_mobile() {
            if !allow_mobile {
                continue;
            }
            format!("{}{}", fields.label, MOBILE_LABEL_SUFFIX)
        } else {
            fields.label
        };

        records.push(MemoryRecord::new(label, fields.used));
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(suite: &str, label: &str, used: u64) -> String {
        format!(
            "[INFO] com.example{suite} Thread-1: [MEMINFO] {label} (after GC) - used: {used} - total: 900000 - limit: 2000000 - tests: 4"
        )
    }

    #[test]
    fn test_desktop_line_yields_one_record() {
        let text = line(".WebSuite", "@checkout", 12345);
        assert_eq!(
            extract_records(&text, false),
            vec![MemoryRecord::new("@checkout", 12345)]
        );
    }

    #[test]
    fn test_mobile_line_dropped_unless_allowed() {
        let text = line(".MobileWebSuite", "@checkout", 12345);
        assert!(extract_records(&text, false).is_empty());
        assert_eq!(
            extract_records(&text, true),
            vec![MemoryRecord::new("@checkout (mobile)", 12345)]
        );
    }

    #[test]
    fn test_noise_is_ignored() {
        let text = [
            "Starting build...".to_string(),
            line(".WebSuite", "@home", 100),
            "[MEMINFO] without a suite marker".to_string(),
            "com.example.WebSuite Thread-2: [MEMINFO] @broken (after GC) - used: lots".to_string(),
            String::new(),
            line(".WebSuite", "@home", 150),
            "BUILD SUCCESSFUL".to_string(),
        ]
        .join("\n");

        assert_eq!(
            extract_records(&text, false),
            vec![
                MemoryRecord::new("@home", 100),
                MemoryRecord::new("@home", 150),
            ]
        );
    }

    #[test]
    fn test_thousands_separators_and_quotes_are_stripped() {
        let text = "\"x.WebSuite\" main: [MEMINFO] @\"cart, page\" (after GC) - used: 1,048,576 - total: 2,000,000 - limit: 4,000,000";
        assert_eq!(
            extract_records(text, false),
            vec![MemoryRecord::new("@cart page", 1_048_576)]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = format!(
            "{}\r\n{}\r\n",
            line(".WebSuite", "@a", 1),
            line(".MobileWebSuite", "@b", 2)
        );
        assert_eq!(
            extract_records(&text, true),
            vec![
                MemoryRecord::new("@a", 1),
                MemoryRecord::new("@b (mobile)", 2),
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_records("", true).is_empty());
    }
}
