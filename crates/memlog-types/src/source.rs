use crate::MemoryRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a manifest locator is retrieved.
///
/// Only the URL scheme is decided structurally here; whether a local path
/// is a file or a directory needs a file-system lookup at resolve time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    RemoteUrl,
    Local,
}

impl SourceKind {
    pub fn classify(locator: &str) -> Self {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            SourceKind::RemoteUrl
        } else {
            SourceKind::Local
        }
    }
}

/// Extracted records keyed by build label.
///
/// Keeps first-insertion order. Inserting an existing label replaces its
/// records in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceResult {
    builds: IndexMap<String, Vec<MemoryRecord>>,
}

impl SourceResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the records previously stored under `label`, if any.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        records: Vec<MemoryRecord>,
    ) -> Option<Vec<MemoryRecord>> {
        self.builds.insert(label.into(), records)
    }

    pub fn get(&self, label: &str) -> Option<&[MemoryRecord]> {
        self.builds.get(label).map(Vec::as_slice)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.builds.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MemoryRecord])> {
        self.builds
            .iter()
            .map(|(label, records)| (label.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.builds.values().map(Vec::len).sum()
    }
}

impl FromIterator<(String, Vec<MemoryRecord>)> for SourceResult {
    fn from_iter<I: IntoIterator<Item = (String, Vec<MemoryRecord>)>>(iter: I) -> Self {
        let mut result = SourceResult::new();
        for (label, records) in iter {
            result.insert(label, records);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_locator() {
        assert_eq!(
            SourceKind::classify("https://ci.example.com/job/1/log"),
            SourceKind::RemoteUrl
        );
        assert_eq!(
            SourceKind::classify("http://ci.example.com"),
            SourceKind::RemoteUrl
        );
        assert_eq!(SourceKind::classify("build/a/logs"), SourceKind::Local);
        assert_eq!(SourceKind::classify("ftp://host/file"), SourceKind::Local);
        assert_eq!(SourceKind::classify(" https://x"), SourceKind::Local);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut result = SourceResult::new();
        result.insert("a", vec![MemoryRecord::new("@x", 1)]);
        result.insert("b", vec![]);
        let previous = result.insert("a", vec![MemoryRecord::new("@y", 2)]);

        assert_eq!(previous, Some(vec![MemoryRecord::new("@x", 1)]));
        assert_eq!(result.labels().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(result.get("a"), Some(&[MemoryRecord::new("@y", 2)][..]));
        assert_eq!(result.record_count(), 1);
    }

    #[test]
    fn test_serializes_as_label_map() {
        let result: SourceResult = [(
            "run1".to_string(),
            vec![MemoryRecord::new("@home", 500)],
        )]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"run1":[{"label":"@home","used_bytes":500}]}"#);
    }
}
