//! Manifest of build sources.
//!
//! One build spec per line, `[label =] location`. Blank lines and lines
//! starting with `#` or `;` are skipped. Missing labels are inferred from the
//! location.

use crate::{Error, Result};
use indexmap::IndexMap;
use regex::Regex;
use std::path::{MAIN_SEPARATOR, Path};
use std::sync::LazyLock;

static LABEL_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*=\s*").unwrap());

static BUILD_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"build/(.*)/logs").unwrap());

/// Ordered `label -> location` mapping read from a manifest.
///
/// Repeated labels overwrite the earlier location but keep its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    sources: IndexMap<String, String>,
}

impl Manifest {
    /// Parse manifest text. Fails with [`Error::EmptyManifest`] when no
    /// build spec survives.
    pub fn parse(text: &str) -> Result<Self> {
        let mut sources: IndexMap<String, String> = IndexMap::new();

        for line in text.lines() {
            let build_spec = line.trim();
            if build_spec.is_empty() || is_comment(build_spec) {
                continue;
            }

            let (label, location) = match LABEL_SEPARATOR.find(build_spec) {
                Some(sep) => (
                    &build_spec[..sep.start()],
                    &build_spec[sep.end()..],
                ),
                None => ("", build_spec),
            };

            let label = if label.is_empty() {
                infer_label(location, sources.len() + 1)
            } else {
                label.to_string()
            };

            sources.insert(unquote(&label).to_string(), location.to_string());
        }

        if sources.is_empty() {
            return Err(Error::EmptyManifest { origin: None });
        }

        Ok(Self { sources })
    }

    /// Read and parse a manifest file; an empty manifest error names `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|err| match err {
            Error::EmptyManifest { .. } => Error::EmptyManifest {
                origin: Some(path.to_path_buf()),
            },
            other => other,
        })
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.sources.get(label).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sources
            .iter()
            .map(|(label, location)| (label.as_str(), location.as_str()))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> &IndexMap<String, String> {
        &self.sources
    }
}

/// Derive a label for a location that came without one.
///
/// Tries the `<name>` of a `build/<name>/logs` path first, then the last path
/// segment, and finally `Build url #<position>`.
pub fn infer_label(location: &str, position: usize) -> String {
    let inferred = match BUILD_NAME.captures(location) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => last_segment(location),
    };

    if inferred.is_empty() {
        format!("Build url #{}", position)
    } else {
        inferred.to_string()
    }
}

fn last_segment(location: &str) -> &str {
    let separator = if location.contains(MAIN_SEPARATOR) {
        MAIN_SEPARATOR
    } else {
        '/'
    };
    location.rsplit(separator).next().unwrap_or("")
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}

/// Strip one matching pair of surrounding single or double quotes
fn unquote(label: &str) -> &str {
    let quoted = label.len() >= 2
        && ((label.starts_with('"') && label.ends_with('"'))
            || (label.starts_with('\'') && label.ends_with('\'')));
    if quoted {
        &label[1..label.len() - 1]
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_labels_keep_order() {
        let manifest = Manifest::parse(
            "main = https://ci.example.com/main/log\nrelease=build/release/logs/out.log\n",
        )
        .unwrap();

        let entries: Vec<_> = manifest.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("main", "https://ci.example.com/main/log"),
                ("release", "build/release/logs/out.log"),
            ]
        );
    }

    #[test]
    fn test_only_first_separator_splits() {
        let manifest = Manifest::parse("nightly = https://ci/x?job=7").unwrap();
        assert_eq!(manifest.get("nightly"), Some("https://ci/x?job=7"));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = "# header\n\n   ; disabled = a.log\n  \t\nreal = b.log\n";
        let manifest = Manifest::parse(text).unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.get("real"), Some("b.log"));
    }

    #[test]
    fn test_build_directory_name_inferred() {
        let manifest = Manifest::parse("build/foo/logs/x.log").unwrap();
        assert_eq!(manifest.get("foo"), Some("build/foo/logs/x.log"));
    }

    #[test]
    fn test_last_segment_inferred() {
        let manifest = Manifest::parse("a/b/c.log").unwrap();
        assert_eq!(manifest.get("c.log"), Some("a/b/c.log"));
    }

    #[test]
    fn test_ambiguous_entries_get_positional_labels() {
        let manifest =
            Manifest::parse("https://ci.example.com/a/\nhttps://ci.example.com/b/\n").unwrap();
        let labels: Vec<_> = manifest.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Build url #1", "Build url #2"]);
    }

    #[test]
    fn test_empty_explicit_label_falls_back_to_inference() {
        let manifest = Manifest::parse(" = logs/run.txt").unwrap();
        assert_eq!(manifest.get("run.txt"), Some("logs/run.txt"));
    }

    #[test]
    fn test_quotes_stripped_from_labels() {
        let manifest =
            Manifest::parse("\"Nightly build\" = a.log\n'rc 1' = b.log\n\"half = c.log").unwrap();
        assert_eq!(manifest.get("Nightly build"), Some("a.log"));
        assert_eq!(manifest.get("rc 1"), Some("b.log"));
        assert_eq!(manifest.get("\"half"), Some("c.log"));
    }

    // Duplicate labels silently overwrite; the first position is kept.
    #[test]
    fn test_duplicate_labels_last_write_wins() {
        let manifest = Manifest::parse("a = one.log\nb = two.log\na = three.log").unwrap();
        let entries: Vec<_> = manifest.iter().collect();
        assert_eq!(entries, vec![("a", "three.log"), ("b", "two.log")]);
    }

    #[test]
    fn test_empty_manifest_is_an_error() {
        let err = Manifest::parse("# nothing\n\n; here\n").unwrap_err();
        assert!(matches!(err, Error::EmptyManifest { origin: None }));
        assert_eq!(err.to_string(), "Failed to parse: no sources specified");
    }

    #[test]
    fn test_infer_label_positions() {
        assert_eq!(infer_label("build/a/b/logs", 1), "a/b");
        assert_eq!(infer_label("build//logs", 4), "Build url #4");
        assert_eq!(infer_label("plain", 2), "plain");
        assert_eq!(infer_label("", 3), "Build url #3");
    }

    #[test]
    fn test_load_reads_manifest_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("memory_sources.txt");
        std::fs::write(&path, "# nightly
run1 = build/run1/logs/output.log
").unwrap();

        let manifest = Manifest::load(&path).unwrap();

        assert_eq!(manifest.get("run1"), Some("build/run1/logs/output.log"));
    }

    #[test]
    fn test_load_empty_manifest_names_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("memory_sources.txt");
        std::fs::write(&path, "; nothing yet
").unwrap();

        let err = Manifest::load(&path).unwrap_err();

        match &err {
            Error::EmptyManifest { origin: Some(origin) } => assert_eq!(origin, &path),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            format!("Failed to parse: no sources specified in {}", path.display())
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = Manifest::load(&temp.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
