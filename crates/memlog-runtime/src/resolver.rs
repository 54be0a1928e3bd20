use crate::fetch::Fetcher;
use crate::observer::{Observer, PipelineEvent};
use crate::{Error, Result};
use futures::future::{BoxFuture, FutureExt, try_join_all};
use indexmap::IndexMap;
use memlog_core::{MAX_LABEL_FILE_NAME_LEN, normalize_label};
use memlog_providers::extract_records;
use memlog_types::{MemoryRecord, SourceKind, SourceResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Cache file name used when a label normalizes to nothing
const UNNAMED_CACHE_FILE: &str = "unnamed_source";

type Resolved = Vec<(String, Vec<MemoryRecord>)>;

/// A source waiting to be resolved. `cache` is set for remote sources only.
struct Pending {
    label: String,
    locator: String,
    cache: Option<PathBuf>,
}

/// Turns `label -> locator` mappings into extracted records.
///
/// Siblings at each level (manifest entries, entries of one directory) are
/// resolved concurrently. Directories are flattened: each entry is labeled
/// by its own file name, not prefixed with the directory's label. The first
/// retrieval failure aborts the whole resolution.
pub struct SourceResolver {
    fetcher: Arc<dyn Fetcher>,
    observer: Arc<dyn Observer>,
    cache_dir: PathBuf,
    allow_mobile: bool,
}

impl SourceResolver {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        observer: Arc<dyn Observer>,
        cache_dir: impl Into<PathBuf>,
        allow_mobile: bool,
    ) -> Self {
        Self {
            fetcher,
            observer,
            cache_dir: cache_dir.into(),
            allow_mobile,
        }
    }

    /// Resolve every source. Results are merged in `sources` order (directory
    /// entries by file name); a repeated label replaces the earlier records.
    pub async fn resolve(&self, sources: &IndexMap<String, String>) -> Result<SourceResult> {
        let mut caches = self.cache_paths(sources);
        let entries = sources
            .iter()
            .map(|(label, locator)| Pending {
                label: label.clone(),
                locator: locator.clone(),
                cache: caches.swap_remove(label),
            })
            .collect();

        let resolved = self.resolve_level(entries).await?;
        Ok(resolved.into_iter().collect())
    }

    /// Cache file for each remote source, keyed by label.
    ///
    /// Files are named after the normalized label. When two labels normalize
    /// to the same name, the later one (in `sources` order) gets its 1-based
    /// manifest position appended, so concurrent fetches never share a file.
    pub fn cache_paths(&self, sources: &IndexMap<String, String>) -> IndexMap<String, PathBuf> {
        let mut taken = HashSet::new();
        let mut paths = IndexMap::new();

        for (index, (label, locator)) in sources.iter().enumerate() {
            if SourceKind::classify(locator) != SourceKind::RemoteUrl {
                continue;
            }

            let base = cache_file_name(label);
            let mut name = base.clone();
            let mut suffix = index + 1;
            while taken.contains(&name) {
                name = with_suffix(&base, suffix);
                suffix += 1;
            }

            paths.insert(label.clone(), self.cache_dir.join(&name));
            taken.insert(name);
        }

        paths
    }

    fn resolve_level(&self, entries: Vec<Pending>) -> BoxFuture<'_, Result<Resolved>> {
        async move {
            let branches = entries.into_iter().map(|entry| self.resolve_entry(entry));
            let resolved = try_join_all(branches).await?;
            Ok(resolved.into_iter().flatten().collect())
        }
        .boxed()
    }

    async fn resolve_entry(&self, entry: Pending) -> Result<Resolved> {
        let Pending {
            label,
            locator,
            cache,
        } = entry;

        let content = match SourceKind::classify(&locator) {
            SourceKind::RemoteUrl => {
                let dest = cache.unwrap_or_else(|| self.cache_dir.join(cache_file_name(&label)));
                self.fetch_remote(&label, &locator, dest).await?
            }
            SourceKind::Local => {
                let metadata = tokio::fs::metadata(&locator)
                    .await
                    .map_err(|err| Error::unavailable(&locator, err))?;

                if metadata.is_dir() {
                    self.observer.observe(&PipelineEvent::ReadingDirectory {
                        path: locator.clone(),
                    });
                    let listing = list_directory(&locator).await?;
                    return self.resolve_level(listing).await;
                }

                self.observer.observe(&PipelineEvent::ReadingFile {
                    path: locator.clone(),
                });
                read_text(Path::new(&locator), &locator).await?
            }
        };

        let records = extract_records(&content, self.allow_mobile);
        if records.is_empty() {
            self.observer
                .observe(&PipelineEvent::EmptySource { locator });
        } else {
            self.observer.observe(&PipelineEvent::SourceParsed {
                locator,
                records: records.len(),
            });
        }

        Ok(vec![(label, records)])
    }

    async fn fetch_remote(&self, label: &str, url: &str, dest: PathBuf) -> Result<String> {
        self.observer.observe(&PipelineEvent::FetchingUrl {
            label: label.to_string(),
            url: url.to_string(),
        });

        tokio::fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|err| Error::unavailable(url, err))?;

        let fetcher = Arc::clone(&self.fetcher);
        let target = dest.clone();
        let remote = url.to_string();
        tokio::task::spawn_blocking(move || fetcher.fetch(&remote, &target))
            .await
            .map_err(|err| Error::unavailable(url, err))?
            .map_err(|err| Error::unavailable(url, err))?;

        read_text(&dest, url).await
    }
}

fn cache_file_name(label: &str) -> String {
    let name = normalize_label(label);
    if name.is_empty() {
        UNNAMED_CACHE_FILE.to_string()
    } else {
        name
    }
}

/// `base_<n>`, shortening `base` so the result still fits a file name
fn with_suffix(base: &str, n: usize) -> String {
    let suffix = format!("_{}", n);
    let keep = base.len().min(MAX_LABEL_FILE_NAME_LEN - suffix.len());
    format!("{}{}", &base[..keep], suffix)
}

/// Entries of `dir` labeled by file name, sorted by file name
async fn list_directory(dir: &str) -> Result<Vec<Pending>> {
    let root = PathBuf::from(dir);
    let listing = tokio::task::spawn_blocking(move || {
        WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| {
                entry.map(|entry| Pending {
                    label: entry.file_name().to_string_lossy().into_owned(),
                    locator: entry.path().to_string_lossy().into_owned(),
                    cache: None,
                })
            })
            .collect::<std::result::Result<Vec<Pending>, walkdir::Error>>()
    })
    .await
    .map_err(|err| Error::unavailable(dir, err))?;

    listing.map_err(|err| Error::unavailable(dir, err))
}

/// Read a file as text; invalid UTF-8 is replaced rather than rejected
async fn read_text(path: &Path, locator: &str) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| Error::unavailable(locator, err))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
