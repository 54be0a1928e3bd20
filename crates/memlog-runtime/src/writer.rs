use crate::observer::{Observer, PipelineEvent};
use crate::{Error, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const JS_FILE_NAME: &str = "data.js";
pub const CSV_FILE_NAME: &str = "data.csv";

/// Fully rendered output, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub js: String,
    pub csv: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub js_path: PathBuf,
    pub csv_path: Option<PathBuf>,
}

/// Write `data.js` (and `data.csv` when present) into `output_dir`,
/// creating the directory if needed.
///
/// Both files are staged in `output_dir` first and only moved into place
/// once every staged write succeeded. If the second move fails, the file
/// moved by the first is removed again, so a failed call leaves neither.
pub async fn write_artifacts(
    output_dir: &Path,
    artifacts: &Artifacts,
    observer: &dyn Observer,
) -> Result<WrittenArtifacts> {
    tokio::fs::create_dir_all(output_dir).await?;

    let js_path = output_dir.join(JS_FILE_NAME);
    observer.observe(&PipelineEvent::WritingJs {
        path: js_path.clone(),
    });

    let csv_path = artifacts.csv.as_ref().map(|_| output_dir.join(CSV_FILE_NAME));
    if let Some(path) = &csv_path {
        observer.observe(&PipelineEvent::WritingCsv { path: path.clone() });
    }

    observer.observe(&PipelineEvent::WritingOutputs {
        dir: output_dir.to_path_buf(),
    });

    let dir = output_dir.to_path_buf();
    let artifacts = artifacts.clone();
    let written = WrittenArtifacts { js_path, csv_path };
    let targets = written.clone();
    tokio::task::spawn_blocking(move || commit(&dir, &artifacts, &targets))
        .await
        .map_err(|err| Error::Io(io::Error::other(err)))??;

    Ok(written)
}

fn commit(dir: &Path, artifacts: &Artifacts, targets: &WrittenArtifacts) -> io::Result<()> {
    let js = stage(dir, &artifacts.js)?;
    let csv = match (&targets.csv_path, &artifacts.csv) {
        (Some(path), Some(text)) => Some((path, stage(dir, text)?)),
        _ => None,
    };

    let Some((csv_path, csv)) = csv else {
        js.persist(&targets.js_path)?;
        return Ok(());
    };

    csv.persist(csv_path)?;
    if let Err(err) = js.persist(&targets.js_path) {
        let _ = std::fs::remove_file(csv_path);
        return Err(err.into());
    }
    Ok(())
}

/// Write `content` to a temporary file in `dir`; it is deleted on drop
/// unless persisted.
fn stage(dir: &Path, content: &str) -> io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    Ok(file)
}
