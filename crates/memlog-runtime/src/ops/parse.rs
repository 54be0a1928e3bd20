use crate::fetch::Fetcher;
use crate::observer::{Observer, PipelineEvent};
use crate::resolver::SourceResolver;
use crate::writer::{Artifacts, WrittenArtifacts, write_artifacts};
use crate::Result;
use memlog_engine::{aggregate, render_csv, render_js_payload};
use memlog_providers::Manifest;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub manifest_path: PathBuf,
    pub cache_dir: PathBuf,
    pub output_dir: PathBuf,
    pub write_csv: bool,
    pub allow_mobile: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Entries in the manifest
    pub source_count: usize,
    /// Build labels after directory expansion
    pub build_count: usize,
    pub suite_count: usize,
    pub written: WrittenArtifacts,
}

/// Manifest -> resolve -> aggregate -> write, all or nothing.
pub struct ParseService {
    options: ParseOptions,
    fetcher: Arc<dyn Fetcher>,
}

impl ParseService {
    pub fn new(options: ParseOptions, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { options, fetcher }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Run the pipeline. Nothing is fetched when the manifest has no
    /// sources, and nothing is written when any source or either output fails.
    pub async fn run(&self, observer: Arc<dyn Observer>) -> Result<ParseOutcome> {
        let manifest = Manifest::load(&self.options.manifest_path)?;
        observer.observe(&PipelineEvent::ParsingSources {
            count: manifest.len(),
        });

        let resolver = SourceResolver::new(
            Arc::clone(&self.fetcher),
            Arc::clone(&observer),
            &self.options.cache_dir,
            self.options.allow_mobile,
        );
        let result = resolver.resolve(manifest.sources()).await?;

        let aggregate = aggregate(&result, self.options.write_csv);
        let artifacts = Artifacts {
            js: render_js_payload(&aggregate.table)?,
            csv: aggregate.csv.as_ref().map(render_csv).transpose()?,
        };

        let written =
            write_artifacts(&self.options.output_dir, &artifacts, observer.as_ref()).await?;

        Ok(ParseOutcome {
            source_count: manifest.len(),
            build_count: result.len(),
            suite_count: aggregate.table.len(),
            written,
        })
    }
}
