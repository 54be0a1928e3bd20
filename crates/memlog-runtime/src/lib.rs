pub mod config;
pub mod error;
pub mod fetch;
pub mod launcher;
pub mod observer;
pub mod ops;
pub mod resolver;
pub mod writer;

pub use config::{Config, FetchConfig, LauncherConfig, PathsConfig};
pub use error::{Error, Result};
pub use fetch::{Fetcher, HttpFetcher};
pub use launcher::{CommandLauncher, Launcher};
pub use observer::{EventLevel, NullObserver, Observer, PipelineEvent};
pub use ops::parse::{ParseOptions, ParseOutcome, ParseService};
pub use resolver::SourceResolver;
pub use writer::{Artifacts, CSV_FILE_NAME, JS_FILE_NAME, WrittenArtifacts, write_artifacts};
