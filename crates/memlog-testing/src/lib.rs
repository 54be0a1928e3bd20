//! Testing infrastructure for memlog integration tests.
//!
//! - `TestWorld`: isolated directory with a manifest, logs and config
//! - `fixtures`: `[MEMINFO]` log line builders
//! - `doubles`: in-memory fetcher and recording observer
//! - `assertions`: checks on the generated `data.js` / `data.csv`

pub mod assertions;
pub mod doubles;
pub mod fixtures;
pub mod world;

pub use doubles::{RecordingObserver, StaticFetcher};
pub use world::TestWorld;
