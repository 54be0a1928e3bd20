// NOTE: memlog pipeline
//
// manifest -> resolve (concurrent, recursive over directories) -> aggregate -> write
//
// - Every source must resolve; one failure aborts the run before anything
//   is written, so data.js and data.csv always describe the same builds.
// - A source without readings is only a warning: the build still appears
//   as a CSV header column.
// - Editor and browser launching go through configurable candidate lists
//   (`[launchers]` in config.toml) instead of a fixed tool chain.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ParseArgs};
pub use commands::run;
