use crate::types::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "memlog")]
#[command(about = "Extract memory readings from build logs and chart them across builds", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (default: <workspace>/config.toml)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,

    // Options for the default `parse` command
    #[command(flatten)]
    pub parse: ParseArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read every source in the manifest and write data.js (default)
    Parse(ParseArgs),

    /// Open the source manifest in an editor
    Edit {
        #[arg(long)]
        sources: Option<PathBuf>,
    },

    /// Open the viewer page in a browser without parsing
    Open {
        #[arg(long)]
        viewer: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseArgs {
    #[arg(long, help = "Manifest of `[label =] location` lines")]
    pub sources: Option<PathBuf>,

    #[arg(long, help = "Cache directory for sources fetched over HTTP")]
    pub logs_dir: Option<PathBuf>,

    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[arg(long, help = "Also write data.csv")]
    pub csv: bool,

    #[arg(long, help = "Keep readings from the mobile web suite")]
    pub mobile: bool,

    #[arg(long, help = "Open the viewer once the data is written")]
    pub browser: bool,
}

impl ParseArgs {
    /// Combine options given before the `parse` keyword with those after it;
    /// paths after it win.
    pub fn merge(self, later: ParseArgs) -> ParseArgs {
        ParseArgs {
            sources: later.sources.or(self.sources),
            logs_dir: later.logs_dir.or(self.logs_dir),
            output_dir: later.output_dir.or(self.output_dir),
            csv: self.csv || later.csv,
            mobile: self.mobile || later.mobile,
            browser: self.browser || later.browser,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ParseArgs::default()
    }
}
