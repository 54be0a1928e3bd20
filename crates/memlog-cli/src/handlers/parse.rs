use crate::args::ParseArgs;
use crate::context::ExecutionContext;
use crate::presentation;
use anyhow::{Context, Result};
use memlog_runtime::{EventLevel, HttpFetcher, Launcher, ParseOptions, ParseService};
use std::sync::Arc;
use std::time::Duration;

pub fn handle(ctx: &ExecutionContext, args: ParseArgs) -> Result<()> {
    let paths = &ctx.config().paths;
    let options = ParseOptions {
        manifest_path: ctx.resolve_path(args.sources, &paths.sources),
        cache_dir: ctx.resolve_path(args.logs_dir, &paths.logs_dir),
        output_dir: ctx.resolve_path(args.output_dir, &paths.output_dir),
        write_csv: args.csv,
        allow_mobile: args.mobile,
    };

    let timeout = ctx.config().fetch.timeout_secs.map(Duration::from_secs);
    let service = ParseService::new(options, Arc::new(HttpFetcher::new(timeout)));
    let console = ctx.console();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let outcome = runtime.block_on(service.run(Arc::new(console)))?;

    presentation::print_parse_summary(&outcome);

    if args.browser {
        let viewer = ctx.resolve_path(None, &ctx.config().paths.viewer);
        console.note(EventLevel::Info, "Opening graph view in browser");
        ctx.launcher().open_in_browser(&viewer)?;
    }

    Ok(())
}
