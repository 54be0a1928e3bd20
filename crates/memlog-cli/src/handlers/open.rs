use crate::context::ExecutionContext;
use anyhow::Result;
use memlog_runtime::{EventLevel, Launcher};
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, viewer: Option<PathBuf>) -> Result<()> {
    let path = ctx.resolve_path(viewer, &ctx.config().paths.viewer);
    ctx.console()
        .note(EventLevel::Info, "Opening graph view in browser");
    ctx.launcher().open_in_browser(&path)?;
    Ok(())
}
