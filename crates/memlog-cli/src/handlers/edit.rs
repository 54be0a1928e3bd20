use crate::context::ExecutionContext;
use anyhow::Result;
use memlog_runtime::{EventLevel, Launcher};
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, sources: Option<PathBuf>) -> Result<()> {
    let path = ctx.resolve_path(sources, &ctx.config().paths.sources);
    ctx.console()
        .note(EventLevel::Info, "Opening source file for editing");
    ctx.launcher().open_in_editor(&path)?;
    Ok(())
}
