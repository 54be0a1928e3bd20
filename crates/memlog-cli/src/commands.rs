use super::args::{Cli, Commands, ParseArgs};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::{Result, bail};

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        log_level,
        command,
        parse,
    } = cli;
    let ctx = ExecutionContext::new(config, log_level)?;

    match command {
        None => handlers::parse::handle(&ctx, parse),
        Some(Commands::Parse(args)) => handlers::parse::handle(&ctx, parse.merge(args)),
        Some(Commands::Edit { sources }) => {
            reject_parse_options(&parse, "edit")?;
            handlers::edit::handle(&ctx, sources)
        }
        Some(Commands::Open { viewer }) => {
            reject_parse_options(&parse, "open")?;
            handlers::open::handle(&ctx, viewer)
        }
    }
}

fn reject_parse_options(parse: &ParseArgs, command: &str) -> Result<()> {
    if !parse.is_empty() {
        bail!("parse options cannot be combined with `{}`", command);
    }
    Ok(())
}
