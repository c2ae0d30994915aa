//! Built-in `--version` and `--help` pseudo-commands.
//!
//! Both read app metadata from the [`Context`]; neither holds a reference to
//! the dispatcher.

use super::context::Context;
use super::help;
use super::types::Command;
use crate::error::CliResult;
use crate::output::Stream;
use crate::types::Outcome;

/// Prints `<name> version <version>, <description>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct VersionCommand;

impl Command for VersionCommand {
    fn name(&self) -> &str {
        "--version"
    }

    fn exits_after_execute(&self) -> bool {
        true
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<Outcome> {
        let app = ctx.app();
        let line = format!("{} version {}, {}", app.name, app.version, app.description);
        ctx.out(&line)?;
        Ok(Outcome::success())
    }
}

/// Prints the command summary.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "--help"
    }

    fn exits_after_execute(&self) -> bool {
        true
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<Outcome> {
        let summary = help::render_summary(ctx.app(), ctx.program(), ctx.commands());
        ctx.write(Stream::Stdout, &summary)?;
        Ok(Outcome::success())
    }
}
