//! Execution context handed to [`super::Command::execute`].

use crate::error::CliResult;
use crate::output::{OutputSink, Stream};
use crate::types::AppInfo;

/// Name and description of a registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandListing {
    pub name: String,
    pub description: String,
}

/// Read-only dispatcher metadata plus the output sink.
///
/// Built-in commands read app metadata and the command listing from here
/// instead of holding a reference to the dispatcher.
pub struct Context<'a> {
    app: &'a AppInfo,
    program: &'a str,
    commands: &'a [CommandListing],
    sink: &'a mut dyn OutputSink,
    verbose: bool,
    quiet: bool,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        app: &'a AppInfo,
        program: &'a str,
        commands: &'a [CommandListing],
        sink: &'a mut dyn OutputSink,
        verbose: bool,
        quiet: bool,
    ) -> Self {
        Self {
            app,
            program,
            commands,
            sink,
            verbose,
            quiet,
        }
    }

    pub fn app(&self) -> &AppInfo {
        self.app
    }

    /// Executable name used in usage lines.
    pub fn program(&self) -> &str {
        self.program
    }

    /// Every registered command, built-ins included, in registration order.
    pub fn commands(&self) -> &[CommandListing] {
        self.commands
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Print a line to stdout unless the command is quiet.
    pub fn out(&mut self, text: &str) -> CliResult<()> {
        if !self.quiet {
            self.sink.writeln(Stream::Stdout, text)?;
        }
        Ok(())
    }

    /// Print a line to stderr (`"error: "` prefixed).
    pub fn err(&mut self, text: &str) -> CliResult<()> {
        self.sink.writeln(Stream::Stderr, text)?;
        Ok(())
    }

    /// Raw write, bypassing quiet mode.
    pub fn write(&mut self, stream: Stream, text: &str) -> CliResult<()> {
        self.sink.write(stream, text)?;
        Ok(())
    }
}
