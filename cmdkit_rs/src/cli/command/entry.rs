//! A registered command together with the state the dispatcher owns for it.

use std::any::Any;

use super::context::{CommandListing, Context};
use super::global::GlobalFlags;
use super::help;
use super::options::{OptionAction, Options};
use super::types::{Command, CommandHandle};
use crate::cli::parser;
use crate::error::{CliError, CliResult};
use crate::output::{OutputSink, Stream};
use crate::types::Outcome;

/// Command plus its option list and global flags.
pub(crate) struct CommandEntry<C: Command> {
    pub(crate) command: C,
    pub(crate) options: Options<C>,
    pub(crate) flags: GlobalFlags,
}

impl<C: Command> CommandEntry<C> {
    pub(crate) fn new(command: C) -> Self {
        let mut options = Options::with_globals();
        command.configure_options(&mut options);
        Self {
            command,
            options,
            flags: GlobalFlags::default(),
        }
    }

    /// Fire option `index` with the matched flag and value.
    pub(crate) fn apply(
        &mut self,
        index: usize,
        flag: Option<&str>,
        value: Option<&str>,
        program: &str,
        sink: &mut dyn OutputSink,
    ) -> CliResult<()> {
        let Some(option) = self.options.get(index) else {
            return Ok(());
        };
        match option.action() {
            OptionAction::Callback(callback) => callback(&mut self.command, flag, value),
            OptionAction::ShowHelp => {
                let text = help::render_command_help(program, self.command.name(), &self.options);
                sink.write(Stream::Stdout, &text)?;
                return Err(CliError::HelpDisplayed {
                    command: self.command.name().to_string(),
                });
            }
            OptionAction::Verbose => self.flags.verbose = true,
            OptionAction::Quiet => self.flags.quiet = true,
        }
        Ok(())
    }
}

/// Type-erased interface the dispatcher drives.
pub(crate) trait Registered: CommandHandle {
    fn exits_after_execute(&self) -> bool;

    fn listing(&self) -> CommandListing;

    fn process_arguments(
        &mut self,
        arguments: &[String],
        program: &str,
        sink: &mut dyn OutputSink,
    ) -> CliResult<()>;

    fn render_help(&self, program: &str) -> String;

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<Outcome>;

    fn as_handle(&self) -> &dyn CommandHandle;
}

impl<C: Command> CommandHandle for CommandEntry<C> {
    fn name(&self) -> &str {
        self.command.name()
    }

    fn help_description(&self) -> &str {
        self.command.help_description()
    }

    fn verbose(&self) -> bool {
        self.flags.verbose
    }

    fn quiet(&self) -> bool {
        self.flags.quiet
    }

    fn as_any(&self) -> &dyn Any {
        &self.command
    }
}

impl<C: Command> Registered for CommandEntry<C> {
    fn exits_after_execute(&self) -> bool {
        self.command.exits_after_execute()
    }

    fn listing(&self) -> CommandListing {
        CommandListing {
            name: self.command.name().to_string(),
            description: self.command.help_description().to_string(),
        }
    }

    fn process_arguments(
        &mut self,
        arguments: &[String],
        program: &str,
        sink: &mut dyn OutputSink,
    ) -> CliResult<()> {
        parser::process_arguments(self, arguments, program, sink)
    }

    fn render_help(&self, program: &str) -> String {
        help::render_command_help(program, self.command.name(), &self.options)
    }

    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<Outcome> {
        self.command.execute(ctx)
    }

    fn as_handle(&self) -> &dyn CommandHandle {
        self
    }
}
