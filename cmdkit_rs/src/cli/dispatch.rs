//! The dispatcher: owns the registered commands, identifies the command named
//! by the first argument, parses the rest against its options and runs it.

use std::fmt;
use std::path::Path;

use tracing::debug;

use super::command::entry::{CommandEntry, Registered};
use super::command::{
    Command, CommandHandle, CommandListing, Context, HelpCommand, VersionCommand, help,
};
use super::parser;
use crate::error::{CliError, CliResult};
use crate::output::{OutputSink, StdioSink};
use crate::types::{AppInfo, EXIT_SUCCESS, Outcome};

/// Result of one [`Cli::run`].
///
/// Borrows the executed command from the dispatcher so callers can inspect
/// the state its option callbacks recorded.
pub struct ExecutionResult<'a> {
    pub result_code: Option<i32>,
    pub result_description: Option<String>,
    pub executed_command: Option<&'a dyn CommandHandle>,
}

impl<'a> ExecutionResult<'a> {
    /// The executed command as its concrete type.
    pub fn command<C: Command>(&self) -> Option<&'a C> {
        self.executed_command
            .and_then(|command| command.as_any().downcast_ref::<C>())
    }

    /// A missing result code counts as success.
    pub fn is_success(&self) -> bool {
        self.result_code.unwrap_or(EXIT_SUCCESS) == EXIT_SUCCESS
    }
}

impl fmt::Debug for ExecutionResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionResult")
            .field("result_code", &self.result_code)
            .field("result_description", &self.result_description)
            .field(
                "executed_command",
                &self.executed_command.map(|command| command.name()),
            )
            .finish()
    }
}

/// Command-line dispatcher.
///
/// Seeded with the built-in `--version` and `--help` pseudo-commands.
/// Output goes through `S`; the default writes to the process streams.
pub struct Cli<S: OutputSink = StdioSink> {
    pub(crate) app: AppInfo,
    pub(crate) executable_name: String,
    pub(crate) arguments: Vec<String>,
    pub(crate) commands: Vec<Box<dyn Registered>>,
    pub(crate) sink: S,
}

impl Cli<StdioSink> {
    /// Dispatcher over the ambient process arguments.
    pub fn new(app: AppInfo) -> Self {
        Self::with_sink(app, StdioSink)
    }
}

impl<S: OutputSink> Cli<S> {
    /// Dispatcher over the ambient process arguments, writing to `sink`.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn with_sink(app: AppInfo, sink: S) -> Self {
        let argv = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
        Self::from_argv(app, argv, sink)
    }

    /// Dispatcher over an explicit `argv` (executable path first).
    pub fn from_argv<I, T>(app: AppInfo, argv: I, sink: S) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let executable_name = argv
            .next()
            .as_deref()
            .and_then(|path| Path::new(path).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| app.name.clone());

        let mut cli = Self {
            app,
            executable_name,
            arguments: argv.collect(),
            commands: Vec::new(),
            sink,
        };
        cli.seed_builtins();
        cli
    }

    fn seed_builtins(&mut self) {
        self.commands.push(Box::new(CommandEntry::new(VersionCommand)));
        self.commands.push(Box::new(CommandEntry::new(HelpCommand)));
    }

    pub fn app(&self) -> &AppInfo {
        &self.app
    }

    pub fn executable_name(&self) -> &str {
        &self.executable_name
    }

    /// Tokens to parse: `argv` without the executable path.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Replace the tokens to parse.
    pub fn set_arguments<I, T>(&mut self, arguments: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Register a command. Names must be unique, built-ins included.
    pub fn add_command<C: Command>(&mut self, command: C) -> CliResult<&mut Self> {
        if self.commands.iter().any(|c| c.name() == command.name()) {
            return Err(CliError::DuplicateCommand {
                name: command.name().to_string(),
            });
        }
        debug!(command = command.name(), "registered command");
        self.commands.push(Box::new(CommandEntry::new(command)));
        Ok(self)
    }

    /// Registered command names in registration order, built-ins first.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name())
    }

    pub fn command(&self, name: &str) -> Option<&dyn CommandHandle> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_handle())
    }

    /// The command summary the built-in `--help` prints.
    pub fn render_help(&self) -> String {
        help::render_summary(&self.app, &self.executable_name, &self.listing())
    }

    /// Usage and options of one command.
    pub fn render_command_help(&self, name: &str) -> Option<String> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.render_help(&self.executable_name))
    }

    /// Identify, parse and execute.
    ///
    /// Returns `Ok(None)` when there are no arguments: nothing to do.
    pub fn run(&mut self) -> CliResult<Option<ExecutionResult<'_>>> {
        match self.dispatch()? {
            Some((index, outcome)) => Ok(Some(self.execution_result(index, outcome))),
            None => Ok(None),
        }
    }

    pub(crate) fn dispatch(&mut self) -> CliResult<Option<(usize, Outcome)>> {
        let Some(index) = self.identify_command()? else {
            return Ok(None);
        };

        let listing = self.listing();
        let entry = &mut self.commands[index];
        entry.process_arguments(&self.arguments[1..], &self.executable_name, &mut self.sink)?;

        let (verbose, quiet) = (entry.verbose(), entry.quiet());
        let mut ctx = Context::new(
            &self.app,
            &self.executable_name,
            &listing,
            &mut self.sink,
            verbose,
            quiet,
        );
        let outcome = entry.execute(&mut ctx)?;
        debug!(command = entry.name(), code = ?outcome.code, "command executed");
        Ok(Some((index, outcome)))
    }

    pub(crate) fn execution_result(&self, index: usize, outcome: Outcome) -> ExecutionResult<'_> {
        ExecutionResult {
            result_code: outcome.code,
            result_description: outcome.description,
            executed_command: self.commands.get(index).map(|c| c.as_handle()),
        }
    }

    /// Exact, case-sensitive match of the first argument against command names.
    fn identify_command(&self) -> CliResult<Option<usize>> {
        let Some(name) = self.arguments.first() else {
            return Ok(None);
        };

        let mut matches = self
            .commands
            .iter()
            .enumerate()
            .filter(|(_, command)| command.name() == name);
        let found = matches.next().map(|(index, _)| index);
        debug_assert!(
            matches.next().is_none(),
            "There are multiple commands that use the name '{name}'!"
        );

        match found {
            Some(index) => {
                debug!(command = %name, "identified command");
                Ok(Some(index))
            }
            None => Err(CliError::UnknownCommand {
                name: name.clone(),
                suggestion: parser::suggest_similar_command(
                    name,
                    self.command_names().filter(|n| !parser::is_flag(n)),
                ),
            }),
        }
    }

    fn listing(&self) -> Vec<CommandListing> {
        self.commands.iter().map(|c| c.listing()).collect()
    }
}

impl<S: OutputSink> fmt::Debug for Cli<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("app", &self.app)
            .field("executable_name", &self.executable_name)
            .field("arguments", &self.arguments)
            .field("commands", &self.command_names().collect::<Vec<_>>())
            .finish()
    }
}
