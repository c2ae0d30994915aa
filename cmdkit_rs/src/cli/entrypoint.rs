//! Outermost entry point: the print-and-exit policy and logging setup.
//!
//! [`Cli::run`] never terminates the process. Binaries call
//! [`Cli::run_or_exit`] instead, which reports errors the way a CLI user
//! expects and exits with the matching status.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::dispatch::{Cli, ExecutionResult};
use crate::error::CliError;
use crate::output::{OutputSink, Stream};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

impl<S: OutputSink> Cli<S> {
    /// Run, then terminate the process on errors and after built-ins.
    ///
    /// Returns the result of a user command, or `None` when no arguments
    /// were given.
    pub fn run_or_exit(&mut self) -> Option<ExecutionResult<'_>> {
        match self.dispatch() {
            Ok(Some((index, outcome))) => {
                if self.commands[index].exits_after_execute() {
                    std::process::exit(outcome.code.unwrap_or(crate::types::EXIT_SUCCESS));
                }
                Some(self.execution_result(index, outcome))
            }
            Ok(None) => None,
            Err(err) => {
                let code = self.report_error(&err);
                std::process::exit(code);
            }
        }
    }

    /// Print `err` with its contextual help and return the exit status.
    ///
    /// Unknown commands get the command summary (plus a suggestion when one
    /// is close), unknown options get the command's own help.
    pub fn report_error(&mut self, err: &CliError) -> i32 {
        if err.is_failure() {
            if let Err(write_err) = self.sink.writeln(Stream::Stderr, &err.to_string()) {
                debug!(error = %write_err, "failed to report error");
            }
        }

        let context = match err {
            CliError::UnknownCommand { suggestion, .. } => {
                let mut text = String::new();
                if let Some(suggestion) = suggestion {
                    text.push_str(&format!("did you mean `{suggestion}'?\n\n"));
                }
                text.push_str(&self.render_help());
                Some(text)
            }
            CliError::UnrecognizedOption { command, .. } => self.render_command_help(command),
            _ => None,
        };
        if let Some(text) = context {
            if let Err(write_err) = self.sink.write(Stream::Stdout, &text) {
                debug!(error = %write_err, "failed to print contextual help");
            }
        }

        err.exit_code()
    }
}
