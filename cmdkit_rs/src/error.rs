//! Typed error channel for registration, dispatch and parsing.
//!
//! Nothing inside the library terminates the process. Errors travel back to
//! the caller, and [`crate::Cli::run_or_exit`] decides whether to print and exit.

use std::io;

use thiserror::Error;

use crate::types::{EXIT_FAILURE, EXIT_SUCCESS};

#[derive(Error, Debug)]
pub enum CliError {
    /// The first token names no registered command.
    #[error("unknown command `{name}'")]
    UnknownCommand {
        name: String,
        /// Closest registered command name, if any is close enough.
        suggestion: Option<String>,
    },

    /// A flag-shaped token matched no option of a strict command.
    #[error("unknown option `{option}' for command `{command}'")]
    UnrecognizedOption { option: String, command: String },

    /// A second command was registered under an existing name.
    #[error("there are multiple commands that use the name `{name}'")]
    DuplicateCommand { name: String },

    /// The global `--help` option printed a command's help; not a failure.
    #[error("help displayed for command `{command}'")]
    HelpDisplayed { command: String },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Process exit status this error maps to.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::HelpDisplayed { .. } => EXIT_SUCCESS,
            _ => EXIT_FAILURE,
        }
    }

    /// False only for early exits that should terminate successfully.
    pub fn is_failure(&self) -> bool {
        self.exit_code() != EXIT_SUCCESS
    }
}
