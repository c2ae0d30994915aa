//! The Command trait and the read-only handle to a command that has run.

use std::any::Any;

use super::context::Context;
use super::options::Options;
use crate::error::CliResult;
use crate::types::Outcome;

/// A named subcommand.
///
/// Implementors hold whatever state their option callbacks fill in; the
/// option list itself is owned by the dispatcher, so a command never declares
/// storage for it.
///
/// ```
/// use cmdkit::{Command, Context, CliResult, Options, Outcome};
///
/// #[derive(Default)]
/// struct Add {
///     paths: Vec<String>,
/// }
///
/// impl Command for Add {
///     fn name(&self) -> &str {
///         "add"
///     }
///
///     fn configure_options(&self, options: &mut Options<Self>) {
///         options.add_flagless_option_values(&["<path>"], |cmd, _, value| {
///             cmd.paths.extend(value.map(str::to_owned));
///         });
///     }
///
///     fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<Outcome> {
///         ctx.out(&format!("adding {} path(s)", self.paths.len()))?;
///         Ok(Outcome::success())
///     }
/// }
/// ```
pub trait Command: Any {
    /// Unique name matched exactly against the first argument.
    fn name(&self) -> &str;

    /// One-line description for the command summary.
    fn help_description(&self) -> &str {
        ""
    }

    /// Reject flag-shaped tokens that match no declared option.
    fn fail_on_unrecognized_options(&self) -> bool {
        false
    }

    /// Terminate the process successfully after executing (built-ins).
    fn exits_after_execute(&self) -> bool {
        false
    }

    /// Append this command's options. Called once, at registration.
    fn configure_options(&self, options: &mut Options<Self>)
    where
        Self: Sized,
    {
        let _ = options;
    }

    /// Run after every argument has been parsed.
    fn execute(&mut self, ctx: &mut Context<'_>) -> CliResult<Outcome>;
}

/// Read-only view of a registered command.
pub trait CommandHandle {
    fn name(&self) -> &str;

    fn help_description(&self) -> &str;

    fn verbose(&self) -> bool;

    fn quiet(&self) -> bool;

    fn as_any(&self) -> &dyn Any;
}

impl dyn CommandHandle + '_ {
    /// Borrow the concrete command.
    pub fn downcast_ref<C: Command>(&self) -> Option<&C> {
        self.as_any().downcast_ref::<C>()
    }
}
