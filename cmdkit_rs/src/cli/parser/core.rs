//! Token parsing: walks the arguments after the command name, matches each
//! one against the command's options and fires their callbacks in order.

use tracing::{debug, trace};

use super::helpers::{ValueSource, is_flag, is_stop_marker, value_source};
use crate::cli::command::Command;
use crate::cli::command::entry::CommandEntry;
use crate::error::{CliError, CliResult};
use crate::output::OutputSink;

/// Parse `arguments` (everything after the command name) for `entry`.
///
/// - `--` ends parsing; later tokens are ignored entirely.
/// - Flag tokens match the first option with a flag they start with.
///   Value-taking options read `--flag=value` or consume the next token.
/// - Other tokens go, one callback each, to the flagless positional option.
pub(crate) fn process_arguments<C: Command>(
    entry: &mut CommandEntry<C>,
    arguments: &[String],
    program: &str,
    sink: &mut dyn OutputSink,
) -> CliResult<()> {
    let mut skip_next = false;

    for (index, arg) in arguments.iter().enumerate() {
        if is_stop_marker(arg) {
            debug!(command = entry.command.name(), "stop marker reached");
            break;
        }

        // `--flag value`: the value was consumed on the previous iteration.
        if skip_next {
            skip_next = false;
            continue;
        }

        if !is_flag(arg) {
            match entry.options.positional() {
                Some(option_index) => {
                    trace!(value = %arg, "positional value");
                    entry.apply(option_index, None, Some(arg.as_str()), program, sink)?;
                }
                None => trace!(value = %arg, "no flagless option, dropping value"),
            }
            continue;
        }

        let Some((option_index, flag)) = entry
            .options
            .find_flag(arg)
            .map(|(option_index, flag)| (option_index, flag.to_string()))
        else {
            if entry.command.fail_on_unrecognized_options() {
                debug!(option = %arg, command = entry.command.name(), "unrecognized option");
                return Err(CliError::UnrecognizedOption {
                    option: arg.clone(),
                    command: entry.command.name().to_string(),
                });
            }
            trace!(option = %arg, "ignoring unrecognized option");
            continue;
        };

        let takes_value = entry
            .options
            .get(option_index)
            .is_some_and(|option| option.takes_value());
        let value = if takes_value {
            match value_source(arg, &flag) {
                ValueSource::Inline(value) => value,
                ValueSource::Lookahead => {
                    let next = arguments.get(index + 1).map(String::as_str);
                    skip_next = next.is_some();
                    next
                }
            }
        } else {
            None
        };

        debug!(flag = %flag, value = ?value, "matched option");
        entry.apply(option_index, Some(&flag), value, program, sink)?;
    }

    Ok(())
}
