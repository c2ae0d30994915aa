//! Help text rendering for commands and for the dispatcher summary.
//!
//! Rendering is pure: the same inputs always produce the same text.

use super::context::CommandListing;
use super::options::{CliOption, Options};
use crate::types::AppInfo;

/// Width of the flag column in per-command help.
const OPTION_COLUMN: usize = 26;

/// Width of the name column in the command summary.
const COMMAND_COLUMN: usize = 14;

const OPTION_INDENT: &str = "     ";
const COMMAND_INDENT: &str = "   ";

/// Usage line followed by one line per flag-bearing option.
pub fn render_command_help<C>(program: &str, name: &str, options: &Options<C>) -> String {
    let mut help = format!("usage: {program} {name} [options]");

    // Flagless values are not optional, so they go on the usage line.
    let positional = options
        .iter()
        .find(|option| option.is_positional())
        .and_then(CliOption::value_signatures);
    for signature in positional.unwrap_or_default() {
        help.push(' ');
        help.push_str(signature);
    }
    help.push_str("\n\n");

    for option in options.iter() {
        if let Some(line) = format_option_line(option) {
            help.push_str(&line);
            help.push('\n');
        }
    }
    help.push('\n');
    help
}

/// `     -m, --message <msg>    usage`, wrapped when the flag column overflows.
fn format_option_line<C>(option: &CliOption<C>) -> Option<String> {
    let flags = option.flags()?;
    let mut column = format!("{OPTION_INDENT}{}", flags.join(", "));
    if let Some(signature) = option.value_signatures().and_then(|sigs| sigs.first()) {
        column.push(' ');
        column.push_str(signature);
    }

    let line = if column.chars().count() > OPTION_COLUMN {
        format!(
            "{column}\n{:indent$}{}",
            "",
            option.usage(),
            indent = OPTION_COLUMN + 1
        )
    } else {
        format!("{:<width$} {}", column, option.usage(), width = OPTION_COLUMN)
    };
    Some(line.trim_end().to_string())
}

/// Summary of user commands; names starting with `-` are built-ins and hidden.
pub fn render_summary(app: &AppInfo, program: &str, commands: &[CommandListing]) -> String {
    let mut help = format!("usage: {program} <command> [<args>]\n\n");
    help.push_str(&format!(
        "The most commonly used {} commands are:\n",
        app.name
    ));

    for command in commands.iter().filter(|c| !c.name.starts_with('-')) {
        let line = format!(
            "{COMMAND_INDENT}{:<width$} {}",
            command.name,
            command.description,
            width = COMMAND_COLUMN
        );
        help.push_str(line.trim_end());
        help.push('\n');
    }
    help.push('\n');
    help
}
