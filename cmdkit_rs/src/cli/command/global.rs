//! Global options injected into every command's option list.

use super::options::{OptionAction, Options};

/// Per-command state driven by the global options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    /// Set by `-v` / `--verbose`.
    pub verbose: bool,

    /// Set by options declared with [`Options::add_quiet_option`].
    pub quiet: bool,
}

pub(crate) const HELP_FLAG: &str = "--help";

pub(crate) fn inject_global_options<C: 'static>(options: &mut Options<C>) {
    options.push(
        Some(&[HELP_FLAG][..]),
        "show help for this command",
        None,
        OptionAction::ShowHelp,
    );
    options.push(
        Some(&["-v", "--verbose"][..]),
        "be verbose",
        None,
        OptionAction::Verbose,
    );
}
