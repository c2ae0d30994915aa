//! Option declarations and the per-command option list.

use std::fmt;

use super::global;

/// Callback invoked with `(matched_flag, value)` when an option fires.
///
/// The first argument is the command the option belongs to, so callbacks can
/// record parsed state directly on it.
pub type OptionCallback<C> = Box<dyn Fn(&mut C, Option<&str>, Option<&str>)>;

/// What happens when an option is matched.
pub(crate) enum OptionAction<C> {
    Callback(OptionCallback<C>),
    /// Global `--help`: print the command's help and stop.
    ShowHelp,
    /// Global `-v`/`--verbose`.
    Verbose,
    Quiet,
}

/// A single flag/value declaration.
///
/// An option is either flag-bearing (`flags` present) or flagless-positional
/// (`flags` absent, `value_signatures` present).
pub struct CliOption<C> {
    flags: Option<Vec<String>>,
    usage: String,
    value_signatures: Option<Vec<String>>,
    action: OptionAction<C>,
}

impl<C> CliOption<C> {
    pub fn flags(&self) -> Option<&[String]> {
        self.flags.as_deref()
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Placeholder names for expected values, e.g. `<msg>`.
    pub fn value_signatures(&self) -> Option<&[String]> {
        self.value_signatures.as_deref()
    }

    /// True when a match consumes a value (inline `=` or the next token).
    pub fn takes_value(&self) -> bool {
        self.value_signatures.is_some()
    }

    /// True for the flagless option that receives positional tokens.
    pub fn is_positional(&self) -> bool {
        self.flags.is_none() && self.value_signatures.is_some()
    }

    /// First declared flag that `token` starts with.
    pub fn matching_flag(&self, token: &str) -> Option<&str> {
        self.flags
            .as_ref()?
            .iter()
            .map(String::as_str)
            .find(|flag| token.starts_with(flag))
    }

    pub(crate) fn action(&self) -> &OptionAction<C> {
        &self.action
    }
}

impl<C> fmt::Debug for CliOption<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            OptionAction::Callback(_) => "callback",
            OptionAction::ShowHelp => "show-help",
            OptionAction::Verbose => "verbose",
            OptionAction::Quiet => "quiet",
        };
        f.debug_struct("CliOption")
            .field("flags", &self.flags)
            .field("usage", &self.usage)
            .field("value_signatures", &self.value_signatures)
            .field("action", &action)
            .finish()
    }
}

/// Ordered option list owned by a registered command.
///
/// Created with the global options already in place; commands append their
/// own in [`super::Command::configure_options`]. Options are never removed.
pub struct Options<C> {
    entries: Vec<CliOption<C>>,
}

impl<C: 'static> Options<C> {
    /// Option list seeded with the global `--help` and `-v`/`--verbose` options.
    pub fn with_globals() -> Self {
        let mut options = Self {
            entries: Vec::new(),
        };
        global::inject_global_options(&mut options);
        options
    }

    /// Flag-only option: matching never consumes a value.
    pub fn add_option<F>(&mut self, flags: &[&str], usage: &str, callback: F) -> &mut Self
    where
        F: Fn(&mut C, Option<&str>, Option<&str>) + 'static,
    {
        self.push(Some(flags), usage, None, OptionAction::Callback(Box::new(callback)))
    }

    /// Flag option expecting values, described by `value_signatures`.
    pub fn add_option_with_values<F>(
        &mut self,
        flags: &[&str],
        usage: &str,
        value_signatures: &[&str],
        callback: F,
    ) -> &mut Self
    where
        F: Fn(&mut C, Option<&str>, Option<&str>) + 'static,
    {
        self.push(
            Some(flags),
            usage,
            Some(value_signatures),
            OptionAction::Callback(Box::new(callback)),
        )
    }

    /// Flag option expecting exactly one value.
    pub fn add_option_value<F>(
        &mut self,
        flags: &[&str],
        usage: &str,
        value_signature: &str,
        callback: F,
    ) -> &mut Self
    where
        F: Fn(&mut C, Option<&str>, Option<&str>) + 'static,
    {
        self.add_option_with_values(flags, usage, &[value_signature], callback)
    }

    /// Positional values. The callback runs once per non-flag token.
    pub fn add_flagless_option_values<F>(&mut self, value_signatures: &[&str], callback: F) -> &mut Self
    where
        F: Fn(&mut C, Option<&str>, Option<&str>) + 'static,
    {
        self.push(
            None,
            "",
            Some(value_signatures),
            OptionAction::Callback(Box::new(callback)),
        )
    }

    /// Flag that switches the command into quiet mode.
    pub fn add_quiet_option(&mut self, flags: &[&str], usage: &str) -> &mut Self {
        self.push(Some(flags), usage, None, OptionAction::Quiet)
    }

    pub(crate) fn push(
        &mut self,
        flags: Option<&[&str]>,
        usage: &str,
        value_signatures: Option<&[&str]>,
        action: OptionAction<C>,
    ) -> &mut Self {
        self.entries.push(CliOption {
            flags: flags.map(to_owned_list),
            usage: usage.to_string(),
            value_signatures: value_signatures.map(to_owned_list),
            action,
        });
        self
    }
}

impl<C> Options<C> {
    pub fn iter(&self) -> impl Iterator<Item = &CliOption<C>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CliOption<C>> {
        self.entries.get(index)
    }

    /// First option (declaration order) with a flag that prefixes `token`,
    /// together with the flag that matched.
    pub fn find_flag(&self, token: &str) -> Option<(usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .find_map(|(index, option)| option.matching_flag(token).map(|flag| (index, flag)))
    }

    /// Index of the first flagless-positional option.
    pub fn positional(&self) -> Option<usize> {
        self.entries.iter().position(CliOption::is_positional)
    }
}

impl<C> fmt::Debug for Options<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
