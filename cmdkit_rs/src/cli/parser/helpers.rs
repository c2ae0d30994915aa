//! Token classification helpers used by the parser core.
//!
//! - Flag / stop-marker detection
//! - `--flag=value` splitting
//! - Command suggestion via Levenshtein distance

use strsim::levenshtein;

/// Literal token that ends option parsing.
pub const STOP_MARKER: &str = "--";

/// Flags are tokens starting with `-`.
pub fn is_flag(arg: &str) -> bool {
    arg.starts_with('-')
}

pub fn is_stop_marker(arg: &str) -> bool {
    arg == STOP_MARKER
}

/// Where a value-taking flag finds its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueSource<'a> {
    /// `--flag=value`. `None` when the split leaves an empty side.
    Inline(Option<&'a str>),
    /// `--flag value`: the next token.
    Lookahead,
}

/// Decide how `token`, matched by declared `flag`, carries its value.
pub(crate) fn value_source<'a>(token: &'a str, flag: &str) -> ValueSource<'a> {
    let inline = token
        .strip_prefix(flag)
        .is_some_and(|rest| rest.starts_with('='));
    if !inline {
        return ValueSource::Lookahead;
    }

    match token.split_once('=') {
        Some((name, value)) if !name.is_empty() && !value.is_empty() => {
            ValueSource::Inline(Some(value))
        }
        _ => ValueSource::Inline(None),
    }
}

/// Suggest a similar command using Levenshtein distance.
/// Returns Some(suggestion) if a close match is found (distance <= 2).
pub(crate) fn suggest_similar_command<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    let input_lower = input.to_lowercase();
    let mut best_match: Option<(&str, usize)> = None;

    for cmd in candidates {
        let distance = levenshtein(&input_lower, &cmd.to_lowercase());
        if distance > 2 {
            continue;
        }
        match best_match {
            Some((_, best_dist)) if distance >= best_dist => {}
            _ => best_match = Some((cmd, distance)),
        }
    }

    best_match.map(|(cmd, _)| cmd.to_string())
}

// ============================================================================
// Tests
// ============================================================================
