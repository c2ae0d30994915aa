//! Command model: options, the Command trait, help rendering and built-ins.
//!
//! - `options`: CliOption declarations and the per-command option list
//! - `global`: implicit `--help` and `-v`/`--verbose` options
//! - `types`: Command trait and the read-only CommandHandle
//! - `entry`: registered command + dispatcher-owned state
//! - `context`: what `execute` gets to see
//! - `help`: usage/summary rendering
//! - `builtin`: VersionCommand and HelpCommand

mod builtin;
mod context;
pub(crate) mod entry;
mod global;
pub mod help;
pub mod options;
mod types;

pub use builtin::{HelpCommand, VersionCommand};
pub use context::{CommandListing, Context};
pub use global::GlobalFlags;
pub use options::{CliOption, OptionCallback, Options};
pub use types::{Command, CommandHandle};
