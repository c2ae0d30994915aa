//! CLI toolkit core.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     User Input (argv)                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (Cli)                                           │
//! │   token 0 ──► exact command-name match                      │
//! │   token 1.. ─► parser: prefix flag match, `=` / lookahead   │
//! │               values, positional values, `--` stop marker   │
//! └─────────────────────────────┬───────────────────────────────┘
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Option callbacks (in argument order) ──► Command::execute  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`command`] - Command trait, option model, help rendering, built-ins
//! - [`parser`] - token classification and the parsing loop
//! - [`dispatch`] - the `Cli` dispatcher and `ExecutionResult`
//! - [`entrypoint`] - print-and-exit policy, logging setup

pub mod command;
pub mod dispatch;
pub mod entrypoint;
pub mod parser;

pub use command::{
    CliOption, Command, CommandHandle, CommandListing, Context, GlobalFlags, HelpCommand,
    OptionCallback, Options, VersionCommand,
};
pub use dispatch::{Cli, ExecutionResult};
pub use entrypoint::init_logging;
