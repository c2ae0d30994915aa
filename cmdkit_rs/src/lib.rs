//! # cmdkit
//!
//! **Small subcommand CLI toolkit** - declare commands and their flags, hand
//! over `argv`, get callbacks.
//!
//! ## Features
//!
//! - **Subcommand dispatch** - exact match of the first argument against
//!   registered command names
//! - **Prefix flag matching** - a declared `--message` matches `--message`,
//!   `--message=value` and `--message value`
//! - **Positional values** - one callback per non-flag token
//! - **Stop marker** - `--` ends parsing
//! - **Generated help** - per-command usage plus a command summary, and the
//!   built-in `--help` / `--version` pseudo-commands
//! - **Typed errors** - nothing terminates the process unless you ask for it
//!   with [`Cli::run_or_exit`]
//!
//! ## Quick Start
//!
//! ```rust
//! use cmdkit::{AppInfo, Cli, CliResult, Command, Context, MemorySink, Options, Outcome};
//!
//! #[derive(Default)]
//! struct Commit {
//!     all: bool,
//!     message: Option<String>,
//! }
//!
//! impl Command for Commit {
//!     fn name(&self) -> &str {
//!         "commit"
//!     }
//!
//!     fn configure_options(&self, options: &mut Options<Self>) {
//!         options
//!             .add_option(&["-a", "--all"], "commit all changed files", |cmd, _, _| {
//!                 cmd.all = true
//!             })
//!             .add_option_value(&["-m", "--message"], "commit message", "<msg>", |cmd, _, value| {
//!                 cmd.message = value.map(str::to_owned)
//!             });
//!     }
//!
//!     fn execute(&mut self, _ctx: &mut Context<'_>) -> CliResult<Outcome> {
//!         Ok(Outcome::success())
//!     }
//! }
//!
//! let app = AppInfo::new("git", "1.0", "A dummy git interface");
//! let mut cli = Cli::from_argv(app, ["git", "commit", "-a", "--message=hi"], MemorySink::new());
//! cli.add_command(Commit::default()).unwrap();
//!
//! let result = cli.run().unwrap().unwrap();
//! let commit = result.command::<Commit>().unwrap();
//! assert!(commit.all);
//! assert_eq!(commit.message.as_deref(), Some("hi"));
//! ```

pub mod cli;
pub mod error;
pub mod output;
pub mod types;

pub use cli::{
    Cli, CliOption, Command, CommandHandle, CommandListing, Context, ExecutionResult,
    GlobalFlags, HelpCommand, OptionCallback, Options, VersionCommand, init_logging,
};
pub use error::{CliError, CliResult};
pub use output::{MemorySink, OutputSink, StdioSink, Stream};
pub use types::{AppInfo, EXIT_FAILURE, EXIT_SUCCESS, Outcome};
